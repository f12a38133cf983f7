use ark_bn254::{Fr, G1Affine};
use ark_ec::AffineRepr;
use ark_std::{ops::Div, One, Zero};
use bn254_poly_commit_primitives::{
    arith,
    domain::Domain,
    errors::KzgError,
    helpers,
    polynomial::{Polynomial, PolynomialCoeffForm, PolynomialEvalForm},
    proof::Opening,
    traits::SetupVectors,
};
use num_traits::ToPrimitive;
use rayon::prelude::*;

use crate::setup::TrustedSetup;

/// Commitment and opening engine over a set of setup vectors.
///
/// [KZG] is generic over where the vectors come from: a [TrustedSetup] that
/// holds `τ` and grows its vectors on demand, or a
/// [bn254_poly_commit_primitives::setup::PublicSetup] loaded from disk with a
/// fixed capacity. Either way the commitments and proofs are identical.
#[derive(Debug)]
pub struct KZG<S: SetupVectors = TrustedSetup> {
    setup: S,
}

impl<S: SetupVectors> KZG<S> {
    pub fn new(setup: S) -> Self {
        Self { setup }
    }

    pub fn setup(&self) -> &S {
        &self.setup
    }

    /// Commit by coefficients: `Σ c_i·(G1·τ^i)`.
    ///
    /// Trailing zero coefficients are dropped first, so a polynomial commits
    /// to the same point however it is padded.
    pub fn commit_coeff_form(&self, polynomial: &PolynomialCoeffForm) -> Result<G1Affine, KzgError> {
        let coeffs = arith::trim(polynomial.coeffs());
        if coeffs.is_empty() {
            return Ok(G1Affine::zero());
        }
        let bases = self.setup.g1_powers(coeffs.len())?;
        helpers::g1_lincomb(&bases, &coeffs).map_err(|e| KzgError::CommitError(e.to_string()))
    }

    /// Commit by Lagrange basis: `Σ e_i·(L_i(τ)·G1)` over the polynomial's
    /// domain. Agrees with [Self::commit_coeff_form] on the interpolated
    /// coefficients.
    pub fn commit_eval_form(&self, polynomial: &PolynomialEvalForm) -> Result<G1Affine, KzgError> {
        let bases = self.setup.lagrange_g1(polynomial.domain())?;
        helpers::g1_lincomb(&bases, polynomial.evaluations())
            .map_err(|e| KzgError::CommitError(e.to_string()))
    }

    /// Commits in whichever form the polynomial is held.
    pub fn commit(&self, polynomial: &Polynomial) -> Result<G1Affine, KzgError> {
        match polynomial {
            Polynomial::Coefficients(p) => self.commit_coeff_form(p),
            Polynomial::Evaluations(p) => self.commit_eval_form(p),
        }
    }

    /// Opening proof for `p(z) = y`: the commitment to `(p(x) - y)/(x - z)`.
    ///
    /// `y` must be `p(z)`. Otherwise the division is inexact and this fails
    /// with a `NonZeroRemainder` polynomial error.
    pub fn compute_proof(
        &self,
        polynomial: &PolynomialCoeffForm,
        z: &Fr,
        y: &Fr,
    ) -> Result<G1Affine, KzgError> {
        let mut numerator = polynomial.coeffs().to_vec();
        if numerator.is_empty() {
            numerator.push(Fr::zero());
        }
        numerator[0] -= y;
        let quotient = arith::div_polys(&numerator, &[-*z, Fr::one()])?;
        self.commit_coeff_form(&PolynomialCoeffForm::new(quotient))
    }

    /// Evaluates `p` at `z` and opens it there.
    pub fn open(&self, polynomial: &PolynomialCoeffForm, z: &Fr) -> Result<Opening, KzgError> {
        let value = polynomial.evaluate(z);
        let proof = self.compute_proof(polynomial, z, &value)?;
        Ok(Opening {
            point: *z,
            value,
            proof,
        })
    }

    /// Opens a polynomial in evaluation form at `z`.
    ///
    /// The quotient is built directly on the domain,
    /// `q_i = (f_i - y)/(ω_i - z)`, and committed through the Lagrange
    /// vector. When `z` is itself a domain point the undefined entry is
    /// filled from the derivative.
    pub fn compute_proof_eval_form(
        &self,
        polynomial: &PolynomialEvalForm,
        z: &Fr,
    ) -> Result<Opening, KzgError> {
        let evals = polynomial.evaluations();
        let domain = polynomial.domain();

        // y = p(z)
        let y = polynomial.evaluate(z)?;

        let quotient: Vec<Fr> = domain
            .elements()
            .iter()
            .zip(evals)
            .map(|(omega_i, f_i)| {
                let denominator = *omega_i - z;
                if denominator.is_zero() {
                    compute_quotient_eval_on_domain(domain, z, evals, &y)
                } else {
                    (*f_i - y).div(denominator)
                }
            })
            .collect();

        let quotient = PolynomialEvalForm::with_domain(quotient, domain.clone())?;
        Ok(Opening {
            point: *z,
            value: y,
            proof: self.commit_eval_form(&quotient)?,
        })
    }

    /// Opens a polynomial in evaluation form at the domain point `ω^index`.
    pub fn compute_proof_with_known_z_fr_index(
        &self,
        polynomial: &PolynomialEvalForm,
        index: u64,
    ) -> Result<Opening, KzgError> {
        let usized_index = index.to_usize().ok_or(KzgError::GenericError(
            "Index conversion to usize failed".to_string(),
        ))?;

        let z = polynomial
            .domain()
            .element(usized_index)
            .ok_or_else(|| KzgError::GenericError("Root of unity not found".to_string()))?;

        self.compute_proof_eval_form(polynomial, &z)
    }

    /// Commits to an evaluation vector and opens it at the Fiat-Shamir point
    /// derived from the evaluations and the commitment. Returns the
    /// commitment and the opening.
    pub fn compute_evaluations_proof(
        &self,
        polynomial: &PolynomialEvalForm,
    ) -> Result<(G1Affine, Opening), KzgError> {
        let commitment = self.commit_eval_form(polynomial)?;
        let challenge = helpers::compute_challenge(polynomial, &commitment)?;
        let opening = self.compute_proof_eval_form(polynomial, &challenge)?;
        Ok((commitment, opening))
    }

    /// Opens each polynomial at its own point. The results feed a batched
    /// verification.
    pub fn compute_proofs(
        &self,
        polynomials: &[PolynomialCoeffForm],
        points: &[Fr],
    ) -> Result<Vec<Opening>, KzgError> {
        if polynomials.len() != points.len() {
            return Err(KzgError::InvalidInputLength);
        }
        polynomials
            .iter()
            .zip(points)
            .map(|(p, z)| self.open(p, z))
            .collect()
    }
}

impl<S: SetupVectors + Sync> KZG<S> {
    /// Commits to every polynomial independently on the rayon pool. The
    /// setup vectors are only read.
    pub fn commit_coeff_form_batch(
        &self,
        polynomials: &[PolynomialCoeffForm],
    ) -> Result<Vec<G1Affine>, KzgError> {
        polynomials
            .par_iter()
            .map(|p| self.commit_coeff_form(p))
            .collect()
    }
}

/// `q(ω_m)` for `z = ω_m`, where `(p(x) - y)/(x - z)` is undefined on the
/// domain:
///
/// `q_m = Σ_{i≠m} (f_i - y)·ω_i / (z·(z - ω_i))`
pub fn compute_quotient_eval_on_domain(domain: &Domain, z: &Fr, evals: &[Fr], y: &Fr) -> Fr {
    domain
        .elements()
        .iter()
        .zip(evals)
        .filter(|(omega_i, _)| *omega_i != z)
        .map(|(omega_i, f_i)| {
            let numerator = (*f_i - y) * omega_i;
            let denominator = (*z - omega_i) * z;
            numerator.div(denominator)
        })
        .sum()
}
