//! Provers for the subgroup arguments.
//!
//! Each prover builds its witness polynomials, commits to them and opens
//! them at the verifier's challenge `r` (and at `ω·r` and `1` where the
//! recurrence needs it). A witness that does not satisfy its identity is
//! rejected while dividing by the vanishing polynomial, before anything is
//! committed.

use ark_bn254::Fr;
use ark_std::{One, Zero};
use bn254_poly_commit_primitives::{
    argument::{
        permutation_terms, prescribed_permutation_terms, vanishing_at, GrandProductWitness,
        PermutationWitness, ZeroTestWitness,
    },
    arith,
    domain::Domain,
    errors::KzgError,
    polynomial::PolynomialCoeffForm,
    proof::{
        GrandProductProof, LinearizedProductProof, Opening, PermutationKind, PermutationProof,
        ZeroTestProof,
    },
    traits::SetupVectors,
};
use tracing::{debug, instrument};

use crate::kzg::KZG;

impl<S: SetupVectors> KZG<S> {
    /// Proves that the polynomial with values `evals` on a domain of size
    /// `evals.len()` vanishes on its subgroup of order `order`.
    #[instrument(skip_all, level = "debug", fields(n = evals.len(), order = order))]
    pub fn prove_zero_test(
        &self,
        evals: &[Fr],
        order: usize,
        r: &Fr,
    ) -> Result<ZeroTestProof, KzgError> {
        let witness = ZeroTestWitness::new(evals, order)
            .inspect_err(|e| debug!(error = %e, "zero test witness rejected"))?;
        check_outside_subgroup(r, order)?;

        let p = PolynomialCoeffForm::new(witness.p);
        let q = PolynomialCoeffForm::new(witness.q);
        Ok(ZeroTestProof {
            order,
            p_commitment: self.commit_coeff_form(&p)?,
            q_commitment: self.commit_coeff_form(&q)?,
            p_at_r: self.open(&p, r)?,
            q_at_r: self.open(&q, r)?,
        })
    }

    /// Proves that `t`, the running product of `f_evals`, satisfies
    /// `t(ωx) = f(x)·t(x)` on the subgroup and starts at 1. `f_evals` must
    /// multiply to 1; see
    /// [bn254_poly_commit_primitives::argument::close_running_product].
    #[instrument(skip_all, level = "debug", fields(m = f_evals.len()))]
    pub fn prove_grand_product(
        &self,
        f_evals: &[Fr],
        r: &Fr,
    ) -> Result<GrandProductProof, KzgError> {
        let witness = GrandProductWitness::new(f_evals)
            .inspect_err(|e| debug!(error = %e, "grand product witness rejected"))?;
        let domain = witness.domain.clone();
        check_outside_subgroup(r, domain.size())?;

        let f = PolynomialCoeffForm::new(witness.f);
        let t = PolynomialCoeffForm::new(witness.t);
        let q = PolynomialCoeffForm::new(witness.q);
        let omega_r = domain.generator() * r;
        Ok(GrandProductProof {
            order: domain.size(),
            f_commitment: self.commit_coeff_form(&f)?,
            t_commitment: self.commit_coeff_form(&t)?,
            q_commitment: self.commit_coeff_form(&q)?,
            t_at_one: self.open(&t, &Fr::one())?,
            t_at_r: self.open(&t, r)?,
            t_at_omega_r: self.open(&t, &omega_r)?,
            f_at_r: self.open(&f, r)?,
            q_at_r: self.open(&q, r)?,
        })
    }

    /// Proves that `p0` and `p1` hold the same multiset of values, through
    /// the running ratio of `p0 - θ` over `p1 - θ`.
    #[instrument(skip_all, level = "debug", fields(m = p0.len()))]
    pub fn prove_permutation(
        &self,
        p0: &[Fr],
        p1: &[Fr],
        theta: &Fr,
        r: &Fr,
    ) -> Result<PermutationProof, KzgError> {
        let f0 = permutation_terms(p0, theta);
        let f1 = permutation_terms(p1, theta);
        let witness = PermutationWitness::new(&f0, &f1)
            .inspect_err(|e| debug!(error = %e, "permutation witness rejected"))?;
        self.permutation_proof(PermutationKind::Plain, witness, p0, p1, None, r)
    }

    /// Proves that `p0` under wiring `seq0` equals `p1` under wiring `seq1`,
    /// through the running ratio of `p0·γ - seq0 - θ` over `p1·γ - seq1 - θ`.
    #[allow(clippy::too_many_arguments)]
    #[instrument(skip_all, level = "debug", fields(m = p0.len()))]
    pub fn prove_prescribed_permutation(
        &self,
        p0: &[Fr],
        p1: &[Fr],
        seq0: &[Fr],
        seq1: &[Fr],
        gamma: &Fr,
        theta: &Fr,
        r: &Fr,
    ) -> Result<PermutationProof, KzgError> {
        let f0 = prescribed_permutation_terms(p0, seq0, gamma, theta)?;
        let f1 = prescribed_permutation_terms(p1, seq1, gamma, theta)?;
        let witness = PermutationWitness::new(&f0, &f1)
            .inspect_err(|e| debug!(error = %e, "prescribed permutation witness rejected"))?;
        self.permutation_proof(
            PermutationKind::Prescribed,
            witness,
            p0,
            p1,
            Some((seq0, seq1)),
            r,
        )
    }

    fn permutation_proof(
        &self,
        kind: PermutationKind,
        witness: PermutationWitness,
        p0: &[Fr],
        p1: &[Fr],
        seqs: Option<(&[Fr], &[Fr])>,
        r: &Fr,
    ) -> Result<PermutationProof, KzgError> {
        let domain = witness.domain;
        check_outside_subgroup(r, domain.size())?;

        let p0 = interpolate(&domain, p0)?;
        let p1 = interpolate(&domain, p1)?;
        let t = PolynomialCoeffForm::new(witness.t);
        let q = PolynomialCoeffForm::new(witness.q);
        let omega_r = domain.generator() * r;

        let (seq0_commitment, seq0_at_r, seq1_commitment, seq1_at_r) = match seqs {
            Some((seq0, seq1)) => {
                let seq0 = interpolate(&domain, seq0)?;
                let seq1 = interpolate(&domain, seq1)?;
                (
                    Some(self.commit_coeff_form(&seq0)?),
                    Some(self.open(&seq0, r)?),
                    Some(self.commit_coeff_form(&seq1)?),
                    Some(self.open(&seq1, r)?),
                )
            },
            None => (None, None, None, None),
        };

        Ok(PermutationProof {
            kind,
            order: domain.size(),
            p0_commitment: self.commit_coeff_form(&p0)?,
            p1_commitment: self.commit_coeff_form(&p1)?,
            seq0_commitment,
            seq1_commitment,
            t_commitment: self.commit_coeff_form(&t)?,
            q_commitment: self.commit_coeff_form(&q)?,
            t_at_one: self.open(&t, &Fr::one())?,
            t_at_r: self.open(&t, r)?,
            t_at_omega_r: self.open(&t, &omega_r)?,
            p0_at_r: self.open(&p0, r)?,
            p1_at_r: self.open(&p1, r)?,
            seq0_at_r,
            seq1_at_r,
            q_at_r: self.open(&q, r)?,
        })
    }

    /// Proves `p1(ζ)·p2(ζ) = q(ζ)` with two openings instead of three.
    ///
    /// With `y1 = p1(ζ)`, the polynomial `r = y1·p2 - q` vanishes at `ζ`, so
    /// `k = p1 + μ·r` takes the value `y1` there as well. Both `p1` and `k`
    /// are opened at `ζ` with value `y1`; the verifier rebuilds the
    /// commitment to `k` from the commitments to `p1`, `p2` and `q`.
    #[instrument(skip_all, level = "debug")]
    pub fn prove_linearized_product(
        &self,
        p1: &PolynomialCoeffForm,
        p2: &PolynomialCoeffForm,
        q: &PolynomialCoeffForm,
        zeta: &Fr,
        mu: &Fr,
    ) -> Result<LinearizedProductProof, KzgError> {
        let y1 = p1.evaluate(zeta);
        let r = arith::sub_polys(&arith::mul_by_const(p2.coeffs(), &y1), q.coeffs());
        let k = arith::add_polys(p1.coeffs(), &arith::mul_by_const(&r, mu));
        let k = PolynomialCoeffForm::new(k);

        let k_proof = self
            .compute_proof(&k, zeta, &y1)
            .inspect_err(|e| debug!(error = %e, "linearized identity does not hold"))?;

        Ok(LinearizedProductProof {
            p1_commitment: self.commit_coeff_form(p1)?,
            p2_commitment: self.commit_coeff_form(p2)?,
            q_commitment: self.commit_coeff_form(q)?,
            p1_at_zeta: Opening {
                point: *zeta,
                value: y1,
                proof: self.compute_proof(p1, zeta, &y1)?,
            },
            k_at_zeta: Opening {
                point: *zeta,
                value: y1,
                proof: k_proof,
            },
        })
    }
}

fn interpolate(domain: &Domain, evals: &[Fr]) -> Result<PolynomialCoeffForm, KzgError> {
    Ok(PolynomialCoeffForm::new(domain.ifft(evals)?))
}

/// The identities are vacuous on the subgroup itself, where `r^m - 1 = 0`.
fn check_outside_subgroup(r: &Fr, order: usize) -> Result<(), KzgError> {
    if vanishing_at(r, order).is_zero() {
        return Err(KzgError::GenericError(
            "challenge lies inside the subgroup".to_string(),
        ));
    }
    Ok(())
}
