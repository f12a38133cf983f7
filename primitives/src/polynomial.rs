use ark_bn254::Fr;

use crate::{arith, domain::Domain, errors::PolynomialError};

extern crate alloc;
use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

/// A polynomial given by its values on a [Domain].
///
/// The number of evaluations always equals the domain size, so an evaluation
/// vector can never be mistaken for a coefficient vector of another length.
#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialEvalForm {
    evaluations: Vec<Fr>,
    domain: Domain,
}

impl PolynomialEvalForm {
    /// Creates a new [PolynomialEvalForm] over the canonical domain whose size
    /// is `evals.len()`. The length must be a power of two: evaluations are
    /// never padded, since padding would change the polynomial.
    pub fn new(evals: Vec<Fr>) -> Result<Self, PolynomialError> {
        let domain = Domain::new(evals.len())?;
        Ok(Self {
            evaluations: evals,
            domain,
        })
    }

    /// Creates a new [PolynomialEvalForm] over an explicit domain.
    pub fn with_domain(evals: Vec<Fr>, domain: Domain) -> Result<Self, PolynomialError> {
        if evals.len() != domain.size() {
            return Err(PolynomialError::DimensionMismatch(format!(
                "{} evaluations for a domain of size {}",
                evals.len(),
                domain.size()
            )));
        }
        Ok(Self {
            evaluations: evals,
            domain,
        })
    }

    pub fn evaluations(&self) -> &[Fr] {
        &self.evaluations
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn len(&self) -> usize {
        self.evaluations.len()
    }

    /// Retrieves the evaluation at `ω^i`, or `None` if out of bounds.
    pub fn get_evaluation(&self, i: usize) -> Option<&Fr> {
        self.evaluations.get(i)
    }

    pub fn is_empty(&self) -> bool {
        self.evaluations.is_empty()
    }

    /// Evaluates the polynomial at an arbitrary point `z`.
    pub fn evaluate(&self, z: &Fr) -> Result<Fr, PolynomialError> {
        self.domain.evaluate(&self.evaluations, z)
    }

    /// Converts the polynomial to coefficient form. This is done by performing
    /// an IFFT on the evaluations.
    pub fn to_coeff_form(&self) -> Result<PolynomialCoeffForm, PolynomialError> {
        let coeffs = self.domain.ifft(&self.evaluations)?;
        Ok(PolynomialCoeffForm::new(coeffs))
    }
}

/// A polynomial given by its coefficients, lowest degree first.
///
/// Coefficients are stored as given. Trailing zeros are allowed and do not
/// change the polynomial; [PolynomialCoeffForm::trimmed] drops them.
#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialCoeffForm {
    coeffs: Vec<Fr>,
}

impl PolynomialCoeffForm {
    pub fn new(coeffs: Vec<Fr>) -> Self {
        Self { coeffs }
    }

    pub fn coeffs(&self) -> &[Fr] {
        &self.coeffs
    }

    /// Number of stored coefficients, trailing zeros included.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn get_at_index(&self, i: usize) -> Option<&Fr> {
        self.coeffs.get(i)
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree after trimming. The zero polynomial reports degree 0.
    pub fn degree(&self) -> usize {
        arith::trim(&self.coeffs).len().saturating_sub(1)
    }

    pub fn trimmed(&self) -> Self {
        Self::new(arith::trim(&self.coeffs))
    }

    /// Horner evaluation at `x`.
    pub fn evaluate(&self, x: &Fr) -> Fr {
        arith::eval_poly_at(&self.coeffs, x)
    }

    /// Converts the polynomial to evaluation form over the smallest domain
    /// holding all stored coefficients.
    pub fn to_eval_form(&self) -> Result<PolynomialEvalForm, PolynomialError> {
        let size = self.coeffs.len().max(1).next_power_of_two();
        self.to_eval_form_on(&Domain::new(size)?)
    }

    /// Converts the polynomial to evaluation form over `domain`.
    pub fn to_eval_form_on(&self, domain: &Domain) -> Result<PolynomialEvalForm, PolynomialError> {
        let coeffs = arith::trim(&self.coeffs);
        let evals = domain.fft(&coeffs)?;
        PolynomialEvalForm::with_domain(evals, domain.clone())
    }
}

/// A polynomial tagged with its representation.
///
/// Functions that need one form ask for it explicitly through
/// [Polynomial::as_coeff_form] or [Polynomial::as_eval_form] and get an
/// [PolynomialError::IncorrectFormError] instead of a silent reinterpretation.
#[derive(Clone, Debug, PartialEq)]
pub enum Polynomial {
    Coefficients(PolynomialCoeffForm),
    Evaluations(PolynomialEvalForm),
}

impl Polynomial {
    pub fn as_coeff_form(&self) -> Result<&PolynomialCoeffForm, PolynomialError> {
        match self {
            Polynomial::Coefficients(p) => Ok(p),
            Polynomial::Evaluations(_) => Err(PolynomialError::IncorrectFormError(
                "expected coefficient form, found evaluation form".to_string(),
            )),
        }
    }

    pub fn as_eval_form(&self) -> Result<&PolynomialEvalForm, PolynomialError> {
        match self {
            Polynomial::Evaluations(p) => Ok(p),
            Polynomial::Coefficients(_) => Err(PolynomialError::IncorrectFormError(
                "expected evaluation form, found coefficient form".to_string(),
            )),
        }
    }

    /// Coefficient form, converting through an IFFT if needed.
    pub fn to_coeff_form(&self) -> Result<PolynomialCoeffForm, PolynomialError> {
        match self {
            Polynomial::Coefficients(p) => Ok(p.clone()),
            Polynomial::Evaluations(p) => p.to_coeff_form(),
        }
    }

    /// Evaluates the polynomial at `x` in whichever form it is held.
    pub fn evaluate(&self, x: &Fr) -> Result<Fr, PolynomialError> {
        match self {
            Polynomial::Coefficients(p) => Ok(p.evaluate(x)),
            Polynomial::Evaluations(p) => p.evaluate(x),
        }
    }
}

impl From<PolynomialCoeffForm> for Polynomial {
    fn from(p: PolynomialCoeffForm) -> Self {
        Polynomial::Coefficients(p)
    }
}

impl From<PolynomialEvalForm> for Polynomial {
    fn from(p: PolynomialEvalForm) -> Self {
        Polynomial::Evaluations(p)
    }
}
