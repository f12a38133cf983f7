use ark_bn254::Fr;
use ark_ff::{FftField, Field};
use ark_std::{format, vec::Vec, One, Zero};

use crate::{arith, consts::MAX_DOMAIN_SIZE, errors::PolynomialError, fft, field};

/// A multiplicative subgroup `{ω^0, …, ω^{n-1}}` of the scalar field, with
/// `n` a power of two no larger than `2^28`.
///
/// The element list is materialised once at construction so that lookups by
/// index and by value do not recompute powers.
#[derive(Clone, Debug, PartialEq)]
pub struct Domain {
    size: usize,
    generator: Fr,
    size_inv: Fr,
    elements: Vec<Fr>,
}

impl Domain {
    /// Builds the domain of `size` elements from the canonical two-adic root
    /// of unity.
    pub fn new(size: usize) -> Result<Self, PolynomialError> {
        Self::from_generator(root_of_unity(size)?, size)
    }

    /// Builds the domain generated by `generator`, which must have order
    /// exactly `size`.
    pub fn from_generator(generator: Fr, size: usize) -> Result<Self, PolynomialError> {
        check_size(size)?;
        let n = size as u64;
        if !generator.pow([n]).is_one() || (size > 1 && generator.pow([n / 2]).is_one()) {
            return Err(PolynomialError::DimensionMismatch(format!(
                "generator does not have order {}",
                size
            )));
        }
        let mut elements = fft::expand_root_of_unity(&generator)?;
        elements.truncate(size);

        Ok(Self {
            size,
            generator,
            size_inv: field::inv(&Fr::from(size as u64))?,
            elements,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn generator(&self) -> Fr {
        self.generator
    }

    pub fn size_inv(&self) -> Fr {
        self.size_inv
    }

    pub fn elements(&self) -> &[Fr] {
        &self.elements
    }

    /// `ω^i`, or `None` if `i` is out of range.
    pub fn element(&self, i: usize) -> Option<Fr> {
        self.elements.get(i).copied()
    }

    /// Position of `x` in the domain, if it is a member.
    pub fn index_of(&self, x: &Fr) -> Option<usize> {
        self.elements.iter().position(|e| e == x)
    }

    pub fn contains(&self, x: &Fr) -> bool {
        self.index_of(x).is_some()
    }

    /// Coefficients of `x^n - 1`.
    pub fn vanishing_polynomial(&self) -> Vec<Fr> {
        arith::vanishing_poly(self.size)
    }

    pub fn evaluate_vanishing_polynomial(&self, x: &Fr) -> Fr {
        x.pow([self.size as u64]) - Fr::one()
    }

    /// The subgroup of order `order`, i.e. every `size/order`-th element.
    pub fn subdomain(&self, order: usize) -> Result<Self, PolynomialError> {
        if order == 0 || order > self.size || self.size % order != 0 {
            return Err(PolynomialError::DimensionMismatch(format!(
                "{} does not divide domain size {}",
                order, self.size
            )));
        }
        let stride = self.size / order;
        Ok(Self {
            size: order,
            generator: self.elements[stride % self.size],
            size_inv: field::inv(&Fr::from(order as u64))?,
            elements: self.elements.iter().step_by(stride).copied().collect(),
        })
    }

    /// Evaluates `coeffs` on the domain. Shorter inputs are zero-padded.
    pub fn fft(&self, coeffs: &[Fr]) -> Result<Vec<Fr>, PolynomialError> {
        if coeffs.len() > self.size {
            return Err(PolynomialError::DimensionMismatch(format!(
                "{} coefficients do not fit a domain of size {}",
                coeffs.len(),
                self.size
            )));
        }
        let mut padded = coeffs.to_vec();
        padded.resize(self.size, Fr::zero());
        fft::fft(&padded, &self.generator, false)
    }

    /// Interpolates `evals` (one per domain element) into coefficients.
    pub fn ifft(&self, evals: &[Fr]) -> Result<Vec<Fr>, PolynomialError> {
        if evals.len() != self.size {
            return Err(PolynomialError::DimensionMismatch(format!(
                "{} evaluations for a domain of size {}",
                evals.len(),
                self.size
            )));
        }
        fft::fft(evals, &self.generator, true)
    }

    /// Evaluations on the coset `shift·H`.
    pub fn coset_fft(&self, coeffs: &[Fr], shift: &Fr) -> Result<Vec<Fr>, PolynomialError> {
        self.fft(&fft::scale_poly(coeffs, shift))
    }

    pub fn coset_ifft(&self, evals: &[Fr], shift: &Fr) -> Result<Vec<Fr>, PolynomialError> {
        fft::shift_poly(&self.ifft(evals)?, shift)
    }

    /// Evaluates the interpolant of `evals` at `x`, by lookup when `x` is a
    /// domain element and by the barycentric formula otherwise.
    pub fn evaluate(&self, evals: &[Fr], x: &Fr) -> Result<Fr, PolynomialError> {
        if evals.len() != self.size {
            return Err(PolynomialError::DimensionMismatch(format!(
                "{} evaluations for a domain of size {}",
                evals.len(),
                self.size
            )));
        }
        match self.index_of(x) {
            Some(i) => Ok(evals[i]),
            None => arith::eval_barycentric(x, &self.elements, evals),
        }
    }
}

/// The canonical generator of the subgroup of order `size`, without building
/// the element list.
pub fn root_of_unity(size: usize) -> Result<Fr, PolynomialError> {
    check_size(size)?;
    Fr::get_root_of_unity(size as u64)
        .ok_or_else(|| PolynomialError::FFTError(format!("no root of unity of order {}", size)))
}

fn check_size(size: usize) -> Result<(), PolynomialError> {
    if !size.is_power_of_two() || size > MAX_DOMAIN_SIZE {
        return Err(PolynomialError::DimensionMismatch(format!(
            "domain size {} is not a power of two no larger than {}",
            size, MAX_DOMAIN_SIZE
        )));
    }
    Ok(())
}
