//! Scalar field arithmetic over the bn254 group order.
//!
//! `Fr` already reduces every result into `[0, p)`; the functions here add
//! the operations that can fail (inverse, division, negative powers) and
//! batch inversion.

use ark_bn254::Fr;
use ark_ff::Field;
use ark_std::{vec, vec::Vec, One, Zero};

use crate::errors::PolynomialError;

pub fn add(a: &Fr, b: &Fr) -> Fr {
    *a + b
}

pub fn sub(a: &Fr, b: &Fr) -> Fr {
    *a - b
}

pub fn mul(a: &Fr, b: &Fr) -> Fr {
    *a * b
}

pub fn neg(a: &Fr) -> Fr {
    -*a
}

/// Multiplicative inverse. Fails with [PolynomialError::DivisionByZero] on zero.
pub fn inv(a: &Fr) -> Result<Fr, PolynomialError> {
    a.inverse().ok_or(PolynomialError::DivisionByZero)
}

pub fn div(a: &Fr, b: &Fr) -> Result<Fr, PolynomialError> {
    Ok(*a * inv(b)?)
}

/// `base^exponent`. Negative exponents raise the inverse, so `pow(0, -1)`
/// fails while `pow(0, 0)` is one.
pub fn pow(base: &Fr, exponent: i64) -> Result<Fr, PolynomialError> {
    let raised = base.pow([exponent.unsigned_abs()]);
    if exponent < 0 {
        inv(&raised)
    } else {
        Ok(raised)
    }
}

/// Inverts every element with a single field inversion (Montgomery's trick).
///
/// Zero entries are skipped and map to zero in the output, so one zero does
/// not poison the whole batch. Callers that must reject zeros (ratios) check
/// for them first.
pub fn multi_inv(values: &[Fr]) -> Result<Vec<Fr>, PolynomialError> {
    let mut partials = Vec::with_capacity(values.len());
    let mut acc = Fr::one();
    for value in values {
        partials.push(acc);
        if !value.is_zero() {
            acc *= value;
        }
    }

    let mut inv_acc = inv(&acc)?;
    let mut output = vec![Fr::zero(); values.len()];
    for i in (0..values.len()).rev() {
        if values[i].is_zero() {
            continue;
        }
        output[i] = inv_acc * partials[i];
        inv_acc *= values[i];
    }
    Ok(output)
}
