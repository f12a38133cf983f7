//! Coefficient-form polynomial arithmetic.
//!
//! Polynomials are little-endian coefficient vectors: index `i` holds the
//! coefficient of `x^i`. Outputs are not trimmed unless a function says so.

use ark_bn254::Fr;
use ark_ff::Field;
use ark_std::{format, vec, vec::Vec, One, Zero};

use crate::{errors::PolynomialError, field};

/// Drops trailing zero coefficients.
pub fn trim(poly: &[Fr]) -> Vec<Fr> {
    let len = poly
        .iter()
        .rposition(|c| !c.is_zero())
        .map_or(0, |last| last + 1);
    poly[..len].to_vec()
}

pub fn add_polys(a: &[Fr], b: &[Fr]) -> Vec<Fr> {
    let mut out = vec![Fr::zero(); a.len().max(b.len())];
    for (i, c) in a.iter().enumerate() {
        out[i] += c;
    }
    for (i, c) in b.iter().enumerate() {
        out[i] += c;
    }
    out
}

pub fn sub_polys(a: &[Fr], b: &[Fr]) -> Vec<Fr> {
    let mut out = vec![Fr::zero(); a.len().max(b.len())];
    for (i, c) in a.iter().enumerate() {
        out[i] += c;
    }
    for (i, c) in b.iter().enumerate() {
        out[i] -= c;
    }
    out
}

pub fn mul_by_const(a: &[Fr], c: &Fr) -> Vec<Fr> {
    a.iter().map(|x| *x * c).collect()
}

/// Schoolbook convolution. Returns an empty vector if either input is empty.
///
/// Large products should go through [crate::fft::fft_mul] instead.
pub fn mul_polys(a: &[Fr], b: &[Fr]) -> Vec<Fr> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![Fr::zero(); a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        if x.is_zero() {
            continue;
        }
        for (j, y) in b.iter().enumerate() {
            out[i + j] += *x * y;
        }
    }
    out
}

/// Long division of `numerator` by `denominator`.
///
/// The denominator is trimmed first; its leading coefficient must then be
/// nonzero, otherwise [PolynomialError::DivisionByZero]. The remainder always
/// has exactly `deg(denominator)` coefficients (zero-padded), so an exact
/// division is recognisable as an all-zero remainder.
pub fn div_polys_with_rem(
    numerator: &[Fr],
    denominator: &[Fr],
) -> Result<(Vec<Fr>, Vec<Fr>), PolynomialError> {
    let den = trim(denominator);
    let lead = den.last().ok_or(PolynomialError::DivisionByZero)?;
    let lead_inv = field::inv(lead)?;
    let rem_len = den.len() - 1;

    if numerator.len() < den.len() {
        let mut rem = numerator.to_vec();
        rem.resize(rem_len, Fr::zero());
        return Ok((Vec::new(), rem));
    }

    let mut rem = numerator.to_vec();
    let quot_len = numerator.len() - den.len() + 1;
    let mut quot = vec![Fr::zero(); quot_len];
    for i in (0..quot_len).rev() {
        let coeff = rem[i + rem_len] * lead_inv;
        quot[i] = coeff;
        if coeff.is_zero() {
            continue;
        }
        for (j, d) in den.iter().enumerate() {
            rem[i + j] -= coeff * d;
        }
    }
    rem.truncate(rem_len);
    Ok((quot, rem))
}

/// Exact division. Fails with [PolynomialError::NonZeroRemainder] if
/// `denominator` does not divide `numerator`.
pub fn div_polys(numerator: &[Fr], denominator: &[Fr]) -> Result<Vec<Fr>, PolynomialError> {
    let (quot, rem) = div_polys_with_rem(numerator, denominator)?;
    if rem.iter().any(|c| !c.is_zero()) {
        return Err(PolynomialError::NonZeroRemainder);
    }
    Ok(quot)
}

/// Horner evaluation.
pub fn eval_poly_at(poly: &[Fr], x: &Fr) -> Fr {
    poly.iter()
        .rev()
        .fold(Fr::zero(), |acc, coeff| acc * x + coeff)
}

/// `Π (x - r)` over `roots`. The empty product is the constant 1.
pub fn zpoly(roots: &[Fr]) -> Vec<Fr> {
    roots
        .iter()
        .fold(vec![Fr::one()], |acc, r| mul_polys(&acc, &[-*r, Fr::one()]))
}

/// `x^order - 1`, the vanishing polynomial of the subgroup of that order.
pub fn vanishing_poly(order: usize) -> Vec<Fr> {
    let mut poly = vec![Fr::zero(); order + 1];
    poly[0] = -Fr::one();
    poly[order] += Fr::one();
    poly
}

/// Interpolates the unique polynomial of degree `< xs.len()` through the
/// points `(xs[i], ys[i])`.
///
/// `xs` are assumed distinct. Duplicates yield a meaningless polynomial
/// rather than an error, because zero denominators invert to zero.
pub fn lagrange_interp(xs: &[Fr], ys: &[Fr]) -> Result<Vec<Fr>, PolynomialError> {
    if xs.len() != ys.len() {
        return Err(PolynomialError::DimensionMismatch(format!(
            "{} points but {} values",
            xs.len(),
            ys.len()
        )));
    }
    if xs.is_empty() {
        return Ok(Vec::new());
    }

    let root = zpoly(xs);
    let numerators = xs
        .iter()
        .map(|x| div_polys(&root, &[-*x, Fr::one()]))
        .collect::<Result<Vec<_>, _>>()?;
    let denominators: Vec<Fr> = numerators
        .iter()
        .zip(xs)
        .map(|(num, x)| eval_poly_at(num, x))
        .collect();
    let inv_denominators = field::multi_inv(&denominators)?;

    let mut out = vec![Fr::zero(); xs.len()];
    for ((num, y), inv_den) in numerators.iter().zip(ys).zip(&inv_denominators) {
        let scale = *y * inv_den;
        for (o, c) in out.iter_mut().zip(num) {
            *o += *c * scale;
        }
    }
    Ok(out)
}

/// Evaluates the interpolant of `ys` over the roots-of-unity domain `roots`
/// at `x`:
///
/// `y(x) = (x^n - 1)/n * Σ y_i·ω_i/(x - ω_i)`
///
/// `x` must not be a domain point; callers look those up directly.
pub fn eval_barycentric(x: &Fr, roots: &[Fr], ys: &[Fr]) -> Result<Fr, PolynomialError> {
    if roots.len() != ys.len() {
        return Err(PolynomialError::DimensionMismatch(format!(
            "domain of size {} but {} values",
            roots.len(),
            ys.len()
        )));
    }
    let width = roots.len() as u64;
    let inv_width = field::inv(&Fr::from(width))?;

    let mut sum = Fr::zero();
    for (y, w) in ys.iter().zip(roots) {
        let diff = *x - w;
        sum += *y * w * field::inv(&diff)?;
    }
    Ok((x.pow([width]) - Fr::one()) * inv_width * sum)
}
