//! Radix-2 transforms between coefficient and evaluation form.

use ark_bn254::Fr;
use ark_ff::{FftField, Field};
use ark_std::{format, string::ToString, vec, vec::Vec, One, Zero};

use crate::{consts::MAX_DOMAIN_SIZE, errors::PolynomialError, field};

/// Full power sequence `[1, ω, ω², …, 1]` of a root of unity, including the
/// closing 1. Fails if `root` does not cycle back to 1 within the largest
/// supported domain; that is checked before anything is expanded.
pub fn expand_root_of_unity(root: &Fr) -> Result<Vec<Fr>, PolynomialError> {
    if !root.pow([MAX_DOMAIN_SIZE as u64]).is_one() {
        return Err(PolynomialError::FFTError(
            "element is not a root of unity of supported order".to_string(),
        ));
    }
    let mut roots = vec![Fr::one(), *root];
    while !roots[roots.len() - 1].is_one() {
        let next = roots[roots.len() - 1] * root;
        roots.push(next);
    }
    Ok(roots)
}

/// Permutes `values` so that index `i` moves to the bit-reversal of `i`.
pub fn list_to_reverse_bit_order<T: Copy>(values: &[T]) -> Result<Vec<T>, PolynomialError> {
    let n = values.len();
    if !n.is_power_of_two() {
        return Err(PolynomialError::DimensionMismatch(format!(
            "length {} is not a power of two",
            n
        )));
    }
    if n == 1 {
        return Ok(values.to_vec());
    }
    let shift = usize::BITS - n.trailing_zeros();
    Ok((0..n).map(|i| values[i.reverse_bits() >> shift]).collect())
}

/// Cooley-Tukey transform of `values` over the powers of `root`.
///
/// `values.len()` must be a power of two equal to the order of `root`. The
/// inverse transform runs with `root^-1` and scales by `n^-1`.
pub fn fft(values: &[Fr], root: &Fr, inverse: bool) -> Result<Vec<Fr>, PolynomialError> {
    let n = values.len();
    if !n.is_power_of_two() {
        return Err(PolynomialError::DimensionMismatch(format!(
            "fft input length {} is not a power of two",
            n
        )));
    }
    let n_u64 = n as u64;
    if !root.pow([n_u64]).is_one() || (n > 1 && root.pow([n_u64 / 2]).is_one()) {
        return Err(PolynomialError::DimensionMismatch(format!(
            "root of unity does not have order {}",
            n
        )));
    }

    let root = if inverse { field::inv(root)? } else { *root };
    let powers = expand_root_of_unity(&root)?;
    let mut out = list_to_reverse_bit_order(values)?;

    let mut half = 1;
    while half < n {
        let stride = n / (2 * half);
        for start in (0..n).step_by(2 * half) {
            for j in 0..half {
                let t = out[start + j + half] * powers[j * stride];
                let u = out[start + j];
                out[start + j] = u + t;
                out[start + j + half] = u - t;
            }
        }
        half *= 2;
    }

    if inverse {
        let inv_n = field::inv(&Fr::from(n_u64))?;
        out.iter_mut().for_each(|v| *v *= inv_n);
    }
    Ok(out)
}

/// Coefficients of `p(factor·x)`: coefficient `i` is multiplied by
/// `factor^i`.
pub fn scale_poly(poly: &[Fr], factor: &Fr) -> Vec<Fr> {
    let mut power = Fr::one();
    poly.iter()
        .map(|c| {
            let scaled = *c * power;
            power *= factor;
            scaled
        })
        .collect()
}

/// Coefficients of `p(x/factor)`: coefficient `i` is multiplied by
/// `factor^-i`. [scale_poly] with the same factor undoes it.
pub fn shift_poly(poly: &[Fr], factor: &Fr) -> Result<Vec<Fr>, PolynomialError> {
    Ok(scale_poly(poly, &field::inv(factor)?))
}

/// Evaluations of `coeffs` on the coset `shift·H`, where `H` is generated by
/// `root`.
pub fn coset_fft(coeffs: &[Fr], root: &Fr, shift: &Fr) -> Result<Vec<Fr>, PolynomialError> {
    fft(&scale_poly(coeffs, shift), root, false)
}

/// Inverse of [coset_fft].
pub fn coset_ifft(evals: &[Fr], root: &Fr, shift: &Fr) -> Result<Vec<Fr>, PolynomialError> {
    shift_poly(&fft(evals, root, true)?, shift)
}

/// Polynomial product through the transform: pad both operands to a power of
/// two that holds the full product, multiply pointwise, transform back.
pub fn fft_mul(a: &[Fr], b: &[Fr]) -> Result<Vec<Fr>, PolynomialError> {
    if a.is_empty() || b.is_empty() {
        return Ok(Vec::new());
    }
    let out_len = a.len() + b.len() - 1;
    let n = out_len.next_power_of_two();
    let root = Fr::get_root_of_unity(n as u64).ok_or_else(|| {
        PolynomialError::FFTError(format!("no root of unity of order {}", n))
    })?;

    let mut a_padded = a.to_vec();
    a_padded.resize(n, Fr::zero());
    let mut b_padded = b.to_vec();
    b_padded.resize(n, Fr::zero());

    let a_evals = fft(&a_padded, &root, false)?;
    let b_evals = fft(&b_padded, &root, false)?;
    let product: Vec<Fr> = a_evals.iter().zip(&b_evals).map(|(x, y)| *x * y).collect();

    let mut out = fft(&product, &root, true)?;
    out.truncate(out_len);
    Ok(out)
}
