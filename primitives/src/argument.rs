//! Polynomial side of the subgroup arguments: witness construction and the
//! scalar identities a verifier checks at a random point.
//!
//! Every argument works over a subgroup `H` of order `m` generated by `ω`,
//! and reduces to an identity polynomial being divisible by `Z(x) = x^m - 1`.
//! Division is exact or the witness is rejected with
//! [PolynomialError::NonZeroRemainder].

use ark_bn254::Fr;
use ark_ff::Field;
use ark_std::{format, vec::Vec, One, Zero};

use crate::{arith, domain::Domain, errors::PolynomialError, fft, field};

/// `t[0] = 1`, `t[i] = t[i-1]·values[i-1]`. Returns `values.len() + 1` entries.
pub fn running_product(values: &[Fr]) -> Vec<Fr> {
    let mut t = Vec::with_capacity(values.len() + 1);
    let mut acc = Fr::one();
    t.push(acc);
    for v in values {
        acc *= v;
        t.push(acc);
    }
    t
}

/// Appends the closing factor to `evals` so that the running product wraps
/// back to 1 over the subgroup.
///
/// `evals` holds `m - 1` gate values with `m` a power of two. The closing
/// factor `1/t[m-1]` is computed after every gate value is fixed. Returns
/// `(f, t)`, both of length `m`, with `Π f = 1`.
pub fn close_running_product(evals: &[Fr]) -> Result<(Vec<Fr>, Vec<Fr>), PolynomialError> {
    let m = evals.len() + 1;
    if !m.is_power_of_two() {
        return Err(PolynomialError::DimensionMismatch(format!(
            "{} gate values do not leave room for a closing factor in a power-of-two subgroup",
            evals.len()
        )));
    }
    let t = running_product(evals);
    let closing = field::inv(&t[m - 1])?;

    let mut f = evals.to_vec();
    f.push(closing);
    Ok((f, t))
}

/// Plain permutation rows: `f[i] = p[i] - θ`.
pub fn permutation_terms(p: &[Fr], theta: &Fr) -> Vec<Fr> {
    p.iter().map(|x| *x - theta).collect()
}

/// Prescribed permutation rows: `f[i] = p[i]·γ - seq[i] - θ`.
pub fn prescribed_permutation_terms(
    p: &[Fr],
    seq: &[Fr],
    gamma: &Fr,
    theta: &Fr,
) -> Result<Vec<Fr>, PolynomialError> {
    if p.len() != seq.len() {
        return Err(PolynomialError::DimensionMismatch(format!(
            "{} values but {} wiring entries",
            p.len(),
            seq.len()
        )));
    }
    Ok(p.iter()
        .zip(seq)
        .map(|(x, s)| *x * gamma - s - theta)
        .collect())
}

/// Pointwise `f0[i] / f1[i]`. Any zero in `f1` is a malformed permutation and
/// fails with [PolynomialError::DivisionByZero].
pub fn permutation_ratio(f0: &[Fr], f1: &[Fr]) -> Result<Vec<Fr>, PolynomialError> {
    if f0.len() != f1.len() {
        return Err(PolynomialError::DimensionMismatch(format!(
            "numerator has {} rows, denominator {}",
            f0.len(),
            f1.len()
        )));
    }
    if f1.iter().any(Zero::is_zero) {
        return Err(PolynomialError::DivisionByZero);
    }
    let inverses = field::multi_inv(f1)?;
    Ok(f0.iter().zip(&inverses).map(|(a, b)| *a * b).collect())
}

/// `p(r) == q(r)·(r^order - 1)`.
pub fn check_zero_test_at(r: &Fr, order: usize, p_r: &Fr, q_r: &Fr) -> bool {
    *p_r == *q_r * vanishing_at(r, order)
}

/// `q(r)·(r^m - 1) == t(ωr) - f(r)·t(r)`.
pub fn check_grand_product_at(
    r: &Fr,
    order: usize,
    f_r: &Fr,
    t_r: &Fr,
    t_omega_r: &Fr,
    q_r: &Fr,
) -> bool {
    *q_r * vanishing_at(r, order) == *t_omega_r - *f_r * t_r
}

/// `q(r)·(r^m - 1) == t(ωr)·f1(r) - f0(r)·t(r)`.
pub fn check_permutation_at(
    r: &Fr,
    order: usize,
    f0_r: &Fr,
    f1_r: &Fr,
    t_r: &Fr,
    t_omega_r: &Fr,
    q_r: &Fr,
) -> bool {
    *q_r * vanishing_at(r, order) == *t_omega_r * f1_r - *f0_r * t_r
}

/// `r^order - 1`.
pub fn vanishing_at(r: &Fr, order: usize) -> Fr {
    r.pow([order as u64]) - Fr::one()
}

/// `p = q·(x^order - 1)` where `p` is given by its values on a domain of size
/// `n` and vanishes on the subgroup of order `order` (every `n/order`-th
/// point).
#[derive(Clone, Debug, PartialEq)]
pub struct ZeroTestWitness {
    pub domain: Domain,
    pub order: usize,
    pub p: Vec<Fr>,
    pub q: Vec<Fr>,
}

impl ZeroTestWitness {
    pub fn new(evals: &[Fr], order: usize) -> Result<Self, PolynomialError> {
        let domain = Domain::new(evals.len())?;
        domain.subdomain(order)?;
        let p = domain.ifft(evals)?;
        let q = arith::div_polys(&p, &arith::vanishing_poly(order))?;
        Ok(Self {
            domain,
            order,
            p,
            q,
        })
    }

    pub fn check_at(&self, r: &Fr) -> bool {
        check_zero_test_at(
            r,
            self.order,
            &arith::eval_poly_at(&self.p, r),
            &arith::eval_poly_at(&self.q, r),
        )
    }
}

/// Running product `t` of `f` over the subgroup of order `m = f.len()`, with
/// the quotient of `t(ωx) - f(x)·t(x)` by `x^m - 1`. All polynomials are in
/// coefficient form.
#[derive(Clone, Debug, PartialEq)]
pub struct GrandProductWitness {
    pub domain: Domain,
    pub f: Vec<Fr>,
    pub t: Vec<Fr>,
    pub q: Vec<Fr>,
}

impl GrandProductWitness {
    /// `f_evals` must multiply to one, otherwise the wrap-around row breaks
    /// the recurrence and the division is inexact.
    pub fn new(f_evals: &[Fr]) -> Result<Self, PolynomialError> {
        let domain = Domain::new(f_evals.len())?;
        let m = domain.size();
        let t_evals = running_product(&f_evals[..m - 1]);

        let f = domain.ifft(f_evals)?;
        let t = domain.ifft(&t_evals)?;
        let identity = product_identity(&f, &t, &domain.generator())?;
        let q = arith::div_polys(&identity, &domain.vanishing_polynomial())?;
        Ok(Self { domain, f, t, q })
    }

    pub fn check_at(&self, r: &Fr) -> bool {
        let omega_r = self.domain.generator() * r;
        check_grand_product_at(
            r,
            self.domain.size(),
            &arith::eval_poly_at(&self.f, r),
            &arith::eval_poly_at(&self.t, r),
            &arith::eval_poly_at(&self.t, &omega_r),
            &arith::eval_poly_at(&self.q, r),
        )
    }
}

/// Coefficients of `t(ωx) - f(x)·t(x)`.
pub fn product_identity(f: &[Fr], t: &[Fr], omega: &Fr) -> Result<Vec<Fr>, PolynomialError> {
    let t_shifted = fft::scale_poly(t, omega);
    let ft = fft::fft_mul(f, t)?;
    Ok(arith::sub_polys(&t_shifted, &ft))
}

/// Coefficients of `t(ωx)·f1(x) - f0(x)·t(x)`.
pub fn ratio_identity(
    f0: &[Fr],
    f1: &[Fr],
    t: &[Fr],
    omega: &Fr,
) -> Result<Vec<Fr>, PolynomialError> {
    let t_shifted = fft::scale_poly(t, omega);
    let lhs = fft::fft_mul(&t_shifted, f1)?;
    let rhs = fft::fft_mul(f0, t)?;
    Ok(arith::sub_polys(&lhs, &rhs))
}

/// Running ratio `t` of `f0/f1` over the subgroup of order `m`, with the
/// quotient of `t(ωx)·f1(x) - f0(x)·t(x)` by `x^m - 1`.
///
/// The division is exact iff `Π f0 = Π f1`, i.e. the two row multisets agree
/// (with overwhelming probability over the row challenges).
#[derive(Clone, Debug, PartialEq)]
pub struct PermutationWitness {
    pub domain: Domain,
    pub f0: Vec<Fr>,
    pub f1: Vec<Fr>,
    pub t: Vec<Fr>,
    pub q: Vec<Fr>,
}

impl PermutationWitness {
    pub fn new(f0_evals: &[Fr], f1_evals: &[Fr]) -> Result<Self, PolynomialError> {
        let ratio = permutation_ratio(f0_evals, f1_evals)?;
        let domain = Domain::new(ratio.len())?;
        let m = domain.size();
        let t_evals = running_product(&ratio[..m - 1]);

        let f0 = domain.ifft(f0_evals)?;
        let f1 = domain.ifft(f1_evals)?;
        let t = domain.ifft(&t_evals)?;
        let identity = ratio_identity(&f0, &f1, &t, &domain.generator())?;
        let q = arith::div_polys(&identity, &domain.vanishing_polynomial())?;
        Ok(Self {
            domain,
            f0,
            f1,
            t,
            q,
        })
    }

    pub fn check_at(&self, r: &Fr) -> bool {
        let omega_r = self.domain.generator() * r;
        check_permutation_at(
            r,
            self.domain.size(),
            &arith::eval_poly_at(&self.f0, r),
            &arith::eval_poly_at(&self.f1, r),
            &arith::eval_poly_at(&self.t, r),
            &arith::eval_poly_at(&self.t, &omega_r),
            &arith::eval_poly_at(&self.q, r),
        )
    }
}
