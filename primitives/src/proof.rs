//! Proof objects exchanged between the prover and verifier crates.
//!
//! All of them are plain data. Commitments are G1 points and every opening
//! carries its own point, value and quotient commitment.

use ark_bn254::{Fr, G1Affine};

/// A claim `p(point) = value` together with the commitment to
/// `(p(x) - value)/(x - point)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Opening {
    pub point: Fr,
    pub value: Fr,
    pub proof: G1Affine,
}

/// `p = q·(x^order - 1)`, checked at `r`.
#[derive(Clone, Debug, PartialEq)]
pub struct ZeroTestProof {
    pub order: usize,
    pub p_commitment: G1Affine,
    pub q_commitment: G1Affine,
    pub p_at_r: Opening,
    pub q_at_r: Opening,
}

/// Running product `t` of `f` over a subgroup of order `m`:
/// `t(ωx) - f(x)·t(x) = q(x)·(x^m - 1)` and `t(1) = 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct GrandProductProof {
    pub order: usize,
    pub f_commitment: G1Affine,
    pub t_commitment: G1Affine,
    pub q_commitment: G1Affine,
    pub t_at_one: Opening,
    pub t_at_r: Opening,
    pub t_at_omega_r: Opening,
    pub f_at_r: Opening,
    pub q_at_r: Opening,
}

/// Which row terms a permutation proof was built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermutationKind {
    /// `f = p - θ`: `p0` and `p1` hold the same multiset.
    Plain,
    /// `f = p·γ - seq - θ`: `p0` wired by `seq0` equals `p1` wired by `seq1`.
    Prescribed,
}

/// Running ratio `t` of `f0/f1`:
/// `t(ωx)·f1(x) - f0(x)·t(x) = q(x)·(x^m - 1)` and `t(1) = 1`.
///
/// For [PermutationKind::Prescribed], `seq0` and `seq1` are committed too and
/// opened at `r`, since the verifier needs their values to rebuild `f0` and
/// `f1`.
#[derive(Clone, Debug, PartialEq)]
pub struct PermutationProof {
    pub kind: PermutationKind,
    pub order: usize,
    pub p0_commitment: G1Affine,
    pub p1_commitment: G1Affine,
    pub seq0_commitment: Option<G1Affine>,
    pub seq1_commitment: Option<G1Affine>,
    pub t_commitment: G1Affine,
    pub q_commitment: G1Affine,
    pub t_at_one: Opening,
    pub t_at_r: Opening,
    pub t_at_omega_r: Opening,
    pub p0_at_r: Opening,
    pub p1_at_r: Opening,
    pub seq0_at_r: Option<Opening>,
    pub seq1_at_r: Option<Opening>,
    pub q_at_r: Opening,
}

/// `p1(ζ)·p2(ζ) = q(ζ)` through the linearization `k = p1 + μ·(y1·p2 - q)`,
/// where `y1 = p1(ζ)`. Both openings carry the value `y1`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearizedProductProof {
    pub p1_commitment: G1Affine,
    pub p2_commitment: G1Affine,
    pub q_commitment: G1Affine,
    pub p1_at_zeta: Opening,
    pub k_at_zeta: Opening,
}
