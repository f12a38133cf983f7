//! Verifiers for the subgroup arguments and the linearized product.
//!
//! Every verifier follows the same steps. It rejects malformed proofs with an
//! error. It checks that the proof is about the caller's statement: the
//! subgroup order and the commitments are parameters, and a proof carrying
//! different ones is rejected. It checks that every opening sits at the point
//! the argument requires. It checks all openings with one batched pairing. It then checks
//! the scalar identity at `r`, and `t(1) = 1` where there is a running product.

use ark_bn254::{Fr, G1Affine};
use ark_ec::CurveGroup;
use ark_ff::{One, Zero};
use bn254_poly_commit_primitives::{
    argument::{check_grand_product_at, check_permutation_at, check_zero_test_at, vanishing_at},
    domain::{self, Domain},
    errors::KzgError,
    helpers,
    proof::{
        GrandProductProof, LinearizedProductProof, Opening, PermutationKind, PermutationProof,
        ZeroTestProof,
    },
    setup::PublicSetup,
    traits::SetupVectors,
};
use tracing::{debug, instrument};

extern crate alloc;
use alloc::{string::ToString, vec, vec::Vec};

use crate::batch::verify_openings_batch;

/// Checks that the polynomial committed in `p_commitment` vanishes on the
/// subgroup of order `order`, i.e. `p = q·(x^order - 1)` at `r`.
#[instrument(skip_all, level = "debug", fields(order = order))]
pub fn verify_zero_test(
    setup: &PublicSetup,
    order: usize,
    p_commitment: &G1Affine,
    proof: &ZeroTestProof,
    r: &Fr,
) -> Result<bool, KzgError> {
    check_order(order)?;
    check_outside_subgroup(r, order)?;

    if proof.order != order || proof.p_commitment != *p_commitment {
        debug!(claimed = proof.order, "zero test proof is for another statement");
        return Ok(false);
    }

    if !at_point(&[&proof.p_at_r, &proof.q_at_r], r) {
        return Ok(false);
    }
    let openings = vec![
        (proof.p_commitment, proof.p_at_r),
        (proof.q_commitment, proof.q_at_r),
    ];
    if !verify_openings_batch(setup, &openings)? {
        debug!("zero test openings rejected");
        return Ok(false);
    }
    Ok(check_zero_test_at(
        r,
        order,
        &proof.p_at_r.value,
        &proof.q_at_r.value,
    ))
}

/// Checks that the values committed in `f_commitment` over the subgroup of
/// order `order` multiply to 1: `t` is their running product and wraps back
/// to 1.
#[instrument(skip_all, level = "debug", fields(order = order))]
pub fn verify_grand_product(
    setup: &PublicSetup,
    order: usize,
    f_commitment: &G1Affine,
    proof: &GrandProductProof,
    r: &Fr,
) -> Result<bool, KzgError> {
    let omega = check_order(order)?;
    check_outside_subgroup(r, order)?;

    if proof.order != order || proof.f_commitment != *f_commitment {
        debug!(claimed = proof.order, "grand product proof is for another statement");
        return Ok(false);
    }

    if !at_point(&[&proof.t_at_r, &proof.f_at_r, &proof.q_at_r], r)
        || proof.t_at_omega_r.point != omega * r
        || !proof.t_at_one.point.is_one()
    {
        return Ok(false);
    }
    if !proof.t_at_one.value.is_one() {
        debug!("running product does not start at one");
        return Ok(false);
    }

    let openings = vec![
        (proof.t_commitment, proof.t_at_one),
        (proof.t_commitment, proof.t_at_r),
        (proof.t_commitment, proof.t_at_omega_r),
        (proof.f_commitment, proof.f_at_r),
        (proof.q_commitment, proof.q_at_r),
    ];
    if !verify_openings_batch(setup, &openings)? {
        debug!("grand product openings rejected");
        return Ok(false);
    }
    Ok(check_grand_product_at(
        r,
        order,
        &proof.f_at_r.value,
        &proof.t_at_r.value,
        &proof.t_at_omega_r.value,
        &proof.q_at_r.value,
    ))
}

/// Checks that the values committed in `p0_commitment` and `p1_commitment`
/// over the subgroup of order `order` are the same multiset, with row terms
/// `p - θ`.
#[instrument(skip_all, level = "debug", fields(order = order))]
pub fn verify_permutation(
    setup: &PublicSetup,
    order: usize,
    p0_commitment: &G1Affine,
    p1_commitment: &G1Affine,
    proof: &PermutationProof,
    theta: &Fr,
    r: &Fr,
) -> Result<bool, KzgError> {
    if proof.kind != PermutationKind::Plain {
        return Err(KzgError::GenericError(
            "expected a plain permutation proof".to_string(),
        ));
    }
    let f0_r = proof.p0_at_r.value - theta;
    let f1_r = proof.p1_at_r.value - theta;
    verify_running_ratio(
        setup,
        order,
        (p0_commitment, p1_commitment),
        proof,
        Vec::new(),
        &f0_r,
        &f1_r,
        r,
    )
}

/// Commitments to the public wiring of a prescribed permutation.
///
/// The wiring is part of the statement. A verifier either knows these
/// commitments already or computes them from the wiring values with
/// [WiringCommitments::from_evaluations].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WiringCommitments {
    pub seq0: G1Affine,
    pub seq1: G1Affine,
}

impl WiringCommitments {
    /// Commits to `seq0` and `seq1` as evaluations over the subgroup of
    /// their length, through the Lagrange vector of `setup`.
    pub fn from_evaluations(
        setup: &PublicSetup,
        seq0: &[Fr],
        seq1: &[Fr],
    ) -> Result<Self, KzgError> {
        if seq0.len() != seq1.len() {
            return Err(KzgError::InvalidInputLength);
        }
        let lagrange = setup.lagrange_g1(&Domain::new(seq0.len())?)?;
        Ok(Self {
            seq0: helpers::g1_lincomb(&lagrange, seq0)?,
            seq1: helpers::g1_lincomb(&lagrange, seq1)?,
        })
    }
}

/// Checks that `p0` under wiring `seq0` equals `p1` under wiring `seq1`,
/// with row terms `p·γ - seq - θ`. The wiring commitments come from the
/// caller; the proof's own copies must match them.
#[allow(clippy::too_many_arguments)]
#[instrument(skip_all, level = "debug", fields(order = order))]
pub fn verify_prescribed_permutation(
    setup: &PublicSetup,
    order: usize,
    p0_commitment: &G1Affine,
    p1_commitment: &G1Affine,
    wiring: &WiringCommitments,
    proof: &PermutationProof,
    gamma: &Fr,
    theta: &Fr,
    r: &Fr,
) -> Result<bool, KzgError> {
    let (seq0_commitment, seq0_at_r, seq1_commitment, seq1_at_r) = match (
        proof.kind,
        proof.seq0_commitment,
        proof.seq0_at_r,
        proof.seq1_commitment,
        proof.seq1_at_r,
    ) {
        (PermutationKind::Prescribed, Some(c0), Some(o0), Some(c1), Some(o1)) => (c0, o0, c1, o1),
        _ => {
            return Err(KzgError::GenericError(
                "expected a prescribed permutation proof with wiring openings".to_string(),
            ))
        },
    };
    if seq0_commitment != wiring.seq0 || seq1_commitment != wiring.seq1 {
        debug!("permutation proof carries a different wiring");
        return Ok(false);
    }
    if seq0_at_r.point != *r || seq1_at_r.point != *r {
        return Ok(false);
    }

    let f0_r = proof.p0_at_r.value * gamma - seq0_at_r.value - theta;
    let f1_r = proof.p1_at_r.value * gamma - seq1_at_r.value - theta;
    let wiring_openings = vec![(wiring.seq0, seq0_at_r), (wiring.seq1, seq1_at_r)];
    verify_running_ratio(
        setup,
        order,
        (p0_commitment, p1_commitment),
        proof,
        wiring_openings,
        &f0_r,
        &f1_r,
        r,
    )
}

#[allow(clippy::too_many_arguments)]
fn verify_running_ratio(
    setup: &PublicSetup,
    order: usize,
    (p0_commitment, p1_commitment): (&G1Affine, &G1Affine),
    proof: &PermutationProof,
    mut openings: Vec<(G1Affine, Opening)>,
    f0_r: &Fr,
    f1_r: &Fr,
    r: &Fr,
) -> Result<bool, KzgError> {
    let omega = check_order(order)?;
    check_outside_subgroup(r, order)?;

    if proof.order != order
        || proof.p0_commitment != *p0_commitment
        || proof.p1_commitment != *p1_commitment
    {
        debug!(claimed = proof.order, "permutation proof is for another statement");
        return Ok(false);
    }

    if !at_point(
        &[&proof.t_at_r, &proof.p0_at_r, &proof.p1_at_r, &proof.q_at_r],
        r,
    ) || proof.t_at_omega_r.point != omega * r
        || !proof.t_at_one.point.is_one()
    {
        return Ok(false);
    }
    if !proof.t_at_one.value.is_one() {
        debug!("running ratio does not start at one");
        return Ok(false);
    }

    openings.extend([
        (proof.t_commitment, proof.t_at_one),
        (proof.t_commitment, proof.t_at_r),
        (proof.t_commitment, proof.t_at_omega_r),
        (proof.p0_commitment, proof.p0_at_r),
        (proof.p1_commitment, proof.p1_at_r),
        (proof.q_commitment, proof.q_at_r),
    ]);
    if !verify_openings_batch(setup, &openings)? {
        debug!("permutation openings rejected");
        return Ok(false);
    }
    Ok(check_permutation_at(
        r,
        order,
        f0_r,
        f1_r,
        &proof.t_at_r.value,
        &proof.t_at_omega_r.value,
        &proof.q_at_r.value,
    ))
}

/// `[k] = [p1] + μ·(y1·[p2] - [q])`, the commitment to the linearization
/// polynomial, built from the three committed polynomials.
pub fn linearized_commitment(proof: &LinearizedProductProof, mu: &Fr) -> G1Affine {
    let y1 = proof.p1_at_zeta.value;
    ((proof.p2_commitment * y1 - proof.q_commitment) * mu + proof.p1_commitment).into_affine()
}

/// Checks `p1(ζ)·p2(ζ) = q(ζ)` for the three committed polynomials, from the
/// openings of `p1` and of the linearization `k` at `ζ`, both with value
/// `p1(ζ)`.
#[instrument(skip_all, level = "debug")]
pub fn verify_linearized_product(
    setup: &PublicSetup,
    p1_commitment: &G1Affine,
    p2_commitment: &G1Affine,
    q_commitment: &G1Affine,
    proof: &LinearizedProductProof,
    zeta: &Fr,
    mu: &Fr,
) -> Result<bool, KzgError> {
    helpers::check_g1_point(&proof.p2_commitment)?;
    helpers::check_g1_point(&proof.q_commitment)?;
    if proof.p1_commitment != *p1_commitment
        || proof.p2_commitment != *p2_commitment
        || proof.q_commitment != *q_commitment
    {
        debug!("linearized product proof is for other commitments");
        return Ok(false);
    }
    if !at_point(&[&proof.p1_at_zeta, &proof.k_at_zeta], zeta)
        || proof.k_at_zeta.value != proof.p1_at_zeta.value
    {
        return Ok(false);
    }
    let openings = vec![
        (proof.p1_commitment, proof.p1_at_zeta),
        (linearized_commitment(proof, mu), proof.k_at_zeta),
    ];
    verify_openings_batch(setup, &openings)
}

fn at_point(openings: &[&Opening], point: &Fr) -> bool {
    openings.iter().all(|o| o.point == *point)
}

/// Returns the generator of the subgroup of order `order`.
fn check_order(order: usize) -> Result<Fr, KzgError> {
    Ok(domain::root_of_unity(order)?)
}

fn check_outside_subgroup(r: &Fr, order: usize) -> Result<(), KzgError> {
    if vanishing_at(r, order).is_zero() {
        return Err(KzgError::GenericError(
            "challenge lies inside the subgroup".to_string(),
        ));
    }
    Ok(())
}
