use ark_bn254::{Fr, G1Affine, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use bn254_poly_commit_primitives::{
    consts::{BYTES_PER_FIELD_ELEMENT, SIZE_OF_G1_AFFINE_COMPRESSED},
    errors::KzgError,
    helpers,
    polynomial::PolynomialEvalForm,
    proof::Opening,
    setup::PublicSetup,
    traits::{ReadFrFromBytes, ReadPointFromBytes},
};

extern crate alloc;
use alloc::string::ToString;

/// This function performs verification of a KZG proof where the commitment, proof,
/// evaluation point and claimed value are provided as deserialized curve points
/// and field elements. It checks the pairing identity
///
/// `e(proof, [τ - z]₂) = e(C - [y]₁, [1]₂)`
///
/// using only `[τ]₂` from the published setup.
///
/// # Arguments
///
/// * `setup` - Published setup vectors; only `[τ]₂` is read
/// * `commitment` - A `G1Affine` point representing the KZG commitment to a polynomial
/// * `proof` - A `G1Affine` point committing to the quotient `(p(x) - y)/(x - z)`
/// * `z_fr` - The evaluation point
/// * `value_fr` - The claimed value `p(z)`
///
/// # Returns
///
/// * `Ok(true)` - If the proof is valid and verification succeeds
/// * `Ok(false)` - If the proof is invalid but no errors occurred during verification
/// * `Err(KzgError)` - If an input point is not on the curve or not in the subgroup
pub fn verify_proof_impl(
    setup: &PublicSetup,
    commitment: G1Affine,
    proof: G1Affine,
    z_fr: Fr,
    value_fr: Fr,
) -> Result<bool, KzgError> {
    helpers::check_g1_point(&commitment)?;
    helpers::check_g1_point(&proof)?;
    let g2_tau = setup.g2_tau();
    helpers::check_g2_point(&g2_tau)?;

    // [C - y]₁
    let commit_minus_value = (G1Affine::generator() * (-value_fr) + commitment).into_affine();
    // [τ - z]₂
    let x_minus_z = (G2Affine::generator() * (-z_fr) + g2_tau).into_affine();

    Ok(helpers::pairings_verify(
        commit_minus_value,
        G2Affine::generator(),
        proof,
        x_minus_z,
    ))
}

/// Same check as [verify_proof_impl] with `z·proof` moved to the G1 side:
///
/// `e(proof, [τ]₂) = e(C - [y]₁ + z·proof, [1]₂)`
///
/// The G2 argument is then a fixed setup point, which is the arrangement the
/// batched verifier generalizes.
pub fn verify_proof_moved(
    setup: &PublicSetup,
    commitment: G1Affine,
    proof: G1Affine,
    z_fr: Fr,
    value_fr: Fr,
) -> Result<bool, KzgError> {
    helpers::check_g1_point(&commitment)?;
    helpers::check_g1_point(&proof)?;
    let g2_tau = setup.g2_tau();
    helpers::check_g2_point(&g2_tau)?;

    let lhs = (G1Affine::generator() * (-value_fr) + proof * z_fr + commitment).into_affine();

    Ok(helpers::pairings_verify(
        proof,
        g2_tau,
        lhs,
        G2Affine::generator(),
    ))
}

/// Verifies a KZG proof given as compressed big-endian bytes.
///
/// # Arguments
///
/// * `commitment` - A 32-byte compressed G1 point in big-endian format
/// * `proof` - A 32-byte compressed G1 point in big-endian format
/// * `z_fr` - A 32-byte big-endian field element, the evaluation point
/// * `value_fr` - A 32-byte big-endian field element, the claimed value
pub fn verify_proof(
    setup: &PublicSetup,
    commitment: &[u8; SIZE_OF_G1_AFFINE_COMPRESSED],
    proof: &[u8; SIZE_OF_G1_AFFINE_COMPRESSED],
    z_fr: &[u8; BYTES_PER_FIELD_ELEMENT],
    value_fr: &[u8; BYTES_PER_FIELD_ELEMENT],
) -> Result<bool, KzgError> {
    let commitment =
        G1Affine::read_point_from_bytes_native_compressed_be(commitment).map_err(|_| {
            KzgError::SerializationError("Failed to deserialize commitment".to_string())
        })?;
    let proof = G1Affine::read_point_from_bytes_native_compressed_be(proof)
        .map_err(|_| KzgError::SerializationError("Failed to deserialize proof".to_string()))?;
    let z_fr = Fr::deserialize_from_bytes_be(z_fr)
        .map_err(|_| KzgError::SerializationError("Failed to deserialize z_fr".to_string()))?;
    let value_fr = Fr::deserialize_from_bytes_be(value_fr)
        .map_err(|_| KzgError::SerializationError("Failed to deserialize value_fr".to_string()))?;
    verify_proof_impl(setup, commitment, proof, z_fr, value_fr)
}

pub fn verify_opening(
    setup: &PublicSetup,
    commitment: &G1Affine,
    opening: &Opening,
) -> Result<bool, KzgError> {
    verify_proof_impl(setup, *commitment, opening.proof, opening.point, opening.value)
}

/// Verifies an opening of a full evaluation vector at its Fiat-Shamir point.
///
/// The verifier holds the evaluations itself, so it recomputes both the
/// challenge (from the evaluations and the commitment) and the value at the
/// challenge. Only the quotient commitment comes from the prover.
pub fn verify_evaluations_proof(
    setup: &PublicSetup,
    polynomial: &PolynomialEvalForm,
    commitment: &G1Affine,
    proof: &G1Affine,
) -> Result<bool, KzgError> {
    helpers::check_g1_point(proof)?;

    let evaluation_challenge = helpers::compute_challenge(polynomial, commitment)?;
    let y = polynomial.evaluate(&evaluation_challenge)?;

    verify_proof_impl(setup, *commitment, *proof, evaluation_challenge, y)
}
