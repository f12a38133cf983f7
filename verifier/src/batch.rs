use ark_bn254::{Fr, G1Affine, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_serialize::CanonicalSerialize;
use bn254_poly_commit_primitives::{
    consts::{
        BYTES_PER_FIELD_ELEMENT, RANDOM_CHALLENGE_KZG_BATCH_DOMAIN, SIZE_OF_G1_AFFINE_COMPRESSED,
    },
    errors::KzgError,
    helpers::{self, usize_to_be_bytes},
    proof::Opening,
    setup::PublicSetup,
    traits::{ReadFrFromBytes, ReadPointFromBytes},
};
use tracing::debug;

extern crate alloc;
use alloc::{string::ToString, vec::Vec};

/// Verifies `k` KZG openings with a single pairing check.
///
/// With `r` chosen after the tuples are fixed, the check
///
/// `e(Σ rⁱ·πᵢ, [τ]₂) = e(Σ rⁱ·Cᵢ + Σ rⁱ·zᵢ·πᵢ - (Σ rⁱ·yᵢ)·G1, [1]₂)`
///
/// accepts iff every individual check would, except with negligible
/// probability over `r`.
///
/// # Returns
///
/// * `Ok(true)` if all proofs are valid.
/// * `Ok(false)` if any proof is invalid.
/// * `Err(KzgError)` on empty or mismatched input, or a point off the curve.
pub fn verify_kzg_proof_batch(
    setup: &PublicSetup,
    commitments: &[G1Affine],
    zs: &[Fr],
    ys: &[Fr],
    proofs: &[G1Affine],
    r: &Fr,
) -> Result<bool, KzgError> {
    check_batch_input(commitments, zs, ys, proofs)?;
    let g2_tau = setup.g2_tau();
    helpers::check_g2_point(&g2_tau)?;

    let n = commitments.len();
    debug!(k = n, "folding openings into one pairing check");

    let r_powers = helpers::compute_powers(r, n);
    let r_times_z: Vec<Fr> = r_powers.iter().zip(zs).map(|(ri, z)| *ri * z).collect();
    let y_lincomb: Fr = r_powers.iter().zip(ys).map(|(ri, y)| *ri * y).sum();

    let proof_lincomb = helpers::g1_lincomb(proofs, &r_powers)?;
    let proof_z_lincomb = helpers::g1_lincomb(proofs, &r_times_z)?;
    let commitment_lincomb = helpers::g1_lincomb(commitments, &r_powers)?;

    let rhs_g1 = (commitment_lincomb + proof_z_lincomb - G1Affine::generator() * y_lincomb)
        .into_affine();

    Ok(helpers::pairings_verify(
        proof_lincomb,
        g2_tau,
        rhs_g1,
        G2Affine::generator(),
    ))
}

/// [verify_kzg_proof_batch] with `r` derived from the tuples themselves.
pub fn verify_kzg_proof_batch_with_transcript(
    setup: &PublicSetup,
    commitments: &[G1Affine],
    zs: &[Fr],
    ys: &[Fr],
    proofs: &[G1Affine],
) -> Result<bool, KzgError> {
    check_batch_input(commitments, zs, ys, proofs)?;
    let r = compute_batch_challenge(commitments, zs, ys, proofs)?;
    verify_kzg_proof_batch(setup, commitments, zs, ys, proofs, &r)
}

/// Verifies `(commitment, opening)` pairs with one transcript-derived pairing
/// check.
pub fn verify_openings_batch(
    setup: &PublicSetup,
    openings: &[(G1Affine, Opening)],
) -> Result<bool, KzgError> {
    let commitments: Vec<G1Affine> = openings.iter().map(|(c, _)| *c).collect();
    let zs: Vec<Fr> = openings.iter().map(|(_, o)| o.point).collect();
    let ys: Vec<Fr> = openings.iter().map(|(_, o)| o.value).collect();
    let proofs: Vec<G1Affine> = openings.iter().map(|(_, o)| o.proof).collect();
    verify_kzg_proof_batch_with_transcript(setup, &commitments, &zs, &ys, &proofs)
}

// This function is used to verify a batch of KZG proofs where the commitments and proofs are in compressed form
// The commitments, proofs, zs and ys are expected to be in big endian format
pub fn verify_kzg_proof_batch_from_bytes(
    setup: &PublicSetup,
    commitments_compressed: &[[u8; SIZE_OF_G1_AFFINE_COMPRESSED]],
    zs: &[[u8; BYTES_PER_FIELD_ELEMENT]],
    ys: &[[u8; BYTES_PER_FIELD_ELEMENT]],
    proofs_compressed: &[[u8; SIZE_OF_G1_AFFINE_COMPRESSED]],
) -> Result<bool, KzgError> {
    let commitments = commitments_compressed
        .iter()
        .map(|commitment| {
            G1Affine::read_point_from_bytes_native_compressed_be(commitment).map_err(|_| {
                KzgError::SerializationError("Failed to deserialize commitment".to_string())
            })
        })
        .collect::<Result<Vec<G1Affine>, KzgError>>()?;

    let proofs = proofs_compressed
        .iter()
        .map(|proof| {
            G1Affine::read_point_from_bytes_native_compressed_be(proof).map_err(|_| {
                KzgError::SerializationError("Failed to deserialize proof".to_string())
            })
        })
        .collect::<Result<Vec<G1Affine>, KzgError>>()?;

    let zs = zs
        .iter()
        .map(|z| {
            Fr::deserialize_from_bytes_be(z)
                .map_err(|_| KzgError::SerializationError("Failed to deserialize z".to_string()))
        })
        .collect::<Result<Vec<Fr>, KzgError>>()?;

    let ys = ys
        .iter()
        .map(|y| {
            Fr::deserialize_from_bytes_be(y)
                .map_err(|_| KzgError::SerializationError("Failed to deserialize y".to_string()))
        })
        .collect::<Result<Vec<Fr>, KzgError>>()?;

    verify_kzg_proof_batch_with_transcript(setup, &commitments, &zs, &ys, &proofs)
}

/// Fiat-Shamir challenge for a batch: SHA-256 over the batch domain
/// separator, `k` as 8 big-endian bytes, then for every tuple the compressed
/// commitment, `z` and `y` as 32 big-endian bytes each, and the compressed
/// proof.
pub fn compute_batch_challenge(
    commitments: &[G1Affine],
    zs: &[Fr],
    ys: &[Fr],
    proofs: &[G1Affine],
) -> Result<Fr, KzgError> {
    check_batch_input(commitments, zs, ys, proofs)?;
    let n = commitments.len();

    let input_size = RANDOM_CHALLENGE_KZG_BATCH_DOMAIN.len()
        + 8
        + n * (2 * SIZE_OF_G1_AFFINE_COMPRESSED + 2 * BYTES_PER_FIELD_ELEMENT);
    let mut data_to_be_hashed: Vec<u8> = Vec::with_capacity(input_size);
    data_to_be_hashed.extend_from_slice(RANDOM_CHALLENGE_KZG_BATCH_DOMAIN);
    data_to_be_hashed.extend_from_slice(&usize_to_be_bytes(n));

    for i in 0..n {
        commitments[i]
            .serialize_compressed(&mut data_to_be_hashed)
            .map_err(|_| {
                KzgError::SerializationError("Failed to serialize commitment".to_string())
            })?;
        data_to_be_hashed.extend_from_slice(&helpers::fr_to_be_bytes(&zs[i]));
        data_to_be_hashed.extend_from_slice(&helpers::fr_to_be_bytes(&ys[i]));
        proofs[i]
            .serialize_compressed(&mut data_to_be_hashed)
            .map_err(|_| KzgError::SerializationError("Failed to serialize proof".to_string()))?;
    }

    if data_to_be_hashed.len() != input_size {
        return Err(KzgError::InvalidInputLength);
    }

    Ok(helpers::hash_to_field_element(&data_to_be_hashed))
}

fn check_batch_input(
    commitments: &[G1Affine],
    zs: &[Fr],
    ys: &[Fr],
    proofs: &[G1Affine],
) -> Result<(), KzgError> {
    let n = commitments.len();
    if n == 0 || zs.len() != n || ys.len() != n || proofs.len() != n {
        return Err(KzgError::InvalidInputLength);
    }
    commitments.iter().try_for_each(helpers::check_g1_point)?;
    proofs.iter().try_for_each(helpers::check_g1_point)
}
