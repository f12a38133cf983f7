use ark_bn254::{Bn254, Fr, G1Affine, G1Projective, G2Affine};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{BigInteger, FftField, PrimeField};
use ark_poly::{EvaluationDomain, GeneralEvaluationDomain};
use ark_serialize::CanonicalSerialize;
use ark_std::{format, vec::Vec, One, Zero};

extern crate alloc;
use alloc::string::ToString;
use sha2::{Digest, Sha256};

use crate::{
    consts::{
        BYTES_PER_FIELD_ELEMENT, FIAT_SHAMIR_PROTOCOL_DOMAIN, MAX_FFT_LOG2,
        SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G2_AFFINE_COMPRESSED,
    },
    errors::KzgError,
    polynomial::PolynomialEvalForm,
};

/// Computes powers of a field element up to a given exponent.
///
/// For a given field element x, computes [1, x, x², x³, ..., x^(count-1)]
///
/// # Arguments
/// * `base` - The field element to compute powers of
/// * `count` - The number of powers to compute (0 to count-1)
pub fn compute_powers(base: &Fr, count: usize) -> Vec<Fr> {
    let mut powers = Vec::with_capacity(count);
    let mut current = Fr::one();
    for _ in 0..count {
        powers.push(current);
        current *= base;
    }
    powers
}

/// Computes a linear combination of G1 points weighted by scalar coefficients.
///
/// Given points P₁, P₂, ..., Pₙ and scalars s₁, s₂, ..., sₙ
/// Computes: s₁P₁ + s₂P₂ + ... + sₙPₙ
/// Uses Multi-Scalar Multiplication (MSM) for efficient computation.
pub fn g1_lincomb(points: &[G1Affine], scalars: &[Fr]) -> Result<G1Affine, KzgError> {
    let lincomb = G1Projective::msm(points, scalars).map_err(|e| {
        KzgError::MsmError(format!(
            "{} points for {} scalars (msm returned {})",
            points.len(),
            scalars.len(),
            e
        ))
    })?;
    Ok(lincomb.into_affine())
}

/// Inverse FFT over G1: turns `[G1·τ^i]` into the Lagrange vector
/// `[L_i(τ)·G1]` for the domain of size `points.len()`.
pub fn g1_ifft(points: &[G1Affine]) -> Result<Vec<G1Affine>, KzgError> {
    let length = points.len();
    if !length.is_power_of_two() {
        return Err(KzgError::FFTError(
            "length provided is not a power of 2".to_string(),
        ));
    }

    let points_projective: Vec<G1Projective> =
        points.iter().map(|&p| G1Projective::from(p)).collect();
    let ifft_result = GeneralEvaluationDomain::<Fr>::new(length)
        .ok_or(KzgError::FFTError(
            "Could not perform IFFT due to domain construction error".to_string(),
        ))?
        .ifft(&points_projective);

    Ok(G1Projective::normalize_batch(&ifft_result))
}

/// Checks `e(a1, a2) == e(b1, b2)` with a single multi-pairing.
pub fn pairings_verify(a1: G1Affine, a2: G2Affine, b1: G1Affine, b2: G2Affine) -> bool {
    let neg_b1 = -b1;
    let p = [a1, neg_b1];
    let q = [a2, b2];
    let result = Bn254::multi_pairing(p, q);
    result.is_zero()
}

/// Primitive `2^power`-th root of unity of the scalar field.
pub fn get_primitive_root_of_unity(power: usize) -> Result<Fr, KzgError> {
    if power > MAX_FFT_LOG2 as usize {
        return Err(KzgError::GenericError(format!(
            "power must be <= {}",
            MAX_FFT_LOG2
        )));
    }
    Fr::get_root_of_unity(1u64 << power).ok_or_else(|| {
        KzgError::GenericError(format!("no root of unity of order 2^{}", power))
    })
}

pub fn hash_to_field_element(msg: &[u8]) -> Fr {
    let msg_digest = Sha256::digest(msg);
    Fr::from_be_bytes_mod_order(msg_digest.as_slice())
}

/// Accepts the identity and any on-curve point of the prime-order subgroup.
///
/// The identity is a legitimate commitment (the zero polynomial) and a
/// legitimate proof (any constant polynomial), so it is not rejected here.
pub fn check_g1_point(point: &G1Affine) -> Result<(), KzgError> {
    if point.is_zero() {
        return Ok(());
    }
    if !point.is_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G1 point not on curve".to_string(),
        ));
    }
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G1 point not in correct subgroup".to_string(),
        ));
    }
    Ok(())
}

pub fn check_g2_point(point: &G2Affine) -> Result<(), KzgError> {
    if point.is_zero() {
        return Ok(());
    }
    if !point.is_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G2 point not on curve".to_string(),
        ));
    }
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G2 point not in correct subgroup".to_string(),
        ));
    }
    Ok(())
}

pub fn fr_to_be_bytes(fr: &Fr) -> Vec<u8> {
    fr.into_bigint().to_bytes_be()
}

/// Compressed G1 encoding, big-endian.
pub fn g1_to_be_bytes(point: &G1Affine) -> Result<Vec<u8>, KzgError> {
    let mut bytes = Vec::with_capacity(SIZE_OF_G1_AFFINE_COMPRESSED);
    point
        .serialize_compressed(&mut bytes)
        .map_err(|_| KzgError::SerializationError("Failed to serialize G1 point".to_string()))?;
    bytes.reverse();
    Ok(bytes)
}

/// Compressed G2 encoding, big-endian.
pub fn g2_to_be_bytes(point: &G2Affine) -> Result<Vec<u8>, KzgError> {
    let mut bytes = Vec::with_capacity(SIZE_OF_G2_AFFINE_COMPRESSED);
    point
        .serialize_compressed(&mut bytes)
        .map_err(|_| KzgError::SerializationError("Failed to serialize G2 point".to_string()))?;
    bytes.reverse();
    Ok(bytes)
}

/// Derives the Fiat-Shamir evaluation point for an evaluation vector and its
/// commitment.
///
/// The hash input is the protocol domain separator, the number of
/// evaluations as 8 big-endian bytes, every evaluation as 32 big-endian
/// bytes, and the compressed commitment.
pub fn compute_challenge(
    polynomial: &PolynomialEvalForm,
    commitment: &G1Affine,
) -> Result<Fr, KzgError> {
    check_g1_point(commitment)?;

    let challenge_input_size = FIAT_SHAMIR_PROTOCOL_DOMAIN.len()
        + 8
        + (polynomial.len() * BYTES_PER_FIELD_ELEMENT)
        + SIZE_OF_G1_AFFINE_COMPRESSED;

    let mut digest_bytes = Vec::with_capacity(challenge_input_size);
    digest_bytes.extend_from_slice(FIAT_SHAMIR_PROTOCOL_DOMAIN);
    digest_bytes.extend_from_slice(&usize_to_be_bytes(polynomial.len()));
    for eval in polynomial.evaluations() {
        digest_bytes.extend_from_slice(&fr_to_be_bytes(eval));
    }

    let mut commitment_bytes = Vec::with_capacity(SIZE_OF_G1_AFFINE_COMPRESSED);
    commitment
        .serialize_compressed(&mut commitment_bytes)
        .map_err(|_| KzgError::SerializationError("Failed to serialize commitment".to_string()))?;
    digest_bytes.extend_from_slice(&commitment_bytes);

    // Catches any drift between the layout above and the size computation.
    if digest_bytes.len() != challenge_input_size {
        return Err(KzgError::InvalidInputLength);
    }

    Ok(hash_to_field_element(&digest_bytes))
}

/// Encodes a usize as 8 big-endian bytes regardless of the target pointer
/// width.
pub fn usize_to_be_bytes(number: usize) -> [u8; 8] {
    (number as u64).to_be_bytes()
}
