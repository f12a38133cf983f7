use ark_bn254::{Fr, G1Affine, G2Affine};
use ark_bn254::{g1, g2};
use ark_ec::short_weierstrass::Affine;
use ark_ec::AffineRepr;
use ark_ff::Field;
use ark_serialize::CanonicalDeserialize;

extern crate alloc;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    consts::{BYTES_PER_FIELD_ELEMENT, SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G2_AFFINE_COMPRESSED},
    domain::Domain,
    errors::KzgError,
    helpers,
};

// We define our own error instead of using io::ErrorKind::InvalidData
// because we want this to compile in no-std environments.
#[derive(Debug, thiserror::Error)]
pub enum PointReadError {
    #[error("Invalid point data: {0}")]
    InvalidData(String),

    #[error("Deserialization failed")]
    DeserializationError,
}

pub type Result<T> = core::result::Result<T, PointReadError>;

/// Decoding of curve points stored as arkworks-compressed bytes in big-endian
/// order (the little-endian compressed encoding, reversed).
pub trait ReadPointFromBytes: AffineRepr {
    fn read_point_from_bytes_native_compressed_be(bytes: &[u8]) -> Result<Self>;
}

// Spelled via the concrete curve configs: the `G1Affine`/`G2Affine` aliases go
// through `<Config as BnConfig>::G{1,2}Config` projections, which current rustc
// coherence does not normalize, reporting the two impls as overlapping.
impl ReadPointFromBytes for Affine<g1::Config> {
    fn read_point_from_bytes_native_compressed_be(bytes_be: &[u8]) -> Result<G1Affine> {
        read_compressed_be::<G1Affine, SIZE_OF_G1_AFFINE_COMPRESSED>(bytes_be)
    }
}

impl ReadPointFromBytes for Affine<g2::Config> {
    fn read_point_from_bytes_native_compressed_be(bytes_be: &[u8]) -> Result<G2Affine> {
        read_compressed_be::<G2Affine, SIZE_OF_G2_AFFINE_COMPRESSED>(bytes_be)
    }
}

fn read_compressed_be<P: AffineRepr, const N: usize>(bytes_be: &[u8]) -> Result<P> {
    if bytes_be.len() != N {
        return Err(PointReadError::InvalidData(format!(
            "expected {} bytes, got {}",
            N,
            bytes_be.len()
        )));
    }
    let mut bytes_le = [0u8; N];
    bytes_le.copy_from_slice(bytes_be);
    bytes_le.reverse();
    P::deserialize_compressed(&bytes_le[..]).map_err(|_| PointReadError::DeserializationError)
}

// A new trait for Fr for reading from bytes in big endian format
pub trait ReadFrFromBytes: Field {
    fn deserialize_from_bytes_be(bytes: &[u8]) -> Result<Self>;
}

impl ReadFrFromBytes for Fr {
    fn deserialize_from_bytes_be(bytes: &[u8]) -> Result<Fr> {
        if bytes.len() != BYTES_PER_FIELD_ELEMENT {
            return Err(PointReadError::InvalidData(format!(
                "expected {} bytes, got {}",
                BYTES_PER_FIELD_ELEMENT,
                bytes.len()
            )));
        }
        let mut bytes_le = [0u8; BYTES_PER_FIELD_ELEMENT];
        bytes_le.copy_from_slice(bytes);
        bytes_le.reverse();
        Fr::deserialize_uncompressed(&bytes_le[..])
            .map_err(|_| PointReadError::DeserializationError)
    }
}

/// Read access to powers-of-τ setup vectors.
///
/// Implemented by the prover's secret-holding setup and by [crate::setup::PublicSetup],
/// so commitment code is generic over whether `τ` is known.
pub trait SetupVectors {
    /// `[G1·τ^0, …, G1·τ^{len-1}]`.
    fn g1_powers(&self, len: usize) -> core::result::Result<Vec<G1Affine>, KzgError>;

    /// `[G2·τ^0, …, G2·τ^{len-1}]`.
    fn g2_powers(&self, len: usize) -> core::result::Result<Vec<G2Affine>, KzgError>;

    /// `[L_i(τ)·G1]` for the Lagrange basis of `domain`.
    ///
    /// The default goes through an inverse FFT of the monomial vector.
    fn lagrange_g1(&self, domain: &Domain) -> core::result::Result<Vec<G1Affine>, KzgError> {
        let monomial = self.g1_powers(domain.size())?;
        helpers::g1_ifft(&monomial)
    }
}
