use ark_bn254::{G1Affine, G2Affine};
use ark_ec::AffineRepr;

extern crate alloc;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::{errors::KzgError, traits::SetupVectors};

/// Published setup vectors, with no knowledge of the secret.
///
/// This is everything a verifier needs and everything a prover needs when it
/// did not generate the setup itself. `g1[i] = G1·τ^i` and `g2[i] = G2·τ^i`.
#[derive(Clone, Debug, PartialEq)]
pub struct PublicSetup {
    g1: Vec<G1Affine>,
    g2: Vec<G2Affine>,
}

impl PublicSetup {
    /// Wraps published vectors. At least one G1 point and two G2 points
    /// (`[1]₂` and `[τ]₂`) are required, and both vectors must start at the
    /// group generator.
    pub fn new(g1: Vec<G1Affine>, g2: Vec<G2Affine>) -> Result<Self, KzgError> {
        match g1.first() {
            Some(p) if *p == G1Affine::generator() => {},
            Some(_) => {
                return Err(KzgError::SetupError(
                    "first G1 setup point is not the generator".to_string(),
                ))
            },
            None => return Err(KzgError::SetupError("empty G1 setup vector".to_string())),
        }
        if g2.len() < 2 {
            return Err(KzgError::SetupError(
                "G2 setup vector needs at least [1] and [tau]".to_string(),
            ));
        }
        if g2[0] != G2Affine::generator() {
            return Err(KzgError::SetupError(
                "first G2 setup point is not the generator".to_string(),
            ));
        }
        Ok(Self { g1, g2 })
    }

    pub fn g1(&self) -> &[G1Affine] {
        &self.g1
    }

    pub fn g2(&self) -> &[G2Affine] {
        &self.g2
    }

    /// `[τ]₂`, the only G2 power a single-point verifier needs.
    pub fn g2_tau(&self) -> G2Affine {
        self.g2[1]
    }
}

impl SetupVectors for PublicSetup {
    fn g1_powers(&self, len: usize) -> Result<Vec<G1Affine>, KzgError> {
        self.g1
            .get(..len)
            .map(<[G1Affine]>::to_vec)
            .ok_or(KzgError::SrsCapacityExceeded {
                polynomial_len: len,
                srs_len: self.g1.len(),
            })
    }

    fn g2_powers(&self, len: usize) -> Result<Vec<G2Affine>, KzgError> {
        self.g2
            .get(..len)
            .map(<[G2Affine]>::to_vec)
            .ok_or(KzgError::SrsCapacityExceeded {
                polynomial_len: len,
                srs_len: self.g2.len(),
            })
    }
}
