//! Verifier side of the bn254 polynomial commitment engine.
//!
//! Everything here works from a [bn254_poly_commit_primitives::setup::PublicSetup]
//! and never sees the setup secret. Verification functions return `Ok(false)`
//! for a proof that is well-formed but wrong, and an error for malformed input.

pub mod argument;
pub mod batch;
pub mod verify;
