//! Building blocks shared by the bn254 polynomial commitment prover and
//! verifier: scalar field helpers, coefficient-form polynomial arithmetic,
//! radix-2 transforms over roots-of-unity domains, the published setup
//! vectors, proof objects and the polynomial algebra of the subgroup
//! arguments.
//!
//! Nothing in this crate knows the setup secret `τ`.

pub mod argument;
pub mod arith;
pub mod consts;
pub mod domain;
pub mod errors;
pub mod fft;
pub mod field;
pub mod helpers;
pub mod polynomial;
pub mod proof;
pub mod setup;
pub mod traits;
