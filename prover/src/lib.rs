//! Prover side of the bn254 polynomial commitment engine.
//!
//! [setup::TrustedSetup] owns the secret `τ` and lazily extends the
//! powers-of-τ vectors. [kzg::KZG] commits to polynomials and opens them
//! against any [bn254_poly_commit_primitives::traits::SetupVectors], and
//! also hosts the provers of the subgroup arguments. [srs] writes and reads
//! published setup vectors.
//!
//! ```
//! use ark_bn254::Fr;
//! use bn254_poly_commit_primitives::polynomial::PolynomialCoeffForm;
//! use bn254_poly_commit_prover::{kzg::KZG, setup::TrustedSetup};
//!
//! let kzg = KZG::new(TrustedSetup::new(&mut <rand::rngs::StdRng as rand::SeedableRng>::from_seed([1, 0, 0, 0, 23, 0, 0, 0, 200, 1, 0, 0, 210, 30, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])));
//! let poly = PolynomialCoeffForm::new(vec![Fr::from(1u64), Fr::from(2u64), Fr::from(3u64)]);
//! let commitment = kzg.commit_coeff_form(&poly).unwrap();
//! let opening = kzg.open(&poly, &Fr::from(10u64)).unwrap();
//! assert_eq!(opening.value, Fr::from(321u64));
//! # let _ = commitment;
//! ```

pub mod argument;
pub mod kzg;
pub mod setup;
pub mod srs;
