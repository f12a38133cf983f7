use thiserror::Error;

extern crate alloc;
use alloc::string::String;

/// Errors raised by field and polynomial arithmetic.
///
/// Every variant aborts the enclosing computation: there is no meaningful
/// partial result once a division by zero or an inexact division shows up.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PolynomialError {
    /// Inverse of zero, or a ratio whose denominator vanishes.
    #[error("division by zero")]
    DivisionByZero,

    /// Exact division left a remainder. Either a caller bug or a forged witness.
    #[error("non-zero remainder in exact division")]
    NonZeroRemainder,

    /// Lengths that must agree do not, or a length is not a power of two.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Error related to Fast Fourier Transform (FFT) operations with a descriptive message.
    #[error("FFT error: {0}")]
    FFTError(String),

    /// The polynomial is held in the other representation.
    #[error("incorrect form error: {0}")]
    IncorrectFormError(String),

    /// A generic error with a descriptive message.
    #[error("generic error: {0}")]
    GenericError(String),
}

/// Errors related to KZG operations.
///
/// The `KzgError` enum encapsulates all possible errors that can occur during
/// commitment, opening and verification, including those bubbling up from
/// [PolynomialError].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum KzgError {
    /// Wraps errors originating from Polynomial operations.
    #[error("polynomial error: {0}")]
    PolynomialError(#[from] PolynomialError),

    #[error("MSM error: {0}")]
    MsmError(String),

    /// Error related to serialization with a descriptive message.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Error when polynomial length exceeds the available setup vector
    #[error("polynomial degree {polynomial_len} exceeds SRS capacity {srs_len}")]
    SrsCapacityExceeded {
        polynomial_len: usize,
        srs_len: usize,
    },

    #[error("not on curve error: {0}")]
    NotOnCurveError(String),

    /// Error indicating an invalid commit operation with a descriptive message.
    #[error("commit error: {0}")]
    CommitError(String),

    /// Error related to Fast Fourier Transform (FFT) operations over group elements.
    #[error("FFT error: {0}")]
    FFTError(String),

    /// The setup vectors are inconsistent or their cache is unusable.
    #[error("setup error: {0}")]
    SetupError(String),

    /// A generic error with a descriptive message.
    #[error("generic error: {0}")]
    GenericError(String),

    #[error("invalid input length")]
    InvalidInputLength,
}
