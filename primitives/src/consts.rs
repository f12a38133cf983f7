pub const BYTES_PER_FIELD_ELEMENT: usize = 32;
pub const SIZE_OF_G1_AFFINE_COMPRESSED: usize = 32; // in bytes
pub const SIZE_OF_G2_AFFINE_COMPRESSED: usize = 64; // in bytes

/// 2-adicity of the bn254 scalar field. Radix-2 evaluation domains can hold
/// at most `2^MAX_FFT_LOG2` points.
pub const MAX_FFT_LOG2: u32 = 28;
pub const MAX_DOMAIN_SIZE: usize = 1 << MAX_FFT_LOG2;

pub const FIAT_SHAMIR_PROTOCOL_DOMAIN: &[u8] = b"POLYCOMMIT_FSEVALVERIFY_";
pub const RANDOM_CHALLENGE_KZG_BATCH_DOMAIN: &[u8] = b"POLYCOMMIT_RCKZGBATCH_V1";
