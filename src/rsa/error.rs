// RSA Error Kinds
// Failures that abort an RSA operation, each carrying the offending inputs

use num_bigint::BigUint;

/// Errors that can occur during key generation, sampling or encryption.
///
/// Retry loops (prime search, distinct-q resampling, coprime exponent search)
/// are normal control flow and never produce an error unless an attempt cap
/// was configured.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum RsaError {
    #[error("invalid bit length: primes must be at least {minimum} bits, got {requested}")]
    InvalidBitLength { requested: u64, minimum: u64 },

    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: BigUint, max: BigUint },

    #[error("{value} has no inverse modulo {modulus}")]
    NotInvertible { value: BigUint, modulus: BigUint },

    #[error("{operation} gave up after {attempts} attempts")]
    ExhaustedAttempts {
        operation: &'static str,
        attempts: u64,
    },

    #[error("invalid key: modulus {modulus} must be greater than 1")]
    InvalidKey { modulus: BigUint },

    #[error("unit {value} is outside the byte range [0, 255]")]
    UnitOutOfRange { value: BigUint },

    #[error("decrypted bytes are not valid UTF-8")]
    InvalidUtf8,

    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("secure random source unavailable: {0}")]
    RandomSource(String),
}

/// Result type for RSA operations
pub type Result<T> = std::result::Result<T, RsaError>;
