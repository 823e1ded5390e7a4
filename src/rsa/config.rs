// RSA Configuration
// Knobs surfaced to key generation

use super::bigint::{from_u64, RsaBigInt};
use super::primality::DEFAULT_ROUNDS;

/// Default bit length of each prime (yields a ~512-bit modulus)
pub const DEFAULT_PRIME_BITS: u64 = 256;

/// Public exponent tried before falling back to a random coprime search
pub const DEFAULT_PUBLIC_EXPONENT: u64 = 65537;

/// Configuration for key pair generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaConfig {
    pub prime_bits: u64,
    pub rounds: u32,
    pub public_exponent: RsaBigInt,
    /// Cap on candidates per search loop; `None` searches until success.
    pub max_attempts: Option<u64>,
}

impl Default for RsaConfig {
    fn default() -> Self {
        Self {
            prime_bits: DEFAULT_PRIME_BITS,
            rounds: DEFAULT_ROUNDS,
            public_exponent: from_u64(DEFAULT_PUBLIC_EXPONENT),
            max_attempts: None,
        }
    }
}

impl RsaConfig {
    pub fn with_prime_bits(mut self, bits: u64) -> Self {
        self.prime_bits = bits;
        self
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_public_exponent(mut self, exponent: RsaBigInt) -> Self {
        self.public_exponent = exponent;
        self
    }

    pub fn with_max_attempts(mut self, attempts: Option<u64>) -> Self {
        self.max_attempts = attempts;
        self
    }
}
