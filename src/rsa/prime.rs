// Random Prime Generation
// Samples odd candidates of an exact bit length until one passes Miller-Rabin

use num_bigint::BigUint;
use num_traits::One;
use rand::{CryptoRng, RngCore};

use super::attempts::Attempts;
use super::bigint::RsaBigInt;
use super::error::{Result, RsaError};
use super::primality::{is_probable_prime, DEFAULT_ROUNDS};
use crate::util::random::{random_bits, SecureRandom};

/// Smallest accepted prime bit length
pub const MIN_PRIME_BITS: u64 = 16;

/// Generates random primes of a fixed bit length.
///
/// The search is unbounded unless `max_attempts` is set: about
/// `bit_length * ln(2) / 2` odd candidates are drawn on average.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeGenerator {
    bit_length: u64,
    rounds: u32,
    max_attempts: Option<u64>,
}

impl PrimeGenerator {
    /// Fails with [`RsaError::InvalidBitLength`] below [`MIN_PRIME_BITS`].
    pub fn new(bit_length: u64) -> Result<Self> {
        if bit_length < MIN_PRIME_BITS {
            return Err(RsaError::InvalidBitLength {
                requested: bit_length,
                minimum: MIN_PRIME_BITS,
            });
        }

        Ok(Self {
            bit_length,
            rounds: DEFAULT_ROUNDS,
            max_attempts: None,
        })
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_max_attempts(mut self, attempts: Option<u64>) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn bit_length(&self) -> u64 {
        self.bit_length
    }

    /// Draw candidates until one is probably prime.
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<RsaBigInt> {
        let mut attempts = Attempts::new("prime search", self.max_attempts);

        loop {
            attempts.next()?;
            let candidate = self.candidate(rng);

            if is_probable_prime(&candidate, self.rounds, rng) {
                log::debug!(
                    "found {}-bit prime after {} candidates",
                    self.bit_length,
                    attempts.used()
                );
                return Ok(candidate);
            }
        }
    }

    /// Random odd integer with exactly `bit_length` significant bits.
    fn candidate<R: RngCore + ?Sized>(&self, rng: &mut R) -> RsaBigInt {
        let mut candidate = random_bits(self.bit_length, rng);

        // Ensure MSB is set (exact bit length)
        candidate |= BigUint::one() << (self.bit_length - 1);

        // Ensure LSB is set (odd)
        candidate |= BigUint::one();

        candidate
    }
}

/// Generate a random prime of the given bit length with default settings.
///
/// Acquires a [`SecureRandom`] for the duration of the search.
pub fn generate_prime(bit_length: u64) -> Result<RsaBigInt> {
    let generator = PrimeGenerator::new(bit_length)?;
    let mut rng = SecureRandom::acquire()?;
    generator.generate(&mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rejects_short_bit_lengths() {
        for bits in [0u64, 1, 8, 15] {
            assert_eq!(
                generate_prime(bits),
                Err(RsaError::InvalidBitLength {
                    requested: bits,
                    minimum: 16
                })
            );
        }
    }

    #[test]
    fn test_exact_bit_length() {
        for bits in [16u64, 17, 31, 64, 100, 128] {
            let p = generate_prime(bits).unwrap();
            assert_eq!(p.bits(), bits);
            assert!(p.bit(0), "{p} is even");
        }
    }

    #[test]
    fn test_generated_prime_passes_tester() {
        let mut rng = StdRng::seed_from_u64(42);
        let generator = PrimeGenerator::new(96).unwrap().with_rounds(20);
        let p = generator.generate(&mut rng).unwrap();
        assert!(is_probable_prime(&p, 40, &mut rng));
    }

    #[test]
    fn test_candidates_are_odd_with_top_bit() {
        let mut rng = StdRng::seed_from_u64(5);
        let generator = PrimeGenerator::new(24).unwrap();
        for _ in 0..500 {
            let c = generator.candidate(&mut rng);
            assert_eq!(c.bits(), 24);
            assert!(c.bit(0));
        }
    }

    #[test]
    fn test_attempt_cap() {
        let mut rng = StdRng::seed_from_u64(9);
        let generator = PrimeGenerator::new(512).unwrap().with_max_attempts(Some(0));
        assert_eq!(
            generator.generate(&mut rng),
            Err(RsaError::ExhaustedAttempts {
                operation: "prime search",
                attempts: 0
            })
        );
    }
}
