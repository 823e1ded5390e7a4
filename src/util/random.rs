// Secure Random Source and Uniform Sampling
// Scoped CSPRNG handle plus rejection sampling over big integer ranges

use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, RngCore, SeedableRng};

use crate::rsa::error::{Result, RsaError};

/// Cryptographically secure random source, acquired once per top-level
/// operation and released when dropped.
///
/// Wraps a ChaCha-based [`StdRng`] seeded from the operating system.
pub struct SecureRandom {
    rng: StdRng,
    draws: u64,
}

impl SecureRandom {
    /// Seed a fresh generator from the operating system.
    pub fn acquire() -> Result<Self> {
        let rng = StdRng::from_rng(OsRng).map_err(|e| RsaError::RandomSource(e.to_string()))?;
        log::trace!("secure random source acquired");
        Ok(Self { rng, draws: 0 })
    }

    /// Number of draw requests served so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl RngCore for SecureRandom {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws += 1;
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.draws += 1;
        self.rng.try_fill_bytes(dest)
    }
}

impl CryptoRng for SecureRandom {}

impl Drop for SecureRandom {
    fn drop(&mut self) {
        log::trace!("secure random source released after {} draws", self.draws);
    }
}

/// Draw a uniform integer in `[0, 2^bits)`.
pub fn random_bits<R: RngCore + ?Sized>(bits: u64, rng: &mut R) -> BigUint {
    rng.gen_biguint(bits)
}

/// Draw a uniform integer in `[0, bound)`.
///
/// `bound` must be non-zero. Draws of `bits(bound)` bits are rejected until
/// one falls below `bound`, so each draw is accepted with probability above 1/2.
pub(crate) fn random_below<R: RngCore + ?Sized>(bound: &BigUint, rng: &mut R) -> BigUint {
    debug_assert!(!bound.is_zero(), "sampling bound must be non-zero");
    rng.gen_biguint_below(bound)
}

/// Draw a uniform integer in `[min, max]`, inclusive on both ends.
pub fn random_in_range<R: RngCore + ?Sized>(
    min: &BigUint,
    max: &BigUint,
    rng: &mut R,
) -> Result<BigUint> {
    if min > max {
        return Err(RsaError::InvalidRange {
            min: min.clone(),
            max: max.clone(),
        });
    }

    let range = max - min + 1u8;
    Ok(min + random_below(&range, rng))
}
