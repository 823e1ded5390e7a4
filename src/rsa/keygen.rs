// RSA Key Generation
// Implements RSA key pair generation (public and private keys)

use std::fmt;

use num_traits::One;
use rand::{CryptoRng, RngCore};

use super::attempts::Attempts;
use super::bigint::{from_u64, gcd, mod_inverse, RsaBigInt};
use super::config::RsaConfig;
use super::decrypt::decrypt;
use super::encrypt::encrypt;
use super::error::{Result, RsaError};
use super::prime::PrimeGenerator;
use crate::util::random::{random_in_range, SecureRandom};

/// RSA key: a modulus and an exponent.
///
/// Whether it is the public or the private half depends on where it sits
/// in a [`KeyPair`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    modulus: RsaBigInt,
    exponent: RsaBigInt,
}

impl Key {
    /// Fails with [`RsaError::InvalidKey`] unless `modulus > 1`.
    pub fn new(modulus: RsaBigInt, exponent: RsaBigInt) -> Result<Self> {
        if modulus <= RsaBigInt::one() {
            return Err(RsaError::InvalidKey { modulus });
        }
        Ok(Self { modulus, exponent })
    }

    pub fn modulus(&self) -> &RsaBigInt {
        &self.modulus
    }

    pub fn exponent(&self) -> &RsaBigInt {
        &self.exponent
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.modulus.bits()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.modulus, self.exponent)
    }
}

/// RSA Key Pair (both public and private keys)
///
/// Both keys share the modulus `n = p*q`, and
/// `public.exponent * private.exponent ≡ 1 (mod (p-1)(q-1))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    public: Key,
    private: Key,
}

impl KeyPair {
    pub fn public_key(&self) -> &Key {
        &self.public
    }

    pub fn private_key(&self) -> &Key {
        &self.private
    }

    /// Shared modulus `n`
    pub fn modulus(&self) -> &RsaBigInt {
        self.public.modulus()
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.public.bit_length()
    }

    /// Encrypt plaintext units with the public key
    pub fn encrypt(&self, units: &[RsaBigInt]) -> Vec<RsaBigInt> {
        encrypt(units, &self.public)
    }

    /// Decrypt ciphertext units with the private key
    pub fn decrypt(&self, units: &[RsaBigInt]) -> Vec<RsaBigInt> {
        decrypt(units, &self.private)
    }
}

/// Generates key pairs from an [`RsaConfig`].
#[derive(Clone, Debug, Default)]
pub struct KeyPairGenerator {
    config: RsaConfig,
}

impl KeyPairGenerator {
    pub fn new(config: RsaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RsaConfig {
        &self.config
    }

    /// Generate a key pair, holding one [`SecureRandom`] for the whole operation.
    pub fn generate(&self) -> Result<KeyPair> {
        let primes = self.prime_generator()?;
        let mut rng = SecureRandom::acquire()?;
        let p = primes.generate(&mut rng)?;
        self.finish(&primes, p, None, &mut rng)
    }

    /// Generate a key pair drawing all randomness from `rng`.
    pub fn generate_with<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<KeyPair> {
        let primes = self.prime_generator()?;
        let p = primes.generate(rng)?;
        self.finish(&primes, p, None, rng)
    }

    /// Generate p and q concurrently, each with its own [`SecureRandom`].
    #[cfg(feature = "parallel")]
    pub fn generate_parallel(&self) -> Result<KeyPair> {
        let primes = self.prime_generator()?;
        let draw = || -> Result<RsaBigInt> {
            let mut rng = SecureRandom::acquire()?;
            primes.generate(&mut rng)
        };

        let (p, q) = rayon::join(draw, draw);
        let (p, q) = (p?, q?);

        let mut rng = SecureRandom::acquire()?;
        self.finish(&primes, p, Some(q), &mut rng)
    }

    fn prime_generator(&self) -> Result<PrimeGenerator> {
        Ok(PrimeGenerator::new(self.config.prime_bits)?
            .with_rounds(self.config.rounds)
            .with_max_attempts(self.config.max_attempts))
    }

    /// Draw q (or keep the given one) until it differs from p, then derive the keys.
    fn finish<R: RngCore + CryptoRng + ?Sized>(
        &self,
        primes: &PrimeGenerator,
        p: RsaBigInt,
        q: Option<RsaBigInt>,
        rng: &mut R,
    ) -> Result<KeyPair> {
        let mut distinct = Attempts::new("distinct prime search", self.config.max_attempts);
        let mut q = match q {
            Some(q) => q,
            None => primes.generate(rng)?,
        };
        while q == p {
            distinct.next()?;
            log::trace!("q collided with p, resampling");
            q = primes.generate(rng)?;
        }

        derive_keypair(
            &p,
            &q,
            &self.config.public_exponent,
            self.config.max_attempts,
            rng,
        )
    }
}

/// Build the key pair for the distinct primes `p` and `q`.
///
/// Tries `public_exponent` first. If it shares a factor with the totient,
/// a random exponent in `[3, phi-1]` coprime to the totient is drawn instead.
pub(crate) fn derive_keypair<R: RngCore + ?Sized>(
    p: &RsaBigInt,
    q: &RsaBigInt,
    public_exponent: &RsaBigInt,
    max_attempts: Option<u64>,
    rng: &mut R,
) -> Result<KeyPair> {
    debug_assert_ne!(p, q, "key pair primes must be distinct");

    // Step 1: n = p * q
    let n = p * q;

    // Step 2: φ(n) = (p-1)(q-1)
    let phi_n = (p - 1u8) * (q - 1u8);

    // Step 3: e coprime with φ(n)
    let e = if gcd(public_exponent, &phi_n).is_one() {
        public_exponent.clone()
    } else {
        log::debug!("exponent {public_exponent} not coprime with totient");
        let mut attempts = Attempts::new("coprime exponent search", max_attempts);
        let low = from_u64(3);
        let high = &phi_n - 1u8;
        loop {
            attempts.next()?;
            let candidate = random_in_range(&low, &high, rng)?;
            if gcd(&candidate, &phi_n).is_one() {
                log::debug!(
                    "coprime exponent found after {} candidates",
                    attempts.used()
                );
                break candidate;
            }
        }
    };

    // Step 4: d = e^(-1) mod φ(n)
    let d = mod_inverse(&e, &phi_n)?;

    let public = Key::new(n.clone(), e)?;
    let private = Key::new(n, d)?;

    log::debug!("derived {}-bit key pair", public.bit_length());

    Ok(KeyPair { public, private })
}

/// Generate RSA key pair with primes of the given bit length and default settings
pub fn generate_keypair(bit_length: u64) -> Result<KeyPair> {
    KeyPairGenerator::new(RsaConfig::default().with_prime_bits(bit_length)).generate()
}
