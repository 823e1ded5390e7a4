// Miller-Rabin Primality Test
// Probabilistic primality check with a small-prime fast path

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use rand::RngCore;

use super::bigint::{mod_pow, RsaBigInt};
use crate::util::random::random_below;

/// Canonical number of Miller-Rabin rounds
pub const DEFAULT_ROUNDS: u32 = 12;

/// Odd primes used to reject candidates before any witness is drawn
const SMALL_PRIMES: [u32; 16] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59];

/// Miller-Rabin primality test
/// Returns true if `candidate` is probably prime
///
/// Each round draws a uniform witness in `[2, candidate - 2]`. A composite
/// survives all rounds with probability at most `4^-rounds`. A round count
/// of zero is treated as one round.
pub fn is_probable_prime<R: RngCore + ?Sized>(
    candidate: &RsaBigInt,
    rounds: u32,
    rng: &mut R,
) -> bool {
    if let Some(small) = candidate.to_u32() {
        if small < 2 {
            return false;
        }
        if small == 2 || small == 3 {
            return true;
        }
    }
    if candidate.is_even() {
        return false;
    }
    for &prime in &SMALL_PRIMES {
        if (candidate % prime).is_zero() {
            return candidate == &BigUint::from(prime);
        }
    }

    // Write candidate-1 as d * 2^s with d odd
    let n_minus_one = candidate - 1u8;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    let two = RsaBigInt::from(2u8);
    // witnesses live in [2, candidate-2], which holds candidate-3 values
    let witness_span = candidate - 3u8;

    for _ in 0..rounds.max(1) {
        let a = &two + random_below(&witness_span, rng);

        let mut x = mod_pow(&a, &d, candidate);
        if x.is_one() || x == n_minus_one {
            continue;
        }

        let mut passed = false;
        for _ in 1..s {
            x = mod_pow(&x, &two, candidate);
            if x == n_minus_one {
                passed = true;
                break;
            }
        }

        if !passed {
            // a is a witness: conclusively composite
            return false;
        }
    }

    // Probably prime
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x9E37_79B9)
    }

    #[test]
    fn test_is_probable_prime() {
        let mut rng = rng();
        // 2 is prime
        assert!(is_probable_prime(&from_u64(2), 5, &mut rng));
        // 3 is prime
        assert!(is_probable_prime(&from_u64(3), 5, &mut rng));
        // 7 is prime
        assert!(is_probable_prime(&from_u64(7), 5, &mut rng));
        // 4 is not prime
        assert!(!is_probable_prime(&from_u64(4), 5, &mut rng));
        // 9 is not prime
        assert!(!is_probable_prime(&from_u64(9), 5, &mut rng));
    }

    #[test]
    fn test_rejects_below_two() {
        let mut rng = rng();
        assert!(!is_probable_prime(&from_u64(0), 12, &mut rng));
        assert!(!is_probable_prime(&from_u64(1), 12, &mut rng));
    }

    #[test]
    fn test_small_prime_table() {
        let mut rng = rng();
        for &p in &SMALL_PRIMES {
            let p = from_u64(u64::from(p));
            assert!(is_probable_prime(&p, 1, &mut rng), "{p}");
            assert!(!is_probable_prime(&(&p * 3u8), 1, &mut rng));
        }
    }

    #[test]
    fn test_known_primes() {
        let mut rng = rng();
        let primes = [61u64, 7919, 65537, 2_147_483_647, 18_446_744_073_709_551_557];
        for p in primes.map(from_u64) {
            assert!(is_probable_prime(&p, 1, &mut rng), "{p}");
            assert!(is_probable_prime(&p, DEFAULT_ROUNDS, &mut rng), "{p}");
        }
    }

    #[test]
    fn test_zero_rounds_still_tests() {
        let mut rng = rng();
        // 61 * 67: no small factor, so this reaches the witness loop
        let composite = from_u64(61 * 67);
        let rejected = (0..100)
            .filter(|_| !is_probable_prime(&composite, 0, &mut rng))
            .count();
        assert!(rejected > 50);
    }

    #[test]
    fn test_carmichael_numbers() {
        let mut rng = rng();
        let carmichael = [341u64, 561, 1105, 1729, 2465, 2821, 6601, 8911];
        for c in carmichael.map(from_u64) {
            for _ in 0..100 {
                assert!(!is_probable_prime(&c, DEFAULT_ROUNDS, &mut rng), "{c}");
            }
        }
    }

    #[test]
    fn test_strong_pseudoprimes_without_small_factors() {
        let mut rng = rng();
        // 25326001 = 2251 * 11251, 3215031751 = 151 * 751 * 28351
        for c in [25_326_001u64, 3_215_031_751].map(from_u64) {
            for _ in 0..100 {
                assert!(!is_probable_prime(&c, DEFAULT_ROUNDS, &mut rng), "{c}");
            }
        }
    }

    #[test]
    fn test_large_prime() {
        let mut rng = rng();
        // 2^127 - 1 is a Mersenne prime
        let m127 = (BigUint::one() << 127u32) - 1u8;
        assert!(is_probable_prime(&m127, DEFAULT_ROUNDS, &mut rng));
        // 2^128 + 1 is divisible by 59649589127497217
        let f7 = (BigUint::one() << 128u32) + 1u8;
        assert!(!is_probable_prime(&f7, DEFAULT_ROUNDS, &mut rng));
    }
}
