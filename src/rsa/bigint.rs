// RSA Big Integer Operations
// Modular arithmetic on top of num-bigint: exponentiation, gcd, inverse

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use super::error::{Result, RsaError};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply algorithm
///
/// # Panics
/// Panics if `modulus` is zero. [`Key`](super::keygen::Key) rejects such
/// moduli at construction.
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b)
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_x, mut x) = (BigInt::one(), BigInt::zero());
    let (mut old_y, mut y) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_x = &old_x - &quotient * &x;
        old_x = std::mem::replace(&mut x, next_x);

        let next_y = &old_y - &quotient * &y;
        old_y = std::mem::replace(&mut y, next_y);
    }

    (old_r, old_x, old_y)
}

/// Compute modular inverse: value^(-1) mod modulus
///
/// The result is normalized into `[0, modulus)`. Fails with
/// [`RsaError::NotInvertible`] when `gcd(value, modulus) != 1`; inside key
/// generation that means an upstream invariant was broken.
pub fn mod_inverse(value: &RsaBigInt, modulus: &RsaBigInt) -> Result<RsaBigInt> {
    let not_invertible = || RsaError::NotInvertible {
        value: value.clone(),
        modulus: modulus.clone(),
    };

    if modulus.is_zero() {
        return Err(not_invertible());
    }

    let m = BigInt::from(modulus.clone());
    let (remainder, mut t, _) = extended_gcd(&BigInt::from(value % modulus), &m);

    // remainder is 0 only for modulus 1, where every value inverts to 0
    if remainder > BigInt::one() {
        return Err(not_invertible());
    }

    t %= &m;
    if t.is_negative() {
        t += &m;
    }

    t.to_biguint().ok_or_else(not_invertible)
}

/// Greatest common divisor
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    a.gcd(b)
}
