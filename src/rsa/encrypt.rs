// RSA Encryption Implementation
// Textbook RSA: each unit is raised to the public exponent independently

use super::bigint::{mod_pow, RsaBigInt};
use super::keygen::Key;
use crate::util::text::to_units;

/// Encrypt one plaintext unit: c = m^e mod n
///
/// Units outside `[0, n)` are not rejected; they wrap through the modulus.
pub fn encrypt_unit(m: &RsaBigInt, public_key: &Key) -> RsaBigInt {
    mod_pow(m, public_key.exponent(), public_key.modulus())
}

/// Encrypt a sequence of plaintext units, element by element
pub fn encrypt(units: &[RsaBigInt], public_key: &Key) -> Vec<RsaBigInt> {
    units.iter().map(|m| encrypt_unit(m, public_key)).collect()
}

/// Encrypt a string one byte per unit
pub fn encrypt_str(plaintext: &str, public_key: &Key) -> Vec<RsaBigInt> {
    encrypt(&to_units(plaintext), public_key)
}
