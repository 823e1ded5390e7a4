// RSA Decryption Implementation
// Textbook RSA: each unit is raised to the private exponent independently

use super::bigint::{mod_pow, RsaBigInt};
use super::error::Result;
use super::keygen::Key;
use crate::util::text::from_units;

/// Decrypt one ciphertext unit: m = c^d mod n
pub fn decrypt_unit(c: &RsaBigInt, private_key: &Key) -> RsaBigInt {
    mod_pow(c, private_key.exponent(), private_key.modulus())
}

/// Decrypt a sequence of ciphertext units, element by element
pub fn decrypt(units: &[RsaBigInt], private_key: &Key) -> Vec<RsaBigInt> {
    units.iter().map(|c| decrypt_unit(c, private_key)).collect()
}

/// Decrypt ciphertext to a string, one byte per unit
pub fn decrypt_to_string(units: &[RsaBigInt], private_key: &Key) -> Result<String> {
    from_units(&decrypt(units, private_key))
}
