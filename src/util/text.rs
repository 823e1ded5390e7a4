// Text Codec
// Maps message bytes to plaintext units and back

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::rsa::error::{Result, RsaError};

/// Turn a message into one unit per byte, each in `[0, 255]`.
pub fn to_units(message: &str) -> Vec<BigUint> {
    message.bytes().map(BigUint::from).collect()
}

/// Rebuild a message from byte-valued units.
pub fn from_units(units: &[BigUint]) -> Result<String> {
    let bytes = units
        .iter()
        .map(|unit| {
            unit.to_u8().ok_or_else(|| RsaError::UnitOutOfRange {
                value: unit.clone(),
            })
        })
        .collect::<Result<Vec<u8>>>()?;

    String::from_utf8(bytes).map_err(|_| RsaError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_units() {
        let units = to_units("Hi!");
        let expected: Vec<BigUint> = [72u8, 105, 33].into_iter().map(BigUint::from).collect();
        assert_eq!(units, expected);
        assert!(to_units("").is_empty());
    }

    #[test]
    fn test_from_units() {
        assert_eq!(from_units(&to_units("Hello, RSA!")).unwrap(), "Hello, RSA!");
        assert_eq!(from_units(&to_units("héllo")).unwrap(), "héllo");
    }

    #[test]
    fn test_unit_out_of_range() {
        let err = from_units(&[BigUint::from(65u8), BigUint::from(256u16)]).unwrap_err();
        assert_eq!(
            err,
            RsaError::UnitOutOfRange {
                value: BigUint::from(256u16)
            }
        );
    }

    #[test]
    fn test_invalid_utf8() {
        let err = from_units(&[BigUint::from(0xC3u8)]).unwrap_err();
        assert_eq!(err, RsaError::InvalidUtf8);
    }
}
