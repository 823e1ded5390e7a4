// Display Formatting
// Renders and parses big integers for the command line

use num_bigint::BigUint;

use crate::rsa::error::{Result, RsaError};

/// Output radix for big integers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Radix {
    #[default]
    Decimal,
    Hex,
}

/// Format a big integer for display
pub fn format_biguint(n: &BigUint, radix: Radix) -> String {
    match radix {
        Radix::Decimal => n.to_str_radix(10),
        Radix::Hex => format!("0x{}", hex::encode(n.to_bytes_be())),
    }
}

/// Parse a decimal or `0x`-prefixed hex integer
pub fn parse_biguint(input: &str) -> Result<BigUint> {
    let input = input.trim();
    let invalid = || RsaError::InvalidNumber(input.to_string());

    if let Some(digits) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        // hex::decode wants whole bytes
        let padded = if digits.len() % 2 == 1 {
            format!("0{digits}")
        } else {
            digits.to_string()
        };
        let bytes = hex::decode(padded).map_err(|_| invalid())?;
        if bytes.is_empty() {
            return Err(invalid());
        }
        return Ok(BigUint::from_bytes_be(&bytes));
    }

    BigUint::parse_bytes(input.as_bytes(), 10).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let n = BigUint::from(3233u32);
        assert_eq!(format_biguint(&n, Radix::Decimal), "3233");
        assert_eq!(format_biguint(&n, Radix::Hex), "0x0ca1");
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse_biguint("3233").unwrap(), BigUint::from(3233u32));
        assert_eq!(parse_biguint(" 0x0ca1 ").unwrap(), BigUint::from(3233u32));
        assert_eq!(parse_biguint("0xCA1").unwrap(), BigUint::from(3233u32));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "0x", "12a", "0xzz", "-5"] {
            assert!(parse_biguint(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_format_parse_hex() {
        let n = BigUint::parse_bytes(b"123456789012345678901234567890", 10).unwrap();
        assert_eq!(parse_biguint(&format_biguint(&n, Radix::Hex)).unwrap(), n);
    }
}
