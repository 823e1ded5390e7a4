// Utility Module
// Randomness, text and display glue around the RSA core

pub mod format;
pub mod random;
pub mod text;

pub use format::{format_biguint, parse_biguint, Radix};
pub use random::{random_bits, random_in_range, SecureRandom};
pub use text::{from_units, to_units};
