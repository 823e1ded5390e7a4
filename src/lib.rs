//! # Textbook RSA
//!
//! Miller-Rabin prime generation, key-pair derivation and modular
//! exponentiation encryption over arbitrary-precision integers.
//!
//! There is no padding and no timing hardening: this is a teaching
//! implementation, not something to protect real data with.
//!
//! ## Example
//!
//! ```rust,no_run
//! use textbook_rsa::rsa::{decrypt_to_string, encrypt_str, generate_keypair};
//!
//! let keypair = generate_keypair(256).expect("key generation failed");
//! let ciphertext = encrypt_str("hello", keypair.public_key());
//! let message = decrypt_to_string(&ciphertext, keypair.private_key()).expect("not text");
//! assert_eq!(message, "hello");
//! ```

pub mod rsa;
pub mod ui;
pub mod util;
