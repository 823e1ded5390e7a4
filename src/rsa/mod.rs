// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod config;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;
pub mod primality;
pub mod prime;

mod attempts;

pub use bigint::{gcd, mod_inverse, mod_pow, RsaBigInt};
pub use config::{RsaConfig, DEFAULT_PRIME_BITS, DEFAULT_PUBLIC_EXPONENT};
pub use decrypt::{decrypt, decrypt_to_string, decrypt_unit};
pub use encrypt::{encrypt, encrypt_str, encrypt_unit};
pub use error::{Result, RsaError};
pub use keygen::{generate_keypair, Key, KeyPair, KeyPairGenerator};
pub use primality::{is_probable_prime, DEFAULT_ROUNDS};
pub use prime::{generate_prime, PrimeGenerator, MIN_PRIME_BITS};
