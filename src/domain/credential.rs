//! Credential codec - salt generation and password digests.
//!
//! A stored credential is the pair (digest, salt) where the digest is the
//! lowercase hex SHA-256 of the password bytes followed by the salt bytes.

use rand::Rng;
use sha2::{Digest, Sha256};

use crate::config::SALT_ALPHABET;

/// Draw `length` characters uniformly from the salt alphabet.
///
/// The source is whatever RNG the caller supplies; the service wires in
/// the thread-local RNG, which is not a cryptographic salt source.
pub fn generate_salt<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| SALT_ALPHABET[rng.gen_range(0..SALT_ALPHABET.len())] as char)
        .collect()
}

/// Deterministic digest of `password || salt`.
pub fn digest(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a candidate password against a stored digest and salt.
pub fn verify(password: &str, salt: &str, expected_digest: &str) -> bool {
    digest(password, salt) == expected_digest
}
