//! Password hashing and verification.
//!
//! Salted SHA-256: a 16-byte random salt is appended to the password and
//! the pair hashed. Hash and salt are stored as hex strings on the user
//! row and are opaque to everything else in the service.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Generate a random 16-byte salt as a 32-character hex string
pub fn generate_salt() -> String {
    let mut salt = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut salt);
    hex::encode(salt)
}

/// Hash a password with a salt. Returns a 64-character hex string.
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

/// Verify a password against a stored hash and salt
pub fn verify_password(password: &str, salt: &str, stored_hash: &str) -> bool {
    hash_password(password, salt) == stored_hash
}
