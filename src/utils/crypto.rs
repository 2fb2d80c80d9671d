//! Cryptographic utilities

use sha2::{Digest, Sha256};

use super::urls::normalize_url;

/// Hash a string using SHA-256
pub fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

/// Uniqueness key for a submission link: SHA-256 of its normalized form
pub fn submission_url_hash(raw_url: &str) -> String {
    hash_string(&normalize_url(raw_url))
}
