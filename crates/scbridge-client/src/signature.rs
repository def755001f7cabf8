//! Cloudinary upload signatures
//!
//! Signed uploads carry a digest of the request parameters and the account
//! secret. Parameters are sorted by name, serialized as `name=value` joined
//! with `&`, the secret is appended, and the result is hashed. `file`,
//! `api_key`, `cloud_name`, `resource_type` and `signature` are never signed.

use sha2::{Digest, Sha256};

const UNSIGNED_PARAMS: [&str; 5] = ["file", "api_key", "cloud_name", "resource_type", "signature"];

/// Canonical string that gets hashed, without the secret.
pub fn string_to_sign(params: &[(&str, String)]) -> String {
    let mut signed: Vec<&(&str, String)> = params
        .iter()
        .filter(|(name, value)| !UNSIGNED_PARAMS.contains(name) && !value.is_empty())
        .collect();
    signed.sort_by(|a, b| a.0.cmp(&b.0));

    signed
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("&")
}

/// Lowercase hex SHA-256 signature for `params` under `api_secret`.
pub fn sign(params: &[(&str, String)], api_secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(string_to_sign(params).as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}
