//! Integrity digests over ordered field sets.
//!
//! Fields are hashed in their given order, each framed by its byte
//! length, so `["ab", "c"]` and `["a", "bc"]` never collide. SHA-256
//! stands in for the legacy MD5 digest; the contract (compute over an
//! ordered field list, verify fail-closed) is unchanged.

use sha2::{Digest, Sha256};
use thiserror::Error;

/// Checksum validation failure. Always an error, never a warning.
#[derive(Debug, Error)]
pub enum ChecksumError {
    /// The computed digest does not match the recorded one.
    #[error("checksum mismatch: recorded {recorded}, computed {computed}")]
    Mismatch { recorded: String, computed: String },
}

/// Computes the hex digest over fields in the given order.
///
/// The caller must use the exact same field order on both the export
/// and import sides.
#[must_use]
pub fn compute_checksum(fields: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for field in fields {
        hasher.update((field.len() as u64).to_le_bytes());
        hasher.update(field.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Verifies a digest over fields in the given order. Fails closed: any
/// mismatch is an error.
pub fn verify_checksum(fields: &[&str], digest: &str) -> Result<(), ChecksumError> {
    let computed = compute_checksum(fields);
    if computed.eq_ignore_ascii_case(digest.trim()) {
        Ok(())
    } else {
        Err(ChecksumError::Mismatch {
            recorded: digest.to_string(),
            computed,
        })
    }
}
