//! Error types for the licensing module.

use thiserror::Error;

/// Licensing-specific errors.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// Request input is out of shape or range (caller's fault).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The passphrase or private key was rejected. Treated as an
    /// authorization failure; never retried.
    #[error("key material rejected: {0}")]
    KeyMaterial(String),

    /// Underlying signature computation failed.
    #[error("signing failed: {0}")]
    Signing(String),

    /// The artifact (or a key PEM) cannot be decoded at all.
    #[error("artifact parse failed: {0}")]
    Parse(String),

    /// Canonical serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
