//! Error type for issuer workflows.

use thiserror::Error;

use signet_crypto::{KeyError, ProtectionError};
use signet_export::ChecksumError;
use signet_license::LicenseError;

/// Errors surfaced by the issuer workflows.
///
/// The underlying kinds stay distinguishable so the service layer can
/// map them onto its own status codes: validation is the caller's
/// fault, key material rejection is authorization-grade, protection
/// trouble may be transient, the rest is fatal for the request.
#[derive(Debug, Error)]
pub enum IssuerError {
    /// Workflow input is out of shape or range.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Key material is unusable or inconsistent.
    #[error("key material error: {0}")]
    Key(#[from] KeyError),

    /// The at-rest protection layer failed.
    #[error("protection error: {0}")]
    Protection(#[from] ProtectionError),

    /// License building, signing, or parsing failed.
    #[error("license error: {0}")]
    License(#[from] LicenseError),

    /// A bundle checksum did not verify.
    #[error("checksum error: {0}")]
    Checksum(#[from] ChecksumError),

    /// An imported identifier already exists. Never merged silently.
    #[error("identifier collision: {0}")]
    Conflict(String),

    /// A protected secret did not decode to valid UTF-8.
    #[error("protected secret is not valid UTF-8")]
    SecretEncoding,
}

/// Result type for issuer workflows.
pub type IssuerResult<T> = Result<T, IssuerError>;
