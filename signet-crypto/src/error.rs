//! Error types for key material operations.

use thiserror::Error;

/// Result type for key material operations.
pub type KeyResult<T> = Result<T, KeyError>;

/// Errors that can occur when generating or using key material.
#[derive(Debug, Error)]
pub enum KeyError {
    /// Key pair generation failed (entropy unavailable or prime search error).
    #[error("key pair generation failed: {0}")]
    Generation(String),

    /// The passphrase does not decrypt the private key.
    #[error("private key passphrase rejected")]
    WrongPassphrase,

    /// The private key PEM is structurally unusable.
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// The public key PEM is structurally unusable.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// PEM encoding failed.
    #[error("PEM encoding failed: {0}")]
    PemEncoding(String),

    /// The private and public halves do not belong to the same pair.
    #[error("private and public keys do not match")]
    KeyPairMismatch,

    /// Underlying signature computation failed.
    #[error("signing failed: {0}")]
    Signing(String),
}
