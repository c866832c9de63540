//! At-rest protection for key-material secrets.
//!
//! Callers depend on `&dyn SecretProtector`, the capability interface
//! over an external keyring or KMS. The core never generates or stores
//! the protection key itself. `KeyringProtector` is the built-in
//! implementation for deployments that hold a local master key; tests
//! use `PassthroughProtector`.
//!
//! Protection is applied independently per secret (passphrase, private
//! key, public key): three tokens, never a single blob, so one secret
//! can be rotated or inspected without exposing the others.

use base64::{engine::general_purpose::STANDARD, Engine};
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Nonce,
};
use rand::RngCore;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of the master protection key in bytes.
pub const MASTER_KEY_SIZE: usize = 32;

/// Size of nonce in bytes (96 bits for ChaCha20-Poly1305).
const NONCE_SIZE: usize = 12;

/// Size of the authentication tag in bytes.
const TAG_SIZE: usize = 16;

/// Version tag prefixed to every token this module produces.
const TOKEN_PREFIX: &str = "sp1:";

/// Errors from the protection layer.
#[derive(Debug, Error)]
pub enum ProtectionError {
    /// The external protection key service is unavailable.
    #[error("protection key unavailable")]
    Unavailable,

    /// The token is not in a recognized format.
    #[error("malformed protection token: {0}")]
    MalformedToken(String),

    /// Underlying encryption failure.
    #[error("protect failed: {0}")]
    Protect(String),

    /// Underlying decryption failure (rotated master key or tampered token).
    #[error("unprotect failed: {0}")]
    Unprotect(String),
}

/// Result type for protection operations.
pub type ProtectionResult<T> = Result<T, ProtectionError>;

/// Capability interface for at-rest envelope encryption.
///
/// Implementations own the protection key. Callers never see it. Calls
/// may cross a trust boundary to an external key service; they are
/// idempotent and safe for the caller to retry on transient failure.
/// No retry policy lives here.
pub trait SecretProtector: Send + Sync {
    /// Encrypts `plaintext`, returning an opaque storable token.
    fn protect(&self, plaintext: &[u8]) -> ProtectionResult<String>;

    /// Recovers the plaintext from a token produced by `protect`.
    fn unprotect(&self, token: &str) -> ProtectionResult<Vec<u8>>;
}

/// The local keyring's 32-byte master key, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MasterKey {
    bytes: [u8; MASTER_KEY_SIZE],
}

impl MasterKey {
    /// Generates a random master key.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0u8; MASTER_KEY_SIZE];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Creates a master key from raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; MASTER_KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; MASTER_KEY_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MasterKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// `SecretProtector` backed by a locally held master key.
///
/// Tokens are `sp1:` + base64(nonce || ciphertext), with ChaCha20-
/// Poly1305 providing the authenticated encryption.
pub struct KeyringProtector {
    key: MasterKey,
}

impl KeyringProtector {
    /// Creates a protector over the given master key.
    #[must_use]
    pub fn new(key: MasterKey) -> Self {
        Self { key }
    }
}

impl SecretProtector for KeyringProtector {
    fn protect(&self, plaintext: &[u8]) -> ProtectionResult<String> {
        let cipher = ChaCha20Poly1305::new(self.key.as_bytes().into());

        let mut nonce_bytes = [0u8; NONCE_SIZE];
        rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, plaintext)
            .map_err(|e| ProtectionError::Protect(e.to_string()))?;

        let mut bytes = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        bytes.extend_from_slice(&nonce_bytes);
        bytes.extend_from_slice(&ciphertext);
        Ok(format!("{TOKEN_PREFIX}{}", STANDARD.encode(&bytes)))
    }

    fn unprotect(&self, token: &str) -> ProtectionResult<Vec<u8>> {
        let encoded = token.strip_prefix(TOKEN_PREFIX).ok_or_else(|| {
            ProtectionError::MalformedToken("unknown token version".to_string())
        })?;
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| ProtectionError::MalformedToken(format!("invalid base64: {e}")))?;
        if bytes.len() < NONCE_SIZE + TAG_SIZE {
            return Err(ProtectionError::MalformedToken(
                "token too short".to_string(),
            ));
        }

        let cipher = ChaCha20Poly1305::new(self.key.as_bytes().into());
        let nonce = Nonce::from_slice(&bytes[..NONCE_SIZE]);
        cipher.decrypt(nonce, &bytes[NONCE_SIZE..]).map_err(|_| {
            ProtectionError::Unprotect("rotated master key or tampered token".to_string())
        })
    }
}

/// No-op protector for tests and local development.
/// Secrets pass through base64-encoded but unencrypted.
pub struct PassthroughProtector;

impl SecretProtector for PassthroughProtector {
    fn protect(&self, plaintext: &[u8]) -> ProtectionResult<String> {
        Ok(STANDARD.encode(plaintext))
    }

    fn unprotect(&self, token: &str) -> ProtectionResult<Vec<u8>> {
        STANDARD
            .decode(token)
            .map_err(|e| ProtectionError::MalformedToken(format!("invalid base64: {e}")))
    }
}
