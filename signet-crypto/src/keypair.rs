//! RSA key pair generation, passphrase-encrypted PEM encoding, and the
//! signing/verification primitives built on it.
//!
//! Signatures use RSA PKCS#1 v1.5 with SHA-256. The scheme is fixed:
//! verifiers embedded in third-party applications depend on it, so any
//! change is a new artifact version, not an in-place swap.
//!
//! Private keys are encoded as passphrase-encrypted PKCS#8 PEM
//! (PBES2, scrypt + AES-256-CBC). The passphrase encryption is
//! independent of at-rest protection: a protected token unwraps to an
//! encrypted PEM, which still needs the product passphrase to use.

use std::fmt;

use rand::rngs::OsRng;
use rsa::pkcs1v15;
use rsa::pkcs8::{
    DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, LineEnding,
};
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::error::{KeyError, KeyResult};
use crate::passphrase::Passphrase;

/// RSA modulus size in bits for newly generated key pairs.
pub const RSA_KEY_BITS: usize = 2048;

/// Fixed message used by [`validate_key_pair`] to probe a pair.
const PROBE_MESSAGE: &[u8] = b"signet-keypair-probe-v1";

/// RSA signing key (secret). Used to sign license documents.
pub struct SigningKey(RsaPrivateKey);

/// RSA verifying key (public). Used to verify license signatures.
#[derive(Clone)]
pub struct VerifyingKey(RsaPublicKey);

/// A key pair for signing and verification.
///
/// A product has exactly one active pair; both halves are always
/// generated together and never regenerated in place.
pub struct KeyPair {
    pub signing_key: SigningKey,
    pub verifying_key: VerifyingKey,
}

impl KeyPair {
    /// Generates a fresh RSA key pair from the OS entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Generation`] if entropy is unavailable or the
    /// prime search fails. Generation is never retried here; the caller
    /// decides.
    pub fn generate() -> KeyResult<Self> {
        let private = RsaPrivateKey::new(&mut OsRng, RSA_KEY_BITS)
            .map_err(|e| KeyError::Generation(e.to_string()))?;
        let public = private.to_public_key();
        Ok(Self {
            signing_key: SigningKey(private),
            verifying_key: VerifyingKey(public),
        })
    }
}

impl SigningKey {
    /// Encodes the private key as passphrase-encrypted PKCS#8 PEM.
    pub fn to_encrypted_pem(&self, passphrase: &Passphrase) -> KeyResult<String> {
        let pem = self
            .0
            .to_pkcs8_encrypted_pem(&mut OsRng, passphrase.as_bytes(), LineEnding::LF)
            .map_err(|e| KeyError::PemEncoding(e.to_string()))?;
        Ok(pem.to_string())
    }

    /// Decodes a passphrase-encrypted PKCS#8 PEM back into a usable key.
    ///
    /// # Errors
    ///
    /// [`KeyError::InvalidPrivateKey`] if the input is not an encrypted
    /// PKCS#8 document at all; [`KeyError::WrongPassphrase`] if it is
    /// but the passphrase does not decrypt it.
    pub fn from_encrypted_pem(pem: &str, passphrase: &Passphrase) -> KeyResult<Self> {
        if !pem.contains("BEGIN ENCRYPTED PRIVATE KEY") {
            return Err(KeyError::InvalidPrivateKey(
                "not an encrypted PKCS#8 PEM document".to_string(),
            ));
        }
        RsaPrivateKey::from_pkcs8_encrypted_pem(pem, passphrase.as_bytes())
            .map(Self)
            .map_err(|_| KeyError::WrongPassphrase)
    }

    /// Signs a message with RSA PKCS#1 v1.5 / SHA-256.
    pub fn sign(&self, message: &[u8]) -> KeyResult<Vec<u8>> {
        let signing_key = pkcs1v15::SigningKey::<Sha256>::new(self.0.clone());
        let signature = signing_key
            .try_sign(message)
            .map_err(|e| KeyError::Signing(e.to_string()))?;
        Ok(signature.to_vec())
    }

    /// Returns the corresponding verifying key.
    #[must_use]
    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey(self.0.to_public_key())
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

impl VerifyingKey {
    /// Encodes the public key as SPKI PEM.
    pub fn to_pem(&self) -> KeyResult<String> {
        self.0
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| KeyError::PemEncoding(e.to_string()))
    }

    /// Decodes a public key from SPKI PEM.
    pub fn from_pem(pem: &str) -> KeyResult<Self> {
        RsaPublicKey::from_public_key_pem(pem)
            .map(Self)
            .map_err(|e| KeyError::InvalidPublicKey(e.to_string()))
    }

    /// Verifies a PKCS#1 v1.5 / SHA-256 signature against a message.
    ///
    /// Returns `false` for any cryptographic mismatch, including
    /// signature bytes that do not decode to a signature at all.
    #[must_use]
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let Ok(signature) = pkcs1v15::Signature::try_from(signature) else {
            return false;
        };
        let verifying_key = pkcs1v15::VerifyingKey::<Sha256>::new(self.0.clone());
        verifying_key.verify(message, &signature).is_ok()
    }
}

impl fmt::Debug for VerifyingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifyingKey").finish_non_exhaustive()
    }
}

/// Checks that stored key material is usable and internally consistent.
///
/// Runs a sign/verify probe so the failure cause stays distinguishable:
///
/// - [`KeyError::InvalidPrivateKey`] / [`KeyError::WrongPassphrase`]:
///   the private half is unusable,
/// - [`KeyError::InvalidPublicKey`]: the public half is unusable,
/// - [`KeyError::KeyPairMismatch`]: both halves parse but do not
///   belong together.
pub fn validate_key_pair(
    encrypted_pem: &str,
    passphrase: &Passphrase,
    public_pem: &str,
) -> KeyResult<()> {
    let signing_key = SigningKey::from_encrypted_pem(encrypted_pem, passphrase)?;
    let verifying_key = VerifyingKey::from_pem(public_pem)?;
    let signature = signing_key.sign(PROBE_MESSAGE)?;
    if verifying_key.verify(PROBE_MESSAGE, &signature) {
        Ok(())
    } else {
        Err(KeyError::KeyPairMismatch)
    }
}
