//! Product provisioning: key pair creation and at-rest protection.

use std::fmt;

use serde::{Deserialize, Serialize};
use signet_crypto::{KeyPair, Passphrase, SecretProtector};
use signet_types::ProductId;
use tracing::info;

use crate::error::{IssuerError, IssuerResult};

/// A product's key material as persisted: three independent protection
/// tokens, never a single blob. Both key halves come from the same
/// pair, created once and never regenerated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedKeyMaterial {
    /// Protected random passphrase.
    pub passphrase_token: String,
    /// Protected passphrase-encrypted private key PEM.
    pub private_key_token: String,
    /// Protected public key PEM. Protection here is storage hygiene,
    /// not secrecy.
    pub public_key_token: String,
}

/// A provisioned product, ready for the caller to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_id: ProductId,
    pub product_name: String,
    pub key_material: ProtectedKeyMaterial,
}

/// A product's key material after unprotection, ready for signing.
pub struct KeyMaterial {
    /// The private key passphrase.
    pub passphrase: Passphrase,
    /// Passphrase-encrypted private key PEM.
    pub private_key_pem: String,
    /// Public key PEM.
    pub public_key_pem: String,
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("passphrase", &self.passphrase)
            .field("private_key_pem", &"[REDACTED]")
            .field("public_key_pem", &self.public_key_pem)
            .finish()
    }
}

/// Provisions key material for a new product: a fresh passphrase, a
/// fresh RSA pair, the private key encrypted under the passphrase, and
/// all three secrets protected as independent tokens.
///
/// The generate→protect sequence is the only ordering this workflow
/// requires; it is data-dependent, not a locking concern.
pub fn provision_product(
    product_name: &str,
    protector: &dyn SecretProtector,
) -> IssuerResult<ProductRecord> {
    if product_name.trim().is_empty() {
        return Err(IssuerError::Validation("product name is empty".to_string()));
    }

    let passphrase = Passphrase::random();
    let key_pair = KeyPair::generate()?;
    let private_key_pem = key_pair.signing_key.to_encrypted_pem(&passphrase)?;
    let public_key_pem = key_pair.verifying_key.to_pem()?;

    let key_material = ProtectedKeyMaterial {
        passphrase_token: protector.protect(passphrase.as_bytes())?,
        private_key_token: protector.protect(private_key_pem.as_bytes())?,
        public_key_token: protector.protect(public_key_pem.as_bytes())?,
    };

    let record = ProductRecord {
        product_id: ProductId::new(),
        product_name: product_name.to_string(),
        key_material,
    };
    info!(product_id = %record.product_id, product = product_name, "provisioned product key material");
    Ok(record)
}

/// Unprotects a product's key material for signing.
pub fn unprotect_key_material(
    material: &ProtectedKeyMaterial,
    protector: &dyn SecretProtector,
) -> IssuerResult<KeyMaterial> {
    let passphrase = unprotect_string(protector, &material.passphrase_token)?;
    let private_key_pem = unprotect_string(protector, &material.private_key_token)?;
    let public_key_pem = unprotect_string(protector, &material.public_key_token)?;
    Ok(KeyMaterial {
        passphrase: Passphrase::new(passphrase),
        private_key_pem,
        public_key_pem,
    })
}

/// Unprotects only the public key PEM, e.g. to hand to a verifier. The
/// other two tokens stay sealed.
pub fn public_key_pem(
    material: &ProtectedKeyMaterial,
    protector: &dyn SecretProtector,
) -> IssuerResult<String> {
    unprotect_string(protector, &material.public_key_token)
}

fn unprotect_string(protector: &dyn SecretProtector, token: &str) -> IssuerResult<String> {
    let bytes = protector.unprotect(token)?;
    String::from_utf8(bytes).map_err(|_| IssuerError::SecretEncoding)
}
