//! Backup bundle transfer objects.
//!
//! Bundles carry the transportable form of a product or license plus a
//! checksum over a fixed, documented field order. The field sets always
//! include the identifiers, for both bundle kinds, so an edited id is
//! caught the same way as an edited secret token.

use serde::{Deserialize, Serialize};
use signet_types::{LicenseId, ProductId};

use crate::checksum::{compute_checksum, verify_checksum, ChecksumError};

/// Transportable form of a product and its protected key material.
///
/// The key fields are at-rest protection tokens; the bundle never
/// carries a raw passphrase or private key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductBackup {
    pub product_id: ProductId,
    pub product_name: String,
    pub passphrase_token: String,
    pub private_key_token: String,
    pub public_key_token: String,
    /// Digest over the fields above; see [`ProductBackup::seal`].
    #[serde(default)]
    pub checksum: String,
}

impl ProductBackup {
    /// Checksum field order: id, name, passphrase token, private key
    /// token, public key token.
    fn checksum_fields(&self) -> [String; 5] {
        [
            self.product_id.to_string(),
            self.product_name.clone(),
            self.passphrase_token.clone(),
            self.private_key_token.clone(),
            self.public_key_token.clone(),
        ]
    }

    /// Computes and records the checksum, returning the sealed bundle.
    #[must_use]
    pub fn seal(mut self) -> Self {
        let fields = self.checksum_fields();
        self.checksum = compute_checksum(&as_strs(&fields));
        self
    }

    /// Verifies the recorded checksum. Fails closed.
    pub fn verify(&self) -> Result<(), ChecksumError> {
        let fields = self.checksum_fields();
        verify_checksum(&as_strs(&fields), &self.checksum)
    }
}

/// Transportable form of an issued license.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseBackup {
    pub license_id: LicenseId,
    pub product_id: ProductId,
    /// The signed artifact, verbatim.
    pub artifact_xml: String,
    /// Digest over the fields above; see [`LicenseBackup::seal`].
    #[serde(default)]
    pub checksum: String,
}

impl LicenseBackup {
    /// Checksum field order: license id, product id, artifact XML.
    fn checksum_fields(&self) -> [String; 3] {
        [
            self.license_id.to_string(),
            self.product_id.to_string(),
            self.artifact_xml.clone(),
        ]
    }

    /// Computes and records the checksum, returning the sealed bundle.
    #[must_use]
    pub fn seal(mut self) -> Self {
        let fields = self.checksum_fields();
        self.checksum = compute_checksum(&as_strs(&fields));
        self
    }

    /// Verifies the recorded checksum. Fails closed.
    pub fn verify(&self) -> Result<(), ChecksumError> {
        let fields = self.checksum_fields();
        verify_checksum(&as_strs(&fields), &self.checksum)
    }
}

fn as_strs(fields: &[String]) -> Vec<&str> {
    fields.iter().map(String::as_str).collect()
}
