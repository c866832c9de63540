//! Export/import workflows for backup bundles.
//!
//! Export seals a bundle with a checksum; import verifies it (unless
//! the caller's policy explicitly bypasses that), rejects identifier
//! collisions as hard conflicts, and probes imported key material so a
//! broken backup is caught at the door rather than at first signing.

use signet_crypto::{validate_key_pair, SecretProtector};
use signet_export::{LicenseBackup, ProductBackup};
use signet_types::{LicenseId, ProductId};
use tracing::{info, warn};

use crate::error::{IssuerError, IssuerResult};
use crate::issue::IssuedLicense;
use crate::provision::{unprotect_key_material, ProductRecord, ProtectedKeyMaterial};

/// Whether import verifies the bundle checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportPolicy {
    /// Verify the checksum; any mismatch aborts the import.
    #[default]
    VerifyChecksum,
    /// Skip checksum verification. For operator-edited bundles only.
    TrustChecksum,
}

/// Exports a product as a sealed backup bundle.
///
/// The bundle carries the protection tokens verbatim; secrets never
/// leave the at-rest envelope.
#[must_use]
pub fn export_product(record: &ProductRecord) -> ProductBackup {
    ProductBackup {
        product_id: record.product_id,
        product_name: record.product_name.clone(),
        passphrase_token: record.key_material.passphrase_token.clone(),
        private_key_token: record.key_material.private_key_token.clone(),
        public_key_token: record.key_material.public_key_token.clone(),
        checksum: String::new(),
    }
    .seal()
}

/// Imports a product from a backup bundle.
///
/// # Errors
///
/// - [`IssuerError::Checksum`] if the bundle fails verification (under
///   [`ImportPolicy::VerifyChecksum`]),
/// - [`IssuerError::Conflict`] if the product id already exists,
/// - [`IssuerError::Key`] if the imported key material is unusable or
///   mismatched, with the cause preserved.
pub fn import_product(
    bundle: ProductBackup,
    protector: &dyn SecretProtector,
    existing: &[ProductId],
    policy: ImportPolicy,
) -> IssuerResult<ProductRecord> {
    match policy {
        ImportPolicy::VerifyChecksum => bundle.verify()?,
        ImportPolicy::TrustChecksum => {
            warn!(product_id = %bundle.product_id, "importing product with checksum verification bypassed");
        }
    }
    if existing.contains(&bundle.product_id) {
        return Err(IssuerError::Conflict(format!(
            "product {} already exists",
            bundle.product_id
        )));
    }

    let record = ProductRecord {
        product_id: bundle.product_id,
        product_name: bundle.product_name,
        key_material: ProtectedKeyMaterial {
            passphrase_token: bundle.passphrase_token,
            private_key_token: bundle.private_key_token,
            public_key_token: bundle.public_key_token,
        },
    };

    let keys = unprotect_key_material(&record.key_material, protector)?;
    validate_key_pair(&keys.private_key_pem, &keys.passphrase, &keys.public_key_pem)?;

    info!(product_id = %record.product_id, product = %record.product_name, "imported product");
    Ok(record)
}

/// Exports an issued license as a sealed backup bundle.
#[must_use]
pub fn export_license(issued: &IssuedLicense) -> LicenseBackup {
    LicenseBackup {
        license_id: issued.claims.license_id,
        product_id: issued.claims.product_id,
        artifact_xml: issued.artifact_xml.clone(),
        checksum: String::new(),
    }
    .seal()
}

/// Validates a license bundle for import and hands it back for the
/// caller to persist.
///
/// # Errors
///
/// - [`IssuerError::Checksum`] if the bundle fails verification (under
///   [`ImportPolicy::VerifyChecksum`]),
/// - [`IssuerError::Conflict`] if the license id already exists.
pub fn import_license(
    bundle: LicenseBackup,
    existing: &[LicenseId],
    policy: ImportPolicy,
) -> IssuerResult<LicenseBackup> {
    match policy {
        ImportPolicy::VerifyChecksum => bundle.verify()?,
        ImportPolicy::TrustChecksum => {
            warn!(license_id = %bundle.license_id, "importing license with checksum verification bypassed");
        }
    }
    if existing.contains(&bundle.license_id) {
        return Err(IssuerError::Conflict(format!(
            "license {} already exists",
            bundle.license_id
        )));
    }
    info!(license_id = %bundle.license_id, product_id = %bundle.product_id, "imported license");
    Ok(bundle)
}
