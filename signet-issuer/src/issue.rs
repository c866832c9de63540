//! License issuance: unprotect → build → sign → downloadable artifact.

use chrono::{DateTime, Utc};
use signet_crypto::SecretProtector;
use signet_license::{build_claims, sign_claims, LicenseClaims, LicenseRequest, CONTENT_TYPE};
use signet_types::LicenseId;
use tracing::info;

use crate::error::IssuerResult;
use crate::provision::{unprotect_key_material, ProductRecord};

/// An issued license, ready to persist and serve as a file download.
#[derive(Debug, Clone)]
pub struct IssuedLicense {
    /// The claims as signed.
    pub claims: LicenseClaims,
    /// The signed artifact document.
    pub artifact_xml: String,
    /// Download filename: `{productName}-{licenseId}.xml`.
    pub file_name: String,
    /// Download MIME type.
    pub content_type: &'static str,
}

/// Issues a license for `product` from already-authorized request data.
///
/// `issued_at` is an explicit input: the caller supplies the clock, so
/// issuance stays a pure function and claims are reproducible.
pub fn issue_license(
    product: &ProductRecord,
    protector: &dyn SecretProtector,
    request: &LicenseRequest,
    issued_at: DateTime<Utc>,
) -> IssuerResult<IssuedLicense> {
    let keys = unprotect_key_material(&product.key_material, protector)?;

    let license_id = LicenseId::new();
    let claims = build_claims(
        license_id,
        product.product_id,
        &product.product_name,
        request,
        issued_at,
    )?;

    let artifact = sign_claims(&claims, &keys.private_key_pem, &keys.passphrase)?;
    let artifact_xml = artifact.to_xml()?;
    let file_name = artifact.file_name();

    info!(
        license_id = %license_id,
        product_id = %product.product_id,
        license_type = claims.license_type.as_str(),
        "issued license"
    );
    Ok(IssuedLicense {
        claims,
        artifact_xml,
        file_name,
        content_type: CONTENT_TYPE,
    })
}
