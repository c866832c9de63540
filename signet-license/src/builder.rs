//! Assembles a validated `LicenseClaims` from request data.
//!
//! A pure transform: the issue timestamp is an explicit input, so
//! identical inputs always produce identical claims (and therefore
//! byte-identical canonical serializations).

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use signet_types::{LicenseId, ProductId};

use crate::artifact;
use crate::claims::{AttributeSet, LicenseClaims, LicenseType, Licensee};
use crate::error::{LicenseError, LicenseResult};

/// Minimum license duration in days.
pub const MIN_DURATION_DAYS: u32 = 1;

/// Maximum license duration in days (four years).
pub const MAX_DURATION_DAYS: u32 = 1460;

/// Byte budget for each serialized metadata set.
pub const METADATA_BYTE_BUDGET: usize = 5000;

/// Raw license request data, as handed over by the (already
/// authorized) caller.
#[derive(Debug, Clone, Default)]
pub struct LicenseRequest {
    /// Requested license type name ("trial" or "standard").
    pub license_type: String,
    /// License duration in days, or `None` for a perpetual license.
    pub duration_days: Option<u32>,
    /// Licensee contact name.
    pub licensee_name: String,
    /// Licensee email address.
    pub licensee_email: String,
    /// Licensee company, if any.
    pub licensee_company: Option<String>,
    /// Free-form metadata.
    pub additional_attributes: BTreeMap<String, String>,
    /// Feature entitlements.
    pub product_features: BTreeMap<String, String>,
}

/// Builds validated claims for a license issued by the given product.
///
/// # Errors
///
/// Returns [`LicenseError::Validation`] when:
/// - the license type is not in the closed set,
/// - the duration is outside `1..=1460` days,
/// - a metadata set serializes to more than [`METADATA_BYTE_BUDGET`]
///   bytes (oversized metadata is rejected, never truncated),
/// - the product name, licensee name, or licensee email is empty.
pub fn build_claims(
    license_id: LicenseId,
    product_id: ProductId,
    product_name: &str,
    request: &LicenseRequest,
    issued_at: DateTime<Utc>,
) -> LicenseResult<LicenseClaims> {
    if product_name.trim().is_empty() {
        return Err(LicenseError::Validation("product name is empty".to_string()));
    }
    if request.licensee_name.trim().is_empty() {
        return Err(LicenseError::Validation("licensee name is empty".to_string()));
    }
    if request.licensee_email.trim().is_empty() {
        return Err(LicenseError::Validation(
            "licensee email is empty".to_string(),
        ));
    }

    let license_type: LicenseType = request.license_type.parse()?;
    let expires_at = match request.duration_days {
        None => None,
        Some(days) => Some(expiration(issued_at, days)?),
    };

    let additional_attributes =
        bounded_set(&request.additional_attributes, "additional attributes")?;
    let product_features = bounded_set(&request.product_features, "product features")?;

    let company = request
        .licensee_company
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    Ok(LicenseClaims {
        license_id,
        product_id,
        product_name: product_name.to_string(),
        license_type,
        expires_at,
        licensee: Licensee {
            name: request.licensee_name.clone(),
            email: request.licensee_email.clone(),
            company,
        },
        additional_attributes,
        product_features,
    })
}

/// Computes the expiration timestamp, truncated to whole seconds so the
/// canonical serialization round-trips losslessly.
fn expiration(issued_at: DateTime<Utc>, days: u32) -> LicenseResult<DateTime<Utc>> {
    if !(MIN_DURATION_DAYS..=MAX_DURATION_DAYS).contains(&days) {
        return Err(LicenseError::Validation(format!(
            "duration must be between {MIN_DURATION_DAYS} and {MAX_DURATION_DAYS} days, got {days}"
        )));
    }
    let expires = issued_at + Duration::days(i64::from(days));
    DateTime::<Utc>::from_timestamp(expires.timestamp(), 0)
        .ok_or_else(|| LicenseError::Validation("expiration timestamp out of range".to_string()))
}

/// Converts a metadata map into an ordered set, enforcing the byte
/// budget on its serialized form.
fn bounded_set(map: &BTreeMap<String, String>, what: &str) -> LicenseResult<AttributeSet> {
    let set = AttributeSet::from_map(map);
    let size = artifact::serialized_len(&set)?;
    if size > METADATA_BYTE_BUDGET {
        return Err(LicenseError::Validation(format!(
            "{what} serialize to {size} bytes, exceeding the {METADATA_BYTE_BUDGET}-byte budget"
        )));
    }
    Ok(set)
}
