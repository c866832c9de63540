mod common;

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use common::{issued_at, standard_request};
use signet_license::{
    build_claims, canonical_claims_xml, LicenseError, LicenseType, MAX_DURATION_DAYS,
    METADATA_BYTE_BUDGET, MIN_DURATION_DAYS,
};
use signet_types::{LicenseId, ProductId};

fn build(
    request: &signet_license::LicenseRequest,
) -> Result<signet_license::LicenseClaims, LicenseError> {
    build_claims(
        LicenseId::new(),
        ProductId::new(),
        "Acme",
        request,
        issued_at(),
    )
}

// ── License type ─────────────────────────────────────────────────

#[test]
fn builds_standard_license() {
    let claims = build(&standard_request()).unwrap();
    assert_eq!(claims.license_type, LicenseType::Standard);
    assert_eq!(claims.product_name, "Acme");
    assert_eq!(claims.licensee.name, "Bob");
}

#[test]
fn builds_trial_license() {
    let mut request = standard_request();
    request.license_type = "trial".to_string();
    let claims = build(&request).unwrap();
    assert_eq!(claims.license_type, LicenseType::Trial);
}

#[test]
fn rejects_unknown_license_type() {
    let mut request = standard_request();
    request.license_type = "enterprise".to_string();
    assert!(matches!(
        build(&request),
        Err(LicenseError::Validation(_))
    ));
}

// ── Duration boundaries ──────────────────────────────────────────

#[test]
fn duration_zero_fails() {
    let mut request = standard_request();
    request.duration_days = Some(0);
    assert!(matches!(build(&request), Err(LicenseError::Validation(_))));
}

#[test]
fn duration_above_max_fails() {
    let mut request = standard_request();
    request.duration_days = Some(MAX_DURATION_DAYS + 1);
    assert!(matches!(build(&request), Err(LicenseError::Validation(_))));
}

#[test]
fn duration_min_succeeds() {
    let mut request = standard_request();
    request.duration_days = Some(MIN_DURATION_DAYS);
    let claims = build(&request).unwrap();
    let expected = Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap();
    assert_eq!(claims.expires_at, Some(expected));
}

#[test]
fn duration_max_succeeds() {
    let mut request = standard_request();
    request.duration_days = Some(MAX_DURATION_DAYS);
    assert!(build(&request).is_ok());
}

#[test]
fn missing_duration_means_perpetual() {
    let mut request = standard_request();
    request.duration_days = None;
    let claims = build(&request).unwrap();
    assert!(claims.is_perpetual());
    assert_eq!(claims.expires_at, None);
}

#[test]
fn thirty_day_expiration() {
    let claims = build(&standard_request()).unwrap();
    let expected = Utc.with_ymd_and_hms(2026, 3, 31, 12, 0, 0).unwrap();
    assert_eq!(claims.expires_at, Some(expected));
    assert!(!claims.is_expired_at(issued_at()));
    assert!(claims.is_expired_at(expected));
}

// ── Licensee validation ──────────────────────────────────────────

#[test]
fn empty_licensee_name_fails() {
    let mut request = standard_request();
    request.licensee_name = "  ".to_string();
    assert!(matches!(build(&request), Err(LicenseError::Validation(_))));
}

#[test]
fn empty_licensee_email_fails() {
    let mut request = standard_request();
    request.licensee_email = String::new();
    assert!(matches!(build(&request), Err(LicenseError::Validation(_))));
}

#[test]
fn empty_product_name_fails() {
    let result = build_claims(
        LicenseId::new(),
        ProductId::new(),
        "",
        &standard_request(),
        issued_at(),
    );
    assert!(matches!(result, Err(LicenseError::Validation(_))));
}

#[test]
fn blank_company_becomes_none() {
    let mut request = standard_request();
    request.licensee_company = Some("   ".to_string());
    let claims = build(&request).unwrap();
    assert_eq!(claims.licensee.company, None);
}

// ── Metadata byte budget ─────────────────────────────────────────

#[test]
fn oversized_attributes_fail() {
    let mut request = standard_request();
    request.additional_attributes = BTreeMap::from([(
        "notes".to_string(),
        "x".repeat(METADATA_BYTE_BUDGET + 1),
    )]);
    assert!(matches!(build(&request), Err(LicenseError::Validation(_))));
}

#[test]
fn oversized_features_fail() {
    let mut request = standard_request();
    request.product_features = BTreeMap::from([(
        "flags".to_string(),
        "y".repeat(METADATA_BYTE_BUDGET + 1),
    )]);
    assert!(matches!(build(&request), Err(LicenseError::Validation(_))));
}

#[test]
fn metadata_within_budget_is_kept() {
    let mut request = standard_request();
    request.additional_attributes =
        BTreeMap::from([("notes".to_string(), "z".repeat(1000))]);
    let claims = build(&request).unwrap();
    assert_eq!(claims.additional_attributes.len(), 1);
}

// ── Determinism ──────────────────────────────────────────────────

#[test]
fn identical_inputs_give_identical_serializations() {
    let license_id = LicenseId::new();
    let product_id = ProductId::new();
    let request = standard_request();

    let a = build_claims(license_id, product_id, "Acme", &request, issued_at()).unwrap();
    let b = build_claims(license_id, product_id, "Acme", &request, issued_at()).unwrap();

    assert_eq!(a, b);
    assert_eq!(
        canonical_claims_xml(&a).unwrap(),
        canonical_claims_xml(&b).unwrap()
    );
}

#[test]
fn attribute_order_is_sorted_regardless_of_insertion() {
    let mut request = standard_request();
    request.additional_attributes = BTreeMap::from([
        ("zeta".to_string(), "1".to_string()),
        ("alpha".to_string(), "2".to_string()),
    ]);
    let claims = build(&request).unwrap();
    let xml = canonical_claims_xml(&claims).unwrap();
    let alpha = xml.find("alpha").unwrap();
    let zeta = xml.find("zeta").unwrap();
    assert!(alpha < zeta);
}
