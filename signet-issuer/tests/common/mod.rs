//! Shared test helpers for issuer workflow tests.

#![allow(dead_code)]

use std::sync::OnceLock;

use chrono::{DateTime, TimeZone, Utc};
use signet_crypto::{KeyringProtector, MasterKey};
use signet_issuer::{provision_product, ProductRecord};
use signet_license::LicenseRequest;

static PROTECTOR: OnceLock<KeyringProtector> = OnceLock::new();
static ACME: OnceLock<ProductRecord> = OnceLock::new();
static GLOBEX: OnceLock<ProductRecord> = OnceLock::new();

/// Installs a fmt subscriber once so `RUST_LOG=debug` shows workflow
/// traces during test runs.
pub fn init_tracing() {
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// A keyring protector with a fixed master key, shared by all tests.
pub fn protector() -> &'static KeyringProtector {
    PROTECTOR.get_or_init(|| KeyringProtector::new(MasterKey::from_bytes([7u8; 32])))
}

/// A provisioned "Acme" product. Key generation is expensive, so all
/// tests in the binary share one record.
pub fn acme_product() -> &'static ProductRecord {
    init_tracing();
    ACME.get_or_init(|| provision_product("Acme", protector()).expect("provision Acme"))
}

/// A second product with unrelated key material.
pub fn globex_product() -> &'static ProductRecord {
    init_tracing();
    GLOBEX.get_or_init(|| provision_product("Globex", protector()).expect("provision Globex"))
}

/// A fixed issue timestamp so expirations are predictable.
pub fn issued_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

/// A well-formed standard license request for Bob.
pub fn standard_request() -> LicenseRequest {
    LicenseRequest {
        license_type: "standard".to_string(),
        duration_days: Some(30),
        licensee_name: "Bob".to_string(),
        licensee_email: "bob@x.com".to_string(),
        licensee_company: None,
        additional_attributes: Default::default(),
        product_features: [("seats".to_string(), "10".to_string())].into(),
    }
}
