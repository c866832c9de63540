//! Shared test helpers for license tests.

#![allow(dead_code)]

use std::sync::OnceLock;

use chrono::{DateTime, TimeZone, Utc};
use signet_crypto::{KeyPair, Passphrase};
use signet_license::{build_claims, LicenseClaims, LicenseRequest};
use signet_types::{LicenseId, ProductId};

/// A product's stored key material, as the issuing workflow would see
/// it after unprotecting.
pub struct ProductKeys {
    pub passphrase: Passphrase,
    pub private_key_pem: String,
    pub public_key_pem: String,
}

static KEY_PAIR: OnceLock<KeyPair> = OnceLock::new();
static OTHER_KEY_PAIR: OnceLock<KeyPair> = OnceLock::new();
static PRODUCT_KEYS: OnceLock<ProductKeys> = OnceLock::new();

/// Process-wide RSA key pair; generation is expensive, so all tests in
/// a binary share one.
pub fn test_key_pair() -> &'static KeyPair {
    KEY_PAIR.get_or_init(|| KeyPair::generate().expect("generate test key pair"))
}

/// A second, unrelated pair for wrong-key tests.
pub fn other_key_pair() -> &'static KeyPair {
    OTHER_KEY_PAIR.get_or_init(|| KeyPair::generate().expect("generate second test key pair"))
}

/// Encrypted-PEM key material derived from [`test_key_pair`].
pub fn product_keys() -> &'static ProductKeys {
    PRODUCT_KEYS.get_or_init(|| {
        let kp = test_key_pair();
        let passphrase = Passphrase::new("test-product-passphrase");
        ProductKeys {
            private_key_pem: kp.signing_key.to_encrypted_pem(&passphrase).unwrap(),
            public_key_pem: kp.verifying_key.to_pem().unwrap(),
            passphrase,
        }
    })
}

/// A fixed issue timestamp so claims are reproducible across runs.
pub fn issued_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

/// A well-formed standard license request.
pub fn standard_request() -> LicenseRequest {
    LicenseRequest {
        license_type: "standard".to_string(),
        duration_days: Some(30),
        licensee_name: "Bob".to_string(),
        licensee_email: "bob@x.com".to_string(),
        licensee_company: Some("Example Corp".to_string()),
        additional_attributes: [("support".to_string(), "priority".to_string())].into(),
        product_features: [("seats".to_string(), "10".to_string())].into(),
    }
}

/// Builds claims from [`standard_request`] with fresh random IDs.
pub fn build_test_claims() -> LicenseClaims {
    build_claims(
        LicenseId::new(),
        ProductId::new(),
        "Acme",
        &standard_request(),
        issued_at(),
    )
    .unwrap()
}
