//! Shared test helpers for crypto tests.

#![allow(dead_code)]

use std::sync::OnceLock;

use signet_crypto::KeyPair;

static KEY_PAIR: OnceLock<KeyPair> = OnceLock::new();
static OTHER_KEY_PAIR: OnceLock<KeyPair> = OnceLock::new();

/// Returns a process-wide RSA key pair. Generation is expensive, so all
/// tests in a binary share one pair.
pub fn test_key_pair() -> &'static KeyPair {
    KEY_PAIR.get_or_init(|| KeyPair::generate().expect("generate test key pair"))
}

/// Returns a second, unrelated key pair for mismatch tests.
pub fn other_key_pair() -> &'static KeyPair {
    OTHER_KEY_PAIR.get_or_init(|| KeyPair::generate().expect("generate second test key pair"))
}
