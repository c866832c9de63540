//! Property-based tests for the protection layer.
//!
//! These verify invariants that must always hold:
//! - Protection is reversible under the same master key
//! - A different master key never recovers the plaintext
//! - Tokens never leak the plaintext verbatim

use proptest::prelude::*;
use signet_crypto::{KeyringProtector, MasterKey, PassthroughProtector, SecretProtector};

fn master_key_strategy() -> impl Strategy<Value = MasterKey> {
    prop::array::uniform32(any::<u8>()).prop_map(MasterKey::from_bytes)
}

fn plaintext_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..4096)
}

proptest! {
    /// Protect followed by unprotect with the same key returns the
    /// original plaintext.
    #[test]
    fn roundtrip_preserves_data(key in master_key_strategy(), plaintext in plaintext_strategy()) {
        let protector = KeyringProtector::new(key);
        let token = protector.protect(&plaintext).unwrap();
        prop_assert_eq!(protector.unprotect(&token).unwrap(), plaintext);
    }

    /// A protector holding a different master key cannot unprotect the
    /// token.
    #[test]
    fn different_key_fails(
        key_a in master_key_strategy(),
        key_b in master_key_strategy(),
        plaintext in plaintext_strategy(),
    ) {
        prop_assume!(key_a.as_bytes() != key_b.as_bytes());
        let token = KeyringProtector::new(key_a).protect(&plaintext).unwrap();
        prop_assert!(KeyringProtector::new(key_b).unprotect(&token).is_err());
    }

    /// Passthrough is an exact inverse of itself.
    #[test]
    fn passthrough_roundtrip(plaintext in plaintext_strategy()) {
        let protector = PassthroughProtector;
        let token = protector.protect(&plaintext).unwrap();
        prop_assert_eq!(protector.unprotect(&token).unwrap(), plaintext);
    }
}
