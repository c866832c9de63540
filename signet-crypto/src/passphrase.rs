//! Random passphrase generation for private key encryption.
//!
//! The passphrase is a secondary secret: it encrypts the private key
//! itself, independent of at-rest protection. It is generated once per
//! product and stored only in protected form.

use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of generated passphrases in characters.
pub const PASSPHRASE_LEN: usize = 32;

/// A private key passphrase with automatic zeroization on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Passphrase(String);

impl Passphrase {
    /// Generates a random alphanumeric passphrase from the OS entropy
    /// source.
    #[must_use]
    pub fn random() -> Self {
        let chars: String = OsRng
            .sample_iter(&Alphanumeric)
            .take(PASSPHRASE_LEN)
            .map(char::from)
            .collect();
        Self(chars)
    }

    /// Wraps an existing passphrase string (e.g. one unprotected from
    /// storage).
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self(passphrase.into())
    }

    /// Returns the passphrase as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the passphrase bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Passphrase").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_passphrases_differ() {
        let a = Passphrase::random();
        let b = Passphrase::random();
        assert_ne!(a.as_str(), b.as_str());
    }

    #[test]
    fn random_passphrase_has_fixed_length() {
        assert_eq!(Passphrase::random().as_str().len(), PASSPHRASE_LEN);
    }

    #[test]
    fn debug_is_redacted() {
        let p = Passphrase::new("super-secret");
        let printed = format!("{p:?}");
        assert!(!printed.contains("super-secret"));
    }
}
