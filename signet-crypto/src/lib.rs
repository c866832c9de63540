//! Cryptographic primitives for the Signet licensing engine.
//!
//! This crate provides:
//! - RSA key pair generation (one pair per product)
//! - Passphrase-encrypted PKCS#8 PEM encoding of private keys
//! - PKCS#1 v1.5 / SHA-256 signing and verification primitives
//! - Random passphrase generation with zeroization on drop
//! - At-rest secret protection behind the `SecretProtector` capability
//!
//! Everything here is a pure, synchronous transform over explicit
//! inputs. Nothing holds state across calls, so all operations may be
//! invoked concurrently without coordination.

mod error;
mod keypair;
mod passphrase;
mod protect;

pub use error::{KeyError, KeyResult};
pub use keypair::{validate_key_pair, KeyPair, SigningKey, VerifyingKey, RSA_KEY_BITS};
pub use passphrase::{Passphrase, PASSPHRASE_LEN};
pub use protect::{
    KeyringProtector, MasterKey, PassthroughProtector, ProtectionError, ProtectionResult,
    SecretProtector, MASTER_KEY_SIZE,
};
