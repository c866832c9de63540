//! Export/import transfer objects and the integrity checksums that
//! guard them.
//!
//! A backup bundle travels outside the service (download, re-import,
//! migration between deployments), so every bundle carries a checksum
//! over a fixed, documented field order. The checksum is a tamper/typo
//! detector for transport; the cryptographic boundary remains the
//! license signature, not this digest.

mod bundle;
mod checksum;

pub use bundle::{LicenseBackup, ProductBackup};
pub use checksum::{compute_checksum, verify_checksum, ChecksumError};
