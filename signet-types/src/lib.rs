//! Core type definitions for Signet.
//!
//! This crate defines the identifiers shared by every part of the
//! licensing engine: product and license IDs, both random UUIDs.
//!
//! Domain-specific types (claims, key material, backup bundles) belong
//! to their owning crates, not here.

mod ids;

pub use ids::{LicenseId, ProductId};
