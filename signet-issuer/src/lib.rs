//! The narrow capability surface the surrounding service layer calls
//! into.
//!
//! Three workflows, each a synchronous pipeline over explicit inputs:
//!
//! - **Provisioning**: generate a key pair, encrypt the private key
//!   under a fresh passphrase, protect all three secrets independently.
//! - **Issuance**: unprotect the product's key material, build claims,
//!   sign, hand back a downloadable artifact.
//! - **Export/import**: seal bundles with a checksum, verify on the way
//!   back in, and treat identifier collisions as hard conflicts.
//!
//! The caller owns authorization, persistence, retries, and deadlines.
//! Nothing here holds state across calls.

mod error;
mod issue;
mod provision;
mod transfer;

pub use error::{IssuerError, IssuerResult};
pub use issue::{issue_license, IssuedLicense};
pub use provision::{
    provision_product, public_key_pem, unprotect_key_material, KeyMaterial, ProductRecord,
    ProtectedKeyMaterial,
};
pub use transfer::{
    export_license, export_product, import_license, import_product, ImportPolicy,
};

// The one interface that stays stable as a public, versioned contract:
// third-party applications embed it to check licenses offline.
pub use signet_license::{verify_artifact as verify_license, RejectReason, Verdict};
