//! License document construction, signing, and offline verification.
//!
//! This crate assembles validated license claims, signs them with a
//! product's RSA key, and verifies the resulting artifact:
//! - Claims are canonically serialized (stable field order, sorted map
//!   keys, fixed timestamp format) so verification is reproducible
//!   across implementations and platforms
//! - Signatures use RSA PKCS#1 v1.5 / SHA-256, tagged in the artifact
//!   as a versioned scheme
//! - The artifact is a single self-describing XML file containing
//!   claims plus signature, and never the private key or passphrase
//! - Verification needs only the artifact and the product's public key,
//!   so it works entirely offline
//!
//! # Artifact format
//!
//! ```xml
//! <SignedLicense version="1">
//!   <License>
//!     <Id>..</Id><ProductId>..</ProductId>..
//!   </License>
//!   <Signature algorithm="rsa-sha256-pkcs1v15">base64</Signature>
//! </SignedLicense>
//! ```

mod artifact;
mod builder;
mod claims;
mod error;
mod sign;
mod verify;

pub use artifact::{
    canonical_claims_xml, SignedLicenseArtifact, ARTIFACT_VERSION, CONTENT_TYPE,
    SIGNATURE_ALGORITHM,
};
pub use builder::{
    build_claims, LicenseRequest, MAX_DURATION_DAYS, METADATA_BYTE_BUDGET, MIN_DURATION_DAYS,
};
pub use claims::{AttributeSet, LicenseClaims, LicenseType, Licensee};
pub use error::{LicenseError, LicenseResult};
pub use sign::sign_claims;
pub use verify::{verify_artifact, verify_signed, RejectReason, Verdict};
