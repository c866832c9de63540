//! Offline verification of signed license artifacts.
//!
//! Verification needs only the artifact and the product's public key.
//! It never consults the private key or passphrase, so it is usable by
//! a party (e.g. the licensed application itself) that holds nothing
//! but the public key. This entrypoint is a stable, versioned contract:
//! third-party applications embed it.

use base64::{engine::general_purpose::STANDARD, Engine};
use signet_crypto::VerifyingKey;

use crate::artifact::{
    canonical_claims_xml, SignedLicenseArtifact, ARTIFACT_VERSION, SIGNATURE_ALGORITHM,
};
use crate::claims::LicenseClaims;
use crate::error::{LicenseError, LicenseResult};

/// Why a decodable artifact was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The signature field is present but empty. An unsigned document
    /// is never trusted.
    EmptySignature,
    /// The artifact declares a scheme other than the fixed one.
    UnsupportedAlgorithm,
    /// The artifact declares a schema version this verifier does not
    /// speak.
    UnsupportedVersion,
    /// The signature does not match the claims under the given key.
    SignatureMismatch,
}

/// Outcome of verifying a decodable artifact.
///
/// A cryptographic mismatch is a value, not an error: only a document
/// that cannot be decoded at all surfaces as [`LicenseError::Parse`].
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The signature is valid; these claims are trustworthy.
    Valid(LicenseClaims),
    /// The artifact is not trustworthy.
    Invalid(RejectReason),
}

impl Verdict {
    /// Returns true for a valid artifact.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns the verified claims, if valid.
    #[must_use]
    pub fn claims(&self) -> Option<&LicenseClaims> {
        match self {
            Self::Valid(claims) => Some(claims),
            Self::Invalid(_) => None,
        }
    }
}

/// Verifies a serialized artifact against the product's public key.
///
/// # Errors
///
/// [`LicenseError::Parse`] if the document, the signature encoding, or
/// the public key PEM cannot be decoded. Everything else is a
/// [`Verdict`].
pub fn verify_artifact(xml: &str, public_key_pem: &str) -> LicenseResult<Verdict> {
    let artifact = SignedLicenseArtifact::from_xml(xml)?;
    verify_signed(&artifact, public_key_pem)
}

/// Verifies an already-parsed artifact against the product's public key.
pub fn verify_signed(
    artifact: &SignedLicenseArtifact,
    public_key_pem: &str,
) -> LicenseResult<Verdict> {
    let verifying_key =
        VerifyingKey::from_pem(public_key_pem).map_err(|e| LicenseError::Parse(e.to_string()))?;

    if artifact.version() != ARTIFACT_VERSION {
        return Ok(Verdict::Invalid(RejectReason::UnsupportedVersion));
    }
    if artifact.algorithm() != SIGNATURE_ALGORITHM {
        return Ok(Verdict::Invalid(RejectReason::UnsupportedAlgorithm));
    }

    let signature_base64 = artifact.signature_base64().trim();
    if signature_base64.is_empty() {
        return Ok(Verdict::Invalid(RejectReason::EmptySignature));
    }
    let signature = STANDARD
        .decode(signature_base64)
        .map_err(|e| LicenseError::Parse(format!("invalid signature base64: {e}")))?;

    let message = canonical_claims_xml(artifact.claims())?;
    if verifying_key.verify(message.as_bytes(), &signature) {
        Ok(Verdict::Valid(artifact.claims().clone()))
    } else {
        Ok(Verdict::Invalid(RejectReason::SignatureMismatch))
    }
}
