//! The signed license artifact: one self-describing XML file holding
//! claims plus signature.
//!
//! The artifact carries everything a verifier needs to locate the
//! matching public key (at minimum the product ID) and never contains
//! the private key or passphrase.

use serde::{Deserialize, Serialize};

use crate::claims::{AttributeSet, LicenseClaims};
use crate::error::{LicenseError, LicenseResult};

/// Artifact schema version.
pub const ARTIFACT_VERSION: u32 = 1;

/// The fixed signature scheme tag embedded in every artifact.
/// Changing the scheme means a new artifact version, not an in-place
/// swap: third-party verifiers embed this contract.
pub const SIGNATURE_ALGORITHM: &str = "rsa-sha256-pkcs1v15";

/// MIME type of the downloadable artifact.
pub const CONTENT_TYPE: &str = "application/xml";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// A signed, self-contained license document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "SignedLicense")]
pub struct SignedLicenseArtifact {
    #[serde(rename = "@version")]
    version: u32,
    #[serde(rename = "License")]
    claims: LicenseClaims,
    #[serde(rename = "Signature")]
    signature: SignatureBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SignatureBlock {
    #[serde(rename = "@algorithm")]
    algorithm: String,
    #[serde(rename = "$text", default)]
    value: String,
}

impl SignedLicenseArtifact {
    pub(crate) fn new(claims: LicenseClaims, signature_base64: String) -> Self {
        Self {
            version: ARTIFACT_VERSION,
            claims,
            signature: SignatureBlock {
                algorithm: SIGNATURE_ALGORITHM.to_string(),
                value: signature_base64,
            },
        }
    }

    /// Returns the embedded claims. These are unverified until the
    /// artifact passes [`crate::verify_signed`].
    #[must_use]
    pub fn claims(&self) -> &LicenseClaims {
        &self.claims
    }

    /// Returns the artifact schema version.
    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Returns the signature scheme tag.
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.signature.algorithm
    }

    /// Returns the base64-encoded signature value.
    #[must_use]
    pub fn signature_base64(&self) -> &str {
        &self.signature.value
    }

    /// Serializes the artifact to its XML document form.
    pub fn to_xml(&self) -> LicenseResult<String> {
        let body = quick_xml::se::to_string(self)
            .map_err(|e| LicenseError::Serialization(e.to_string()))?;
        Ok(format!("{XML_DECLARATION}{body}"))
    }

    /// Parses an artifact from its XML document form.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::Parse`] if the document cannot be
    /// decoded. A decodable document with a bad signature is not a
    /// parse error; that is [`crate::verify_signed`]'s verdict to make.
    pub fn from_xml(xml: &str) -> LicenseResult<Self> {
        quick_xml::de::from_str(xml).map_err(|e| LicenseError::Parse(e.to_string()))
    }

    /// Download filename for the artifact: `{productName}-{licenseId}.xml`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}-{}.xml", self.claims.product_name, self.claims.license_id)
    }
}

/// Canonically serializes claims to the exact bytes the signature
/// covers: fields in declaration order, map entries in sorted key
/// order, timestamps at second precision. Both signer and verifier
/// derive the message from this function, never from raw file bytes.
pub fn canonical_claims_xml(claims: &LicenseClaims) -> LicenseResult<String> {
    quick_xml::se::to_string(claims).map_err(|e| LicenseError::Serialization(e.to_string()))
}

/// Serialized size in bytes of a metadata set, for budget enforcement.
pub(crate) fn serialized_len(set: &AttributeSet) -> LicenseResult<usize> {
    let xml =
        quick_xml::se::to_string(set).map_err(|e| LicenseError::Serialization(e.to_string()))?;
    Ok(xml.len())
}
