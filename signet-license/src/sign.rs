//! Produces a signed license artifact from validated claims.

use base64::{engine::general_purpose::STANDARD, Engine};
use signet_crypto::{Passphrase, SigningKey};

use crate::artifact::{canonical_claims_xml, SignedLicenseArtifact};
use crate::claims::LicenseClaims;
use crate::error::{LicenseError, LicenseResult};

/// Signs `claims` with the product's passphrase-encrypted private key.
///
/// A pure function over the supplied key material: it never touches
/// persistent storage. Storing (or serving) the artifact is the
/// caller's responsibility.
///
/// # Errors
///
/// - [`LicenseError::KeyMaterial`] if the passphrase does not decrypt
///   the private key, or the key is unusable. Never a silently
///   badly-signed artifact.
/// - [`LicenseError::Signing`] for an underlying cryptographic failure.
pub fn sign_claims(
    claims: &LicenseClaims,
    encrypted_private_key_pem: &str,
    passphrase: &Passphrase,
) -> LicenseResult<SignedLicenseArtifact> {
    let signing_key = SigningKey::from_encrypted_pem(encrypted_private_key_pem, passphrase)
        .map_err(|e| LicenseError::KeyMaterial(e.to_string()))?;

    let message = canonical_claims_xml(claims)?;
    let signature = signing_key
        .sign(message.as_bytes())
        .map_err(|e| LicenseError::Signing(e.to_string()))?;

    Ok(SignedLicenseArtifact::new(
        claims.clone(),
        STANDARD.encode(signature),
    ))
}
