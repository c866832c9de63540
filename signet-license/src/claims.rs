//! License claims: the structured, signed payload of a license.
//!
//! Every field that participates in the signature serializes
//! deterministically: struct fields in declaration order, map entries
//! in sorted key order, timestamps in a fixed second-precision format.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use signet_types::{LicenseId, ProductId};

use crate::error::LicenseError;

/// The license category. A closed set, validated at request time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseType {
    /// Time-limited evaluation license.
    Trial,
    /// Regular paid license.
    Standard,
}

impl LicenseType {
    /// Returns the wire name of this license type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trial => "trial",
            Self::Standard => "standard",
        }
    }
}

impl FromStr for LicenseType {
    type Err = LicenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trial" => Ok(Self::Trial),
            "standard" => Ok(Self::Standard),
            other => Err(LicenseError::Validation(format!(
                "unknown license type '{other}' (expected 'trial' or 'standard')"
            ))),
        }
    }
}

/// The entity a license is issued to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Licensee {
    /// Person or contact name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Contact email address.
    #[serde(rename = "Email")]
    pub email: String,
    /// Company name, if licensed to an organization.
    #[serde(rename = "Company", skip_serializing_if = "Option::is_none", default)]
    pub company: Option<String>,
}

/// An ordered set of name/value metadata entries.
///
/// Stored sorted by name so the canonical serialization has stable key
/// order regardless of how the caller assembled the input map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    #[serde(rename = "Attribute", default)]
    entries: Vec<AttributeEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct AttributeEntry {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "$text", default)]
    value: String,
}

impl AttributeSet {
    /// Builds a set from a map, in sorted key order.
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self {
            entries: map
                .iter()
                .map(|(name, value)| AttributeEntry {
                    name: name.clone(),
                    value: value.clone(),
                })
                .collect(),
        }
    }

    /// Returns the entries as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|e| (e.name.clone(), e.value.clone()))
            .collect()
    }

    /// Looks up a value by entry name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value.as_str())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The structured license payload bound into the signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "License")]
pub struct LicenseClaims {
    /// Unique identifier of this license instance.
    #[serde(rename = "Id")]
    pub license_id: LicenseId,
    /// Issuing product.
    #[serde(rename = "ProductId")]
    pub product_id: ProductId,
    /// Issuing product's display name.
    #[serde(rename = "ProductName")]
    pub product_name: String,
    /// License category.
    #[serde(rename = "Type")]
    pub license_type: LicenseType,
    /// Absolute expiration, or `None` for perpetual licenses.
    /// Second precision; immutable once set.
    #[serde(
        rename = "Expiration",
        with = "xml_datetime",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub expires_at: Option<DateTime<Utc>>,
    /// Who the license is issued to.
    #[serde(rename = "Licensee")]
    pub licensee: Licensee,
    /// Free-form metadata (size-bounded at build time).
    #[serde(rename = "AdditionalAttributes", default)]
    pub additional_attributes: AttributeSet,
    /// Feature-flag style entitlements (size-bounded at build time).
    #[serde(rename = "ProductFeatures", default)]
    pub product_features: AttributeSet,
}

impl LicenseClaims {
    /// Returns true if the license never expires.
    #[must_use]
    pub fn is_perpetual(&self) -> bool {
        self.expires_at.is_none()
    }

    /// Returns true if the license is expired at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }
}

/// Fixed second-precision UTC timestamp format for the XML artifact.
pub(crate) mod xml_datetime {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let naive = NaiveDateTime::parse_from_str(&s, FORMAT)
            .map_err(|e| serde::de::Error::custom(format!("invalid expiration '{s}': {e}")))?;
        Ok(Some(naive.and_utc()))
    }
}
