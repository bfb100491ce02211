//! Official records as returned by Cicero's `/official` endpoint.
//!
//! Cicero data is loosely structured: any field may be missing or `null`,
//! and list fields occasionally arrive as `null` instead of `[]`. Every field
//! here is optional or defaults to empty so a malformed record still
//! deserializes.

use serde::{Deserialize, Deserializer, Serialize};

/// A single elected or appointed office-holder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Official {
    pub first_name: Option<String>,
    pub middle_initial: Option<String>,
    pub last_name: Option<String>,
    pub name_suffix: Option<String>,
    pub party: Option<String>,
    pub office: Option<Office>,
    pub photo_origin_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub urls: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub addresses: Vec<PostalAddress>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email_addresses: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub identifiers: Vec<Identifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Office {
    pub title: Option<String>,
    pub district: Option<District>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct District {
    /// Cicero district class, e.g. `LOCAL_EXEC`, `STATE_UPPER`, `NATIONAL_LOWER`.
    pub district_type: Option<String>,
    pub label: Option<String>,
    pub city: Option<String>,
}

/// Mailing address of an office. Only the phone number is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub phone_1: Option<String>,
}

/// External identifier such as a social-media handle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub identifier_type: Option<String>,
    pub identifier_value: Option<String>,
}

impl Official {
    /// District type, or `""` when the office or district is missing.
    pub fn district_type(&self) -> &str {
        self.district()
            .and_then(|d| d.district_type.as_deref())
            .unwrap_or("")
    }

    /// Office title, or `""` when missing.
    pub fn title(&self) -> &str {
        self.office
            .as_ref()
            .and_then(|o| o.title.as_deref())
            .unwrap_or("")
    }

    pub fn district(&self) -> Option<&District> {
        self.office.as_ref().and_then(|o| o.district.as_ref())
    }
}

/// Treat an empty string the same as an absent one.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
