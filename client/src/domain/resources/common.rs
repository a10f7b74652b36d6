//! Sub-records shared by several resource records.

use serde::{Deserialize, Serialize};

use super::lenient::null_as_default;

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    /// Street and number.
    #[serde(deserialize_with = "null_as_default")]
    pub street: String,
    /// City or town.
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    /// State, region or province.
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    /// Postal or ZIP code.
    #[serde(deserialize_with = "null_as_default")]
    pub postal_code: String,
    /// Country name or code.
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
}

/// Notification channel switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationPreferences {
    /// Email notifications enabled.
    #[serde(deserialize_with = "null_as_default")]
    pub email: bool,
    /// Push notifications enabled.
    #[serde(deserialize_with = "null_as_default")]
    pub push: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            push: false,
        }
    }
}

/// Per-user dashboard preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// BCP 47 language tag.
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    /// IANA timezone name.
    #[serde(deserialize_with = "null_as_default")]
    pub timezone: String,
    /// UI theme (`light`, `dark` or `system`).
    #[serde(deserialize_with = "null_as_default")]
    pub theme: String,
    /// Notification switches.
    #[serde(deserialize_with = "null_as_default")]
    pub notifications: NotificationPreferences,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: "en".to_owned(),
            timezone: "UTC".to_owned(),
            theme: "system".to_owned(),
            notifications: NotificationPreferences::default(),
        }
    }
}

/// Contact details for an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    /// Contact email.
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    /// Named contact, when known.
    pub contact_person: Option<String>,
    /// Contact phone number.
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
}
