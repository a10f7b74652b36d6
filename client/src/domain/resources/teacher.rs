//! Teacher record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Address, Preferences};
use super::lenient::null_as_default;
use crate::domain::fallback::FallbackContext;
use crate::domain::resource::{Resource, ResourceKind};

/// A teacher profile as served by `teachers/*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    /// Backend document id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Owning user account.
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Login email.
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    /// Employing organization id.
    #[serde(default)]
    pub organization: Option<String>,
    /// Subjects taught.
    #[serde(default, deserialize_with = "null_as_default")]
    pub subjects: Vec<String>,
    /// Owned course ids.
    #[serde(default, deserialize_with = "null_as_default")]
    pub courses: Vec<String>,
    /// Taught class ids.
    #[serde(default, deserialize_with = "null_as_default")]
    pub classes: Vec<String>,
    /// Student ids.
    #[serde(default, deserialize_with = "null_as_default")]
    pub students: Vec<String>,
    /// Free-form biography.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bio: String,
    /// Postal address.
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: Address,
    /// Dashboard preferences.
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferences: Preferences,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Teacher {
    const KIND: ResourceKind = ResourceKind::Teacher;
    const CREATABLE_FROM_USER: bool = true;

    fn synthesize(ctx: &FallbackContext<'_>) -> Self {
        Self {
            id: ctx.requested_id().to_owned(),
            user_id: ctx.requested_id().to_owned(),
            name: ctx.caller().name_or_empty().to_owned(),
            email: ctx.caller().email_or_empty().to_owned(),
            organization: None,
            subjects: Vec::new(),
            courses: Vec::new(),
            classes: Vec::new(),
            students: Vec::new(),
            bio: String::new(),
            address: Address::default(),
            preferences: Preferences::default(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// Body of `POST teachers/from-user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherFromUserRequest {
    /// User account to promote.
    pub user_id: String,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
}
