//! Parent or guardian record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Address, Preferences};
use super::lenient::null_as_default;
use crate::domain::fallback::FallbackContext;
use crate::domain::resource::{Resource, ResourceKind};

/// A parent profile as served by `parents/*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parent {
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
    /// Contact phone.
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    /// Student ids of the parent's children.
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<String>,
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

impl Resource for Parent {
    const KIND: ResourceKind = ResourceKind::Parent;

    fn synthesize(ctx: &FallbackContext<'_>) -> Self {
        Self {
            id: ctx.requested_id().to_owned(),
            user_id: ctx.requested_id().to_owned(),
            name: ctx.caller().name_or_empty().to_owned(),
            email: ctx.caller().email_or_empty().to_owned(),
            phone: String::new(),
            children: Vec::new(),
            address: Address::default(),
            preferences: Preferences::default(),
            created_at: None,
            updated_at: None,
        }
    }
}
