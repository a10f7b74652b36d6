//! Student record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Address, Preferences};
use super::lenient::{date_or_timestamp, null_as_default};
use crate::domain::fallback::FallbackContext;
use crate::domain::resource::{Resource, ResourceKind};

/// Recorded gender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Other or undisclosed.
    #[default]
    Other,
}

/// Subscription tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subscription {
    /// No paid plan.
    #[default]
    Free,
    /// Entry paid plan.
    Basic,
    /// Full paid plan.
    Premium,
}

/// A student profile as served by `students/*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
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
    /// Recorded gender.
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: Gender,
    /// Date of birth, if recorded. Timestamps decode to their UTC date.
    #[serde(default, deserialize_with = "date_or_timestamp")]
    pub date_of_birth: Option<NaiveDate>,
    /// Grade or year label.
    #[serde(default)]
    pub grade: Option<String>,
    /// Enrolling organization id.
    #[serde(default)]
    pub organization: Option<String>,
    /// Parent ids.
    #[serde(default, deserialize_with = "null_as_default")]
    pub parents: Vec<String>,
    /// Enrolled course ids.
    #[serde(default, deserialize_with = "null_as_default")]
    pub courses: Vec<String>,
    /// Enrolled class ids.
    #[serde(default, deserialize_with = "null_as_default")]
    pub classes: Vec<String>,
    /// Subscription tier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub subscription: Subscription,
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

impl Resource for Student {
    const KIND: ResourceKind = ResourceKind::Student;

    fn synthesize(ctx: &FallbackContext<'_>) -> Self {
        Self {
            id: ctx.requested_id().to_owned(),
            user_id: ctx.requested_id().to_owned(),
            name: ctx.caller().name_or_empty().to_owned(),
            email: ctx.caller().email_or_empty().to_owned(),
            gender: Gender::Other,
            date_of_birth: None,
            grade: None,
            organization: None,
            parents: Vec::new(),
            courses: Vec::new(),
            classes: Vec::new(),
            subscription: Subscription::Free,
            address: Address::default(),
            preferences: Preferences::default(),
            created_at: None,
            updated_at: None,
        }
    }
}
