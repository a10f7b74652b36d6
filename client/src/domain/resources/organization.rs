//! Organization record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Address, ContactInfo};
use super::lenient::null_as_default;
use crate::domain::fallback::FallbackContext;
use crate::domain::resource::{Resource, ResourceKind};

/// Name given to synthesized organizations.
pub const DEFAULT_ORGANIZATION_NAME: &str = "Default Organization";

/// Kind of institution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationType {
    /// Primary or secondary school.
    #[default]
    School,
    /// Higher education.
    University,
    /// Vocational or private training.
    TrainingCenter,
    /// Corporate learning.
    Company,
    /// Anything else.
    Other,
}

/// Account standing of an organization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationStatus {
    /// In good standing.
    #[default]
    Active,
    /// Disabled by the organization.
    Inactive,
    /// Disabled by the platform.
    Suspended,
}

/// An organization as served by `organizations/*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Backend document id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Institution kind.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub organization_type: OrganizationType,
    /// Account standing.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: OrganizationStatus,
    /// Owning user, if assigned.
    #[serde(default)]
    pub owner: Option<String>,
    /// Teacher ids.
    #[serde(default, deserialize_with = "null_as_default")]
    pub teachers: Vec<String>,
    /// Student ids.
    #[serde(default, deserialize_with = "null_as_default")]
    pub students: Vec<String>,
    /// Course ids.
    #[serde(default, deserialize_with = "null_as_default")]
    pub courses: Vec<String>,
    /// Class ids.
    #[serde(default, deserialize_with = "null_as_default")]
    pub classes: Vec<String>,
    /// Contact details.
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact_info: ContactInfo,
    /// Postal address.
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: Address,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Organization {
    const KIND: ResourceKind = ResourceKind::Organization;

    fn synthesize(ctx: &FallbackContext<'_>) -> Self {
        let caller = ctx.caller();
        Self {
            id: ctx.requested_id().to_owned(),
            name: DEFAULT_ORGANIZATION_NAME.to_owned(),
            organization_type: OrganizationType::School,
            status: OrganizationStatus::Active,
            owner: None,
            teachers: Vec::new(),
            students: Vec::new(),
            courses: Vec::new(),
            classes: Vec::new(),
            contact_info: ContactInfo {
                email: caller.email_or_empty().to_owned(),
                contact_person: caller.name.clone(),
                phone: String::new(),
            },
            address: Address::default(),
            created_at: None,
            updated_at: None,
        }
    }
}
