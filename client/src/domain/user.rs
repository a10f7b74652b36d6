//! Base user accounts, discriminated by role.

use serde::{Deserialize, Serialize};

use super::caller::CallerUser;
use super::fallback::FallbackContext;
use super::resource::{Resource, ResourceKind};
use super::resources::lenient::null_as_default;

/// Fields every user account carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// Backend document id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Login email.
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// A user account tagged by its `role` field.
///
/// # Examples
///
/// ```
/// use dashboard_client::domain::User;
///
/// let user: User = serde_json::from_str(
///     r#"{ "role": "admin", "_id": "u1", "email": "a@b.com", "name": "Ada" }"#,
/// )?;
/// assert_eq!(user.role(), "admin");
/// assert_eq!(user.account().id, "u1");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum User {
    /// Teaching staff.
    Teacher(UserAccount),
    /// Platform administrator.
    Admin(UserAccount),
    /// Enrolled learner.
    Student(UserAccount),
    /// Parent or guardian.
    Parent(UserAccount),
    /// School account.
    School(UserAccount),
}

impl User {
    /// Build the variant named by `role`, or `None` for unknown roles.
    #[must_use]
    pub fn from_role(role: &str, account: UserAccount) -> Option<Self> {
        Self::variant_for(role).map(|build| build(account))
    }

    fn variant_for(role: &str) -> Option<fn(UserAccount) -> Self> {
        match role.trim() {
            "teacher" => Some(Self::Teacher),
            "admin" => Some(Self::Admin),
            "student" => Some(Self::Student),
            "parent" => Some(Self::Parent),
            "school" => Some(Self::School),
            _ => None,
        }
    }

    /// Role discriminator as sent on the wire.
    #[must_use]
    pub const fn role(&self) -> &'static str {
        match self {
            Self::Teacher(_) => "teacher",
            Self::Admin(_) => "admin",
            Self::Student(_) => "student",
            Self::Parent(_) => "parent",
            Self::School(_) => "school",
        }
    }

    /// Shared account fields.
    #[must_use]
    pub const fn account(&self) -> &UserAccount {
        match self {
            Self::Teacher(account)
            | Self::Admin(account)
            | Self::Student(account)
            | Self::Parent(account)
            | Self::School(account) => account,
        }
    }

    /// Project the account into the caller record used for request headers.
    #[must_use]
    pub fn to_caller(&self) -> CallerUser {
        let account = self.account();
        CallerUser {
            id: Some(account.id.clone()),
            email: Some(account.email.clone()),
            role: Some(self.role().to_owned()),
            name: Some(account.name.clone()),
        }
    }
}

impl Resource for User {
    const KIND: ResourceKind = ResourceKind::User;

    fn synthesize(ctx: &FallbackContext<'_>) -> Self {
        let caller = ctx.caller();
        let account = UserAccount {
            id: ctx.requested_id().to_owned(),
            email: caller.email_or_empty().to_owned(),
            name: caller.name_or_empty().to_owned(),
        };
        let build = caller
            .role
            .as_deref()
            .and_then(Self::variant_for)
            .unwrap_or(Self::Teacher);
        build(account)
    }
}
