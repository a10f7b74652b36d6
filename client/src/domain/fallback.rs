//! Deterministic default records served when the backend is unavailable.
//!
//! Synthesis is pure: the same kind and context always produce equal
//! records, with identity copied from the context, collections empty,
//! optional references `null` and enumerations at their documented
//! defaults. Timestamps stay `null` so output never depends on the clock.

use serde::Serialize;

use super::caller::CallerUser;
use super::resource::{Resource, ResourceKind};
use super::resources::{Admin, Organization, Parent, Student, Teacher};
use super::user::User;

/// Inputs to fallback synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackContext<'a> {
    requested_id: &'a str,
    caller: &'a CallerUser,
}

impl<'a> FallbackContext<'a> {
    /// Context for a request naming `requested_id`, made by `caller`.
    #[must_use]
    pub const fn new(requested_id: &'a str, caller: &'a CallerUser) -> Self {
        Self {
            requested_id,
            caller,
        }
    }

    /// Identifier the request was for.
    #[must_use]
    pub const fn requested_id(&self) -> &'a str {
        self.requested_id
    }

    /// The caller on whose behalf the request was made.
    #[must_use]
    pub const fn caller(&self) -> &'a CallerUser {
        self.caller
    }
}

/// Any record the backend serves, tagged by family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DomainObject {
    /// An administrator.
    Admin(Admin),
    /// An organization.
    Organization(Organization),
    /// A parent.
    Parent(Parent),
    /// A student.
    Student(Student),
    /// A teacher.
    Teacher(Teacher),
    /// A base user account.
    User(User),
}

impl DomainObject {
    /// Family of the wrapped record.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Admin(_) => ResourceKind::Admin,
            Self::Organization(_) => ResourceKind::Organization,
            Self::Parent(_) => ResourceKind::Parent,
            Self::Student(_) => ResourceKind::Student,
            Self::Teacher(_) => ResourceKind::Teacher,
            Self::User(_) => ResourceKind::User,
        }
    }
}

/// Build the default record of `kind` for `ctx`.
///
/// # Examples
///
/// ```
/// use dashboard_client::domain::{
///     synthesize, CallerUser, DomainObject, FallbackContext, ResourceKind,
/// };
///
/// let caller = CallerUser::with_email("t@x.com").role("teacher");
/// let object = synthesize(ResourceKind::Teacher, &FallbackContext::new("u1", &caller));
/// let DomainObject::Teacher(teacher) = object else {
///     panic!("teacher kind synthesizes a teacher");
/// };
/// assert_eq!(teacher.id, "u1");
/// assert!(teacher.courses.is_empty());
/// ```
#[must_use]
pub fn synthesize(kind: ResourceKind, ctx: &FallbackContext<'_>) -> DomainObject {
    match kind {
        ResourceKind::Admin => DomainObject::Admin(Admin::synthesize(ctx)),
        ResourceKind::Organization => DomainObject::Organization(Organization::synthesize(ctx)),
        ResourceKind::Parent => DomainObject::Parent(Parent::synthesize(ctx)),
        ResourceKind::Student => DomainObject::Student(Student::synthesize(ctx)),
        ResourceKind::Teacher => DomainObject::Teacher(Teacher::synthesize(ctx)),
        ResourceKind::User => DomainObject::User(User::synthesize(ctx)),
    }
}
