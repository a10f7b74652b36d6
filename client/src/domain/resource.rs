//! Resource kinds, endpoints and descriptors.
//!
//! A descriptor pairs the endpoint to call with the factory that produces the
//! same-shaped default when the call fails. One generic client operation
//! consumes descriptors for every resource type.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::fallback::FallbackContext;

/// The resource families served by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Platform administrators.
    Admin,
    /// Schools and other organizations.
    Organization,
    /// Parents and guardians.
    Parent,
    /// Students.
    Student,
    /// Teachers.
    Teacher,
    /// Base user accounts.
    User,
}

impl ResourceKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Admin,
        Self::Organization,
        Self::Parent,
        Self::Student,
        Self::Teacher,
        Self::User,
    ];

    /// Collection path segment under the base URL.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Admin => "admins",
            Self::Organization => "organizations",
            Self::Parent => "parents",
            Self::Student => "students",
            Self::Teacher => "teachers",
            Self::User => "users",
        }
    }

    /// `x-user-type` sent when the caller has no role of its own.
    #[must_use]
    pub const fn default_caller_role(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Parent => "parent",
            Self::Student => "student",
            Self::Organization | Self::Teacher | Self::User => "teacher",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

/// Which backend route a descriptor targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET {collection}/user/{id}`; users are addressed as `GET users/{id}`.
    ByUserId(String),
    /// `GET {collection}/me`.
    Me,
    /// `POST {collection}/from-user`.
    FromUser,
}

impl Endpoint {
    /// Path segments below the base URL for `kind`.
    #[must_use]
    pub fn segments(&self, kind: ResourceKind) -> Vec<&str> {
        let collection = kind.collection();
        match (self, kind) {
            (Self::ByUserId(id), ResourceKind::User) => vec![collection, id.as_str()],
            (Self::ByUserId(id), _) => vec![collection, "user", id.as_str()],
            (Self::Me, _) => vec![collection, "me"],
            (Self::FromUser, _) => vec![collection, "from-user"],
        }
    }

    /// Whether the route creates a record.
    #[must_use]
    pub const fn is_creation(&self) -> bool {
        matches!(self, Self::FromUser)
    }

    /// Identifier the caller asked for, if the route names one.
    #[must_use]
    pub fn requested_id(&self) -> Option<&str> {
        match self {
            Self::ByUserId(id) => Some(id.as_str()),
            Self::Me | Self::FromUser => None,
        }
    }
}

/// A record type served by the backend.
pub trait Resource: Serialize + DeserializeOwned + Send + 'static {
    /// The family this record belongs to.
    const KIND: ResourceKind;

    /// Whether `POST {collection}/from-user` exists for this record.
    const CREATABLE_FROM_USER: bool = false;

    /// Build the deterministic default record for `ctx`.
    fn synthesize(ctx: &FallbackContext<'_>) -> Self;

    /// Descriptor for `GET {collection}/user/{id}`.
    fn by_user_id(id: impl Into<String>) -> ResourceDescriptor<Self> {
        ResourceDescriptor::new(Endpoint::ByUserId(id.into()))
    }

    /// Descriptor for `GET {collection}/me`.
    #[must_use]
    fn me() -> ResourceDescriptor<Self> {
        ResourceDescriptor::new(Endpoint::Me)
    }
}

/// Factory producing a fallback record.
pub type DefaultFactory<R> = fn(&FallbackContext<'_>) -> R;

/// An endpoint paired with its fallback factory.
pub struct ResourceDescriptor<R> {
    endpoint: Endpoint,
    default_factory: DefaultFactory<R>,
}

impl<R: Resource> ResourceDescriptor<R> {
    /// Describe `endpoint` using the record type's own synthesizer.
    #[must_use]
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            default_factory: R::synthesize,
        }
    }

    /// Replace the fallback factory.
    #[must_use]
    pub fn with_default_factory(mut self, default_factory: DefaultFactory<R>) -> Self {
        self.default_factory = default_factory;
        self
    }

    /// The resource family.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        R::KIND
    }

    /// The targeted route.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Produce the fallback record for `ctx`.
    #[must_use]
    pub fn fallback(&self, ctx: &FallbackContext<'_>) -> R {
        (self.default_factory)(ctx)
    }
}

impl<R> fmt::Debug for ResourceDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceDescriptor")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    //! Route shape coverage.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::teacher_by_user(ResourceKind::Teacher, Endpoint::ByUserId("u1".to_owned()), vec!["teachers", "user", "u1"])]
    #[case::user_by_id(ResourceKind::User, Endpoint::ByUserId("u1".to_owned()), vec!["users", "u1"])]
    #[case::organization_me(ResourceKind::Organization, Endpoint::Me, vec!["organizations", "me"])]
    #[case::teacher_from_user(ResourceKind::Teacher, Endpoint::FromUser, vec!["teachers", "from-user"])]
    fn endpoints_render_backend_routes(
        #[case] kind: ResourceKind,
        #[case] endpoint: Endpoint,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(endpoint.segments(kind), expected);
    }

    #[test]
    fn only_from_user_creates() {
        assert!(Endpoint::FromUser.is_creation());
        assert!(!Endpoint::Me.is_creation());
        assert!(!Endpoint::ByUserId("x".to_owned()).is_creation());
    }

    #[test]
    fn collections_are_distinct() {
        let mut collections: Vec<_> = ResourceKind::ALL
            .iter()
            .map(|kind| kind.collection())
            .collect();
        collections.sort_unstable();
        collections.dedup();
        assert_eq!(collections.len(), ResourceKind::ALL.len());
    }
}
