//! Domain types and the fetch-with-fallback client.
//!
//! Purpose: describe the backend's records, the caller identity sent with
//! every request and the deterministic defaults served when a request fails.
//! HTTP specifics stay behind the [`ports::ResourceTransport`] port.
//!
//! Public surface:
//! - `CallerUser` / `CallerIdentity`: who is asking, and the headers sent.
//! - `Resource` / `ResourceDescriptor`: what to fetch and how to default it.
//! - `ResourceClient`: the single generic fetch operation plus typed helpers.
//! - `synthesize`: default record for any `ResourceKind`.

pub mod caller;
pub mod error;
pub mod fallback;
pub mod ports;
pub mod resource;
pub mod resource_client;
pub mod resources;
pub mod user;

pub use self::caller::{
    CallerIdentity, CallerUser, IdentityHeaders, USER_ID_HEADER, USER_TYPE_HEADER,
};
pub use self::error::{ClientError, ConfigurationError, MissingIdentityError};
pub use self::fallback::{DomainObject, FallbackContext, synthesize};
pub use self::resource::{DefaultFactory, Endpoint, Resource, ResourceDescriptor, ResourceKind};
pub use self::resource_client::{Resolution, ResolvedFrom, ResourceClient};
pub use self::resources::{
    Address, Admin, ContactInfo, DEFAULT_ORGANIZATION_NAME, Gender, NotificationPreferences,
    Organization, OrganizationStatus, OrganizationType, Parent, Preferences, Student,
    Subscription, Teacher, TeacherFromUserRequest,
};
pub use self::user::{User, UserAccount};
