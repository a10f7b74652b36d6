//! Records served by the dashboard backend.
//!
//! Records serialize in camelCase with the backend's `_id` key. Only `_id`
//! is required when decoding; every other field falls back to its serde
//! default. Optional fields always serialize (as `null` when empty) so a
//! synthesized record exposes exactly the keys a decoded one does.

mod admin;
mod common;
pub(crate) mod lenient;
mod organization;
mod parent;
mod student;
mod teacher;

pub use admin::Admin;
pub use common::{Address, ContactInfo, NotificationPreferences, Preferences};
pub use organization::{
    DEFAULT_ORGANIZATION_NAME, Organization, OrganizationStatus, OrganizationType,
};
pub use parent::Parent;
pub use student::{Gender, Student, Subscription};
pub use teacher::{Teacher, TeacherFromUserRequest};
