//! Resilient resource client for the education dashboard backend.
//!
//! Dashboard surfaces ask this crate for admin, organization, parent,
//! student, teacher and user records. Each lookup is a single credentialed
//! HTTP call; when the call fails for any transport reason the client hands
//! back a deterministically synthesized record of the same shape instead of
//! an error. Only configuration faults and callers without any identity are
//! reported as errors.
//!
//! ```rust,ignore
//! use dashboard_client::{ClientSettings, ResourceClient};
//! use dashboard_client::domain::CallerUser;
//!
//! let settings = ClientSettings::load_from_iter(std::env::args_os())?;
//! let client = ResourceClient::from_settings(&settings)?;
//! let caller = CallerUser::with_email("t@example.com").role("teacher");
//! let teacher = client.teacher_by_user_id("u-1", &caller).await?;
//! ```

pub mod config;
pub mod domain;
pub mod outbound;

pub use config::ClientSettings;
pub use domain::resource_client::{Resolution, ResolvedFrom, ResourceClient};
pub use domain::{ClientError, ConfigurationError, MissingIdentityError};
pub use outbound::http::ReqwestResourceTransport;
