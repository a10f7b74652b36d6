//! Fetch-with-fallback client over the resource transport port.
//!
//! Every operation makes at most one backend request. Configuration faults
//! and callers without identity are reported before the transport is
//! touched; everything that goes wrong afterwards is logged and replaced with
//! the descriptor's synthesized record.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::caller::{CallerIdentity, CallerUser};
use super::error::{ClientError, ConfigurationError};
use super::fallback::FallbackContext;
use super::ports::{RequestMethod, ResourceRequest, ResourceTransport, TransportFailure};
use super::resource::{Endpoint, Resource, ResourceDescriptor, ResourceKind};
use super::resources::{Admin, Organization, Parent, Student, Teacher, TeacherFromUserRequest};
use super::user::User;

/// Where a returned record came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedFrom {
    /// Decoded from a successful backend response.
    Backend,
    /// Synthesized after the backend request failed.
    Fallback(TransportFailure),
}

/// A record together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<R> {
    value: R,
    source: ResolvedFrom,
}

impl<R> Resolution<R> {
    /// The record.
    #[must_use]
    pub const fn value(&self) -> &R {
        &self.value
    }

    /// Provenance of the record.
    #[must_use]
    pub const fn source(&self) -> &ResolvedFrom {
        &self.source
    }

    /// Whether the record was synthesized.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.source, ResolvedFrom::Fallback(_))
    }

    /// Take the record, discarding provenance.
    #[must_use]
    pub fn into_value(self) -> R {
        self.value
    }
}

/// Client for the dashboard backend's resource endpoints.
///
/// Build one per process and share it; clones share the transport and its
/// connection pool.
pub struct ResourceClient<T> {
    base_url: Result<Url, ConfigurationError>,
    transport: Arc<T>,
}

impl<T> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T> std::fmt::Debug for ResourceClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl<T: ResourceTransport> ResourceClient<T> {
    /// Build a client from an already validated base URL.
    #[must_use]
    pub fn new(base_url: Url, transport: T) -> Self {
        Self::with_base_url(Ok(base_url), transport)
    }

    /// Build a client whose base URL may be unusable.
    ///
    /// A configuration error is kept and returned from every operation
    /// before the transport is called.
    #[must_use]
    pub fn with_base_url(base_url: Result<Url, ConfigurationError>, transport: T) -> Self {
        Self {
            base_url,
            transport: Arc::new(transport),
        }
    }

    /// Fetch the record `descriptor` names, falling back to its default.
    ///
    /// Creation routes send the caller's `{userId, email, name}` as the JSON
    /// body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] when no usable base URL is
    /// configured and [`ClientError::MissingIdentity`] when `caller` has
    /// neither an id nor an email. Both are checked before any request is
    /// sent. Transport, status and decode failures are never returned.
    pub async fn fetch_with_fallback<R: Resource>(
        &self,
        descriptor: ResourceDescriptor<R>,
        caller: &CallerUser,
    ) -> Result<Resolution<R>, ClientError> {
        let kind = descriptor.kind();
        let endpoint = descriptor.endpoint();
        let url = self.endpoint_url(kind, endpoint)?;
        let identity = CallerIdentity::derive(caller, kind.default_caller_role())?;

        let outcome = match build_request::<R>(url.clone(), &identity, endpoint, caller) {
            Ok(request) => self.send_and_decode::<R>(&request).await,
            Err(failure) => Err(failure),
        };

        match outcome {
            Ok(value) => {
                debug!(resource = %kind, endpoint = %url, "decoded backend record");
                Ok(Resolution {
                    value,
                    source: ResolvedFrom::Backend,
                })
            }
            Err(failure) => {
                warn!(
                    resource = %kind,
                    endpoint = %url,
                    failure = failure.class(),
                    status = failure.http_status(),
                    not_found = failure.is_not_found(),
                    error = %failure,
                    "backend request failed; serving fallback record"
                );
                let requested_id = endpoint.requested_id().unwrap_or(identity.id());
                let value = descriptor.fallback(&FallbackContext::new(requested_id, caller));
                Ok(Resolution {
                    value,
                    source: ResolvedFrom::Fallback(failure),
                })
            }
        }
    }

    async fn send_and_decode<R: Resource>(
        &self,
        request: &ResourceRequest,
    ) -> Result<R, TransportFailure> {
        let body = self.transport.send(request).await?;
        decode_record(&body)
    }

    fn endpoint_url(&self, kind: ResourceKind, endpoint: &Endpoint) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone()?;
        url.path_segments_mut()
            .map_err(|()| ConfigurationError::InvalidBaseUrl {
                value: url_string(&self.base_url),
                message: "URL cannot carry path segments".to_owned(),
            })?
            .pop_if_empty()
            .extend(endpoint.segments(kind));
        Ok(url)
    }

    /// Fetch the admin profile of user `user_id`.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_with_fallback`].
    pub async fn admin_by_user_id(
        &self,
        user_id: &str,
        caller: &CallerUser,
    ) -> Result<Admin, ClientError> {
        self.value_of(Admin::by_user_id(user_id), caller).await
    }

    /// Fetch the organization of user `user_id`.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_with_fallback`].
    pub async fn organization_by_user_id(
        &self,
        user_id: &str,
        caller: &CallerUser,
    ) -> Result<Organization, ClientError> {
        self.value_of(Organization::by_user_id(user_id), caller).await
    }

    /// Fetch the parent profile of user `user_id`.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_with_fallback`].
    pub async fn parent_by_user_id(
        &self,
        user_id: &str,
        caller: &CallerUser,
    ) -> Result<Parent, ClientError> {
        self.value_of(Parent::by_user_id(user_id), caller).await
    }

    /// Fetch the student profile of user `user_id`.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_with_fallback`].
    pub async fn student_by_user_id(
        &self,
        user_id: &str,
        caller: &CallerUser,
    ) -> Result<Student, ClientError> {
        self.value_of(Student::by_user_id(user_id), caller).await
    }

    /// Fetch the teacher profile of user `user_id`.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_with_fallback`].
    pub async fn teacher_by_user_id(
        &self,
        user_id: &str,
        caller: &CallerUser,
    ) -> Result<Teacher, ClientError> {
        self.value_of(Teacher::by_user_id(user_id), caller).await
    }

    /// Fetch the user account `user_id`.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_with_fallback`].
    pub async fn user_by_id(&self, user_id: &str, caller: &CallerUser) -> Result<User, ClientError> {
        self.value_of(User::by_user_id(user_id), caller).await
    }

    /// Fetch the caller's own admin profile.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_with_fallback`].
    pub async fn current_admin(&self, caller: &CallerUser) -> Result<Admin, ClientError> {
        self.value_of(Admin::me(), caller).await
    }

    /// Fetch the caller's own organization.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_with_fallback`].
    pub async fn current_organization(
        &self,
        caller: &CallerUser,
    ) -> Result<Organization, ClientError> {
        self.value_of(Organization::me(), caller).await
    }

    /// Fetch the caller's own parent profile.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_with_fallback`].
    pub async fn current_parent(&self, caller: &CallerUser) -> Result<Parent, ClientError> {
        self.value_of(Parent::me(), caller).await
    }

    /// Fetch the caller's own student profile.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_with_fallback`].
    pub async fn current_student(&self, caller: &CallerUser) -> Result<Student, ClientError> {
        self.value_of(Student::me(), caller).await
    }

    /// Fetch the caller's own teacher profile.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_with_fallback`].
    pub async fn current_teacher(&self, caller: &CallerUser) -> Result<Teacher, ClientError> {
        self.value_of(Teacher::me(), caller).await
    }

    /// Fetch the caller's own user account.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_with_fallback`].
    pub async fn current_user(&self, caller: &CallerUser) -> Result<User, ClientError> {
        self.value_of(User::me(), caller).await
    }

    /// Create a teacher profile for the caller's user account.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_with_fallback`].
    pub async fn create_teacher_from_user(
        &self,
        caller: &CallerUser,
    ) -> Result<Teacher, ClientError> {
        self.value_of(ResourceDescriptor::new(Endpoint::FromUser), caller)
            .await
    }

    async fn value_of<R: Resource>(
        &self,
        descriptor: ResourceDescriptor<R>,
        caller: &CallerUser,
    ) -> Result<R, ClientError> {
        self.fetch_with_fallback(descriptor, caller)
            .await
            .map(Resolution::into_value)
    }
}

fn build_request<R: Resource>(
    url: Url,
    identity: &CallerIdentity,
    endpoint: &Endpoint,
    caller: &CallerUser,
) -> Result<ResourceRequest, TransportFailure> {
    let (method, body) = if endpoint.is_creation() {
        if !R::CREATABLE_FROM_USER {
            return Err(TransportFailure::invalid_request(format!(
                "{} cannot be created from a user account",
                R::KIND
            )));
        }
        let body = serde_json::to_value(TeacherFromUserRequest {
            user_id: identity.id().to_owned(),
            email: caller.email_or_empty().to_owned(),
            name: caller.name_or_empty().to_owned(),
        })
        .map_err(|error| TransportFailure::invalid_request(error.to_string()))?;
        (RequestMethod::Post, Some(body))
    } else {
        (RequestMethod::Get, None)
    };
    Ok(ResourceRequest {
        method,
        url,
        identity: identity.headers(),
        body,
    })
}

/// Decode one backend record, which must be a JSON object.
fn decode_record<R: Resource>(body: &[u8]) -> Result<R, TransportFailure> {
    let invalid = |message: String| {
        TransportFailure::decode(format!("invalid {} payload: {message}", R::KIND))
    };
    let value: Value = serde_json::from_slice(body).map_err(|error| invalid(error.to_string()))?;
    if !value.is_object() {
        return Err(invalid(format!("expected a JSON object, found {}", json_type(&value))));
    }
    serde_json::from_value(value).map_err(|error| invalid(error.to_string()))
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn url_string(base_url: &Result<Url, ConfigurationError>) -> String {
    base_url
        .as_ref()
        .map(Url::to_string)
        .unwrap_or_default()
}
