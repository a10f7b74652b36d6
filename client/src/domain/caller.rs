//! Caller identity and the request headers derived from it.
//!
//! The backend identifies the acting user through two headers rather than a
//! bearer token. Callers hand in whatever user record they hold; this module
//! reduces it to the `{id, role}` pair and renders the header pairs.

use serde::{Deserialize, Serialize};

use super::error::MissingIdentityError;

/// Header carrying the caller's stable identifier.
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header carrying the caller's role.
pub const USER_TYPE_HEADER: &str = "x-user-type";

/// The user record a dashboard surface passes along with a request.
///
/// Every field is optional on the wire. Blank strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerUser {
    /// Stable user identifier.
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    /// Login email, used as the identifier when `id` is absent.
    #[serde(default)]
    pub email: Option<String>,
    /// Role name as understood by the backend (`teacher`, `admin`, ...).
    #[serde(default)]
    pub role: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

impl CallerUser {
    /// Start a caller record from an email address.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Set the stable identifier.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the role.
    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Identifier if present, otherwise the email.
    pub fn id_or_email(&self) -> Option<&str> {
        present(self.id.as_deref()).or_else(|| present(self.email.as_deref()))
    }

    /// Email, or the empty string.
    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    /// Display name, or the empty string.
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub(crate) fn role_or<'a>(&'a self, default_role: &'a str) -> &'a str {
        present(self.role.as_deref()).unwrap_or(default_role)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.trim().is_empty())
}

/// The minimal identity attached to one backend request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    id: String,
    role: String,
}

impl CallerIdentity {
    /// Derive the identity for a request against a resource whose default
    /// role is `default_role`.
    ///
    /// # Errors
    ///
    /// Returns [`MissingIdentityError`] when the caller has neither an id nor
    /// an email.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashboard_client::domain::{CallerIdentity, CallerUser};
    ///
    /// let caller = CallerUser::with_email("a@b.com");
    /// let identity = CallerIdentity::derive(&caller, "teacher")?;
    /// assert_eq!(identity.id(), "a@b.com");
    /// assert_eq!(identity.role(), "teacher");
    /// # Ok::<(), dashboard_client::MissingIdentityError>(())
    /// ```
    pub fn derive(user: &CallerUser, default_role: &str) -> Result<Self, MissingIdentityError> {
        let id = user.id_or_email().ok_or(MissingIdentityError)?;
        Ok(Self {
            id: id.to_owned(),
            role: user.role_or(default_role).to_owned(),
        })
    }

    /// Identifier sent as `x-user-id`.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Role sent as `x-user-type`.
    #[must_use]
    pub fn role(&self) -> &str {
        self.role.as_str()
    }

    /// Render the identity headers.
    #[must_use]
    pub fn headers(&self) -> IdentityHeaders {
        IdentityHeaders {
            user_id: self.id.clone(),
            user_type: self.role.clone(),
        }
    }
}

/// The fixed two-header mapping sent with every backend request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityHeaders {
    user_id: String,
    user_type: String,
}

impl IdentityHeaders {
    /// Header name/value pairs in wire order.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, &str); 2] {
        [
            (USER_ID_HEADER, self.user_id.as_str()),
            (USER_TYPE_HEADER, self.user_type.as_str()),
        ]
    }

    /// Value of `x-user-id`.
    #[must_use]
    pub fn user_id(&self) -> &str {
        self.user_id.as_str()
    }

    /// Value of `x-user-type`.
    #[must_use]
    pub fn user_type(&self) -> &str {
        self.user_type.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Header derivation coverage.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn explicit_id_and_role_win() {
        let caller = CallerUser::with_email("a@b.com").id("u1").role("admin");
        let headers = CallerIdentity::derive(&caller, "teacher")
            .expect("caller has an id")
            .headers();

        assert_eq!(
            headers.pairs(),
            [("x-user-id", "u1"), ("x-user-type", "admin")]
        );
    }

    #[rstest]
    #[case::teacher("teacher")]
    #[case::admin("admin")]
    #[case::student("student")]
    fn email_and_resource_default_fill_gaps(#[case] default_role: &str) {
        let caller = CallerUser::with_email("a@b.com");
        let headers = CallerIdentity::derive(&caller, default_role)
            .expect("caller has an email")
            .headers();

        assert_eq!(headers.user_id(), "a@b.com");
        assert_eq!(headers.user_type(), default_role);
    }

    #[rstest]
    #[case::empty(CallerUser::default())]
    #[case::role_only(CallerUser::default().role("admin"))]
    #[case::blank(CallerUser::with_email("  ").id(""))]
    fn callers_without_identity_are_rejected(#[case] caller: CallerUser) {
        assert_eq!(
            CallerIdentity::derive(&caller, "teacher"),
            Err(MissingIdentityError)
        );
    }

    #[test]
    fn blank_role_falls_back_to_default() {
        let caller = CallerUser::with_email("a@b.com").role(" ");
        let identity = CallerIdentity::derive(&caller, "parent").expect("caller has an email");
        assert_eq!(identity.role(), "parent");
    }

    #[test]
    fn caller_records_accept_backend_id_key() {
        let caller: CallerUser =
            serde_json::from_value(json!({ "_id": "u9", "email": "x@y.z", "role": "student" }))
                .expect("caller JSON decodes");
        assert_eq!(caller.id_or_email(), Some("u9"));
        assert_eq!(caller.role.as_deref(), Some("student"));
        assert!(caller.name.is_none());
    }
}
