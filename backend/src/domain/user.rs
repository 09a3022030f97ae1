//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use serde_json::json;

use super::pages::MAX_TEXT_CHARS;
use super::{Error, Role};

/// Validation errors raised while building or editing a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("user id must not be empty")]
    EmptyId,
    #[error("user id must be a valid UUID")]
    InvalidId,
    #[error("name must not be empty")]
    EmptyName,
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("{0} must be at most {max} characters", max = MAX_TEXT_CHARS)]
    TooLong(&'static str),
}

impl From<UserValidationError> for Error {
    fn from(err: UserValidationError) -> Self {
        let (field, code) = match err {
            UserValidationError::EmptyId => ("id", "empty_id"),
            UserValidationError::InvalidId => ("id", "invalid_id"),
            UserValidationError::EmptyName => ("name", "empty_name"),
            UserValidationError::EmptyEmail => ("email", "empty_email"),
            UserValidationError::TooLong(field) => (field, "too_long"),
        };
        Error::invalid_request(err.to_string())
            .with_details(json!({ "field": field, "code": code }))
    }
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid, String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        let uuid = Uuid::new_v4();
        Self(uuid, uuid.to_string())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }
        let parsed = Uuid::parse_str(&id).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(parsed, id))
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        let UserId(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Optional profile attributes filled in from the profile page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
}

impl ProfileDetails {
    fn check_lengths(&self) -> Result<(), UserValidationError> {
        let fields = [
            ("avatar", &self.avatar),
            ("company", &self.company),
            ("title", &self.title),
            ("country", &self.country),
            ("phone", &self.phone),
            ("department", &self.department),
            ("joinDate", &self.join_date),
            ("lastLogin", &self.last_login),
        ];
        match fields
            .into_iter()
            .find(|(_, value)| value.as_deref().is_some_and(too_long))
        {
            Some((field, _)) => Err(UserValidationError::TooLong(field)),
            None => Ok(()),
        }
    }
}

/// Logged-in application user.
///
/// ## Invariants
/// - `name` and `email` are non-empty once trimmed.
/// - `id` and `role` never change for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    role: Role,
    #[serde(flatten)]
    details: ProfileDetails,
}

impl User {
    /// Build a user with no optional profile attributes.
    pub fn try_new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Result<Self, UserValidationError> {
        let name = non_blank(name.into(), UserValidationError::EmptyName)?;
        let email = non_blank(email.into(), UserValidationError::EmptyEmail)?;
        Ok(Self {
            id,
            name,
            email,
            role,
            details: ProfileDetails::default(),
        })
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn details(&self) -> &ProfileDetails {
        &self.details
    }

    /// First word of the display name.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(self.name.as_str())
    }

    /// Upper-cased first letter of each word of the display name.
    ///
    /// # Examples
    /// ```
    /// use finsage::domain::{Role, User, UserId};
    ///
    /// let user = User::try_new(UserId::random(), "Sarah Johnson", "s@x.io", Role::Cfo).unwrap();
    /// assert_eq!(user.initials(), "SJ");
    /// ```
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Copy of this user with edited identity fields and profile attributes.
    ///
    /// The id and role are carried over unchanged; the avatar is kept when the
    /// edit does not supply one.
    pub fn edited(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        details: ProfileDetails,
    ) -> Result<Self, UserValidationError> {
        let name = non_blank(name.into(), UserValidationError::EmptyName)?;
        let email = non_blank(email.into(), UserValidationError::EmptyEmail)?;
        if too_long(&name) {
            return Err(UserValidationError::TooLong("name"));
        }
        if too_long(&email) {
            return Err(UserValidationError::TooLong("email"));
        }
        details.check_lengths()?;
        let avatar = details.avatar.or_else(|| self.details.avatar.clone());
        Ok(Self {
            id: self.id.clone(),
            name,
            email,
            role: self.role,
            details: ProfileDetails { avatar, ..details },
        })
    }
}

fn too_long(value: &str) -> bool {
    value.chars().count() > MAX_TEXT_CHARS
}

fn non_blank(value: String, error: UserValidationError) -> Result<String, UserValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(error);
    }
    Ok(trimmed.to_owned())
}
