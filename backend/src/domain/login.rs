//! Login form and demo user synthesis.
//!
//! Authentication is simulated: the role picked on the login screen decides
//! who signs in. Email and password are collected for the form only; the
//! password is never inspected and is wiped on drop.

use std::fmt;

use serde::Serialize;
use zeroize::Zeroizing;

use super::{Role, User, UserId, UserValidationError};

/// Values submitted by the login screen.
///
/// # Examples
/// ```
/// use finsage::domain::{LoginForm, Role};
///
/// let user = LoginForm::for_role(Role::Cfo).into_user().unwrap();
/// assert_eq!(user.name(), "Sarah Johnson");
/// assert_eq!(user.email(), "cfo@finsage.ai");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginForm {
    role: Role,
    email: Option<String>,
    password: Zeroizing<String>,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("role", &self.role)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl LoginForm {
    /// Form with only a role selected.
    pub fn for_role(role: Role) -> Self {
        Self::from_parts(role, None, None)
    }

    /// Build the form from raw inputs. A blank email counts as absent.
    pub fn from_parts(role: Role, email: Option<&str>, password: Option<&str>) -> Self {
        let email = email
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned);
        Self {
            role,
            email,
            password: Zeroizing::new(password.unwrap_or_default().to_owned()),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Whether the password field was filled in.
    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }

    /// Produce the user for this submission.
    ///
    /// The display name is the role's demo persona and a missing email falls
    /// back to [`Role::default_email`].
    pub fn into_user(self) -> Result<User, UserValidationError> {
        let role = self.role;
        let email = self.email.unwrap_or_else(|| role.default_email());
        User::try_new(UserId::random(), role.persona_name(), email, role)
    }
}

/// Role choice shown on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleOption {
    pub role: Role,
    pub description: &'static str,
}

/// Every role option in login-screen order.
pub fn role_options() -> Vec<RoleOption> {
    Role::ALL
        .into_iter()
        .map(|role| RoleOption {
            role,
            description: role.description(),
        })
        .collect()
}
