//! User profile form, documents and recent activity.

use serde::{Deserialize, Serialize};

use crate::domain::{ProfileDetails, Role, User, UserValidationError};

const DEFAULT_PHONE: &str = "+91 98765 43210";
const DEFAULT_COMPANY: &str = "HDFC Bank Ltd.";
const DEFAULT_DEPARTMENT: &str = "Financial Operations";
const DEFAULT_COUNTRY: &str = "India";
const DEFAULT_JOIN_DATE: &str = "2022-03-15";
const DEFAULT_LAST_LOGIN: &str = "2024-07-01 09:30 AM";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileFilters {
    /// Whether the form is open for editing.
    pub editing: bool,
}

/// Editable profile fields.
///
/// Blank optional fields fall back to the demo defaults when the form is
/// first shown for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub title: String,
    pub company: String,
    pub department: String,
    pub country: String,
    pub join_date: String,
    pub last_login: String,
}

fn or_default(value: Option<&String>, fallback: &str) -> String {
    value
        .filter(|value| !value.trim().is_empty())
        .map_or_else(|| fallback.to_owned(), String::clone)
}

impl ProfileForm {
    /// Form contents for `user`, filling gaps with defaults.
    pub fn for_user(user: &User) -> Self {
        let details = user.details();
        Self {
            name: user.name().to_owned(),
            email: user.email().to_owned(),
            phone: or_default(details.phone.as_ref(), DEFAULT_PHONE),
            title: or_default(details.title.as_ref(), user.role().as_str()),
            company: or_default(details.company.as_ref(), DEFAULT_COMPANY),
            department: or_default(details.department.as_ref(), DEFAULT_DEPARTMENT),
            country: or_default(details.country.as_ref(), DEFAULT_COUNTRY),
            join_date: or_default(details.join_date.as_ref(), DEFAULT_JOIN_DATE),
            last_login: or_default(details.last_login.as_ref(), DEFAULT_LAST_LOGIN),
        }
    }

    /// The user as saved from this form. Identity and role are kept.
    pub fn apply_to(self, user: &User) -> Result<User, UserValidationError> {
        let details = ProfileDetails {
            avatar: user.details().avatar.clone(),
            company: Some(self.company),
            title: Some(self.title),
            country: Some(self.country),
            phone: Some(self.phone),
            department: Some(self.department),
            join_date: Some(self.join_date),
            last_login: Some(self.last_login),
        };
        user.edited(self.name, self.email, details)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Verified,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: u32,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub upload_date: &'static str,
    pub size: &'static str,
    pub status: DocumentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub action: &'static str,
    pub timestamp: &'static str,
    pub details: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub editing: bool,
    pub form: ProfileForm,
    pub initials: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub documents: Vec<Document>,
    pub activity: Vec<ActivityEntry>,
}

const DOCUMENTS: [Document; 3] = [
    Document {
        id: 1,
        name: "Employment Agreement.pdf",
        kind: "Contract",
        upload_date: "2022-03-15",
        size: "2.4 MB",
        status: DocumentStatus::Verified,
    },
    Document {
        id: 2,
        name: "Compliance Certification.pdf",
        kind: "Certification",
        upload_date: "2024-01-20",
        size: "1.8 MB",
        status: DocumentStatus::Verified,
    },
    Document {
        id: 3,
        name: "ID Verification.pdf",
        kind: "Identity",
        upload_date: "2022-03-15",
        size: "890 KB",
        status: DocumentStatus::Verified,
    },
];

const ACTIVITY: [ActivityEntry; 5] = [
    activity(
        "Profile Updated",
        "2024-07-01 09:30 AM",
        "Updated contact information",
    ),
    activity(
        "Document Uploaded",
        "2024-06-28 02:15 PM",
        "Uploaded compliance certification",
    ),
    activity(
        "Password Changed",
        "2024-06-25 11:45 AM",
        "Security password updated",
    ),
    activity(
        "Login",
        "2024-06-24 08:30 AM",
        "Successful login from Mumbai, India",
    ),
    activity(
        "Settings Modified",
        "2024-06-20 04:20 PM",
        "Updated notification preferences",
    ),
];

const fn activity(
    action: &'static str,
    timestamp: &'static str,
    details: &'static str,
) -> ActivityEntry {
    ActivityEntry {
        action,
        timestamp,
        details,
    }
}

pub fn render(filters: ProfileFilters, user: &User) -> ProfileView {
    ProfileView {
        editing: filters.editing,
        form: ProfileForm::for_user(user),
        initials: user.initials(),
        role: user.role(),
        avatar: user.details().avatar.clone(),
        documents: DOCUMENTS.to_vec(),
        activity: ACTIVITY.to_vec(),
    }
}
