//! User roles.
//!
//! The role chosen on the login screen decides which pages a user may reach.
//! Roles serialise with their display labels (`"FinOps Analyst"`) so clients
//! can render them verbatim.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five fixed user categories.
///
/// # Examples
/// ```
/// use finsage::domain::Role;
///
/// let role: Role = "Cloud Manager".parse().unwrap();
/// assert_eq!(role, Role::CloudManager);
/// assert_eq!(role.default_email(), "cloud.manager@finsage.ai");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Financial oversight and strategic planning.
    #[serde(rename = "CFO")]
    Cfo,
    /// Cost optimisation and analysis.
    #[serde(rename = "FinOps Analyst")]
    FinOpsAnalyst,
    /// Infrastructure and resource management.
    #[serde(rename = "Cloud Manager")]
    CloudManager,
    /// Security and compliance oversight.
    #[serde(rename = "CISO")]
    Ciso,
    /// Regulatory compliance and audit management.
    #[serde(rename = "Compliance Officer")]
    ComplianceOfficer,
}

/// Domain used when the login form leaves the email blank.
pub const DEMO_EMAIL_DOMAIN: &str = "finsage.ai";

impl Role {
    /// Every role, in login-screen order.
    pub const ALL: [Role; 5] = [
        Role::Cfo,
        Role::FinOpsAnalyst,
        Role::CloudManager,
        Role::Ciso,
        Role::ComplianceOfficer,
    ];

    /// Display label, identical to the serialised form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cfo => "CFO",
            Self::FinOpsAnalyst => "FinOps Analyst",
            Self::CloudManager => "Cloud Manager",
            Self::Ciso => "CISO",
            Self::ComplianceOfficer => "Compliance Officer",
        }
    }

    /// One-line description shown under the role picker.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Cfo => "Financial oversight and strategic planning",
            Self::FinOpsAnalyst => "Cost optimization and analysis",
            Self::CloudManager => "Infrastructure and resource management",
            Self::Ciso => "Security and compliance oversight",
            Self::ComplianceOfficer => "Regulatory compliance and audit management",
        }
    }

    /// Name of the demo persona signed in for this role.
    pub const fn persona_name(self) -> &'static str {
        match self {
            Self::Cfo => "Sarah Johnson",
            Self::FinOpsAnalyst => "Michael Chen",
            Self::CloudManager => "David Rodriguez",
            Self::Ciso => "Jennifer Kim",
            Self::ComplianceOfficer => "Rajesh Sharma",
        }
    }

    /// Email synthesised when the login form leaves the address blank.
    ///
    /// The label is lower-cased and its first space becomes a dot.
    pub fn default_email(self) -> String {
        let local = self.as_str().to_lowercase().replacen(' ', ".", 1);
        format!("{local}@{DEMO_EMAIL_DOMAIN}")
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {input}")]
pub struct ParseRoleError {
    /// The unrecognised input value.
    pub input: String,
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseRoleError {
                input: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Role::Cfo, "cfo@finsage.ai")]
    #[case(Role::FinOpsAnalyst, "finops.analyst@finsage.ai")]
    #[case(Role::CloudManager, "cloud.manager@finsage.ai")]
    #[case(Role::Ciso, "ciso@finsage.ai")]
    #[case(Role::ComplianceOfficer, "compliance.officer@finsage.ai")]
    fn default_email_uses_role_label(#[case] role: Role, #[case] expected: &str) {
        assert_eq!(role.default_email(), expected);
    }

    #[rstest]
    fn labels_parse_back_to_roles() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[rstest]
    #[case("cfo")]
    #[case("Admin")]
    #[case("")]
    fn unknown_labels_are_rejected(#[case] input: &str) {
        let err = input.parse::<Role>().expect_err("unknown label");
        assert_eq!(err.input, input);
    }

    #[rstest]
    fn serde_uses_display_labels() {
        let json = serde_json::to_string(&Role::ComplianceOfficer).expect("serialise");
        assert_eq!(json, "\"Compliance Officer\"");
        let role: Role = serde_json::from_str("\"FinOps Analyst\"").expect("deserialise");
        assert_eq!(role, Role::FinOpsAnalyst);
    }
}
