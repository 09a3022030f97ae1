//! Page identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of views that can occupy the main content area.
///
/// Serialised in kebab-case (`"cloud-integration"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Dashboard,
    CloudIntegration,
    Compliance,
    Forecast,
    Chargeback,
    Notifications,
    Reports,
    RegulatoryImpact,
    AiOptimization,
    ComplianceFrameworks,
    Profile,
    Settings,
}

impl Page {
    /// Landing page after login and fallback for refused navigation.
    pub const DEFAULT: Page = Page::Dashboard;

    /// Every page identifier.
    pub const ALL: [Page; 12] = [
        Page::Dashboard,
        Page::CloudIntegration,
        Page::Compliance,
        Page::Forecast,
        Page::Chargeback,
        Page::Notifications,
        Page::Reports,
        Page::RegulatoryImpact,
        Page::AiOptimization,
        Page::ComplianceFrameworks,
        Page::Profile,
        Page::Settings,
    ];

    /// Stable identifier used in URLs and JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::CloudIntegration => "cloud-integration",
            Self::Compliance => "compliance",
            Self::Forecast => "forecast",
            Self::Chargeback => "chargeback",
            Self::Notifications => "notifications",
            Self::Reports => "reports",
            Self::RegulatoryImpact => "regulatory-impact",
            Self::AiOptimization => "ai-optimization",
            Self::ComplianceFrameworks => "compliance-frameworks",
            Self::Profile => "profile",
            Self::Settings => "settings",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::CloudIntegration => "Cloud Integration",
            Self::Compliance => "Compliance Costs",
            Self::Forecast => "AI Forecast",
            Self::Chargeback => "Chargeback",
            Self::Notifications => "Notifications",
            Self::Reports => "Reports",
            Self::RegulatoryImpact => "Regulatory Impact",
            Self::AiOptimization => "AI Optimization",
            Self::ComplianceFrameworks => "Compliance Frameworks",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown page identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page: {input}")]
pub struct ParsePageError {
    /// The unrecognised input value.
    pub input: String,
}

impl FromStr for Page {
    type Err = ParsePageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| ParsePageError {
                input: s.to_owned(),
            })
    }
}
