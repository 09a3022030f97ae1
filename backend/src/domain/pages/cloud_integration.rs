//! Connected cloud accounts, compliance tagging and the add-account form.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Supported cloud providers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CloudProvider {
    #[default]
    #[serde(rename = "AWS")]
    Aws,
    Azure,
    #[serde(rename = "GCP")]
    Gcp,
}

impl CloudProvider {
    pub const ALL: [CloudProvider; 3] = [Self::Aws, Self::Azure, Self::Gcp];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aws => "AWS",
            Self::Azure => "Azure",
            Self::Gcp => "GCP",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Aws => "Amazon Web Services",
            Self::Azure => "Microsoft Azure",
            Self::Gcp => "Google Cloud Platform",
        }
    }

    /// Labels for the key and secret fields of the add-account form.
    pub const fn credential_labels(self) -> CredentialLabels {
        match self {
            Self::Aws => CredentialLabels {
                key: "Access Key ID",
                secret: "Secret Access Key",
            },
            Self::Azure => CredentialLabels {
                key: "Subscription ID",
                secret: "Client Secret",
            },
            Self::Gcp => CredentialLabels {
                key: "Project ID",
                secret: "Service Account Key",
            },
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialLabels {
    pub key: &'static str,
    pub secret: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConnectionStatus {
    Connected,
    Error,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudAccount {
    pub id: &'static str,
    pub provider: CloudProvider,
    pub account_name: &'static str,
    pub account_id: &'static str,
    pub status: ConnectionStatus,
    pub last_sync: &'static str,
    pub monthly_spend: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderOption {
    pub provider: CloudProvider,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceTag {
    pub name: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

/// Local state of the add-account modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CloudIntegrationFilters {
    pub show_add_form: bool,
    pub provider: CloudProvider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAccountForm {
    pub visible: bool,
    pub selected_provider: CloudProvider,
    pub labels: CredentialLabels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudIntegrationView {
    pub accounts: Vec<CloudAccount>,
    pub connected_count: usize,
    pub total_monthly_spend: u64,
    pub providers: Vec<ProviderOption>,
    pub compliance_tags: Vec<ComplianceTag>,
    pub add_account_form: AddAccountForm,
}

/// Account submitted through the add-account form.
///
/// Only the provider and name are ever surfaced; the credentials are held so
/// they can be wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct NewCloudAccount {
    provider: CloudProvider,
    account_name: String,
    credential_key: Zeroizing<String>,
    credential_secret: Zeroizing<String>,
}

impl NewCloudAccount {
    pub fn new(
        provider: CloudProvider,
        account_name: impl Into<String>,
        credential_key: impl Into<String>,
        credential_secret: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            account_name: account_name.into(),
            credential_key: Zeroizing::new(credential_key.into()),
            credential_secret: Zeroizing::new(credential_secret.into()),
        }
    }

    pub fn provider(&self) -> CloudProvider {
        self.provider
    }

    pub fn account_name(&self) -> &str {
        self.account_name.as_str()
    }

    /// Whether both credential fields were supplied.
    pub fn has_credentials(&self) -> bool {
        !self.credential_key.is_empty() && !self.credential_secret.is_empty()
    }
}

impl fmt::Debug for NewCloudAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewCloudAccount")
            .field("provider", &self.provider)
            .field("account_name", &self.account_name)
            .finish_non_exhaustive()
    }
}

const ACCOUNTS: [CloudAccount; 3] = [
    CloudAccount {
        id: "1",
        provider: CloudProvider::Aws,
        account_name: "Production Account",
        account_id: "123456789012",
        status: ConnectionStatus::Connected,
        last_sync: "2024-01-15 10:30 AM",
        monthly_spend: 89_000,
    },
    CloudAccount {
        id: "2",
        provider: CloudProvider::Azure,
        account_name: "Development Environment",
        account_id: "sub-987654321",
        status: ConnectionStatus::Connected,
        last_sync: "2024-01-15 10:25 AM",
        monthly_spend: 67_000,
    },
    CloudAccount {
        id: "3",
        provider: CloudProvider::Gcp,
        account_name: "Analytics Project",
        account_id: "project-analytics-001",
        status: ConnectionStatus::Error,
        last_sync: "2024-01-14 3:45 PM",
        monthly_spend: 22_000,
    },
];

const COMPLIANCE_TAGS: [(&str, &str); 5] = [
    ("PCI", "Payment Card Industry compliance"),
    ("IRDAI", "Insurance Regulatory requirements"),
    ("PII", "Personally Identifiable Information"),
    ("DR", "Disaster Recovery resources"),
    ("Production", "Production workloads"),
];

pub fn render(filters: CloudIntegrationFilters) -> CloudIntegrationView {
    let accounts = ACCOUNTS.to_vec();
    let connected_count = accounts
        .iter()
        .filter(|account| account.status == ConnectionStatus::Connected)
        .count();
    let total_monthly_spend = accounts.iter().map(|account| account.monthly_spend).sum();
    CloudIntegrationView {
        accounts,
        connected_count,
        total_monthly_spend,
        providers: CloudProvider::ALL
            .into_iter()
            .map(|provider| ProviderOption {
                provider,
                description: provider.description(),
            })
            .collect(),
        compliance_tags: COMPLIANCE_TAGS
            .into_iter()
            .map(|(name, description)| ComplianceTag {
                name,
                description,
                enabled: true,
            })
            .collect(),
        add_account_form: AddAccountForm {
            visible: filters.show_add_form,
            selected_provider: filters.provider,
            labels: filters.provider.credential_labels(),
        },
    }
}
