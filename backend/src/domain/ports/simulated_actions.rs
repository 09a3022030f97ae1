//! Driven port for dashboard actions that have no real backend.
//!
//! Adding a cloud account, exporting a report or sending a test alert only
//! acknowledge the request; the page datasets never change. Adapters decide
//! how the acknowledgement is recorded.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::UserId;
use crate::domain::pages::cloud_integration::CloudProvider;
use crate::domain::pages::forecast::ScenarioRun;
use crate::domain::pages::notifications::Channel;

/// An action the user triggered from a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulatedAction {
    /// Connect a cloud account; credentials never leave the domain.
    AddCloudAccount {
        provider: CloudProvider,
        account_name: String,
    },
    RunForecastScenario(ScenarioRun),
    DownloadReport {
        id: u32,
        name: &'static str,
    },
    DownloadChargebackReport {
        id: u32,
        name: &'static str,
    },
    SaveNotifications {
        enabled_channels: Vec<Channel>,
    },
    SendTestNotification {
        channel: Channel,
        destination: String,
    },
}

impl SimulatedAction {
    /// Stable identifier used in logs and receipts.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddCloudAccount { .. } => "add_cloud_account",
            Self::RunForecastScenario(_) => "run_forecast_scenario",
            Self::DownloadReport { .. } => "download_report",
            Self::DownloadChargebackReport { .. } => "download_chargeback_report",
            Self::SaveNotifications { .. } => "save_notifications",
            Self::SendTestNotification { .. } => "send_test_notification",
        }
    }
}

impl fmt::Display for SimulatedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddCloudAccount {
                provider,
                account_name,
            } => write!(f, "Connecting {provider} account \"{account_name}\""),
            Self::RunForecastScenario(run) => {
                write!(f, "Running {} forecast scenario", run.scenario.name())
            }
            Self::DownloadReport { name, .. } | Self::DownloadChargebackReport { name, .. } => {
                write!(f, "Preparing download of {name}")
            }
            Self::SaveNotifications { enabled_channels } => {
                write!(
                    f,
                    "Saved notification settings for {} channel(s)",
                    enabled_channels.len()
                )
            }
            Self::SendTestNotification {
                channel,
                destination,
            } => write!(f, "Test {channel} notification sent to {destination}"),
        }
    }
}

/// Acknowledgement returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionReceipt {
    pub action: &'static str,
    pub message: String,
}

impl ActionReceipt {
    pub fn for_action(action: &SimulatedAction) -> Self {
        Self {
            action: action.kind(),
            message: action.to_string(),
        }
    }
}

/// Errors raised by adapters recording simulated actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulatedActionError {
    /// The adapter could not record the action.
    #[error("simulated action {action} failed: {message}")]
    Unavailable {
        action: &'static str,
        message: String,
    },
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SimulatedActions: Send + Sync {
    /// Acknowledge `action` on behalf of `actor`.
    async fn perform(
        &self,
        actor: &UserId,
        action: &SimulatedAction,
    ) -> Result<ActionReceipt, SimulatedActionError>;
}

/// Accepts every action without side effects.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSimulatedActions;

#[async_trait]
impl SimulatedActions for FixtureSimulatedActions {
    async fn perform(
        &self,
        _actor: &UserId,
        action: &SimulatedAction,
    ) -> Result<ActionReceipt, SimulatedActionError> {
        Ok(ActionReceipt::for_action(action))
    }
}
