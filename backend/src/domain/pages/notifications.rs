//! Alert delivery channels.
//!
//! The configuration is per-session state: it starts from defaults derived
//! from the user, changes one field at a time through [`ChannelUpdate`] and
//! is dropped at logout.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::bounded_text;
use crate::domain::{Error, User};

/// Lowest and highest budget threshold the slider allows, in percent.
pub const THRESHOLD_RANGE: (u8, u8) = (50, 100);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Email,
    Slack,
    Sms,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Self::Email, Self::Slack, Self::Sms];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Slack => "slack",
            Self::Sms => "sms",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailChannel {
    pub enabled: bool,
    pub address: String,
    pub budget_alerts: bool,
    pub compliance_violations: bool,
    pub cost_optimization: bool,
    pub weekly_reports: bool,
    pub threshold: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackChannel {
    pub enabled: bool,
    pub webhook_url: String,
    pub channel: String,
    pub budget_alerts: bool,
    pub compliance_violations: bool,
    pub cost_optimization: bool,
    pub critical_only: bool,
}

impl Default for SlackChannel {
    fn default() -> Self {
        Self {
            enabled: false,
            webhook_url: String::new(),
            channel: "#finops-alerts".to_owned(),
            budget_alerts: true,
            compliance_violations: true,
            cost_optimization: false,
            critical_only: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsChannel {
    pub enabled: bool,
    pub phone_number: String,
    pub budget_alerts: bool,
    pub compliance_violations: bool,
    pub critical_only: bool,
}

impl Default for SmsChannel {
    fn default() -> Self {
        Self {
            enabled: false,
            phone_number: String::new(),
            budget_alerts: true,
            compliance_violations: true,
            critical_only: true,
        }
    }
}

/// Settings for every delivery channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationConfig {
    pub email: EmailChannel,
    pub slack: SlackChannel,
    pub sms: SmsChannel,
}

impl NotificationConfig {
    /// Defaults for `user`; email alerts go to the user's address.
    pub fn for_user(user: &User) -> Self {
        Self {
            email: EmailChannel {
                enabled: true,
                address: user.email().to_owned(),
                budget_alerts: true,
                compliance_violations: true,
                cost_optimization: false,
                weekly_reports: true,
                threshold: 85,
            },
            slack: SlackChannel::default(),
            sms: SmsChannel::default(),
        }
    }

    /// Apply a single-field edit.
    ///
    /// Text values longer than [`MAX_TEXT_CHARS`](super::MAX_TEXT_CHARS) are
    /// rejected and leave the configuration untouched.
    pub fn apply(&mut self, update: ChannelUpdate) -> Result<(), Error> {
        match update {
            ChannelUpdate::Email(field) => apply_email(&mut self.email, field),
            ChannelUpdate::Slack(field) => apply_slack(&mut self.slack, field),
            ChannelUpdate::Sms(field) => apply_sms(&mut self.sms, field),
        }
    }

    /// Channels switched on, in tab order.
    pub fn enabled_channels(&self) -> Vec<Channel> {
        Channel::ALL
            .into_iter()
            .filter(|channel| match channel {
                Channel::Email => self.email.enabled,
                Channel::Slack => self.slack.enabled,
                Channel::Sms => self.sms.enabled,
            })
            .collect()
    }

    /// Where a test message for `channel` would be delivered.
    pub fn destination(&self, channel: Channel) -> &str {
        match channel {
            Channel::Email => self.email.address.as_str(),
            Channel::Slack => self.slack.channel.as_str(),
            Channel::Sms => self.sms.phone_number.as_str(),
        }
    }
}

/// One field edit on one channel.
///
/// Serialised as `{"channel": "email", "field": "threshold", "value": 90}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "channel", rename_all = "lowercase")]
pub enum ChannelUpdate {
    Email(EmailField),
    Slack(SlackField),
    Sms(SmsField),
}

impl ChannelUpdate {
    pub fn channel(&self) -> Channel {
        match self {
            Self::Email(_) => Channel::Email,
            Self::Slack(_) => Channel::Slack,
            Self::Sms(_) => Channel::Sms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum EmailField {
    Enabled(bool),
    Address(String),
    BudgetAlerts(bool),
    ComplianceViolations(bool),
    CostOptimization(bool),
    WeeklyReports(bool),
    Threshold(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum SlackField {
    Enabled(bool),
    WebhookUrl(String),
    Channel(String),
    BudgetAlerts(bool),
    ComplianceViolations(bool),
    CostOptimization(bool),
    CriticalOnly(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum SmsField {
    Enabled(bool),
    PhoneNumber(String),
    BudgetAlerts(bool),
    ComplianceViolations(bool),
    CriticalOnly(bool),
}

fn apply_email(email: &mut EmailChannel, field: EmailField) -> Result<(), Error> {
    match field {
        EmailField::Enabled(value) => email.enabled = value,
        EmailField::Address(value) => email.address = bounded_text("address", value)?,
        EmailField::BudgetAlerts(value) => email.budget_alerts = value,
        EmailField::ComplianceViolations(value) => email.compliance_violations = value,
        EmailField::CostOptimization(value) => email.cost_optimization = value,
        EmailField::WeeklyReports(value) => email.weekly_reports = value,
        EmailField::Threshold(value) => {
            let (min, max) = THRESHOLD_RANGE;
            email.threshold = value.clamp(min, max);
        }
    }
    Ok(())
}

fn apply_slack(slack: &mut SlackChannel, field: SlackField) -> Result<(), Error> {
    match field {
        SlackField::Enabled(value) => slack.enabled = value,
        SlackField::WebhookUrl(value) => slack.webhook_url = bounded_text("webhookUrl", value)?,
        SlackField::Channel(value) => slack.channel = bounded_text("channel", value)?,
        SlackField::BudgetAlerts(value) => slack.budget_alerts = value,
        SlackField::ComplianceViolations(value) => slack.compliance_violations = value,
        SlackField::CostOptimization(value) => slack.cost_optimization = value,
        SlackField::CriticalOnly(value) => slack.critical_only = value,
    }
    Ok(())
}

fn apply_sms(sms: &mut SmsChannel, field: SmsField) -> Result<(), Error> {
    match field {
        SmsField::Enabled(value) => sms.enabled = value,
        SmsField::PhoneNumber(value) => sms.phone_number = bounded_text("phoneNumber", value)?,
        SmsField::BudgetAlerts(value) => sms.budget_alerts = value,
        SmsField::ComplianceViolations(value) => sms.compliance_violations = value,
        SmsField::CriticalOnly(value) => sms.critical_only = value,
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const ALERT_TYPES: [AlertType; 4] = [
    AlertType {
        id: "budgetAlerts",
        name: "Budget Alerts",
        description: "Notifications when spending approaches or exceeds budget thresholds",
    },
    AlertType {
        id: "complianceViolations",
        name: "Compliance Violations",
        description: "Immediate alerts for compliance policy violations",
    },
    AlertType {
        id: "costOptimization",
        name: "Cost Optimization",
        description: "Recommendations for cost savings and resource optimization",
    },
    AlertType {
        id: "weeklyReports",
        name: "Weekly Reports",
        description: "Weekly summary reports of cloud spending and compliance",
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationFilters {
    pub tab: Channel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsView {
    pub active_tab: Channel,
    pub settings: NotificationConfig,
    pub enabled_channels: Vec<Channel>,
    pub alert_types: Vec<AlertType>,
}

pub fn render(filters: NotificationFilters, settings: NotificationConfig) -> NotificationsView {
    NotificationsView {
        active_tab: filters.tab,
        enabled_channels: settings.enabled_channels(),
        settings,
        alert_types: ALERT_TYPES.to_vec(),
    }
}
