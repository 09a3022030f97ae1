//! Account, security and privacy settings.
//!
//! Like the notification channels, the configuration lives in the session and
//! changes one field at a time through [`SettingUpdate`].

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::bounded_text;
use crate::domain::{Error, Page, User};

/// Session timeout choices, in minutes.
pub const SESSION_TIMEOUT_OPTIONS: [u16; 5] = [15, 30, 60, 120, 480];
/// Password expiry choices, in days.
pub const PASSWORD_EXPIRY_OPTIONS: [u16; 5] = [30, 60, 90, 180, 365];
/// Audit log retention choices, in days.
pub const AUDIT_RETENTION_OPTIONS: [u16; 5] = [90, 180, 365, 1095, 2555];
/// Report archive choices, in days.
pub const REPORT_ARCHIVE_OPTIONS: [u16; 4] = [365, 1095, 1825, 2555];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsTab {
    #[default]
    Account,
    Security,
    Privacy,
    Payments,
    Access,
    Notifications,
    Data,
    Logs,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 8] = [
        Self::Account,
        Self::Security,
        Self::Privacy,
        Self::Payments,
        Self::Access,
        Self::Notifications,
        Self::Data,
        Self::Logs,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Security => "Security",
            Self::Privacy => "Privacy",
            Self::Payments => "Payments",
            Self::Access => "Access Control",
            Self::Notifications => "Notifications",
            Self::Data => "Data Management",
            Self::Logs => "Audit Logs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSettings {
    pub two_factor_enabled: bool,
    /// Minutes; one of [`SESSION_TIMEOUT_OPTIONS`].
    pub session_timeout: u16,
    pub auto_logout: bool,
    pub email_verified: bool,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            two_factor_enabled: true,
            session_timeout: 30,
            auto_logout: true,
            email_verified: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileVisibility {
    Public,
    #[default]
    Team,
    Company,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    pub profile_visibility: ProfileVisibility,
    pub data_sharing: bool,
    pub analytics_tracking: bool,
    pub marketing_emails: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            profile_visibility: ProfileVisibility::Team,
            data_sharing: false,
            analytics_tracking: true,
            marketing_emails: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    /// Days; one of [`PASSWORD_EXPIRY_OPTIONS`].
    pub password_expiry: u16,
    pub login_notifications: bool,
    pub suspicious_activity_alerts: bool,
    pub device_tracking: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            password_expiry: 90,
            login_notifications: true,
            suspicious_activity_alerts: true,
            device_tracking: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSettings {
    pub auto_renewal: bool,
    pub invoice_email: String,
    pub payment_method: String,
    pub billing_address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessSettings {
    pub api_access: bool,
    pub export_permissions: bool,
    pub admin_notifications: bool,
    pub audit_logs: bool,
}

impl Default for AccessSettings {
    fn default() -> Self {
        Self {
            api_access: true,
            export_permissions: true,
            admin_notifications: true,
            audit_logs: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionSettings {
    pub audit_log_days: u16,
    pub report_archive_days: u16,
}

impl Default for RetentionSettings {
    fn default() -> Self {
        Self {
            audit_log_days: 90,
            report_archive_days: 365,
        }
    }
}

/// Every settings section for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsConfig {
    pub account: AccountSettings,
    pub privacy: PrivacySettings,
    pub security: SecuritySettings,
    pub payments: PaymentSettings,
    pub access: AccessSettings,
    pub retention: RetentionSettings,
}

impl SettingsConfig {
    /// Defaults for `user`; invoices go to the user's address.
    pub fn for_user(user: &User) -> Self {
        Self {
            account: AccountSettings::default(),
            privacy: PrivacySettings::default(),
            security: SecuritySettings::default(),
            payments: PaymentSettings {
                auto_renewal: true,
                invoice_email: user.email().to_owned(),
                payment_method: "Corporate Card".to_owned(),
                billing_address: "Mumbai, India".to_owned(),
            },
            access: AccessSettings::default(),
            retention: RetentionSettings::default(),
        }
    }

    /// Apply a single-field edit.
    ///
    /// Select-backed fields only accept one of their listed options and text
    /// fields are capped at [`MAX_TEXT_CHARS`](super::MAX_TEXT_CHARS); the
    /// configuration is left untouched on error.
    pub fn apply(&mut self, update: SettingUpdate) -> Result<(), Error> {
        match update {
            SettingUpdate::Account(field) => apply_account(&mut self.account, field),
            SettingUpdate::Privacy(field) => {
                apply_privacy(&mut self.privacy, field);
                Ok(())
            }
            SettingUpdate::Security(field) => apply_security(&mut self.security, field),
            SettingUpdate::Payments(field) => apply_payments(&mut self.payments, field),
            SettingUpdate::Access(field) => {
                apply_access(&mut self.access, field);
                Ok(())
            }
            SettingUpdate::Retention(field) => apply_retention(&mut self.retention, field),
        }
    }
}

/// One field edit in one settings section.
///
/// Serialised as `{"section": "account", "field": "sessionTimeout", "value": 60}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "lowercase")]
pub enum SettingUpdate {
    Account(AccountField),
    Privacy(PrivacyField),
    Security(SecurityField),
    Payments(PaymentField),
    Access(AccessField),
    Retention(RetentionField),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum AccountField {
    TwoFactorEnabled(bool),
    SessionTimeout(u16),
    AutoLogout(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum PrivacyField {
    ProfileVisibility(ProfileVisibility),
    DataSharing(bool),
    AnalyticsTracking(bool),
    MarketingEmails(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum SecurityField {
    PasswordExpiry(u16),
    LoginNotifications(bool),
    SuspiciousActivityAlerts(bool),
    DeviceTracking(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum PaymentField {
    AutoRenewal(bool),
    InvoiceEmail(String),
    PaymentMethod(String),
    BillingAddress(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum AccessField {
    ApiAccess(bool),
    ExportPermissions(bool),
    AdminNotifications(bool),
    AuditLogs(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum RetentionField {
    AuditLogDays(u16),
    ReportArchiveDays(u16),
}

fn choose(field: &str, value: u16, options: &[u16]) -> Result<u16, Error> {
    if options.contains(&value) {
        return Ok(value);
    }
    Err(
        Error::invalid_request(format!("{field} must be one of {options:?}")).with_details(json!({
            "field": field,
            "value": value,
            "code": "unsupported_option",
        })),
    )
}

fn apply_account(account: &mut AccountSettings, field: AccountField) -> Result<(), Error> {
    match field {
        AccountField::TwoFactorEnabled(value) => account.two_factor_enabled = value,
        AccountField::SessionTimeout(value) => {
            account.session_timeout = choose("sessionTimeout", value, &SESSION_TIMEOUT_OPTIONS)?;
        }
        AccountField::AutoLogout(value) => account.auto_logout = value,
    }
    Ok(())
}

fn apply_privacy(privacy: &mut PrivacySettings, field: PrivacyField) {
    match field {
        PrivacyField::ProfileVisibility(value) => privacy.profile_visibility = value,
        PrivacyField::DataSharing(value) => privacy.data_sharing = value,
        PrivacyField::AnalyticsTracking(value) => privacy.analytics_tracking = value,
        PrivacyField::MarketingEmails(value) => privacy.marketing_emails = value,
    }
}

fn apply_security(security: &mut SecuritySettings, field: SecurityField) -> Result<(), Error> {
    match field {
        SecurityField::PasswordExpiry(value) => {
            security.password_expiry = choose("passwordExpiry", value, &PASSWORD_EXPIRY_OPTIONS)?;
        }
        SecurityField::LoginNotifications(value) => security.login_notifications = value,
        SecurityField::SuspiciousActivityAlerts(value) => {
            security.suspicious_activity_alerts = value;
        }
        SecurityField::DeviceTracking(value) => security.device_tracking = value,
    }
    Ok(())
}

fn apply_payments(payments: &mut PaymentSettings, field: PaymentField) -> Result<(), Error> {
    match field {
        PaymentField::AutoRenewal(value) => payments.auto_renewal = value,
        PaymentField::InvoiceEmail(value) => {
            payments.invoice_email = bounded_text("invoiceEmail", value)?;
        }
        PaymentField::PaymentMethod(value) => {
            payments.payment_method = bounded_text("paymentMethod", value)?;
        }
        PaymentField::BillingAddress(value) => {
            payments.billing_address = bounded_text("billingAddress", value)?;
        }
    }
    Ok(())
}

fn apply_access(access: &mut AccessSettings, field: AccessField) {
    match field {
        AccessField::ApiAccess(value) => access.api_access = value,
        AccessField::ExportPermissions(value) => access.export_permissions = value,
        AccessField::AdminNotifications(value) => access.admin_notifications = value,
        AccessField::AuditLogs(value) => access.audit_logs = value,
    }
}

fn apply_retention(retention: &mut RetentionSettings, field: RetentionField) -> Result<(), Error> {
    match field {
        RetentionField::AuditLogDays(value) => {
            retention.audit_log_days = choose("auditLogDays", value, &AUDIT_RETENTION_OPTIONS)?;
        }
        RetentionField::ReportArchiveDays(value) => {
            retention.report_archive_days =
                choose("reportArchiveDays", value, &REPORT_ARCHIVE_OPTIONS)?;
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuditOutcome {
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub action: &'static str,
    pub user: String,
    pub timestamp: &'static str,
    pub ip: &'static str,
    pub status: AuditOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSession {
    pub location: &'static str,
    pub device: &'static str,
    pub last_active: &'static str,
    pub current: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabEntry {
    pub id: SettingsTab,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsFilters {
    pub tab: SettingsTab,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView {
    pub active_tab: SettingsTab,
    pub tabs: Vec<TabEntry>,
    pub settings: SettingsConfig,
    pub session_timeout_options: Vec<u16>,
    pub password_expiry_options: Vec<u16>,
    pub audit_retention_options: Vec<u16>,
    pub report_archive_options: Vec<u16>,
    pub active_sessions: Vec<ActiveSession>,
    pub audit_log: Vec<AuditLogEntry>,
    /// Set on the notifications tab, which only links to the dedicated page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_hint: Option<Page>,
}

const ACTIVE_SESSIONS: [ActiveSession; 2] = [
    ActiveSession {
        location: "Mumbai, India",
        device: "Chrome on Windows",
        last_active: "Active now",
        current: true,
    },
    ActiveSession {
        location: "Mumbai, India",
        device: "Mobile App",
        last_active: "2 hours ago",
        current: false,
    },
];

fn audit_log(user: &User) -> Vec<AuditLogEntry> {
    let own = |action, timestamp| AuditLogEntry {
        action,
        user: user.name().to_owned(),
        timestamp,
        ip: "203.192.12.45",
        status: AuditOutcome::Success,
    };
    vec![
        own("User Login", "2024-07-01 09:30:15"),
        own("Settings Updated", "2024-07-01 09:25:32"),
        own("Report Downloaded", "2024-06-30 16:45:22"),
        own("API Key Generated", "2024-06-30 14:20:18"),
        AuditLogEntry {
            action: "Failed Login Attempt",
            user: "Unknown".to_owned(),
            timestamp: "2024-06-29 23:15:44",
            ip: "185.220.101.32",
            status: AuditOutcome::Failed,
        },
    ]
}

pub fn render(filters: SettingsFilters, settings: SettingsConfig, user: &User) -> SettingsView {
    SettingsView {
        active_tab: filters.tab,
        tabs: SettingsTab::ALL
            .into_iter()
            .map(|id| TabEntry {
                id,
                name: id.label(),
            })
            .collect(),
        settings,
        session_timeout_options: SESSION_TIMEOUT_OPTIONS.to_vec(),
        password_expiry_options: PASSWORD_EXPIRY_OPTIONS.to_vec(),
        audit_retention_options: AUDIT_RETENTION_OPTIONS.to_vec(),
        report_archive_options: REPORT_ARCHIVE_OPTIONS.to_vec(),
        active_sessions: ACTIVE_SESSIONS.to_vec(),
        audit_log: audit_log(user),
        redirect_hint: (filters.tab == SettingsTab::Notifications).then_some(Page::Notifications),
    }
}
