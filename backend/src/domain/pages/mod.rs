//! Page view models.
//!
//! Every page is a pure function from its filter state (and, for a few pages,
//! the signed-in user or session-held configuration) to a serialisable view.
//! The datasets are fixed demo figures owned by the page presenting them;
//! totals, counts and percentages are derived from them rather than stored.

pub mod ai_optimization;
pub mod chargeback;
pub mod cloud_integration;
pub mod compliance;
pub mod compliance_frameworks;
pub mod dashboard;
pub mod forecast;
pub mod notifications;
pub mod profile;
pub mod regulatory_impact;
pub mod reports;
pub mod settings;

use serde::Serialize;
use serde_json::json;

use super::{Error, Page, User};
use self::notifications::NotificationConfig;
use self::settings::SettingsConfig;

/// Labelled amount used by pie and bar series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedAmount {
    pub name: &'static str,
    pub amount: u64,
}

impl NamedAmount {
    pub const fn new(name: &'static str, amount: u64) -> Self {
        Self { name, amount }
    }
}

/// Longest free-text value kept in the session, in characters.
///
/// Session state travels in a cookie, so unbounded form input would push it
/// past what browsers store.
pub const MAX_TEXT_CHARS: usize = 256;

/// `value` unchanged when it fits in [`MAX_TEXT_CHARS`].
///
/// # Examples
/// ```
/// use finsage::domain::pages::bounded_text;
///
/// assert_eq!(bounded_text("channel", "#alerts".to_owned()).unwrap(), "#alerts");
/// assert!(bounded_text("channel", "#".repeat(300)).is_err());
/// ```
pub fn bounded_text(field: &str, value: String) -> Result<String, Error> {
    if value.chars().count() > MAX_TEXT_CHARS {
        return Err(Error::invalid_request(format!(
            "{field} must be at most {MAX_TEXT_CHARS} characters"
        ))
        .with_details(json!({ "field": field, "code": "too_long" })));
    }
    Ok(value)
}

/// Sum of a series.
pub fn total(series: &[NamedAmount]) -> u64 {
    series.iter().map(|entry| entry.amount).sum()
}

/// `part` as a percentage of `whole`; zero when `whole` is zero.
///
/// # Examples
/// ```
/// use finsage::domain::pages::percent_of;
///
/// assert_eq!(percent_of(1, 4), 25.0);
/// assert_eq!(percent_of(5, 0), 0.0);
/// ```
pub fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / whole as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increase,
    Decrease,
}

/// Headline figure with its period-on-period change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

impl StatCard {
    pub const fn new(
        title: &'static str,
        value: &'static str,
        change: &'static str,
        trend: Trend,
    ) -> Self {
        Self {
            title,
            value,
            change,
            trend,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Good,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Ready,
    Processing,
}

/// Reject downloads of reports still being generated.
pub fn require_ready(status: ReportStatus, name: &str) -> Result<(), Error> {
    match status {
        ReportStatus::Ready => Ok(()),
        ReportStatus::Processing => Err(Error::conflict(format!("{name} is still processing"))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: u32,
    pub severity: Severity,
    pub title: &'static str,
    pub message: &'static str,
    pub time: &'static str,
}

/// Filter state for one page, as bound from the query string.
#[derive(Debug, Clone, PartialEq)]
pub enum PageFilters {
    Dashboard,
    CloudIntegration(cloud_integration::CloudIntegrationFilters),
    Compliance(compliance::ComplianceFilters),
    Forecast(forecast::ForecastFilters),
    Chargeback(chargeback::ChargebackFilters),
    Notifications(notifications::NotificationFilters),
    Reports(reports::ReportFilters),
    RegulatoryImpact(regulatory_impact::RegulatoryFilters),
    AiOptimization(ai_optimization::OptimizationFilters),
    ComplianceFrameworks(compliance_frameworks::FrameworkFilters),
    Profile(profile::ProfileFilters),
    Settings(settings::SettingsFilters),
}

impl PageFilters {
    /// Initial filter state of `page`.
    pub fn defaults(page: Page) -> Self {
        match page {
            Page::Dashboard => Self::Dashboard,
            Page::CloudIntegration => Self::CloudIntegration(Default::default()),
            Page::Compliance => Self::Compliance(Default::default()),
            Page::Forecast => Self::Forecast(Default::default()),
            Page::Chargeback => Self::Chargeback(Default::default()),
            Page::Notifications => Self::Notifications(Default::default()),
            Page::Reports => Self::Reports(Default::default()),
            Page::RegulatoryImpact => Self::RegulatoryImpact(Default::default()),
            Page::AiOptimization => Self::AiOptimization(Default::default()),
            Page::ComplianceFrameworks => Self::ComplianceFrameworks(Default::default()),
            Page::Profile => Self::Profile(Default::default()),
            Page::Settings => Self::Settings(Default::default()),
        }
    }

    pub fn page(&self) -> Page {
        match self {
            Self::Dashboard => Page::Dashboard,
            Self::CloudIntegration(_) => Page::CloudIntegration,
            Self::Compliance(_) => Page::Compliance,
            Self::Forecast(_) => Page::Forecast,
            Self::Chargeback(_) => Page::Chargeback,
            Self::Notifications(_) => Page::Notifications,
            Self::Reports(_) => Page::Reports,
            Self::RegulatoryImpact(_) => Page::RegulatoryImpact,
            Self::AiOptimization(_) => Page::AiOptimization,
            Self::ComplianceFrameworks(_) => Page::ComplianceFrameworks,
            Self::Profile(_) => Page::Profile,
            Self::Settings(_) => Page::Settings,
        }
    }
}

/// Rendered page, tagged with its identifier.
///
/// Serialised as `{"page": "reports", "view": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", content = "view", rename_all = "kebab-case")]
pub enum PageView {
    Dashboard(dashboard::DashboardView),
    CloudIntegration(cloud_integration::CloudIntegrationView),
    Compliance(compliance::ComplianceView),
    Forecast(forecast::ForecastView),
    Chargeback(chargeback::ChargebackView),
    Notifications(notifications::NotificationsView),
    Reports(reports::ReportsView),
    RegulatoryImpact(regulatory_impact::RegulatoryImpactView),
    AiOptimization(ai_optimization::AiOptimizationView),
    ComplianceFrameworks(compliance_frameworks::ComplianceFrameworksView),
    Profile(profile::ProfileView),
    Settings(settings::SettingsView),
}

impl PageView {
    pub fn page(&self) -> Page {
        match self {
            Self::Dashboard(_) => Page::Dashboard,
            Self::CloudIntegration(_) => Page::CloudIntegration,
            Self::Compliance(_) => Page::Compliance,
            Self::Forecast(_) => Page::Forecast,
            Self::Chargeback(_) => Page::Chargeback,
            Self::Notifications(_) => Page::Notifications,
            Self::Reports(_) => Page::Reports,
            Self::RegulatoryImpact(_) => Page::RegulatoryImpact,
            Self::AiOptimization(_) => Page::AiOptimization,
            Self::ComplianceFrameworks(_) => Page::ComplianceFrameworks,
            Self::Profile(_) => Page::Profile,
            Self::Settings(_) => Page::Settings,
        }
    }
}

/// Session-held inputs some pages read.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub user: &'a User,
    pub notifications: &'a NotificationConfig,
    pub settings: &'a SettingsConfig,
}

/// Render the page selected by `filters`.
pub fn render(filters: PageFilters, ctx: ViewContext<'_>) -> PageView {
    match filters {
        PageFilters::Dashboard => PageView::Dashboard(dashboard::render()),
        PageFilters::CloudIntegration(f) => {
            PageView::CloudIntegration(cloud_integration::render(f))
        }
        PageFilters::Compliance(f) => PageView::Compliance(compliance::render(f)),
        PageFilters::Forecast(f) => PageView::Forecast(forecast::render(f)),
        PageFilters::Chargeback(f) => PageView::Chargeback(chargeback::render(f)),
        PageFilters::Notifications(f) => {
            PageView::Notifications(notifications::render(f, ctx.notifications.clone()))
        }
        PageFilters::Reports(f) => PageView::Reports(reports::render(f)),
        PageFilters::RegulatoryImpact(f) => {
            PageView::RegulatoryImpact(regulatory_impact::render(f))
        }
        PageFilters::AiOptimization(f) => PageView::AiOptimization(ai_optimization::render(f)),
        PageFilters::ComplianceFrameworks(f) => PageView::ComplianceFrameworks(
            compliance_frameworks::render(f, ctx.user.role()),
        ),
        PageFilters::Profile(f) => PageView::Profile(profile::render(f, ctx.user)),
        PageFilters::Settings(f) => {
            PageView::Settings(settings::render(f, ctx.settings.clone(), ctx.user))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorCode, LoginForm, Role};
    use rstest::rstest;

    #[rstest]
    fn every_page_renders_itself() {
        let user = LoginForm::for_role(Role::Cfo).into_user().expect("user");
        let notifications = NotificationConfig::for_user(&user);
        let settings = SettingsConfig::for_user(&user);
        let ctx = ViewContext {
            user: &user,
            notifications: &notifications,
            settings: &settings,
        };
        for page in Page::ALL {
            let filters = PageFilters::defaults(page);
            assert_eq!(filters.page(), page);
            assert_eq!(render(filters, ctx).page(), page);
        }
    }

    #[rstest]
    fn view_is_tagged_with_page() {
        let user = LoginForm::for_role(Role::Cfo).into_user().expect("user");
        let notifications = NotificationConfig::for_user(&user);
        let settings = SettingsConfig::for_user(&user);
        let ctx = ViewContext {
            user: &user,
            notifications: &notifications,
            settings: &settings,
        };
        let value = serde_json::to_value(render(PageFilters::defaults(Page::AiOptimization), ctx))
            .expect("serialise");
        assert_eq!(value["page"], "ai-optimization");
        assert_eq!(value["view"]["summary"]["savingsPercent"], "38.6");
    }

    #[rstest]
    #[case(1, 4, 25.0)]
    #[case(0, 10, 0.0)]
    #[case(3, 0, 0.0)]
    fn percent_handles_empty_whole(#[case] part: u64, #[case] whole: u64, #[case] expected: f64) {
        assert!((percent_of(part, whole) - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    fn processing_reports_conflict() {
        assert!(require_ready(ReportStatus::Ready, "Q2").is_ok());
        let err = require_ready(ReportStatus::Processing, "Q2").expect_err("processing");
        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(err.message(), "Q2 is still processing");
    }
}
