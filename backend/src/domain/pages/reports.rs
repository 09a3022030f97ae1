//! Report library and schedules.

use serde::{Deserialize, Serialize};

use super::{ReportStatus, require_ready};
use crate::domain::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportCategory {
    Cost,
    Compliance,
    Executive,
    Forecast,
    Chargeback,
}

impl ReportCategory {
    pub const ALL: [ReportCategory; 5] = [
        Self::Cost,
        Self::Compliance,
        Self::Executive,
        Self::Forecast,
        Self::Chargeback,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Cost => "Cost Reports",
            Self::Compliance => "Compliance",
            Self::Executive => "Executive",
            Self::Forecast => "Forecasting",
            Self::Chargeback => "Chargeback",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

/// Download format, named as shown on the report card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileFormat {
    #[serde(rename = "PDF")]
    Pdf,
    Excel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportFilters {
    /// `None` lists every category.
    pub category: Option<ReportCategory>,
    pub period: ReportPeriod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetrics {
    pub total_pages: u32,
    pub charts: u32,
    pub tables: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: u32,
    pub name: &'static str,
    pub category: ReportCategory,
    #[serde(rename = "type")]
    pub format: FileFormat,
    pub size: &'static str,
    pub generated_date: &'static str,
    pub description: &'static str,
    pub status: ReportStatus,
    pub metrics: ReportMetrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    /// `None` is the "all reports" entry.
    pub id: Option<ReportCategory>,
    pub name: &'static str,
    pub count: usize,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledReport {
    pub id: u32,
    pub name: &'static str,
    pub frequency: &'static str,
    pub next_run: &'static str,
    pub enabled: bool,
    pub recipients: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsView {
    pub period: ReportPeriod,
    pub categories: Vec<CategoryCount>,
    pub reports: Vec<Report>,
    pub scheduled: Vec<ScheduledReport>,
}

const REPORTS: [Report; 6] = [
    Report {
        id: 1,
        name: "Cloud Cost Summary - June 2024",
        category: ReportCategory::Cost,
        format: FileFormat::Pdf,
        size: "2.4 MB",
        generated_date: "2024-07-01",
        description: "Comprehensive overview of cloud spending across all business units",
        status: ReportStatus::Ready,
        metrics: metrics(24, 12, 8),
    },
    Report {
        id: 2,
        name: "Compliance Audit Report - Q2 2024",
        category: ReportCategory::Compliance,
        format: FileFormat::Pdf,
        size: "5.8 MB",
        generated_date: "2024-07-01",
        description: "Detailed compliance status for PCI, IRDAI, and SOC 2 requirements",
        status: ReportStatus::Ready,
        metrics: metrics(45, 18, 15),
    },
    Report {
        id: 3,
        name: "FinOps Executive Dashboard - June 2024",
        category: ReportCategory::Executive,
        format: FileFormat::Pdf,
        size: "1.2 MB",
        generated_date: "2024-07-01",
        description: "High-level financial operations summary for leadership",
        status: ReportStatus::Ready,
        metrics: metrics(8, 6, 3),
    },
    Report {
        id: 4,
        name: "AI Forecast Analysis - July 2024",
        category: ReportCategory::Forecast,
        format: FileFormat::Pdf,
        size: "3.1 MB",
        generated_date: "2024-07-02",
        description: "AI-powered cost predictions and scenario analysis",
        status: ReportStatus::Processing,
        metrics: metrics(32, 20, 10),
    },
    Report {
        id: 5,
        name: "Business Unit Chargeback - June 2024",
        category: ReportCategory::Chargeback,
        format: FileFormat::Excel,
        size: "890 KB",
        generated_date: "2024-07-01",
        description: "Detailed cost allocation per business unit with drill-down data",
        status: ReportStatus::Ready,
        metrics: metrics(12, 8, 20),
    },
    Report {
        id: 6,
        name: "Security & Compliance Scorecard",
        category: ReportCategory::Compliance,
        format: FileFormat::Pdf,
        size: "1.8 MB",
        generated_date: "2024-06-30",
        description: "Monthly security posture and compliance score assessment",
        status: ReportStatus::Ready,
        metrics: metrics(16, 10, 6),
    },
];

const SCHEDULED: [ScheduledReport; 3] = [
    ScheduledReport {
        id: 1,
        name: "Weekly Cost Summary",
        frequency: "Weekly",
        next_run: "2024-07-08",
        enabled: true,
        recipients: &["sarah.johnson@company.com", "finops-team@company.com"],
    },
    ScheduledReport {
        id: 2,
        name: "Monthly Compliance Report",
        frequency: "Monthly",
        next_run: "2024-08-01",
        enabled: true,
        recipients: &["ciso@company.com", "compliance-team@company.com"],
    },
    ScheduledReport {
        id: 3,
        name: "Quarterly Executive Summary",
        frequency: "Quarterly",
        next_run: "2024-10-01",
        enabled: false,
        recipients: &["cfo@company.com", "executive-team@company.com"],
    },
];

const fn metrics(total_pages: u32, charts: u32, tables: u32) -> ReportMetrics {
    ReportMetrics {
        total_pages,
        charts,
        tables,
    }
}

fn categories(selected: Option<ReportCategory>) -> Vec<CategoryCount> {
    let all = CategoryCount {
        id: None,
        name: "All Reports",
        count: REPORTS.len(),
        selected: selected.is_none(),
    };
    std::iter::once(all)
        .chain(ReportCategory::ALL.into_iter().map(|category| CategoryCount {
            id: Some(category),
            name: category.name(),
            count: REPORTS
                .iter()
                .filter(|report| report.category == category)
                .count(),
            selected: selected == Some(category),
        }))
        .collect()
}

/// Look up a report that is ready for download.
pub fn downloadable_report(id: u32) -> Result<Report, Error> {
    let report = REPORTS
        .into_iter()
        .find(|report| report.id == id)
        .ok_or_else(|| Error::not_found(format!("report {id} not found")))?;
    require_ready(report.status, report.name)?;
    Ok(report)
}

pub fn render(filters: ReportFilters) -> ReportsView {
    ReportsView {
        period: filters.period,
        categories: categories(filters.category),
        reports: REPORTS
            .into_iter()
            .filter(|report| filters.category.is_none_or(|category| report.category == category))
            .collect(),
        scheduled: SCHEDULED.to_vec(),
    }
}
