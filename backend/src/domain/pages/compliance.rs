//! Compliance cost dashboard.

use serde::{Deserialize, Serialize};

use super::{Direction, HealthStatus, Severity};

/// Compliance type selector. `All` disables narrowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceFilter {
    #[default]
    All,
    Pci,
    Irdai,
    Pii,
    Soc2,
}

/// Reporting window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

impl TimeRange {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Week => "Last 7 days",
            Self::Month => "Last 30 days",
            Self::Quarter => "Last 90 days",
            Self::Year => "Last year",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComplianceFilters {
    pub compliance: ComplianceFilter,
    pub time_range: TimeRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceMetric {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub direction: Direction,
    pub target: &'static str,
    pub status: HealthStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceSpend {
    pub compliance: ComplianceFilter,
    pub name: &'static str,
    pub amount: u64,
    pub percentage: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyComplianceSpend {
    pub month: &'static str,
    pub pci: u64,
    pub irdai: u64,
    pub pii: u64,
    pub soc2: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceAlert {
    pub id: u32,
    pub compliance: ComplianceFilter,
    pub severity: Severity,
    pub title: &'static str,
    pub description: &'static str,
    pub resource: &'static str,
    pub time: &'static str,
    pub cost: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceView {
    pub compliance: ComplianceFilter,
    pub time_range: TimeRange,
    pub time_range_label: &'static str,
    pub metrics: Vec<ComplianceMetric>,
    pub spend_breakdown: Vec<ComplianceSpend>,
    pub breakdown_total: u64,
    pub monthly_spend: Vec<MonthlyComplianceSpend>,
    pub alerts: Vec<ComplianceAlert>,
}

const METRICS: [ComplianceMetric; 4] = [
    ComplianceMetric {
        title: "Total Compliance Spend",
        value: "$118,000",
        change: "+8.4%",
        direction: Direction::Up,
        target: "$125,000",
        status: HealthStatus::Good,
    },
    ComplianceMetric {
        title: "Policy Violations",
        value: "3",
        change: "-2",
        direction: Direction::Down,
        target: "0",
        status: HealthStatus::Warning,
    },
    ComplianceMetric {
        title: "Compliance Score",
        value: "94%",
        change: "+2%",
        direction: Direction::Up,
        target: "98%",
        status: HealthStatus::Good,
    },
    ComplianceMetric {
        title: "At-Risk Resources",
        value: "12",
        change: "+3",
        direction: Direction::Up,
        target: "0",
        status: HealthStatus::Critical,
    },
];

const SPEND_BREAKDOWN: [ComplianceSpend; 4] = [
    spend(ComplianceFilter::Pci, "PCI Compliance", 45_000, 38),
    spend(ComplianceFilter::Irdai, "IRDAI Requirements", 32_000, 27),
    spend(ComplianceFilter::Pii, "PII Protection", 28_000, 24),
    spend(ComplianceFilter::Soc2, "SOC 2", 13_000, 11),
];

const MONTHLY_SPEND: [MonthlyComplianceSpend; 6] = [
    monthly("Jan", 38_000, 28_000, 22_000, 10_000),
    monthly("Feb", 42_000, 30_000, 24_000, 11_000),
    monthly("Mar", 45_000, 32_000, 28_000, 13_000),
    monthly("Apr", 48_000, 35_000, 30_000, 14_000),
    monthly("May", 52_000, 38_000, 32_000, 15_000),
    monthly("Jun", 55_000, 40_000, 35_000, 16_000),
];

const ALERTS: [ComplianceAlert; 3] = [
    ComplianceAlert {
        id: 1,
        compliance: ComplianceFilter::Pci,
        severity: Severity::Critical,
        title: "PCI Compliance Breach Risk",
        description: "Unencrypted RDS instance detected in PCI environment",
        resource: "rds-prod-payments-001",
        time: "15 minutes ago",
        cost: "$2,400/month",
    },
    ComplianceAlert {
        id: 2,
        compliance: ComplianceFilter::Irdai,
        severity: Severity::Warning,
        title: "IRDAI Data Residency Violation",
        description: "Resources deployed outside approved Indian regions",
        resource: "ec2-analytics-cluster",
        time: "2 hours ago",
        cost: "$3,200/month",
    },
    ComplianceAlert {
        id: 3,
        compliance: ComplianceFilter::Soc2,
        severity: Severity::Info,
        title: "SOC 2 Logging Insufficient",
        description: "CloudTrail logs retention below compliance requirement",
        resource: "cloudtrail-audit-logs",
        time: "4 hours ago",
        cost: "$150/month",
    },
];

const fn spend(
    compliance: ComplianceFilter,
    name: &'static str,
    amount: u64,
    percentage: u8,
) -> ComplianceSpend {
    ComplianceSpend {
        compliance,
        name,
        amount,
        percentage,
    }
}

const fn monthly(
    month: &'static str,
    pci: u64,
    irdai: u64,
    pii: u64,
    soc2: u64,
) -> MonthlyComplianceSpend {
    MonthlyComplianceSpend {
        month,
        pci,
        irdai,
        pii,
        soc2,
    }
}

impl ComplianceFilter {
    fn admits(self, compliance: ComplianceFilter) -> bool {
        self == Self::All || self == compliance
    }
}

pub fn render(filters: ComplianceFilters) -> ComplianceView {
    let selected = filters.compliance;
    let spend_breakdown: Vec<ComplianceSpend> = SPEND_BREAKDOWN
        .into_iter()
        .filter(|entry| selected.admits(entry.compliance))
        .collect();
    let breakdown_total = spend_breakdown.iter().map(|entry| entry.amount).sum();
    ComplianceView {
        compliance: selected,
        time_range: filters.time_range,
        time_range_label: filters.time_range.label(),
        metrics: METRICS.to_vec(),
        spend_breakdown,
        breakdown_total,
        monthly_spend: MONTHLY_SPEND.to_vec(),
        alerts: ALERTS
            .into_iter()
            .filter(|alert| selected.admits(alert.compliance))
            .collect(),
    }
}
