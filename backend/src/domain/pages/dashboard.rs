//! Landing page: spend overview and recent alerts.

use serde::Serialize;

use super::{Alert, NamedAmount, Severity, StatCard, Trend};

/// Spend versus forecast for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendTrendPoint {
    pub month: &'static str,
    pub spend: u64,
    pub forecast: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub stats: Vec<StatCard>,
    pub spend_by_category: Vec<NamedAmount>,
    pub category_total: u64,
    pub spend_trend: Vec<SpendTrendPoint>,
    pub provider_spend: Vec<NamedAmount>,
    pub provider_total: u64,
    pub alerts: Vec<Alert>,
}

const SPEND_BY_CATEGORY: [NamedAmount; 4] = [
    NamedAmount::new("PCI Compliance", 45_000),
    NamedAmount::new("IRDAI Requirements", 32_000),
    NamedAmount::new("General Workloads", 23_000),
    NamedAmount::new("DR & Backup", 18_000),
];

const SPEND_TREND: [SpendTrendPoint; 6] = [
    trend("Jan", 95_000, 98_000),
    trend("Feb", 105_000, 108_000),
    trend("Mar", 118_000, 115_000),
    trend("Apr", 142_000, 125_000),
    trend("May", 156_000, 135_000),
    trend("Jun", 178_000, 165_000),
];

const PROVIDER_SPEND: [NamedAmount; 3] = [
    NamedAmount::new("AWS", 89_000),
    NamedAmount::new("Azure", 67_000),
    NamedAmount::new("GCP", 22_000),
];

const fn trend(month: &'static str, spend: u64, forecast: u64) -> SpendTrendPoint {
    SpendTrendPoint {
        month,
        spend,
        forecast,
    }
}

fn stats() -> Vec<StatCard> {
    vec![
        StatCard::new("Total Cloud Spend", "$178,000", "+12.4%", Trend::Increase),
        StatCard::new("Compliance Costs", "$77,000", "+8.2%", Trend::Increase),
        StatCard::new("Cost Optimization", "$23,400", "-15.3%", Trend::Decrease),
        StatCard::new("Active Alerts", "7", "+2", Trend::Increase),
    ]
}

fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: 1,
            severity: Severity::Warning,
            title: "PCI Compliance Budget Exceeded",
            message: "PCI-tagged resources exceeded budget by 15% this month",
            time: "2 hours ago",
        },
        Alert {
            id: 2,
            severity: Severity::Info,
            title: "Cost Optimization Opportunity",
            message: "Identified $5,400/month savings in unused RDS instances",
            time: "4 hours ago",
        },
        Alert {
            id: 3,
            severity: Severity::Critical,
            title: "IRDAI Compliance Alert",
            message: "New IRDAI-tagged resources deployed without approval",
            time: "6 hours ago",
        },
    ]
}

pub fn render() -> DashboardView {
    DashboardView {
        stats: stats(),
        spend_by_category: SPEND_BY_CATEGORY.to_vec(),
        category_total: super::total(&SPEND_BY_CATEGORY),
        spend_trend: SPEND_TREND.to_vec(),
        provider_spend: PROVIDER_SPEND.to_vec(),
        provider_total: super::total(&PROVIDER_SPEND),
        alerts: alerts(),
    }
}
