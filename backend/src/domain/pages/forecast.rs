//! AI cost forecasting and what-if planning.

use serde::{Deserialize, Serialize};

use super::HealthStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    #[default]
    Current,
    Optimized,
    Expansion,
    Migration,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Self::Current,
        Self::Optimized,
        Self::Expansion,
        Self::Migration,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Current => "Current Trajectory",
            Self::Optimized => "Cost Optimized",
            Self::Expansion => "Business Expansion",
            Self::Migration => "Cloud Migration",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Current => "Based on existing usage patterns",
            Self::Optimized => "With recommended optimizations applied",
            Self::Expansion => "25% increase in workloads",
            Self::Migration => "Additional on-premise migration",
        }
    }
}

/// Forecast horizon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForecastPeriod {
    #[serde(rename = "3m")]
    ThreeMonths,
    #[default]
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "12m")]
    TwelveMonths,
}

impl ForecastPeriod {
    pub const fn months(self) -> usize {
        match self {
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::TwelveMonths => 12,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForecastFilters {
    pub scenario: Scenario,
    pub period: ForecastPeriod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceScope {
    /// Expand PCI scope.
    Expand,
    /// New IRDAI region.
    NewRegion,
    /// Additional SOC 2.
    Additional,
}

/// Parameters of a what-if forecast run. Every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WhatIfInputs {
    pub new_workloads: Option<u32>,
    pub ai_instances: Option<u32>,
    pub storage_growth: Option<u32>,
    pub compliance_scope: Option<ComplianceScope>,
}

/// A what-if request submitted from the planning panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScenarioRun {
    pub scenario: Scenario,
    pub inputs: WhatIfInputs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub month: &'static str,
    pub actual: Option<u64>,
    pub forecast: u64,
    pub optimistic: u64,
    pub pessimistic: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceForecast {
    pub category: &'static str,
    pub current: u64,
    pub forecast: u64,
    pub growth: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastMetric {
    pub title: &'static str,
    pub value: &'static str,
    pub confidence: &'static str,
    pub change: &'static str,
    pub status: HealthStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOption {
    pub id: Scenario,
    pub name: &'static str,
    pub description: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastView {
    pub period: ForecastPeriod,
    pub metrics: Vec<ForecastMetric>,
    pub forecast: Vec<ForecastPoint>,
    pub compliance_forecast: Vec<ComplianceForecast>,
    pub compliance_current_total: u64,
    pub compliance_forecast_total: u64,
    pub scenarios: Vec<ScenarioOption>,
    pub what_if: WhatIfInputs,
}

const FORECAST: [ForecastPoint; 6] = [
    ForecastPoint {
        month: "Jul 2024",
        actual: Some(178_000),
        forecast: 165_000,
        optimistic: 155_000,
        pessimistic: 185_000,
    },
    projected("Aug 2024", 185_000, 170_000, 205_000),
    projected("Sep 2024", 192_000, 175_000, 215_000),
    projected("Oct 2024", 198_000, 180_000, 225_000),
    projected("Nov 2024", 205_000, 185_000, 235_000),
    projected("Dec 2024", 215_000, 195_000, 250_000),
];

const COMPLIANCE_FORECAST: [ComplianceForecast; 4] = [
    ComplianceForecast {
        category: "PCI Compliance",
        current: 45_000,
        forecast: 52_000,
        growth: "+15.6%",
    },
    ComplianceForecast {
        category: "IRDAI Requirements",
        current: 32_000,
        forecast: 38_000,
        growth: "+18.8%",
    },
    ComplianceForecast {
        category: "PII Protection",
        current: 28_000,
        forecast: 32_000,
        growth: "+14.3%",
    },
    ComplianceForecast {
        category: "SOC 2",
        current: 13_000,
        forecast: 16_000,
        growth: "+23.1%",
    },
];

const METRICS: [ForecastMetric; 4] = [
    ForecastMetric {
        title: "Predicted 6M Spend",
        value: "$1.2M",
        confidence: "94%",
        change: "+18.4%",
        status: HealthStatus::Warning,
    },
    ForecastMetric {
        title: "Budget Breach Risk",
        value: "23%",
        confidence: "89%",
        change: "+5%",
        status: HealthStatus::Critical,
    },
    ForecastMetric {
        title: "Optimization Potential",
        value: "$45K",
        confidence: "92%",
        change: "-12%",
        status: HealthStatus::Good,
    },
    ForecastMetric {
        title: "Compliance Growth",
        value: "+16.8%",
        confidence: "87%",
        change: "+3%",
        status: HealthStatus::Warning,
    },
];

const fn projected(
    month: &'static str,
    forecast: u64,
    optimistic: u64,
    pessimistic: u64,
) -> ForecastPoint {
    ForecastPoint {
        month,
        actual: None,
        forecast,
        optimistic,
        pessimistic,
    }
}

/// Forecast points within the horizon. The series holds six months, so
/// longer horizons show all of them.
pub fn forecast_points(period: ForecastPeriod) -> &'static [ForecastPoint] {
    &FORECAST[..period.months().min(FORECAST.len())]
}

pub fn render(filters: ForecastFilters) -> ForecastView {
    ForecastView {
        period: filters.period,
        metrics: METRICS.to_vec(),
        forecast: forecast_points(filters.period).to_vec(),
        compliance_forecast: COMPLIANCE_FORECAST.to_vec(),
        compliance_current_total: COMPLIANCE_FORECAST.iter().map(|row| row.current).sum(),
        compliance_forecast_total: COMPLIANCE_FORECAST.iter().map(|row| row.forecast).sum(),
        scenarios: Scenario::ALL
            .into_iter()
            .map(|id| ScenarioOption {
                id,
                name: id.name(),
                description: id.description(),
                selected: id == filters.scenario,
            })
            .collect(),
        what_if: WhatIfInputs::default(),
    }
}
