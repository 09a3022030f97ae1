//! Cost impact of upcoming regulatory change.

use serde::{Deserialize, Serialize};

use super::Priority;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regulation {
    Rbi,
    Irdai,
    Pci,
    Gdpr,
    Sebi,
}

impl Regulation {
    pub const ALL: [Regulation; 5] = [Self::Rbi, Self::Irdai, Self::Pci, Self::Gdpr, Self::Sebi];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rbi => "RBI Guidelines",
            Self::Irdai => "IRDAI Regulations",
            Self::Pci => "PCI DSS",
            Self::Gdpr => "GDPR",
            Self::Sebi => "SEBI Guidelines",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Rbi => "Reserve Bank of India data localization and security requirements",
            Self::Irdai => "Insurance Regulatory and Development Authority requirements",
            Self::Pci => "Payment Card Industry Data Security Standards",
            Self::Gdpr => "General Data Protection Regulation compliance",
            Self::Sebi => "Securities and Exchange Board of India requirements",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceApproach {
    Aggressive,
    Standard,
    Minimal,
}

impl ComplianceApproach {
    pub const ALL: [ComplianceApproach; 3] = [Self::Aggressive, Self::Standard, Self::Minimal];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Aggressive => "Aggressive Compliance",
            Self::Standard => "Standard Timeline",
            Self::Minimal => "Minimal Compliance",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Aggressive => "Implement all requirements ahead of deadlines",
            Self::Standard => "Follow regulatory timelines exactly",
            Self::Minimal => "Meet only mandatory requirements",
        }
    }

    pub const fn cost_multiplier(self) -> f64 {
        match self {
            Self::Aggressive => 1.3,
            Self::Standard => 1.0,
            Self::Minimal => 0.8,
        }
    }

    pub const fn time_reduction(self) -> &'static str {
        match self {
            Self::Aggressive => "40%",
            Self::Standard => "0%",
            Self::Minimal => "-20%",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegulatoryFilters {
    /// `None` shows every regulation.
    pub regulation: Option<Regulation>,
    /// `None` means no scenario has been picked yet.
    pub scenario: Option<ComplianceApproach>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulationOption {
    pub id: Regulation,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactRow {
    pub id: Regulation,
    pub regulation: &'static str,
    pub current_cost: u64,
    pub projected_cost: u64,
    pub impact: &'static str,
    pub timeline: &'static str,
    pub increase: u64,
    /// Current cost as a share of the projected cost, in percent.
    pub current_share: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    pub month: &'static str,
    pub rbi: u64,
    pub irdai: u64,
    pub pci: u64,
    pub gdpr: u64,
    pub sebi: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOption {
    pub id: ComplianceApproach,
    pub name: &'static str,
    pub description: &'static str,
    pub cost_multiplier: f64,
    pub time_reduction: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingRegulation {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub effective_date: &'static str,
    pub estimated_impact: &'static str,
    pub priority: Priority,
    pub preparation_time: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulatoryTotals {
    pub current_cost: u64,
    pub projected_cost: u64,
    /// Percentage increase formatted with one decimal, e.g. `"57.6"`.
    pub increase_percent: String,
    /// Projected cost scaled by the selected scenario's multiplier.
    pub scenario_projected_cost: Option<u64>,
    pub upcoming_count: usize,
    pub high_priority_count: usize,
    pub regulations_tracked: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulatoryImpactView {
    pub regulation: Option<Regulation>,
    pub regulations: Vec<RegulationOption>,
    pub totals: RegulatoryTotals,
    pub impacts: Vec<ImpactRow>,
    pub timeline: Vec<TimelinePoint>,
    pub scenarios: Vec<ScenarioOption>,
    pub upcoming: Vec<UpcomingRegulation>,
}

struct Impact {
    id: Regulation,
    regulation: &'static str,
    current_cost: u64,
    projected_cost: u64,
    impact: &'static str,
    timeline: &'static str,
}

const IMPACTS: [Impact; 5] = [
    Impact {
        id: Regulation::Rbi,
        regulation: "RBI Data Localization",
        current_cost: 45_000,
        projected_cost: 78_000,
        impact: "+73%",
        timeline: "6 months",
    },
    Impact {
        id: Regulation::Irdai,
        regulation: "IRDAI Cloud Security",
        current_cost: 32_000,
        projected_cost: 48_000,
        impact: "+50%",
        timeline: "3 months",
    },
    Impact {
        id: Regulation::Pci,
        regulation: "PCI DSS v4.0",
        current_cost: 28_000,
        projected_cost: 42_000,
        impact: "+50%",
        timeline: "12 months",
    },
    Impact {
        id: Regulation::Gdpr,
        regulation: "GDPR Enhancement",
        current_cost: 15_000,
        projected_cost: 22_000,
        impact: "+47%",
        timeline: "9 months",
    },
    Impact {
        id: Regulation::Sebi,
        regulation: "SEBI Cybersecurity",
        current_cost: 12_000,
        projected_cost: 18_000,
        impact: "+50%",
        timeline: "4 months",
    },
];

const TIMELINE: [TimelinePoint; 5] = [
    point("Current", [45_000, 32_000, 28_000, 15_000, 12_000]),
    point("Month 3", [52_000, 48_000, 30_000, 16_000, 12_000]),
    point("Month 6", [78_000, 48_000, 32_000, 18_000, 15_000]),
    point("Month 9", [78_000, 48_000, 36_000, 22_000, 15_000]),
    point("Month 12", [78_000, 48_000, 42_000, 22_000, 18_000]),
];

const UPCOMING: [UpcomingRegulation; 3] = [
    UpcomingRegulation {
        id: 1,
        title: "RBI Cloud Guidelines Update",
        description: "Enhanced data residency and audit requirements",
        effective_date: "2024-12-01",
        estimated_impact: "$35,000/month",
        priority: Priority::High,
        preparation_time: "6 months",
    },
    UpcomingRegulation {
        id: 2,
        title: "IRDAI Digital Security Framework",
        description: "New cybersecurity standards for insurance companies",
        effective_date: "2025-03-01",
        estimated_impact: "$28,000/month",
        priority: Priority::Medium,
        preparation_time: "9 months",
    },
    UpcomingRegulation {
        id: 3,
        title: "PCI DSS v4.0 Mandatory",
        description: "Transition from v3.2.1 becomes mandatory",
        effective_date: "2025-03-31",
        estimated_impact: "$15,000/month",
        priority: Priority::High,
        preparation_time: "8 months",
    },
];

const fn point(month: &'static str, costs: [u64; 5]) -> TimelinePoint {
    let [rbi, irdai, pci, gdpr, sebi] = costs;
    TimelinePoint {
        month,
        rbi,
        irdai,
        pci,
        gdpr,
        sebi,
    }
}

/// Percentage growth from `current` to `projected`, one decimal place.
///
/// # Examples
/// ```
/// use finsage::domain::pages::regulatory_impact::increase_percent;
///
/// assert_eq!(increase_percent(132_000, 208_000), "57.6");
/// assert_eq!(increase_percent(0, 10), "0.0");
/// ```
pub fn increase_percent(current: u64, projected: u64) -> String {
    if current == 0 {
        return "0.0".to_owned();
    }
    let growth = (projected as f64 - current as f64) / current as f64 * 100.0;
    format!("{growth:.1}")
}

fn impact_row(impact: &Impact) -> ImpactRow {
    ImpactRow {
        id: impact.id,
        regulation: impact.regulation,
        current_cost: impact.current_cost,
        projected_cost: impact.projected_cost,
        impact: impact.impact,
        timeline: impact.timeline,
        increase: impact.projected_cost.saturating_sub(impact.current_cost),
        current_share: super::percent_of(impact.current_cost, impact.projected_cost),
    }
}

pub fn render(filters: RegulatoryFilters) -> RegulatoryImpactView {
    let impacts: Vec<ImpactRow> = IMPACTS
        .iter()
        .filter(|impact| filters.regulation.is_none_or(|id| impact.id == id))
        .map(impact_row)
        .collect();
    let current_cost: u64 = impacts.iter().map(|row| row.current_cost).sum();
    let projected_cost: u64 = impacts.iter().map(|row| row.projected_cost).sum();
    let totals = RegulatoryTotals {
        current_cost,
        projected_cost,
        increase_percent: increase_percent(current_cost, projected_cost),
        scenario_projected_cost: filters
            .scenario
            .map(|scenario| (projected_cost as f64 * scenario.cost_multiplier()).round() as u64),
        upcoming_count: UPCOMING.len(),
        high_priority_count: UPCOMING
            .iter()
            .filter(|upcoming| upcoming.priority == Priority::High)
            .count(),
        regulations_tracked: Regulation::ALL.len(),
    };
    RegulatoryImpactView {
        regulation: filters.regulation,
        regulations: Regulation::ALL
            .into_iter()
            .map(|id| RegulationOption {
                id,
                name: id.name(),
                description: id.description(),
            })
            .collect(),
        totals,
        impacts,
        timeline: TIMELINE.to_vec(),
        scenarios: ComplianceApproach::ALL
            .into_iter()
            .map(|id| ScenarioOption {
                id,
                name: id.name(),
                description: id.description(),
                cost_multiplier: id.cost_multiplier(),
                time_reduction: id.time_reduction(),
                selected: filters.scenario == Some(id),
            })
            .collect(),
        upcoming: UPCOMING.to_vec(),
    }
}
