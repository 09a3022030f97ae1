//! AI infrastructure optimisation opportunities.

use serde::{Deserialize, Serialize};

use super::compliance::TimeRange;
use super::{NamedAmount, Priority};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationCategory {
    Compute,
    Storage,
    Network,
}

/// Effort or impact grade. `None` only appears as a compliance impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    None,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizationFilters {
    /// `None` shows every category.
    pub category: Option<OptimizationCategory>,
    pub timeframe: TimeRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: u32,
    pub title: &'static str,
    pub category: OptimizationCategory,
    pub description: &'static str,
    pub current_cost: u64,
    pub potential_savings: u64,
    pub savings_percentage: u8,
    pub effort: Level,
    pub compliance_impact: Level,
    pub resources: &'static [&'static str],
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Utilization {
    pub resource: &'static str,
    pub utilization: u8,
    pub cost: u64,
    pub optimal: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsPoint {
    pub month: &'static str,
    pub implemented: u64,
    pub projected: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiWorkload {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub instances: u32,
    pub utilization: u8,
    pub cost: u64,
    pub compliance: &'static [&'static str],
    pub optimization: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationSummary {
    pub total_potential_savings: u64,
    pub total_current_cost: u64,
    /// Savings as a share of current cost, in percent with one decimal.
    pub savings_percent: String,
    pub average_utilization: u8,
    pub workload_count: usize,
    pub opportunity_count: usize,
    pub high_priority_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiOptimizationView {
    pub category: Option<OptimizationCategory>,
    pub timeframe: TimeRange,
    pub summary: OptimizationSummary,
    pub opportunities: Vec<Opportunity>,
    pub utilization: Vec<Utilization>,
    pub savings_timeline: Vec<SavingsPoint>,
    pub category_breakdown: Vec<NamedAmount>,
    pub workloads: Vec<AiWorkload>,
}

const OPPORTUNITIES: [Opportunity; 5] = [
    Opportunity {
        id: 1,
        title: "Right-size GPU Instances",
        category: OptimizationCategory::Compute,
        description: "ML training instances are over-provisioned by 40%",
        current_cost: 15_000,
        potential_savings: 6_000,
        savings_percentage: 40,
        effort: Level::Low,
        compliance_impact: Level::None,
        resources: &["ml-training-cluster-01", "ml-training-cluster-02"],
        priority: Priority::High,
    },
    Opportunity {
        id: 2,
        title: "Optimize AI Model Storage",
        category: OptimizationCategory::Storage,
        description: "Unused model versions consuming 2.5TB of premium storage",
        current_cost: 8_500,
        potential_savings: 3_200,
        savings_percentage: 38,
        effort: Level::Medium,
        compliance_impact: Level::Low,
        resources: &["model-storage-bucket", "training-data-lake"],
        priority: Priority::Medium,
    },
    Opportunity {
        id: 3,
        title: "Implement Auto-scaling for Inference",
        category: OptimizationCategory::Compute,
        description: "AI inference endpoints idle 60% of the time",
        current_cost: 12_000,
        potential_savings: 4_800,
        savings_percentage: 40,
        effort: Level::High,
        compliance_impact: Level::Medium,
        resources: &["inference-api-cluster", "model-serving-nodes"],
        priority: Priority::High,
    },
    Opportunity {
        id: 4,
        title: "Consolidate Development Environments",
        category: OptimizationCategory::Compute,
        description: "Multiple underutilized AI development environments",
        current_cost: 6_000,
        potential_savings: 2_400,
        savings_percentage: 40,
        effort: Level::Medium,
        compliance_impact: Level::None,
        resources: &["dev-ml-env-01", "dev-ml-env-02", "dev-ml-env-03"],
        priority: Priority::Low,
    },
    Opportunity {
        id: 5,
        title: "Optimize Data Pipeline Scheduling",
        category: OptimizationCategory::Compute,
        description: "ETL jobs running during peak hours unnecessarily",
        current_cost: 4_500,
        potential_savings: 1_350,
        savings_percentage: 30,
        effort: Level::Low,
        compliance_impact: Level::Low,
        resources: &["data-pipeline-cluster"],
        priority: Priority::Medium,
    },
];

const UTILIZATION: [Utilization; 5] = [
    usage("GPU Cluster A", 45, 15_000, 80),
    usage("GPU Cluster B", 62, 12_000, 80),
    usage("Inference Nodes", 35, 8_000, 70),
    usage("Training Storage", 78, 5_000, 85),
    usage("Data Pipeline", 55, 4_500, 75),
];

const SAVINGS_TIMELINE: [SavingsPoint; 6] = [
    savings("Month 1", 2_400, 2_400),
    savings("Month 2", 4_800, 5_600),
    savings("Month 3", 7_200, 8_800),
    savings("Month 4", 9_600, 12_000),
    savings("Month 5", 12_000, 15_200),
    savings("Month 6", 14_400, 17_750),
];

const CATEGORY_BREAKDOWN: [NamedAmount; 4] = [
    NamedAmount::new("Compute Optimization", 13_200),
    NamedAmount::new("Storage Optimization", 3_200),
    NamedAmount::new("Network Optimization", 800),
    NamedAmount::new("Scheduling Optimization", 1_350),
];

const WORKLOADS: [AiWorkload; 4] = [
    AiWorkload {
        name: "Credit Risk ML Models",
        kind: "Training",
        instances: 8,
        utilization: 45,
        cost: 15_000,
        compliance: &["PCI", "RBI"],
        optimization: Priority::High,
    },
    AiWorkload {
        name: "Fraud Detection API",
        kind: "Inference",
        instances: 12,
        utilization: 35,
        cost: 8_000,
        compliance: &["PCI"],
        optimization: Priority::High,
    },
    AiWorkload {
        name: "Customer Analytics",
        kind: "Batch Processing",
        instances: 6,
        utilization: 78,
        cost: 5_000,
        compliance: &["PII"],
        optimization: Priority::Low,
    },
    AiWorkload {
        name: "Risk Assessment Engine",
        kind: "Real-time",
        instances: 4,
        utilization: 62,
        cost: 6_500,
        compliance: &["RBI", "IRDAI"],
        optimization: Priority::Medium,
    },
];

const fn usage(resource: &'static str, utilization: u8, cost: u64, optimal: u8) -> Utilization {
    Utilization {
        resource,
        utilization,
        cost,
        optimal,
    }
}

const fn savings(month: &'static str, implemented: u64, projected: u64) -> SavingsPoint {
    SavingsPoint {
        month,
        implemented,
        projected,
    }
}

fn average_utilization(workloads: &[AiWorkload]) -> u8 {
    if workloads.is_empty() {
        return 0;
    }
    let sum: u32 = workloads
        .iter()
        .map(|workload| u32::from(workload.utilization))
        .sum();
    let count = u32::try_from(workloads.len()).unwrap_or(u32::MAX);
    u8::try_from(sum / count).unwrap_or(u8::MAX)
}

pub fn render(filters: OptimizationFilters) -> AiOptimizationView {
    let opportunities: Vec<Opportunity> = OPPORTUNITIES
        .into_iter()
        .filter(|opportunity| {
            filters
                .category
                .is_none_or(|category| opportunity.category == category)
        })
        .collect();
    let total_potential_savings = opportunities
        .iter()
        .map(|opportunity| opportunity.potential_savings)
        .sum();
    let total_current_cost = opportunities
        .iter()
        .map(|opportunity| opportunity.current_cost)
        .sum();
    let summary = OptimizationSummary {
        total_potential_savings,
        total_current_cost,
        savings_percent: format!(
            "{:.1}",
            super::percent_of(total_potential_savings, total_current_cost)
        ),
        average_utilization: average_utilization(&WORKLOADS),
        workload_count: WORKLOADS.len(),
        opportunity_count: opportunities.len(),
        high_priority_count: opportunities
            .iter()
            .filter(|opportunity| opportunity.priority == Priority::High)
            .count(),
    };
    AiOptimizationView {
        category: filters.category,
        timeframe: filters.timeframe,
        summary,
        opportunities,
        utilization: UTILIZATION.to_vec(),
        savings_timeline: SAVINGS_TIMELINE.to_vec(),
        category_breakdown: CATEGORY_BREAKDOWN.to_vec(),
        workloads: WORKLOADS.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn summary_over_all_categories() {
        let view = render(OptimizationFilters::default());
        assert_eq!(view.summary.total_potential_savings, 17_750);
        assert_eq!(view.summary.total_current_cost, 46_000);
        assert_eq!(view.summary.savings_percent, "38.6");
        assert_eq!(view.summary.high_priority_count, 2);
        assert_eq!(view.summary.opportunity_count, 5);
        assert_eq!(view.summary.average_utilization, 55);
        assert_eq!(view.timeframe, TimeRange::Month);
    }

    #[rstest]
    fn savings_timeline_reaches_total_potential() {
        let last = SAVINGS_TIMELINE.last().expect("timeline");
        let total: u64 = OPPORTUNITIES.iter().map(|o| o.potential_savings).sum();
        assert_eq!(last.projected, total);
    }

    #[rstest]
    #[case(OptimizationCategory::Compute, 4, 14_550)]
    #[case(OptimizationCategory::Storage, 1, 3_200)]
    #[case(OptimizationCategory::Network, 0, 0)]
    fn category_filter_narrows_opportunities(
        #[case] category: OptimizationCategory,
        #[case] count: usize,
        #[case] savings: u64,
    ) {
        let view = render(OptimizationFilters {
            category: Some(category),
            ..OptimizationFilters::default()
        });
        assert_eq!(view.opportunities.len(), count);
        assert_eq!(view.summary.total_potential_savings, savings);
    }

    #[rstest]
    fn empty_selection_reports_zero_percent() {
        let view = render(OptimizationFilters {
            category: Some(OptimizationCategory::Network),
            ..OptimizationFilters::default()
        });
        assert_eq!(view.summary.savings_percent, "0.0");
    }
}
