//! Cost allocation by business unit.

use serde::{Deserialize, Serialize};

use super::{NamedAmount, ReportStatus, require_ready};
use crate::domain::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargebackPeriod {
    #[default]
    Current,
    Previous,
    Quarter,
    Year,
}

impl ChargebackPeriod {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Current => "Current Month",
            Self::Previous => "Previous Month",
            Self::Quarter => "Current Quarter",
            Self::Year => "Year to Date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessUnitId {
    RetailBanking,
    CorporateBanking,
    Insurance,
    Analytics,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChargebackFilters {
    pub period: ChargebackPeriod,
    /// `None` shows every unit.
    pub business_unit: Option<BusinessUnitId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSplit {
    pub compute: u64,
    pub storage: u64,
    pub network: u64,
    pub compliance: u64,
}

impl ServiceSplit {
    pub const fn total(self) -> u64 {
        self.compute + self.storage + self.network + self.compliance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessUnit {
    pub id: BusinessUnitId,
    pub name: &'static str,
    pub total_cost: u64,
    pub growth: &'static str,
    pub services: ServiceSplit,
    pub compliance_types: &'static [&'static str],
    pub manager: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitTrendPoint {
    pub month: &'static str,
    pub retail: u64,
    pub corporate: u64,
    pub insurance: u64,
    pub analytics: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargebackReport {
    pub id: u32,
    pub name: &'static str,
    pub business_unit: &'static str,
    pub period: &'static str,
    pub total_amount: &'static str,
    pub status: ReportStatus,
    pub generated_at: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargebackSummary {
    pub total_cost: u64,
    pub business_units: usize,
    pub compliance_costs: u64,
    pub reports_ready: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargebackView {
    pub period: ChargebackPeriod,
    pub period_label: &'static str,
    pub business_unit: Option<BusinessUnitId>,
    pub summary: ChargebackSummary,
    pub units: Vec<BusinessUnit>,
    pub monthly_trend: Vec<UnitTrendPoint>,
    pub service_breakdown: Vec<NamedAmount>,
    pub reports: Vec<ChargebackReport>,
}

const UNITS: [BusinessUnit; 4] = [
    BusinessUnit {
        id: BusinessUnitId::RetailBanking,
        name: "Retail Banking",
        total_cost: 89_500,
        growth: "+12.4%",
        services: ServiceSplit {
            compute: 45_000,
            storage: 18_500,
            network: 12_000,
            compliance: 14_000,
        },
        compliance_types: &["PCI", "PII"],
        manager: "Sarah Johnson",
    },
    BusinessUnit {
        id: BusinessUnitId::CorporateBanking,
        name: "Corporate Banking",
        total_cost: 67_300,
        growth: "+8.7%",
        services: ServiceSplit {
            compute: 32_000,
            storage: 15_300,
            network: 9_500,
            compliance: 10_500,
        },
        compliance_types: &["PCI", "SOC2"],
        manager: "Michael Chen",
    },
    BusinessUnit {
        id: BusinessUnitId::Insurance,
        name: "Insurance Division",
        total_cost: 52_800,
        growth: "+15.2%",
        services: ServiceSplit {
            compute: 28_000,
            storage: 12_800,
            network: 6_500,
            compliance: 5_500,
        },
        compliance_types: &["IRDAI", "PII"],
        manager: "Jennifer Kim",
    },
    BusinessUnit {
        id: BusinessUnitId::Analytics,
        name: "Data Analytics",
        total_cost: 34_200,
        growth: "+22.1%",
        services: ServiceSplit {
            compute: 20_000,
            storage: 8_200,
            network: 3_500,
            compliance: 2_500,
        },
        compliance_types: &["PII", "SOC2"],
        manager: "David Rodriguez",
    },
];

const MONTHLY_TREND: [UnitTrendPoint; 6] = [
    trend("Jan", 78_000, 62_000, 45_000, 28_000),
    trend("Feb", 82_000, 64_000, 47_000, 30_000),
    trend("Mar", 85_000, 65_000, 49_000, 32_000),
    trend("Apr", 87_000, 66_000, 51_000, 33_000),
    trend("May", 88_500, 67_000, 52_000, 34_000),
    trend("Jun", 89_500, 67_300, 52_800, 34_200),
];

const SERVICE_BREAKDOWN: [NamedAmount; 4] = [
    NamedAmount::new("Compute", 125_000),
    NamedAmount::new("Storage", 54_800),
    NamedAmount::new("Network", 31_500),
    NamedAmount::new("Compliance", 32_500),
];

const REPORTS: [ChargebackReport; 3] = [
    ChargebackReport {
        id: 1,
        name: "June 2024 Chargeback Report",
        business_unit: "All Divisions",
        period: "June 2024",
        total_amount: "$243,800",
        status: ReportStatus::Ready,
        generated_at: "2024-07-01 09:00 AM",
    },
    ChargebackReport {
        id: 2,
        name: "Q2 2024 Quarterly Summary",
        business_unit: "All Divisions",
        period: "Q2 2024",
        total_amount: "$710,400",
        status: ReportStatus::Ready,
        generated_at: "2024-07-01 08:30 AM",
    },
    ChargebackReport {
        id: 3,
        name: "Retail Banking - June Detail",
        business_unit: "Retail Banking",
        period: "June 2024",
        total_amount: "$89,500",
        status: ReportStatus::Processing,
        generated_at: "2024-07-01 10:15 AM",
    },
];

const fn trend(
    month: &'static str,
    retail: u64,
    corporate: u64,
    insurance: u64,
    analytics: u64,
) -> UnitTrendPoint {
    UnitTrendPoint {
        month,
        retail,
        corporate,
        insurance,
        analytics,
    }
}

/// Look up a chargeback report that is ready for download.
///
/// Unknown ids are `not_found`; reports still processing are `conflict`.
pub fn downloadable_report(id: u32) -> Result<ChargebackReport, Error> {
    let report = REPORTS
        .into_iter()
        .find(|report| report.id == id)
        .ok_or_else(|| Error::not_found(format!("chargeback report {id} not found")))?;
    require_ready(report.status, report.name)?;
    Ok(report)
}

pub fn render(filters: ChargebackFilters) -> ChargebackView {
    let units: Vec<BusinessUnit> = UNITS
        .into_iter()
        .filter(|unit| filters.business_unit.is_none_or(|id| unit.id == id))
        .collect();
    let summary = ChargebackSummary {
        total_cost: units.iter().map(|unit| unit.total_cost).sum(),
        business_units: units.len(),
        compliance_costs: units.iter().map(|unit| unit.services.compliance).sum(),
        reports_ready: REPORTS
            .iter()
            .filter(|report| report.status == ReportStatus::Ready)
            .count(),
    };
    ChargebackView {
        period: filters.period,
        period_label: filters.period.label(),
        business_unit: filters.business_unit,
        summary,
        units,
        monthly_trend: MONTHLY_TREND.to_vec(),
        service_breakdown: SERVICE_BREAKDOWN.to_vec(),
        reports: REPORTS.to_vec(),
    }
}
