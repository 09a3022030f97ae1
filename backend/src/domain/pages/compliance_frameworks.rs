//! Regulatory framework library.

use serde::{Deserialize, Serialize};

use crate::domain::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkId {
    Irdai,
    Rbi,
    Pci,
    Meity,
    Dpdp,
    Iso27001,
    Ccm,
    Finops,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameworkType {
    Mandatory,
    Advisory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkStatus {
    Active,
    Recommended,
}

/// Type selector; `All` disables narrowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Mandatory,
    Advisory,
}

impl TypeFilter {
    fn admits(self, kind: FrameworkType) -> bool {
        match self {
            Self::All => true,
            Self::Mandatory => kind == FrameworkType::Mandatory,
            Self::Advisory => kind == FrameworkType::Advisory,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameworkFilters {
    pub search: String,
    #[serde(rename = "type")]
    pub kind: TypeFilter,
    /// `None` shows every framework.
    pub framework: Option<FrameworkId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Framework {
    pub id: FrameworkId,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: FrameworkType,
    pub applies_to: &'static str,
    pub description: &'static str,
    pub finops_impact: &'static str,
    pub status: FrameworkStatus,
    pub last_updated: &'static str,
    pub next_review: &'static str,
    pub cost_impact: u64,
    pub requirements: &'static [&'static str],
    pub finops_considerations: &'static [&'static str],
}

impl Framework {
    /// Case-insensitive substring match over name and description.
    fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// First word of the name, used as the chart label.
    pub fn short_name(&self) -> &'static str {
        self.name.split(' ').next().unwrap_or(self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkCost {
    pub name: &'static str,
    pub cost: u64,
    #[serde(rename = "type")]
    pub kind: FrameworkType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAccessCard {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkTotals {
    pub total_cost_impact: u64,
    pub mandatory_count: usize,
    pub advisory_count: usize,
    pub framework_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceFrameworksView {
    pub search: String,
    #[serde(rename = "type")]
    pub kind: TypeFilter,
    pub framework: Option<FrameworkId>,
    pub totals: FrameworkTotals,
    pub cost_by_framework: Vec<FrameworkCost>,
    pub frameworks: Vec<Framework>,
    pub quick_access: Vec<QuickAccessCard>,
    pub general_links: Vec<QuickAccessCard>,
}

const FRAMEWORKS: [Framework; 8] = [
    Framework {
        id: FrameworkId::Irdai,
        name: "IRDAI Guidelines",
        kind: FrameworkType::Mandatory,
        applies_to: "Insurers",
        description: "Insurance Regulatory and Development Authority guidelines for cloud adoption and data management",
        finops_impact: "Data localization infra cost tracking, DR/BCP cost narratives",
        status: FrameworkStatus::Active,
        last_updated: "2024-03-15",
        next_review: "2024-09-15",
        cost_impact: 45_000,
        requirements: &[
            "Data localization within India",
            "Disaster Recovery infrastructure",
            "Business Continuity Planning",
            "Regular audit and compliance reporting",
            "Encryption of sensitive data",
        ],
        finops_considerations: &[
            "Track costs for India-specific cloud regions",
            "Monitor DR infrastructure spending",
            "Allocate costs for compliance auditing",
            "Budget for data encryption services",
        ],
    },
    Framework {
        id: FrameworkId::Rbi,
        name: "RBI Cloud Guidelines",
        kind: FrameworkType::Mandatory,
        applies_to: "Banks, NBFCs, Fintech",
        description: "Reserve Bank of India guidelines for cloud computing adoption in financial services",
        finops_impact: "DR infra, compliance infra forecasting, cost audits",
        status: FrameworkStatus::Active,
        last_updated: "2024-02-20",
        next_review: "2024-08-20",
        cost_impact: 78_000,
        requirements: &[
            "Board-approved cloud adoption strategy",
            "Data localization requirements",
            "Robust governance framework",
            "Risk management and audit trails",
            "Exit strategy and data portability",
        ],
        finops_considerations: &[
            "Budget for enhanced governance tools",
            "Track compliance infrastructure costs",
            "Monitor audit and reporting expenses",
            "Plan for data migration costs",
        ],
    },
    Framework {
        id: FrameworkId::Pci,
        name: "PCI-DSS 4.0",
        kind: FrameworkType::Mandatory,
        applies_to: "Payments, Wallets",
        description: "Payment Card Industry Data Security Standard for protecting cardholder data",
        finops_impact: "Tokenization/encryption infra cost mapping",
        status: FrameworkStatus::Active,
        last_updated: "2024-03-31",
        next_review: "2025-03-31",
        cost_impact: 42_000,
        requirements: &[
            "Secure network architecture",
            "Cardholder data protection",
            "Vulnerability management",
            "Access control measures",
            "Regular monitoring and testing",
        ],
        finops_considerations: &[
            "Track tokenization service costs",
            "Monitor encryption infrastructure",
            "Budget for security scanning tools",
            "Allocate costs for compliance testing",
        ],
    },
    Framework {
        id: FrameworkId::Meity,
        name: "MeitY Cloud Policy",
        kind: FrameworkType::Mandatory,
        applies_to: "Govt BFSI cloud use",
        description: "Ministry of Electronics and IT cloud policy for government and regulated sectors",
        finops_impact: "Empanelled CSP infra cost segregation",
        status: FrameworkStatus::Active,
        last_updated: "2024-01-10",
        next_review: "2024-07-10",
        cost_impact: 25_000,
        requirements: &[
            "Use of empanelled cloud service providers",
            "Data sovereignty compliance",
            "Security clearance requirements",
            "Regular compliance assessments",
        ],
        finops_considerations: &[
            "Track costs by empanelled CSP",
            "Monitor compliance assessment fees",
            "Budget for security clearance processes",
            "Allocate costs for approved services only",
        ],
    },
    Framework {
        id: FrameworkId::Dpdp,
        name: "DPDP Act",
        kind: FrameworkType::Mandatory,
        applies_to: "BFSI + All sectors",
        description: "Digital Personal Data Protection Act for personal data processing and protection",
        finops_impact: "Personal data infra spend tracking",
        status: FrameworkStatus::Active,
        last_updated: "2024-04-01",
        next_review: "2024-10-01",
        cost_impact: 32_000,
        requirements: &[
            "Consent management systems",
            "Data minimization practices",
            "Purpose limitation compliance",
            "Data breach notification systems",
            "Cross-border data transfer controls",
        ],
        finops_considerations: &[
            "Track consent management platform costs",
            "Monitor data processing infrastructure",
            "Budget for breach detection systems",
            "Allocate costs for data governance tools",
        ],
    },
    Framework {
        id: FrameworkId::Iso27001,
        name: "ISO 27001",
        kind: FrameworkType::Advisory,
        applies_to: "All regulated BFSI",
        description: "International standard for information security management systems",
        finops_impact: "Secure infra cost optimization & audit alignment",
        status: FrameworkStatus::Recommended,
        last_updated: "2024-02-15",
        next_review: "2024-08-15",
        cost_impact: 18_000,
        requirements: &[
            "Information security management system",
            "Risk assessment and treatment",
            "Security controls implementation",
            "Continuous monitoring and improvement",
        ],
        finops_considerations: &[
            "Budget for ISMS implementation",
            "Track security control costs",
            "Monitor audit and certification fees",
            "Allocate costs for continuous improvement",
        ],
    },
    Framework {
        id: FrameworkId::Ccm,
        name: "Cloud Controls Matrix",
        kind: FrameworkType::Advisory,
        applies_to: "All regulated BFSI",
        description: "CSA Cloud Controls Matrix for cloud security assurance",
        finops_impact: "Secure infra cost optimization & audit alignment",
        status: FrameworkStatus::Recommended,
        last_updated: "2024-01-20",
        next_review: "2024-07-20",
        cost_impact: 15_000,
        requirements: &[
            "Cloud security controls mapping",
            "Vendor risk assessment",
            "Continuous compliance monitoring",
            "Security metrics and reporting",
        ],
        finops_considerations: &[
            "Track cloud security tool costs",
            "Monitor vendor assessment expenses",
            "Budget for compliance monitoring",
            "Allocate costs for security reporting",
        ],
    },
    Framework {
        id: FrameworkId::Finops,
        name: "FinOps Foundation",
        kind: FrameworkType::Advisory,
        applies_to: "All regulated BFSI",
        description: "FinOps Foundation framework for cloud financial management",
        finops_impact: "Secure infra cost optimization & audit alignment",
        status: FrameworkStatus::Recommended,
        last_updated: "2024-03-01",
        next_review: "2024-09-01",
        cost_impact: 12_000,
        requirements: &[
            "Cloud cost visibility and allocation",
            "Cost optimization practices",
            "Financial accountability culture",
            "Continuous cost management",
        ],
        finops_considerations: &[
            "Implement cost management tools",
            "Track optimization initiatives",
            "Monitor training and certification costs",
            "Budget for FinOps platform licenses",
        ],
    },
];

const fn card(title: &'static str, description: &'static str) -> QuickAccessCard {
    QuickAccessCard { title, description }
}

const CFO_CARDS: [QuickAccessCard; 2] = [
    card(
        "Budget Impact Analysis",
        "View cost implications of all compliance requirements",
    ),
    card("Regulatory ROI", "Analyze return on compliance investments"),
];

const COMPLIANCE_OFFICER_CARDS: [QuickAccessCard; 2] = [
    card(
        "Compliance Checklist",
        "Track implementation status across frameworks",
    ),
    card(
        "Audit Preparation",
        "Generate compliance reports and documentation",
    ),
];

const FINOPS_ANALYST_CARDS: [QuickAccessCard; 2] = [
    card("Cost Allocation", "Map compliance costs to business units"),
    card(
        "Optimization Opportunities",
        "Identify cost savings within compliance constraints",
    ),
];

/// Role-specific shortcut cards; roles without a curated set get none.
pub const fn quick_access(role: Role) -> &'static [QuickAccessCard] {
    match role {
        Role::Cfo => &CFO_CARDS,
        Role::ComplianceOfficer => &COMPLIANCE_OFFICER_CARDS,
        Role::FinOpsAnalyst => &FINOPS_ANALYST_CARDS,
        Role::CloudManager | Role::Ciso => &[],
    }
}

const GENERAL_LINKS: [QuickAccessCard; 1] = [card(
    "Framework Updates",
    "Stay informed about regulatory changes",
)];

fn totals() -> FrameworkTotals {
    let count = |kind: FrameworkType| {
        FRAMEWORKS
            .iter()
            .filter(|framework| framework.kind == kind)
            .count()
    };
    FrameworkTotals {
        total_cost_impact: FRAMEWORKS.iter().map(|framework| framework.cost_impact).sum(),
        mandatory_count: count(FrameworkType::Mandatory),
        advisory_count: count(FrameworkType::Advisory),
        framework_count: FRAMEWORKS.len(),
    }
}

pub fn render(filters: FrameworkFilters, role: Role) -> ComplianceFrameworksView {
    let needle = filters.search.trim().to_lowercase();
    let frameworks = FRAMEWORKS
        .into_iter()
        .filter(|framework| framework.matches_search(&needle))
        .filter(|framework| filters.kind.admits(framework.kind))
        .filter(|framework| filters.framework.is_none_or(|id| framework.id == id))
        .collect();
    ComplianceFrameworksView {
        totals: totals(),
        cost_by_framework: FRAMEWORKS
            .iter()
            .map(|framework| FrameworkCost {
                name: framework.short_name(),
                cost: framework.cost_impact,
                kind: framework.kind,
            })
            .collect(),
        frameworks,
        quick_access: quick_access(role).to_vec(),
        general_links: GENERAL_LINKS.to_vec(),
        search: filters.search,
        kind: filters.kind,
        framework: filters.framework,
    }
}
