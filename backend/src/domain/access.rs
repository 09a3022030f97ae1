//! Role-capability table and navigation filtering.
//!
//! The table is fixed at compile time. [`permitted_roles`] is total over
//! [`Page`], so every page has a role set; the sidebar menu is an ordered
//! list of [`NavEntry`] values derived from it. Profile and settings are not
//! in the menu and are reached through the header shortcuts instead.

use serde::{Deserialize, Serialize};

use super::{Page, Role};

const ALL_ROLES: &[Role] = &Role::ALL;

/// Roles allowed to view `page`.
///
/// Dashboard is open to every role because it is the landing page and the
/// fallback for refused navigation.
pub const fn permitted_roles(page: Page) -> &'static [Role] {
    match page {
        Page::Dashboard
        | Page::ComplianceFrameworks
        | Page::Notifications
        | Page::Profile
        | Page::Settings => ALL_ROLES,
        Page::CloudIntegration => &[Role::CloudManager, Role::FinOpsAnalyst],
        Page::Compliance => &[
            Role::Ciso,
            Role::Cfo,
            Role::FinOpsAnalyst,
            Role::ComplianceOfficer,
        ],
        Page::Forecast | Page::Chargeback => &[Role::Cfo, Role::FinOpsAnalyst],
        Page::RegulatoryImpact => &[Role::Cfo, Role::ComplianceOfficer, Role::Ciso],
        Page::AiOptimization => &[Role::FinOpsAnalyst, Role::CloudManager],
        Page::Reports => &[
            Role::Cfo,
            Role::Ciso,
            Role::FinOpsAnalyst,
            Role::ComplianceOfficer,
        ],
    }
}

/// Whether `role` may view `page`.
///
/// # Examples
/// ```
/// use finsage::domain::{Page, Role, is_permitted};
///
/// assert!(is_permitted(Page::CloudIntegration, Role::CloudManager));
/// assert!(!is_permitted(Page::Forecast, Role::CloudManager));
/// ```
pub fn is_permitted(page: Page, role: Role) -> bool {
    permitted_roles(page).contains(&role)
}

/// One sidebar entry together with the roles allowed to follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    pub page: Page,
    pub label: &'static str,
    pub roles: &'static [Role],
}

impl NavEntry {
    const fn for_page(page: Page) -> Self {
        Self {
            page,
            label: page.label(),
            roles: permitted_roles(page),
        }
    }

    /// Whether this entry is shown to `role`.
    pub fn admits(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Full sidebar menu in display order.
pub const NAVIGATION_MENU: [NavEntry; 10] = [
    NavEntry::for_page(Page::Dashboard),
    NavEntry::for_page(Page::CloudIntegration),
    NavEntry::for_page(Page::Compliance),
    NavEntry::for_page(Page::ComplianceFrameworks),
    NavEntry::for_page(Page::Forecast),
    NavEntry::for_page(Page::RegulatoryImpact),
    NavEntry::for_page(Page::AiOptimization),
    NavEntry::for_page(Page::Chargeback),
    NavEntry::for_page(Page::Notifications),
    NavEntry::for_page(Page::Reports),
];

/// Header shortcuts, available to every role.
pub const HEADER_SHORTCUTS: [Page; 2] = [Page::Settings, Page::Profile];

/// Keep the entries whose role set contains `role`, preserving order.
pub fn filter_entries(entries: &[NavEntry], role: Role) -> Vec<NavEntry> {
    entries
        .iter()
        .filter(|entry| entry.admits(role))
        .copied()
        .collect()
}

/// Sidebar entries visible to `role`.
pub fn visible_navigation(role: Role) -> Vec<NavEntry> {
    filter_entries(&NAVIGATION_MENU, role)
}

/// How page changes are checked against the role-capability table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageAccessPolicy {
    /// Accept any page; only the menu is filtered.
    Advisory,
    /// Refuse pages outside the role's capability set.
    #[default]
    Enforced,
}

impl PageAccessPolicy {
    /// Whether `role` may land on `page` under this policy.
    pub fn admits(self, page: Page, role: Role) -> bool {
        match self {
            Self::Advisory => true,
            Self::Enforced => is_permitted(page, role),
        }
    }
}
