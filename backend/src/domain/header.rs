//! Header bar view model.

use chrono::NaiveDate;
use serde::Serialize;

use super::{HEADER_SHORTCUTS, Page, Role, User};

/// Greeting, identity badge and shortcuts shown above every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub greeting: String,
    pub subtitle: String,
    pub first_name: String,
    pub initials: String,
    pub role: Role,
    pub date: String,
    pub shortcuts: Vec<HeaderShortcut>,
}

/// Header link to a page or to the logout action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HeaderShortcut {
    Page { page: Page, label: &'static str },
    Logout,
}

/// Long-form date, for example `Monday, July 1, 2024`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

impl HeaderView {
    /// Build the header for `user` as of `today`.
    pub fn new(user: &User, today: NaiveDate) -> Self {
        let date = format_long_date(today);
        let mut shortcuts: Vec<HeaderShortcut> = HEADER_SHORTCUTS
            .into_iter()
            .map(|page| HeaderShortcut::Page {
                page,
                label: page.label(),
            })
            .collect();
        shortcuts.push(HeaderShortcut::Logout);
        Self {
            greeting: format!("Welcome back, {}", user.first_name()),
            subtitle: format!("{} Dashboard • {date}", user.role()),
            first_name: user.first_name().to_owned(),
            initials: user.initials(),
            role: user.role(),
            date,
            shortcuts,
        }
    }
}
