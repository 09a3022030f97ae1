//! HTTP inbound adapter exposing the dashboard as a JSON API.

pub mod error;
pub mod health;
pub mod page_actions;
pub mod pages;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod session_routes;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;
