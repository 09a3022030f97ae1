//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data`. Everything in it is
//! immutable and shared by every client; per-client state lives in the
//! session cookie.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;

use crate::domain::PageAccessPolicy;
use crate::domain::ports::SimulatedActions;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use finsage::domain::PageAccessPolicy;
/// use finsage::domain::ports::FixtureSimulatedActions;
/// use finsage::inbound::http::state::HttpState;
/// use mockable::DefaultClock;
///
/// let state = HttpState::new(
///     PageAccessPolicy::Enforced,
///     Arc::new(DefaultClock),
///     Arc::new(FixtureSimulatedActions),
/// );
/// assert_eq!(state.policy, PageAccessPolicy::Enforced);
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub policy: PageAccessPolicy,
    pub clock: Arc<dyn Clock + Send + Sync>,
    pub actions: Arc<dyn SimulatedActions>,
}

impl HttpState {
    pub fn new(
        policy: PageAccessPolicy,
        clock: Arc<dyn Clock + Send + Sync>,
        actions: Arc<dyn SimulatedActions>,
    ) -> Self {
        Self {
            policy,
            clock,
            actions,
        }
    }

    /// Calendar date shown in the header.
    pub fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }
}
