//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::PageAccessPolicy;
use crate::domain::ports::FixtureSimulatedActions;
use crate::inbound::http::state::HttpState;

/// Session middleware with a fresh key, cookie `session` and no `Secure`
/// flag so plain HTTP test requests carry it.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// The `session` cookie set by `res`.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// Clock frozen at noon UTC on 1 July 2024.
pub struct FixtureClock;

impl FixtureClock {
    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        Self::now().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Self::now()
    }
}

/// Handler state on the fixture clock with fixture actions.
pub fn test_state(policy: PageAccessPolicy) -> HttpState {
    HttpState::new(policy, Arc::new(FixtureClock), Arc::new(FixtureSimulatedActions))
}
