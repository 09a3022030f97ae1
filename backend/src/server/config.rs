//! HTTP server configuration object.

use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use finsage::domain::PageAccessPolicy;
use finsage::inbound::http::session_config::SessionSettings;

/// Everything [`create_server`](super::create_server) needs to start.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) policy: PageAccessPolicy,
}

impl ServerConfig {
    /// Combine validated session cookie settings with the listener address.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        let SessionSettings {
            key,
            cookie_secure,
            same_site,
        } = session;
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            policy: PageAccessPolicy::default(),
        }
    }

    /// Select how page access is checked.
    #[must_use]
    pub fn with_policy(mut self, policy: PageAccessPolicy) -> Self {
        self.policy = policy;
        self
    }
}
