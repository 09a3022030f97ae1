//! Application settings loaded via OrthoConfig.
//!
//! Values come from `FINSAGE_*` environment variables, an optional config
//! file and command-line flags, in OrthoConfig's usual precedence.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::PageAccessPolicy;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Settings controlling where the server listens and how page access is
/// checked.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FINSAGE")]
pub struct AppSettings {
    /// Address to bind, e.g. `127.0.0.1`.
    pub host: Option<IpAddr>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Reject pages a role may not see; `false` accepts every page.
    pub enforce_page_access: Option<bool>,
}

impl AppSettings {
    /// Socket address to bind, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Page access policy selected by `enforce_page_access`, enforced
    /// unless explicitly switched off.
    pub fn policy(&self) -> PageAccessPolicy {
        if self.enforce_page_access.unwrap_or(true) {
            PageAccessPolicy::Enforced
        } else {
            PageAccessPolicy::Advisory
        }
    }
}
