//! Backend entry-point: loads settings, then serves the dashboard API.

mod server;

use actix_web::web;
use color_eyre::eyre::WrapErr;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use finsage::config::AppSettings;
use finsage::inbound::http::health::HealthState;
use finsage::inbound::http::session_config::{BuildMode, SessionSettings};
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().wrap_err("failed to load application settings")?;
    let session = SessionSettings::from_env(&DefaultEnv::new(), BuildMode::current())
        .wrap_err("invalid session cookie configuration")?;

    let config = ServerConfig::new(session, settings.bind_addr()).with_policy(settings.policy());
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)
        .wrap_err_with(|| format!("failed to bind {}", settings.bind_addr()))?;
    server.await.wrap_err("server terminated abnormally")
}
