//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;

use finsage::Trace;
#[cfg(debug_assertions)]
use finsage::doc::ApiDoc;
use finsage::inbound::http::error::json_config;
use finsage::inbound::http::health::{HealthState, live, ready};
use finsage::inbound::http::page_actions::{
    add_cloud_account, download_chargeback_report, download_report, run_scenario,
    save_notifications, send_test_notification, update_channel, update_setting,
};
use finsage::inbound::http::pages::{current_page, render_page};
use finsage::inbound::http::session_routes::{
    change_page, current_session, list_roles, login, logout, navigation,
};
use finsage::inbound::http::state::HttpState;
use finsage::inbound::http::users::update_profile;
use finsage::outbound::actions::TracingSimulatedActions;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    // `/pages/current` must be registered before `/pages/{page}`.
    let api = web::scope("/api/v1")
        .wrap(session)
        .service(list_roles)
        .service(login)
        .service(logout)
        .service(current_session)
        .service(navigation)
        .service(change_page)
        .service(update_profile)
        .service(current_page)
        .service(update_channel)
        .service(save_notifications)
        .service(send_test_notification)
        .service(update_setting)
        .service(download_report)
        .service(download_chargeback_report)
        .service(run_scenario)
        .service(add_cloud_account)
        .service(render_page);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
        policy,
    } = config;
    let http_state = web::Data::new(HttpState::new(
        policy,
        Arc::new(DefaultClock),
        Arc::new(TracingSimulatedActions),
    ));

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, ?policy, "server listening");
    health_state.mark_ready();
    Ok(server)
}
