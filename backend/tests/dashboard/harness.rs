//! Server harness and shared world for dashboard behaviour tests.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. The server starts on the first request
//! so a scenario can pick the page access policy beforehand. `WorldFixture`
//! stops the server even if a test panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_session::SessionMiddleware;
use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::{Key, SameSite, time::Duration as CookieDuration};
use actix_web::dev::ServerHandle;
use actix_web::http::{Method, header};
use actix_web::{App, HttpServer, web};
use awc::Client;
use finsage::Trace;
use finsage::domain::ports::FixtureSimulatedActions;
use finsage::domain::{PageAccessPolicy, TRACE_ID_HEADER};
use finsage::inbound::http::error::json_config;
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
use mockable::DefaultClock;
use rstest::fixture;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

pub(crate) struct DashboardWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) policy: PageAccessPolicy,
    pub(crate) server: Option<(String, ServerHandle)>,
    pub(crate) session_cookie: Option<String>,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_trace_id: Option<String>,
}

pub(crate) type SharedWorld = Rc<RefCell<DashboardWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        let ctx = self.world.borrow();
        if let Some((_, server)) = ctx.server.clone() {
            ctx.local.block_on(&ctx.runtime, async move {
                server.stop(true).await;
            });
        }
    }
}

fn test_session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(false)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .session_lifecycle(PersistentSession::default().session_ttl(CookieDuration::hours(2)))
        .build()
}

async fn spawn_dashboard_server(
    policy: PageAccessPolicy,
) -> Result<(String, ServerHandle), String> {
    let key = Key::generate();
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;

    let http_data = web::Data::new(HttpState::new(
        policy,
        Arc::new(DefaultClock),
        Arc::new(FixtureSimulatedActions),
    ));

    let server = HttpServer::new(move || {
        let api = web::scope("/api/v1")
            .wrap(test_session_middleware(key.clone()))
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

        App::new()
            .app_data(http_data.clone())
            .app_data(json_config())
            .wrap(Trace)
            .service(api)
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

fn base_url(world: &SharedWorld) -> String {
    if let Some((url, _)) = world.borrow().server.as_ref() {
        return url.clone();
    }
    let started = {
        let ctx = world.borrow();
        let policy = ctx.policy;
        ctx.local
            .block_on(&ctx.runtime, spawn_dashboard_server(policy))
            .expect("dashboard server starts")
    };
    let url = started.0.clone();
    world.borrow_mut().server = Some(started);
    url
}

/// Send a request carrying the stored session cookie and record the outcome.
///
/// A `Set-Cookie` header on the response replaces the stored cookie, as a
/// browser would.
pub(crate) fn send(world: &SharedWorld, method: Method, path: &str, payload: Option<Value>) {
    let url = format!("{}{path}", base_url(world));
    let cookie = world.borrow().session_cookie.clone();
    let (status, trace_id, set_cookie, body) = {
        let ctx = world.borrow();
        ctx.local.block_on(&ctx.runtime, async move {
            let mut request = Client::default().request(method, url);
            if let Some(cookie) = cookie {
                request = request.insert_header((header::COOKIE, cookie));
            }
            let mut response = match payload {
                Some(payload) => request.send_json(&payload).await,
                None => request.send().await,
            }
            .expect("request completes");
            let header_value = |name: &str| {
                response
                    .headers()
                    .get(name)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_owned)
            };
            let trace_id = header_value(TRACE_ID_HEADER);
            let set_cookie = header_value(header::SET_COOKIE.as_str()).and_then(|value| {
                value.split(';').next().map(str::to_owned)
            });
            let status = response.status().as_u16();
            let bytes = response.body().await.expect("response body");
            let body = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).expect("JSON body")
            };
            (status, trace_id, set_cookie, body)
        })
    };

    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(status);
    ctx.last_trace_id = trace_id;
    ctx.last_body = Some(body);
    if set_cookie.is_some() {
        ctx.session_cookie = set_cookie;
    }
}

/// Status and body of the most recent response.
pub(crate) fn last_response(world: &SharedWorld) -> (u16, Value) {
    let ctx = world.borrow();
    (
        ctx.last_status.expect("a request was sent"),
        ctx.last_body.clone().expect("a response was recorded"),
    )
}

/// Strip the quotes Gherkin places around step arguments.
pub(crate) fn unquote(value: &str) -> &str {
    value.trim().trim_matches('"')
}

#[fixture]
pub(crate) fn world() -> WorldFixture {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    WorldFixture {
        world: Rc::new(RefCell::new(DashboardWorld {
            runtime,
            local: LocalSet::new(),
            policy: PageAccessPolicy::Enforced,
            server: None,
            session_cookie: None,
            last_status: None,
            last_body: None,
            last_trace_id: None,
        })),
    }
}
