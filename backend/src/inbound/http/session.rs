//! Session cookie access for HTTP handlers.
//!
//! The routing state and the per-page configuration a user edits live in the
//! client's private session cookie. Handlers go through [`SessionContext`] so
//! they only see domain values.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::domain::pages::notifications::NotificationConfig;
use crate::domain::pages::settings::SettingsConfig;
use crate::domain::{Error, SessionState, User};

pub(crate) const STATE_KEY: &str = "state";
pub(crate) const NOTIFICATIONS_KEY: &str = "notifications";
pub(crate) const SETTINGS_KEY: &str = "settings";

/// Newtype over the Actix session exposing domain-level operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, Error> {
        match self.0.get::<T>(key) {
            Ok(value) => Ok(value),
            Err(error) => {
                // A cookie from an older build may no longer decode; treat it
                // as absent rather than locking the client out.
                warn!(key, %error, "discarding unreadable session entry");
                self.0.remove(key);
                Ok(None)
            }
        }
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), Error> {
        self.0
            .insert(key, value)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Current routing state; a missing cookie means logged out.
    pub fn state(&self) -> Result<SessionState, Error> {
        Ok(self.read(STATE_KEY)?.unwrap_or_default())
    }

    pub fn persist_state(&self, state: &SessionState) -> Result<(), Error> {
        self.write(STATE_KEY, state)
    }

    /// Routing state of a signed-in client, or `401 Unauthorized`.
    pub fn require_login(&self) -> Result<(SessionState, User), Error> {
        let state = self.state()?;
        let user = state
            .user()
            .cloned()
            .ok_or_else(|| Error::unauthorized("login required"))?;
        Ok((state, user))
    }

    /// Notification settings, defaulted for `user` until first edited.
    pub fn notifications(&self, user: &User) -> Result<NotificationConfig, Error> {
        Ok(self
            .read(NOTIFICATIONS_KEY)?
            .unwrap_or_else(|| NotificationConfig::for_user(user)))
    }

    pub fn persist_notifications(&self, config: &NotificationConfig) -> Result<(), Error> {
        self.write(NOTIFICATIONS_KEY, config)
    }

    /// Account settings, defaulted for `user` until first edited.
    pub fn settings(&self, user: &User) -> Result<SettingsConfig, Error> {
        Ok(self
            .read(SETTINGS_KEY)?
            .unwrap_or_else(|| SettingsConfig::for_user(user)))
    }

    pub fn persist_settings(&self, config: &SettingsConfig) -> Result<(), Error> {
        self.write(SETTINGS_KEY, config)
    }

    /// Start afresh with `state`, discarding page configuration left by a
    /// previous login.
    pub fn reset(&self, state: &SessionState) -> Result<(), Error> {
        self.0.clear();
        self.persist_state(state)
    }

    /// Log out, drop every entry and expire the cookie.
    ///
    /// Returns the state the client is left in.
    pub fn logout(&self) -> Result<SessionState, Error> {
        let next = self.state()?.logout();
        self.0.purge();
        Ok(next)
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LoginForm, Page, Role};
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    fn session_test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(test_session_middleware())
            .route(
                "/login",
                web::get().to(|session: SessionContext| async move {
                    let user = LoginForm::for_role(Role::Ciso).into_user()?;
                    session.persist_state(&SessionState::default().login(user))?;
                    Ok::<_, Error>(HttpResponse::Ok())
                }),
            )
            .route(
                "/page",
                web::get().to(|session: SessionContext| async move {
                    let (state, _) = session.require_login()?;
                    let page = state.page().map(Page::as_str).unwrap_or_default();
                    Ok::<_, Error>(HttpResponse::Ok().body(page))
                }),
            )
            .route(
                "/email",
                web::get().to(|session: SessionContext| async move {
                    let (_, user) = session.require_login()?;
                    let config = session.notifications(&user)?;
                    Ok::<_, Error>(HttpResponse::Ok().body(config.email.address))
                }),
            )
            .route(
                "/logout",
                web::get().to(|session: SessionContext| async move {
                    let next = session.logout()?;
                    Ok::<_, Error>(HttpResponse::Ok().body(format!("{}", next.is_logged_in())))
                }),
            )
    }

    #[actix_web::test]
    async fn round_trips_session_state() {
        let app = test::init_service(session_test_app()).await;
        let login =
            test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
        let cookie = session_cookie(&login);

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/page")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, "dashboard");
    }

    #[actix_web::test]
    async fn missing_state_is_unauthorised() {
        let app = test::init_service(session_test_app()).await;
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/page").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn page_configuration_defaults_from_user() {
        let app = test::init_service(session_test_app()).await;
        let login =
            test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/email")
                .cookie(session_cookie(&login))
                .to_request(),
        )
        .await;
        assert_eq!(test::read_body(res).await, "ciso@finsage.ai");
    }

    #[actix_web::test]
    async fn logout_expires_the_cookie() {
        let app = test::init_service(session_test_app()).await;
        let login =
            test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/logout")
                .cookie(session_cookie(&login))
                .to_request(),
        )
        .await;
        let cookie = session_cookie(&res);
        assert_eq!(cookie.value(), "");
        assert_eq!(test::read_body(res).await, "false");
    }
}
