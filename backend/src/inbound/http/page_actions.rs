//! Handlers for buttons and forms on individual pages.
//!
//! ```text
//! PUT  /api/v1/pages/notifications/channels {"channel":"email","field":"threshold","value":90}
//! POST /api/v1/pages/notifications/save
//! POST /api/v1/pages/notifications/test {"channel":"slack"}
//! PUT  /api/v1/pages/settings {"section":"account","field":"sessionTimeout","value":60}
//! POST /api/v1/pages/reports/{id}/download
//! POST /api/v1/pages/chargeback/reports/{id}/download
//! POST /api/v1/pages/forecast/scenarios {"scenario":"expansion","inputs":{"newWorkloads":4}}
//! POST /api/v1/pages/cloud-integration/accounts {"provider":"GCP","accountName":"Risk Lab",...}
//! ```
//!
//! Configuration edits are kept in the session. Everything else is handed to
//! the [`SimulatedActions`](crate::domain::ports::SimulatedActions) port and
//! answered with its receipt; no page dataset changes.

use actix_web::{post, put, web};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::pages::cloud_integration::{CloudProvider, NewCloudAccount};
use crate::domain::pages::forecast::ScenarioRun;
use crate::domain::pages::notifications::{Channel, ChannelUpdate, NotificationConfig};
use crate::domain::pages::settings::{SettingUpdate, SettingsConfig};
use crate::domain::pages::{chargeback, reports};
use crate::domain::ports::{ActionReceipt, SimulatedAction, SimulatedActionError};
use crate::domain::{Error, Page, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ActionReceiptSchema, ErrorSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Body of `POST /api/v1/pages/notifications/test`.
#[derive(Deserialize, Serialize, ToSchema)]
pub struct TestNotificationRequest {
    #[schema(value_type = String, example = "slack")]
    pub channel: Channel,
}

/// Body of `POST /api/v1/pages/cloud-integration/accounts`.
///
/// Credentials are accepted so the form can be submitted, then dropped.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddAccountRequest {
    #[schema(value_type = String, example = "GCP")]
    pub provider: CloudProvider,
    #[schema(example = "Risk Lab")]
    pub account_name: String,
    #[serde(default)]
    pub credential_key: String,
    #[serde(default)]
    pub credential_secret: String,
}

fn decode<T: DeserializeOwned>(value: Value, field: &str) -> Result<T, Error> {
    serde_json::from_value(value).map_err(|err| {
        Error::invalid_request(format!("invalid {field}: {err}"))
            .with_details(json!({ "field": field, "code": "invalid_update" }))
    })
}

/// Signed-in user, provided `page` is open to them under the policy.
fn require_page(state: &HttpState, session: &SessionContext, page: Page) -> ApiResult<User> {
    let (_, user) = session.require_login()?;
    if state.policy.admits(page, user.role()) {
        Ok(user)
    } else {
        Err(Error::forbidden(format!("{} may not use {page}", user.role())))
    }
}

async fn perform(
    state: &HttpState,
    user: &User,
    action: SimulatedAction,
) -> ApiResult<web::Json<ActionReceipt>> {
    state
        .actions
        .perform(user.id(), &action)
        .await
        .map(web::Json)
        .map_err(|err| match err {
            SimulatedActionError::Unavailable { .. } => {
                warn!(error = %err, "simulated action failed");
                Error::internal(err.to_string())
            }
        })
}

/// Edit one notification channel field.
#[utoipa::path(
    put,
    path = "/api/v1/pages/notifications/channels",
    request_body(content = serde_json::Value,
        description = "`{\"channel\": \"email|slack|sms\", \"field\": ..., \"value\": ...}`"),
    responses(
        (status = 200, description = "Updated notification settings", body = serde_json::Value),
        (status = 400, description = "Unknown channel or field, or oversized text", body = ErrorSchema),
        (status = 401, description = "Not logged in", body = ErrorSchema)
    ),
    tags = ["pages"],
    operation_id = "updateNotificationChannel"
)]
#[put("/pages/notifications/channels")]
pub async fn update_channel(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<NotificationConfig>> {
    let user = require_page(&state, &session, Page::Notifications)?;
    let update: ChannelUpdate = decode(payload.into_inner(), "channel")?;
    let mut config = session.notifications(&user)?;
    config.apply(update)?;
    session.persist_notifications(&config)?;
    Ok(web::Json(config))
}

/// Acknowledge saving the notification settings.
#[utoipa::path(
    post,
    path = "/api/v1/pages/notifications/save",
    responses(
        (status = 200, description = "Save acknowledged", body = ActionReceiptSchema),
        (status = 401, description = "Not logged in", body = ErrorSchema)
    ),
    tags = ["pages"],
    operation_id = "saveNotifications"
)]
#[post("/pages/notifications/save")]
pub async fn save_notifications(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<ActionReceipt>> {
    let user = require_page(&state, &session, Page::Notifications)?;
    let config = session.notifications(&user)?;
    let action = SimulatedAction::SaveNotifications {
        enabled_channels: config.enabled_channels(),
    };
    perform(&state, &user, action).await
}

/// Acknowledge a test message on one channel.
#[utoipa::path(
    post,
    path = "/api/v1/pages/notifications/test",
    request_body = TestNotificationRequest,
    responses(
        (status = 200, description = "Test send acknowledged", body = ActionReceiptSchema),
        (status = 400, description = "Unknown channel", body = ErrorSchema),
        (status = 401, description = "Not logged in", body = ErrorSchema)
    ),
    tags = ["pages"],
    operation_id = "sendTestNotification"
)]
#[post("/pages/notifications/test")]
pub async fn send_test_notification(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<ActionReceipt>> {
    let user = require_page(&state, &session, Page::Notifications)?;
    let request: TestNotificationRequest = decode(payload.into_inner(), "channel")?;
    let config = session.notifications(&user)?;
    let action = SimulatedAction::SendTestNotification {
        channel: request.channel,
        destination: config.destination(request.channel).to_owned(),
    };
    perform(&state, &user, action).await
}

/// Edit one account setting.
#[utoipa::path(
    put,
    path = "/api/v1/pages/settings",
    request_body(content = serde_json::Value,
        description = "`{\"section\": ..., \"field\": ..., \"value\": ...}`"),
    responses(
        (status = 200, description = "Updated settings", body = serde_json::Value),
        (status = 400, description = "Unknown field or unsupported option", body = ErrorSchema),
        (status = 401, description = "Not logged in", body = ErrorSchema)
    ),
    tags = ["pages"],
    operation_id = "updateSetting"
)]
#[put("/pages/settings")]
pub async fn update_setting(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<SettingsConfig>> {
    let user = require_page(&state, &session, Page::Settings)?;
    let update: SettingUpdate = decode(payload.into_inner(), "section")?;
    let mut config = session.settings(&user)?;
    config.apply(update)?;
    session.persist_settings(&config)?;
    Ok(web::Json(config))
}

/// Acknowledge a report download. Only ready reports qualify.
#[utoipa::path(
    post,
    path = "/api/v1/pages/reports/{id}/download",
    params(("id" = u32, Path, description = "Report identifier")),
    responses(
        (status = 200, description = "Download acknowledged", body = ActionReceiptSchema),
        (status = 401, description = "Not logged in", body = ErrorSchema),
        (status = 403, description = "Reports not permitted for the role", body = ErrorSchema),
        (status = 404, description = "Unknown report", body = ErrorSchema),
        (status = 409, description = "Report still processing", body = ErrorSchema)
    ),
    tags = ["pages"],
    operation_id = "downloadReport"
)]
#[post("/pages/reports/{id}/download")]
pub async fn download_report(
    state: web::Data<HttpState>,
    session: SessionContext,
    id: web::Path<u32>,
) -> ApiResult<web::Json<ActionReceipt>> {
    let user = require_page(&state, &session, Page::Reports)?;
    let report = reports::downloadable_report(id.into_inner())?;
    let action = SimulatedAction::DownloadReport {
        id: report.id,
        name: report.name,
    };
    perform(&state, &user, action).await
}

/// Acknowledge a chargeback report download. Only ready reports qualify.
#[utoipa::path(
    post,
    path = "/api/v1/pages/chargeback/reports/{id}/download",
    params(("id" = u32, Path, description = "Chargeback report identifier")),
    responses(
        (status = 200, description = "Download acknowledged", body = ActionReceiptSchema),
        (status = 401, description = "Not logged in", body = ErrorSchema),
        (status = 403, description = "Chargeback not permitted for the role", body = ErrorSchema),
        (status = 404, description = "Unknown report", body = ErrorSchema),
        (status = 409, description = "Report still processing", body = ErrorSchema)
    ),
    tags = ["pages"],
    operation_id = "downloadChargebackReport"
)]
#[post("/pages/chargeback/reports/{id}/download")]
pub async fn download_chargeback_report(
    state: web::Data<HttpState>,
    session: SessionContext,
    id: web::Path<u32>,
) -> ApiResult<web::Json<ActionReceipt>> {
    let user = require_page(&state, &session, Page::Chargeback)?;
    let report = chargeback::downloadable_report(id.into_inner())?;
    let action = SimulatedAction::DownloadChargebackReport {
        id: report.id,
        name: report.name,
    };
    perform(&state, &user, action).await
}

/// Acknowledge a what-if forecast run.
#[utoipa::path(
    post,
    path = "/api/v1/pages/forecast/scenarios",
    request_body(content = serde_json::Value,
        description = "`{\"scenario\": ..., \"inputs\": {...}}`; omitted fields take defaults"),
    responses(
        (status = 200, description = "Run acknowledged", body = ActionReceiptSchema),
        (status = 400, description = "Unknown scenario", body = ErrorSchema),
        (status = 401, description = "Not logged in", body = ErrorSchema)
    ),
    tags = ["pages"],
    operation_id = "runForecastScenario"
)]
#[post("/pages/forecast/scenarios")]
pub async fn run_scenario(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<ActionReceipt>> {
    let user = require_page(&state, &session, Page::Forecast)?;
    let run: ScenarioRun = decode(payload.into_inner(), "scenario")?;
    perform(&state, &user, SimulatedAction::RunForecastScenario(run)).await
}

/// Acknowledge connecting a cloud account. The account list is unchanged.
#[utoipa::path(
    post,
    path = "/api/v1/pages/cloud-integration/accounts",
    request_body = AddAccountRequest,
    responses(
        (status = 200, description = "Connection acknowledged", body = ActionReceiptSchema),
        (status = 400, description = "Unknown provider or blank account name", body = ErrorSchema),
        (status = 401, description = "Not logged in", body = ErrorSchema)
    ),
    tags = ["pages"],
    operation_id = "addCloudAccount"
)]
#[post("/pages/cloud-integration/accounts")]
pub async fn add_cloud_account(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<ActionReceipt>> {
    let user = require_page(&state, &session, Page::CloudIntegration)?;
    let request: AddAccountRequest = decode(payload.into_inner(), "provider")?;
    let account = NewCloudAccount::new(
        request.provider,
        request.account_name.trim(),
        request.credential_key,
        request.credential_secret,
    );
    if account.account_name().is_empty() {
        return Err(Error::invalid_request("account name must not be empty")
            .with_details(json!({ "field": "accountName", "code": "empty_account_name" })));
    }
    let action = SimulatedAction::AddCloudAccount {
        provider: account.provider(),
        account_name: account.account_name().to_owned(),
    };
    perform(&state, &user, action).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::PageAccessPolicy;
    use crate::domain::ports::MockSimulatedActions;
    use crate::inbound::http::session_routes::login;
    use crate::inbound::http::test_utils::{
        FixtureClock, session_cookie, test_session_middleware, test_state,
    };
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .wrap(test_session_middleware())
            .service(
                web::scope("/api/v1")
                    .service(login)
                    .service(update_channel)
                    .service(save_notifications)
                    .service(send_test_notification)
                    .service(update_setting)
                    .service(download_report)
                    .service(download_chargeback_report)
                    .service(run_scenario)
                    .service(add_cloud_account),
            )
    }

    async fn login_cookie(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        role: &str,
    ) -> Cookie<'static> {
        let res = test::call_service(
            app,
            test::TestRequest::post()
                .uri("/api/v1/login")
                .set_json(json!({ "role": role }))
                .to_request(),
        )
        .await;
        session_cookie(&res)
    }

    async fn send(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        req: test::TestRequest,
        cookie: Cookie<'static>,
    ) -> (StatusCode, Option<Cookie<'static>>, Value) {
        let res = test::call_service(app, req.cookie(cookie).to_request()).await;
        let status = res.status();
        let cookie = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .map(Cookie::into_owned);
        (status, cookie, test::read_body_json(res).await)
    }

    #[actix_web::test]
    async fn channel_edits_persist_and_feed_test_sends() {
        let app = test::init_service(test_app(test_state(PageAccessPolicy::Enforced))).await;
        let cookie = login_cookie(&app, "CFO").await;

        let (status, updated, body) = send(
            &app,
            test::TestRequest::put()
                .uri("/api/v1/pages/notifications/channels")
                .set_json(json!({ "channel": "slack", "field": "channel", "value": "#treasury" })),
            cookie,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["slack"]["channel"], "#treasury");

        let (status, _, receipt) = send(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/pages/notifications/test")
                .set_json(json!({ "channel": "slack" })),
            updated.expect("updated cookie"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(receipt["action"], "send_test_notification");
        assert_eq!(receipt["message"], "Test slack notification sent to #treasury");
    }

    #[actix_web::test]
    async fn threshold_is_clamped() {
        let app = test::init_service(test_app(test_state(PageAccessPolicy::Enforced))).await;
        let cookie = login_cookie(&app, "CISO").await;
        let (_, _, body) = send(
            &app,
            test::TestRequest::put()
                .uri("/api/v1/pages/notifications/channels")
                .set_json(json!({ "channel": "email", "field": "threshold", "value": 30 })),
            cookie,
        )
        .await;
        assert_eq!(body["email"]["threshold"], 50);
    }

    #[actix_web::test]
    async fn unknown_channel_is_rejected_with_details() {
        let app = test::init_service(test_app(test_state(PageAccessPolicy::Enforced))).await;
        let cookie = login_cookie(&app, "CFO").await;
        let (status, _, body) = send(
            &app,
            test::TestRequest::put()
                .uri("/api/v1/pages/notifications/channels")
                .set_json(json!({ "channel": "fax", "field": "enabled", "value": true })),
            cookie,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"], json!({ "field": "channel", "code": "invalid_update" }));
    }

    #[rstest]
    #[case(json!({ "section": "account", "field": "sessionTimeout", "value": 60 }), StatusCode::OK)]
    #[case(json!({ "section": "account", "field": "sessionTimeout", "value": 45 }), StatusCode::BAD_REQUEST)]
    #[case(json!({ "section": "security", "field": "passwordExpiry", "value": 180 }), StatusCode::OK)]
    #[case(json!({ "section": "security", "field": "sessionTimeout", "value": 60 }), StatusCode::BAD_REQUEST)]
    #[case(json!({ "section": "billing", "field": "plan", "value": "gold" }), StatusCode::BAD_REQUEST)]
    #[actix_web::test]
    async fn setting_updates_are_validated(#[case] update: Value, #[case] expected: StatusCode) {
        let app = test::init_service(test_app(test_state(PageAccessPolicy::Enforced))).await;
        let cookie = login_cookie(&app, "Compliance Officer").await;
        let (status, _, _) = send(
            &app,
            test::TestRequest::put()
                .uri("/api/v1/pages/settings")
                .set_json(update),
            cookie,
        )
        .await;
        assert_eq!(status, expected);
    }

    #[rstest]
    #[case("/api/v1/pages/reports/1/download", StatusCode::OK)]
    #[case("/api/v1/pages/reports/999/download", StatusCode::NOT_FOUND)]
    #[case("/api/v1/pages/chargeback/reports/1/download", StatusCode::OK)]
    #[actix_web::test]
    async fn downloads_need_known_reports(#[case] uri: &str, #[case] expected: StatusCode) {
        let app = test::init_service(test_app(test_state(PageAccessPolicy::Enforced))).await;
        let cookie = login_cookie(&app, "CFO").await;
        let (status, _, _) = send(&app, test::TestRequest::post().uri(uri), cookie).await;
        assert_eq!(status, expected);
    }

    #[actix_web::test]
    async fn processing_reports_conflict() {
        let processing = reports::render(Default::default())
            .reports
            .into_iter()
            .find(|report| report.status == crate::domain::pages::ReportStatus::Processing)
            .expect("a processing report");
        let app = test::init_service(test_app(test_state(PageAccessPolicy::Enforced))).await;
        let cookie = login_cookie(&app, "CFO").await;
        let (status, _, body) = send(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/v1/pages/reports/{}/download", processing.id)),
            cookie,
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "conflict");
    }

    #[actix_web::test]
    async fn enforced_policy_blocks_actions_on_hidden_pages() {
        let app = test::init_service(test_app(test_state(PageAccessPolicy::Enforced))).await;
        let cookie = login_cookie(&app, "Cloud Manager").await;
        let (status, _, _) = send(
            &app,
            test::TestRequest::post().uri("/api/v1/pages/reports/1/download"),
            cookie,
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn cloud_accounts_are_handed_to_the_port() {
        let mut actions = MockSimulatedActions::new();
        actions
            .expect_perform()
            .withf(|_, action| {
                *action
                    == SimulatedAction::AddCloudAccount {
                        provider: CloudProvider::Gcp,
                        account_name: "Risk Lab".to_owned(),
                    }
            })
            .times(1)
            .returning(|_, action| Ok(ActionReceipt::for_action(action)));
        let state = HttpState::new(
            PageAccessPolicy::Enforced,
            Arc::new(FixtureClock),
            Arc::new(actions),
        );
        let app = test::init_service(test_app(state)).await;
        let cookie = login_cookie(&app, "Cloud Manager").await;
        let (status, _, receipt) = send(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/pages/cloud-integration/accounts")
                .set_json(json!({
                    "provider": "GCP",
                    "accountName": " Risk Lab ",
                    "credentialKey": "key",
                    "credentialSecret": "secret"
                })),
            cookie,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(receipt["message"], "Connecting GCP account \"Risk Lab\"");
    }

    #[actix_web::test]
    async fn blank_account_name_is_rejected() {
        let app = test::init_service(test_app(test_state(PageAccessPolicy::Enforced))).await;
        let cookie = login_cookie(&app, "FinOps Analyst").await;
        let (status, _, body) = send(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/pages/cloud-integration/accounts")
                .set_json(json!({ "provider": "AWS", "accountName": "  " })),
            cookie,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["field"], "accountName");
    }

    #[actix_web::test]
    async fn port_failures_surface_as_redacted_internal_errors() {
        let mut actions = MockSimulatedActions::new();
        actions.expect_perform().returning(|_, action| {
            Err(SimulatedActionError::Unavailable {
                action: action.kind(),
                message: "audit sink offline".to_owned(),
            })
        });
        let state = HttpState::new(
            PageAccessPolicy::Enforced,
            Arc::new(FixtureClock),
            Arc::new(actions),
        );
        let app = test::init_service(test_app(state)).await;
        let cookie = login_cookie(&app, "CFO").await;
        let (status, _, body) = send(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/pages/forecast/scenarios")
                .set_json(json!({ "scenario": "expansion" })),
            cookie,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "internal_error");
        assert_ne!(body["message"], "simulated action run_forecast_scenario failed: audit sink offline");
    }
}
