//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer, the schema
//! wrappers standing in for domain types and the session cookie security
//! scheme. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` exports it for tooling.

use crate::inbound::http::page_actions::{AddAccountRequest, TestNotificationRequest};
use crate::inbound::http::schemas::{
    ActionReceiptSchema, ErrorCodeSchema, ErrorSchema, PageSchema, PageViewSchema,
    ProfileFormSchema, RoleSchema, UserSchema,
};
use crate::inbound::http::session_routes::{
    LoginRequest, NavigationItem, PageChangeBody, PageChangeRequest, RoleOptionBody, SessionView,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "FinSage.ai dashboard API",
        description = "Role-gated FinOps dashboard for banking, financial services and insurance teams."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::session_routes::list_roles,
        crate::inbound::http::session_routes::login,
        crate::inbound::http::session_routes::logout,
        crate::inbound::http::session_routes::current_session,
        crate::inbound::http::session_routes::navigation,
        crate::inbound::http::session_routes::change_page,
        crate::inbound::http::users::update_profile,
        crate::inbound::http::pages::current_page,
        crate::inbound::http::pages::render_page,
        crate::inbound::http::page_actions::update_channel,
        crate::inbound::http::page_actions::save_notifications,
        crate::inbound::http::page_actions::send_test_notification,
        crate::inbound::http::page_actions::update_setting,
        crate::inbound::http::page_actions::download_report,
        crate::inbound::http::page_actions::download_chargeback_report,
        crate::inbound::http::page_actions::run_scenario,
        crate::inbound::http::page_actions::add_cloud_account,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        RoleSchema,
        PageSchema,
        UserSchema,
        PageViewSchema,
        ProfileFormSchema,
        ActionReceiptSchema,
        LoginRequest,
        PageChangeRequest,
        RoleOptionBody,
        NavigationItem,
        SessionView,
        PageChangeBody,
        TestNotificationRequest,
        AddAccountRequest,
    )),
    tags(
        (name = "session", description = "Login, logout and page routing"),
        (name = "users", description = "Profile of the logged-in user"),
        (name = "pages", description = "Page views and their placeholder actions"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
