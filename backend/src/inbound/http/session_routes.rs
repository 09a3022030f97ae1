//! Login, logout and page routing handlers.
//!
//! ```text
//! GET  /api/v1/roles
//! POST /api/v1/login {"role":"CISO","email":"ciso@bank.in","password":"..."}
//! POST /api/v1/logout
//! GET  /api/v1/session
//! GET  /api/v1/navigation
//! PUT  /api/v1/session/page {"page":"compliance"}
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{
    Error, HeaderView, LoginForm, Page, PageChange, Role, RoleOption, SessionState, User,
    role_options, visible_navigation,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, PageSchema, RoleSchema, UserSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /api/v1/login`.
///
/// Only `role` matters; email and password are collected for show.
#[derive(Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[schema(example = "CFO")]
    pub role: String,
    #[schema(example = "cfo@finsage.ai")]
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of `PUT /api/v1/session/page`.
#[derive(Deserialize, Serialize, ToSchema)]
pub struct PageChangeRequest {
    #[schema(example = "compliance")]
    pub page: String,
}

/// Login-screen role choice.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleOptionBody {
    #[schema(value_type = RoleSchema)]
    pub role: Role,
    pub description: &'static str,
}

impl From<RoleOption> for RoleOptionBody {
    fn from(option: RoleOption) -> Self {
        Self {
            role: option.role,
            description: option.description,
        }
    }
}

/// Sidebar entry with the active page marked.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    #[schema(value_type = PageSchema)]
    pub page: Page,
    pub label: &'static str,
    pub active: bool,
}

/// Everything the shell around the page needs.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    #[schema(value_type = UserSchema)]
    pub user: User,
    #[schema(value_type = PageSchema)]
    pub page: Page,
    #[schema(value_type = Object)]
    pub header: HeaderView,
    pub navigation: Vec<NavigationItem>,
}

/// Result of `PUT /api/v1/session/page`.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageChangeBody {
    #[schema(value_type = String, example = "changed")]
    pub outcome: &'static str,
    #[schema(value_type = PageSchema)]
    pub page: Page,
    /// Set when the request was redirected to the dashboard.
    #[schema(value_type = Option<PageSchema>)]
    pub requested: Option<Page>,
}

impl From<PageChange> for PageChangeBody {
    fn from(change: PageChange) -> Self {
        match change {
            PageChange::Changed { page } => Self {
                outcome: "changed",
                page,
                requested: None,
            },
            PageChange::Redirected { requested, page } => Self {
                outcome: "redirected",
                page,
                requested: Some(requested),
            },
        }
    }
}

pub(crate) fn navigation_for(user: &User, current: Page) -> Vec<NavigationItem> {
    visible_navigation(user.role())
        .into_iter()
        .map(|entry| NavigationItem {
            page: entry.page,
            label: entry.label,
            active: entry.page == current,
        })
        .collect()
}

fn session_view(state: &HttpState, session: &SessionState) -> ApiResult<SessionView> {
    let (Some(user), Some(page)) = (session.user(), session.page()) else {
        return Err(Error::unauthorized("login required"));
    };
    Ok(SessionView {
        user: user.clone(),
        page,
        header: HeaderView::new(user, state.today()),
        navigation: navigation_for(user, page),
    })
}

fn unknown_input(field: &str, code: &str, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({ "field": field, "code": code }))
}

/// Role options for the login screen.
#[utoipa::path(
    get,
    path = "/api/v1/roles",
    responses((status = 200, description = "Roles in login order", body = [RoleOptionBody])),
    tags = ["session"],
    operation_id = "listRoles",
    security([])
)]
#[get("/roles")]
pub async fn list_roles() -> web::Json<Vec<RoleOptionBody>> {
    web::Json(role_options().into_iter().map(RoleOptionBody::from).collect())
}

/// Sign in as the persona of the chosen role.
///
/// Any existing session, including edited page settings, is replaced.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in on the dashboard", body = SessionView,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Unknown role", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["session"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<SessionView>> {
    let request = payload.into_inner();
    let role: Role = request
        .role
        .parse()
        .map_err(|err: crate::domain::ParseRoleError| {
            unknown_input("role", "unknown_role", err.to_string())
        })?;
    let form = LoginForm::from_parts(role, request.email.as_deref(), request.password.as_deref());
    let user = form.into_user()?;
    let next = session.state()?.login(user);
    session.reset(&next)?;
    Ok(web::Json(session_view(&state, &next)?))
}

/// End the session. Succeeds when already logged out.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["session"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> ApiResult<HttpResponse> {
    let next = session.logout()?;
    debug_assert!(!next.is_logged_in());
    Ok(HttpResponse::NoContent().finish())
}

/// Current user, page, header and navigation.
#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses(
        (status = 200, description = "Session view", body = SessionView),
        (status = 401, description = "Not logged in", body = ErrorSchema)
    ),
    tags = ["session"],
    operation_id = "currentSession"
)]
#[get("/session")]
pub async fn current_session(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<SessionView>> {
    Ok(web::Json(session_view(&state, &session.state()?)?))
}

/// Sidebar entries visible to the signed-in role.
#[utoipa::path(
    get,
    path = "/api/v1/navigation",
    responses(
        (status = 200, description = "Navigation entries in menu order", body = [NavigationItem]),
        (status = 401, description = "Not logged in", body = ErrorSchema)
    ),
    tags = ["session"],
    operation_id = "navigation"
)]
#[get("/navigation")]
pub async fn navigation(session: SessionContext) -> ApiResult<web::Json<Vec<NavigationItem>>> {
    let (state, user) = session.require_login()?;
    let current = state.page().unwrap_or(Page::DEFAULT);
    Ok(web::Json(navigation_for(&user, current)))
}

/// Select the page shown in the main content area.
#[utoipa::path(
    put,
    path = "/api/v1/session/page",
    request_body = PageChangeRequest,
    responses(
        (status = 200, description = "Page changed or redirected", body = PageChangeBody),
        (status = 400, description = "Unknown page", body = ErrorSchema),
        (status = 401, description = "Not logged in", body = ErrorSchema)
    ),
    tags = ["session"],
    operation_id = "changePage"
)]
#[put("/session/page")]
pub async fn change_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<PageChangeRequest>,
) -> ApiResult<web::Json<PageChangeBody>> {
    let requested: Page = payload
        .page
        .parse()
        .map_err(|err: crate::domain::ParsePageError| {
            unknown_input("page", "unknown_page", err.to_string())
        })?;
    let mut current = session.state()?;
    let change = current.change_page(requested, state.policy)?;
    session.persist_state(&current)?;
    Ok(web::Json(change.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PageAccessPolicy;
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware, test_state};
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::Value;

    fn test_app(
        policy: PageAccessPolicy,
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
            .app_data(web::Data::new(test_state(policy)))
            .wrap(test_session_middleware())
            .service(
                web::scope("/api/v1")
                    .service(list_roles)
                    .service(login)
                    .service(logout)
                    .service(current_session)
                    .service(navigation)
                    .service(change_page),
            )
    }

    async fn login_as<S>(app: &S, role: &str) -> (Value, Cookie<'static>)
    where
        S: actix_web::dev::Service<
                actix_http::Request,
                Response = actix_web::dev::ServiceResponse,
                Error = actix_web::Error,
            >,
    {
        let res = test::call_service(
            app,
            test::TestRequest::post()
                .uri("/api/v1/login")
                .set_json(json!({ "role": role, "email": "", "password": "pw" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let cookie = session_cookie(&res);
        (test::read_body_json(res).await, cookie)
    }

    #[actix_web::test]
    async fn roles_are_listed_in_login_order() {
        let app = test::init_service(test_app(PageAccessPolicy::Enforced)).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/roles").to_request(),
        )
        .await;
        let body: Value = test::read_body_json(res).await;
        let roles: Vec<&str> = body
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|option| option["role"].as_str())
            .collect();
        assert_eq!(
            roles,
            ["CFO", "FinOps Analyst", "Cloud Manager", "CISO", "Compliance Officer"]
        );
    }

    #[actix_web::test]
    async fn login_lands_on_dashboard_with_header() {
        let app = test::init_service(test_app(PageAccessPolicy::Enforced)).await;
        let (body, _) = login_as(&app, "CFO").await;
        insta::assert_json_snapshot!(body["header"], @r#"
        {
          "date": "Monday, July 1, 2024",
          "firstName": "Sarah",
          "greeting": "Welcome back, Sarah",
          "initials": "SJ",
          "role": "CFO",
          "shortcuts": [
            {
              "kind": "page",
              "label": "Settings",
              "page": "settings"
            },
            {
              "kind": "page",
              "label": "Profile",
              "page": "profile"
            },
            {
              "kind": "logout"
            }
          ],
          "subtitle": "CFO Dashboard • Monday, July 1, 2024"
        }
        "#);
        assert_eq!(body["page"], "dashboard");
        assert_eq!(body["user"]["email"], "cfo@finsage.ai");
        assert_eq!(body["navigation"][0]["active"], true);
    }

    #[actix_web::test]
    async fn unknown_role_is_rejected_with_details() {
        let app = test::init_service(test_app(PageAccessPolicy::Enforced)).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/login")
                .set_json(json!({ "role": "Treasurer" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["details"], json!({ "field": "role", "code": "unknown_role" }));
    }

    #[actix_web::test]
    async fn cloud_manager_navigation_is_filtered() {
        let app = test::init_service(test_app(PageAccessPolicy::Enforced)).await;
        let (_, cookie) = login_as(&app, "Cloud Manager").await;
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/navigation")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(res).await;
        let pages: Vec<&str> = body
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|entry| entry["page"].as_str())
            .collect();
        assert_eq!(
            pages,
            [
                "dashboard",
                "cloud-integration",
                "compliance-frameworks",
                "ai-optimization",
                "notifications"
            ]
        );
    }

    #[rstest]
    #[case(PageAccessPolicy::Enforced, "redirected", "dashboard")]
    #[case(PageAccessPolicy::Advisory, "changed", "forecast")]
    #[actix_web::test]
    async fn disallowed_page_follows_policy(
        #[case] policy: PageAccessPolicy,
        #[case] outcome: &str,
        #[case] landed: &str,
    ) {
        let app = test::init_service(test_app(policy)).await;
        let (_, cookie) = login_as(&app, "Cloud Manager").await;
        let res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/v1/session/page")
                .cookie(cookie)
                .set_json(json!({ "page": "forecast" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["outcome"], outcome);
        assert_eq!(body["page"], landed);
    }

    #[actix_web::test]
    async fn page_change_persists_in_session() {
        let app = test::init_service(test_app(PageAccessPolicy::Enforced)).await;
        let (_, cookie) = login_as(&app, "CISO").await;
        let res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/v1/session/page")
                .cookie(cookie)
                .set_json(json!({ "page": "reports" }))
                .to_request(),
        )
        .await;
        let cookie = session_cookie(&res);
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/session")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["page"], "reports");
        let active: Vec<&str> = body["navigation"]
            .as_array()
            .expect("array")
            .iter()
            .filter(|entry| entry["active"] == true)
            .filter_map(|entry| entry["page"].as_str())
            .collect();
        assert_eq!(active, ["reports"]);
    }

    #[actix_web::test]
    async fn unknown_page_is_rejected() {
        let app = test::init_service(test_app(PageAccessPolicy::Enforced)).await;
        let (_, cookie) = login_as(&app, "CFO").await;
        let res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/v1/session/page")
                .cookie(cookie)
                .set_json(json!({ "page": "ledger" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["details"]["code"], "unknown_page");
    }

    #[actix_web::test]
    async fn logout_clears_session() {
        let app = test::init_service(test_app(PageAccessPolicy::Enforced)).await;
        let (_, cookie) = login_as(&app, "CFO").await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/logout")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        let cleared = session_cookie(&res);
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/session")
                .cookie(cleared)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn logout_without_session_is_harmless() {
        let app = test::init_service(test_app(PageAccessPolicy::Enforced)).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post().uri("/api/v1/logout").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }
}
