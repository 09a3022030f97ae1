//! Page rendering handlers.
//!
//! ```text
//! GET /api/v1/pages/current
//! GET /api/v1/pages/compliance?compliance=pci&timeRange=90d
//! ```
//!
//! Query parameters bind to the page's filter state; absent parameters take
//! the page defaults.

use actix_web::{HttpRequest, get, web};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::domain::pages::{self, PageFilters, PageView, ViewContext};
use crate::domain::{Error, Page, PageAccessPolicy, User, is_permitted};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, PageViewSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

fn bind<T: DeserializeOwned>(query: &str) -> Result<T, Error> {
    web::Query::<T>::from_query(query)
        .map(web::Query::into_inner)
        .map_err(|err| {
            Error::invalid_request(format!("invalid page filters: {err}"))
                .with_details(json!({ "field": "query", "code": "invalid_filter" }))
        })
}

/// Bind `query` to the filter state of `page`.
pub(crate) fn filters_for(page: Page, query: &str) -> Result<PageFilters, Error> {
    Ok(match page {
        Page::Dashboard => PageFilters::Dashboard,
        Page::CloudIntegration => PageFilters::CloudIntegration(bind(query)?),
        Page::Compliance => PageFilters::Compliance(bind(query)?),
        Page::Forecast => PageFilters::Forecast(bind(query)?),
        Page::Chargeback => PageFilters::Chargeback(bind(query)?),
        Page::Notifications => PageFilters::Notifications(bind(query)?),
        Page::Reports => PageFilters::Reports(bind(query)?),
        Page::RegulatoryImpact => PageFilters::RegulatoryImpact(bind(query)?),
        Page::AiOptimization => PageFilters::AiOptimization(bind(query)?),
        Page::ComplianceFrameworks => PageFilters::ComplianceFrameworks(bind(query)?),
        Page::Profile => PageFilters::Profile(bind(query)?),
        Page::Settings => PageFilters::Settings(bind(query)?),
    })
}

fn render_for(session: &SessionContext, user: &User, filters: PageFilters) -> ApiResult<PageView> {
    let notifications = session.notifications(user)?;
    let settings = session.settings(user)?;
    let ctx = ViewContext {
        user,
        notifications: &notifications,
        settings: &settings,
    };
    Ok(pages::render(filters, ctx))
}

/// Render the page selected in the session.
///
/// Under the enforced policy a page the role may not see renders the
/// dashboard instead.
#[utoipa::path(
    get,
    path = "/api/v1/pages/current",
    responses(
        (status = 200, description = "Rendered page", body = PageViewSchema),
        (status = 400, description = "Malformed filters", body = ErrorSchema),
        (status = 401, description = "Not logged in", body = ErrorSchema)
    ),
    tags = ["pages"],
    operation_id = "currentPage"
)]
#[get("/pages/current")]
pub async fn current_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    req: HttpRequest,
) -> ApiResult<web::Json<PageView>> {
    let (routing, user) = session.require_login()?;
    let selected = routing.page().unwrap_or(Page::DEFAULT);
    let page = if state.policy.admits(selected, user.role()) {
        selected
    } else {
        debug!(page = %selected, role = %user.role(), "rendering fallback page");
        Page::DEFAULT
    };
    let filters = filters_for(page, req.query_string())?;
    Ok(web::Json(render_for(&session, &user, filters)?))
}

/// Render `page` with filters from the query string.
///
/// Does not change the page selected in the session.
#[utoipa::path(
    get,
    path = "/api/v1/pages/{page}",
    params(("page" = String, Path, description = "Page identifier, e.g. `regulatory-impact`")),
    responses(
        (status = 200, description = "Rendered page", body = PageViewSchema),
        (status = 400, description = "Malformed filters", body = ErrorSchema),
        (status = 401, description = "Not logged in", body = ErrorSchema),
        (status = 403, description = "Page not permitted for the role", body = ErrorSchema),
        (status = 404, description = "Unknown page", body = ErrorSchema)
    ),
    tags = ["pages"],
    operation_id = "renderPage"
)]
#[get("/pages/{page}")]
pub async fn render_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    req: HttpRequest,
) -> ApiResult<web::Json<PageView>> {
    let (_, user) = session.require_login()?;
    let page: Page = path.parse().map_err(|err: crate::domain::ParsePageError| {
        Error::not_found(err.to_string())
            .with_details(json!({ "field": "page", "code": "unknown_page" }))
    })?;
    if state.policy == PageAccessPolicy::Enforced && !is_permitted(page, user.role()) {
        return Err(Error::forbidden(format!(
            "{} may not view {page}",
            user.role()
        )));
    }
    let filters = filters_for(page, req.query_string())?;
    Ok(web::Json(render_for(&session, &user, filters)?))
}
