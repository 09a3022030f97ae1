//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of utoipa derives. The wrappers here mirror their
//! serialised shape and register under the domain type's path, so generated
//! clients see `crate.domain.User` rather than an adapter-local name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No user is logged in.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The logged-in role may not access the resource.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The resource is not in a state that allows the action.
    #[schema(rename = "conflict")]
    Conflict,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    #[schema(example = "unknown role: Treasurer")]
    message: String,
    /// Identifier of the request that failed, echoed in the `trace-id`
    /// response header.
    #[schema(example = "5b1e8f3c-8f0a-4f7c-9d6f-2b3c4d5e6f70")]
    trace_id: Option<String>,
    /// For validation failures, `field` and `code` name the offending input.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Role`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Role)]
pub enum RoleSchema {
    #[schema(rename = "CFO")]
    Cfo,
    #[schema(rename = "FinOps Analyst")]
    FinOpsAnalyst,
    #[schema(rename = "Cloud Manager")]
    CloudManager,
    #[schema(rename = "CISO")]
    Ciso,
    #[schema(rename = "Compliance Officer")]
    ComplianceOfficer,
}

/// OpenAPI schema for [`crate::domain::Page`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Page)]
#[schema(rename_all = "kebab-case")]
pub enum PageSchema {
    Dashboard,
    CloudIntegration,
    Compliance,
    Forecast,
    Chargeback,
    Notifications,
    Reports,
    RegulatoryImpact,
    AiOptimization,
    ComplianceFrameworks,
    Profile,
    Settings,
}

/// OpenAPI schema for [`crate::domain::User`].
///
/// Profile fields are omitted from the payload until set.
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "Sarah Johnson")]
    name: String,
    #[schema(example = "cfo@finsage.ai")]
    email: String,
    role: RoleSchema,
    avatar: Option<String>,
    company: Option<String>,
    title: Option<String>,
    country: Option<String>,
    phone: Option<String>,
    department: Option<String>,
    join_date: Option<String>,
    last_login: Option<String>,
}

/// OpenAPI schema for [`crate::domain::pages::PageView`].
///
/// `view` holds the page-specific view model named by `page`.
#[derive(ToSchema)]
#[schema(as = crate::domain::pages::PageView)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PageViewSchema {
    page: PageSchema,
    #[schema(value_type = Object)]
    view: serde_json::Value,
}

/// OpenAPI schema for [`crate::domain::pages::profile::ProfileForm`].
#[derive(ToSchema)]
#[schema(as = crate::domain::pages::profile::ProfileForm)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ProfileFormSchema {
    #[schema(example = "Sarah Johnson")]
    name: String,
    #[schema(example = "cfo@finsage.ai")]
    email: String,
    phone: String,
    title: String,
    company: String,
    department: String,
    country: String,
    #[schema(example = "2022-03-15")]
    join_date: String,
    last_login: String,
}

/// OpenAPI schema for [`crate::domain::ports::ActionReceipt`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::ActionReceipt)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ActionReceiptSchema {
    #[schema(example = "download_report")]
    action: String,
    #[schema(example = "Preparing download of Cloud Cost Summary - June 2024")]
    message: String,
}
