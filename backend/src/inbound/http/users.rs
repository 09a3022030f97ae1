//! Profile update handler.
//!
//! ```text
//! PUT /api/v1/users/me {"name":"Sarah Johnson","email":"cfo@bank.in",...}
//! ```

use actix_web::{put, web};

use crate::domain::User;
use crate::domain::pages::profile::ProfileForm;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, ProfileFormSchema, UserSchema};
use crate::inbound::http::session::SessionContext;

/// Save the profile form for the signed-in user.
///
/// The id and role are kept; the current page is unchanged.
#[utoipa::path(
    put,
    path = "/api/v1/users/me",
    request_body = ProfileFormSchema,
    responses(
        (status = 200, description = "Updated user", body = UserSchema),
        (status = 400, description = "Blank name or email, or oversized text", body = ErrorSchema),
        (status = 401, description = "Not logged in", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateProfile"
)]
#[put("/users/me")]
pub async fn update_profile(
    session: SessionContext,
    payload: web::Json<ProfileForm>,
) -> ApiResult<web::Json<User>> {
    let (mut state, user) = session.require_login()?;
    let updated = payload.into_inner().apply_to(&user)?;
    state.update_profile(updated.clone())?;
    session.persist_state(&state)?;
    Ok(web::Json(updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PageAccessPolicy;
    use crate::inbound::http::session_routes::{change_page, current_session, login};
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware, test_state};
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    fn profile_body(name: &str) -> Value {
        json!({
            "name": name,
            "email": "jennifer.kim@bank.in",
            "phone": "+91 90000 00000",
            "title": "Chief Information Security Officer",
            "company": "HDFC Bank Ltd.",
            "department": "Information Security",
            "country": "India",
            "joinDate": "2022-03-15",
            "lastLogin": "2024-07-01 09:30 AM"
        })
    }

    #[actix_web::test]
    async fn profile_update_keeps_page_and_role() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(PageAccessPolicy::Enforced)))
                .wrap(test_session_middleware())
                .service(
                    web::scope("/api/v1")
                        .service(login)
                        .service(change_page)
                        .service(current_session)
                        .service(update_profile),
                ),
        )
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/login")
                .set_json(json!({ "role": "CISO" }))
                .to_request(),
        )
        .await;
        let res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/v1/session/page")
                .cookie(session_cookie(&res))
                .set_json(json!({ "page": "compliance" }))
                .to_request(),
        )
        .await;
        let res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/v1/users/me")
                .cookie(session_cookie(&res))
                .set_json(profile_body("Jen Kim"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let cookie = session_cookie(&res);
        let user: Value = test::read_body_json(res).await;
        assert_eq!(user["name"], "Jen Kim");
        assert_eq!(user["role"], "CISO");
        assert_eq!(user["department"], "Information Security");

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/session")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let session: Value = test::read_body_json(res).await;
        assert_eq!(session["page"], "compliance");
        assert_eq!(session["user"]["id"], user["id"]);
        assert_eq!(session["header"]["greeting"], "Welcome back, Jen");
    }

    #[actix_web::test]
    async fn blank_name_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(PageAccessPolicy::Enforced)))
                .wrap(test_session_middleware())
                .service(web::scope("/api/v1").service(login).service(update_profile)),
        )
        .await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/login")
                .set_json(json!({ "role": "CFO" }))
                .to_request(),
        )
        .await;
        let res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/v1/users/me")
                .cookie(session_cookie(&res))
                .set_json(profile_body("   "))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["details"]["field"], "name");
    }

    #[actix_web::test]
    async fn oversized_fields_are_rejected_before_the_cookie_grows() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(PageAccessPolicy::Enforced)))
                .wrap(test_session_middleware())
                .service(
                    web::scope("/api/v1")
                        .service(login)
                        .service(current_session)
                        .service(update_profile),
                ),
        )
        .await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/login")
                .set_json(json!({ "role": "CFO" }))
                .to_request(),
        )
        .await;
        let cookie = session_cookie(&res);

        let mut body = profile_body("Sarah Johnson");
        body["department"] = Value::from("d".repeat(3_500));
        let res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/v1/users/me")
                .cookie(cookie.clone())
                .set_json(body)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let error: Value = test::read_body_json(res).await;
        assert_eq!(error["code"], "invalid_request");
        assert_eq!(
            error["details"],
            json!({ "field": "department", "code": "too_long" })
        );

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/session")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let session: Value = test::read_body_json(res).await;
        assert_eq!(session["user"]["name"], "Sarah Johnson");
        assert!(session["user"].get("department").is_none());
    }

    #[actix_web::test]
    async fn profile_update_requires_login() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .service(web::scope("/api/v1").service(update_profile)),
        )
        .await;
        let res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/v1/users/me")
                .set_json(profile_body("Ada"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
