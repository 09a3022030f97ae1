//! Steps shared by every dashboard feature.

use actix_web::http::Method;
use finsage::domain::PageAccessPolicy;
use rstest_bdd_macros::{given, then, when};
use serde_json::json;

use crate::harness::{SharedWorld, WorldFixture, last_response, send, unquote};

pub(crate) fn log_in_as(world: &SharedWorld, role: &str) {
    send(
        world,
        Method::POST,
        "/api/v1/login",
        Some(json!({ "role": unquote(role) })),
    );
}

pub(crate) fn change_page_to(world: &SharedWorld, page: &str) {
    send(
        world,
        Method::PUT,
        "/api/v1/session/page",
        Some(json!({ "page": unquote(page) })),
    );
}

#[given("a dashboard server")]
fn a_dashboard_server(world: &WorldFixture) {
    world.world().borrow_mut().policy = PageAccessPolicy::Enforced;
}

#[given("a dashboard server with advisory page access")]
fn a_dashboard_server_with_advisory_page_access(world: &WorldFixture) {
    world.world().borrow_mut().policy = PageAccessPolicy::Advisory;
}

#[given("the client is logged in as {role}")]
fn the_client_is_logged_in_as(world: &WorldFixture, role: String) {
    let world = world.world();
    log_in_as(&world, &role);
    assert_eq!(last_response(&world).0, 200, "login as {role}");
}

#[when("the client logs in as {role}")]
fn the_client_logs_in_as(world: &WorldFixture, role: String) {
    log_in_as(&world.world(), &role);
}

#[given("the client has moved to {page}")]
fn the_client_has_moved_to(world: &WorldFixture, page: String) {
    let world = world.world();
    change_page_to(&world, &page);
    assert_eq!(last_response(&world).0, 200, "move to {page}");
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &WorldFixture, status: u16) {
    assert_eq!(last_response(&world.world()).0, status);
}
