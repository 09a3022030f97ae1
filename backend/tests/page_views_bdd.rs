//! Behaviour tests for page rendering and placeholder actions.
//
// rstest-bdd generates guard variables with double underscores, which trips
// the non_snake_case lint under -D warnings.
#![allow(non_snake_case)]

// Shared harness has fields only some suites read.
#[allow(dead_code)]
#[path = "dashboard/harness.rs"]
mod harness;
#[path = "dashboard/common_steps.rs"]
mod common_steps;

use actix_web::http::Method;
use harness::{WorldFixture, last_response, send, unquote};
use rstest::fixture;
use rstest_bdd_macros::{scenario, then, when};

#[fixture]
fn world() -> WorldFixture {
    harness::world()
}

#[when("the client requests the current page")]
fn the_client_requests_the_current_page(world: &WorldFixture) {
    send(&world.world(), Method::GET, "/api/v1/pages/current", None);
}

#[when("the client requests the page {page}")]
fn the_client_requests_the_page(world: &WorldFixture, page: String) {
    let path = format!("/api/v1/pages/{}", unquote(&page));
    send(&world.world(), Method::GET, &path, None);
}

#[when("the client downloads report {id}")]
fn the_client_downloads_report(world: &WorldFixture, id: u32) {
    let path = format!("/api/v1/pages/reports/{id}/download");
    send(&world.world(), Method::POST, &path, None);
}

#[then("the rendered page is {page}")]
fn the_rendered_page_is(world: &WorldFixture, page: String) {
    let (_, body) = last_response(&world.world());
    assert_eq!(body["page"], unquote(&page));
}

#[then("every compliance alert concerns {compliance}")]
fn every_compliance_alert_concerns(world: &WorldFixture, compliance: String) {
    let compliance = unquote(&compliance);
    let (_, body) = last_response(&world.world());
    let alerts = body["view"]["alerts"].as_array().expect("alerts");
    assert!(!alerts.is_empty());
    assert!(alerts.iter().all(|alert| alert["compliance"] == compliance));
}

#[then("the receipt action is {action}")]
fn the_receipt_action_is(world: &WorldFixture, action: String) {
    let (_, body) = last_response(&world.world());
    assert_eq!(body["action"], unquote(&action));
}

#[scenario(path = "tests/features/page_views.feature")]
fn page_views_scenarios(world: WorldFixture) {
    drop(world);
}
