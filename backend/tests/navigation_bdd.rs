//! Behaviour tests for the role-filtered sidebar.
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
use serde_json::Value;

#[fixture]
fn world() -> WorldFixture {
    harness::world()
}

fn navigation_pages(world: &WorldFixture) -> Vec<String> {
    let (status, body) = last_response(&world.world());
    assert_eq!(status, 200, "navigation response");
    body.as_array()
        .expect("navigation array")
        .iter()
        .filter_map(|entry| entry.get("page").and_then(Value::as_str))
        .map(str::to_owned)
        .collect()
}

#[when("the client requests the navigation")]
fn the_client_requests_the_navigation(world: &WorldFixture) {
    send(&world.world(), Method::GET, "/api/v1/navigation", None);
}

#[then("the navigation lists {pages}")]
fn the_navigation_lists(world: &WorldFixture, pages: String) {
    let expected: Vec<&str> = unquote(&pages).split(", ").collect();
    assert_eq!(navigation_pages(world), expected);
}

#[then("the navigation includes {page}")]
fn the_navigation_includes(world: &WorldFixture, page: String) {
    let page = unquote(&page);
    assert!(navigation_pages(world).iter().any(|entry| entry == page));
}

#[then("the navigation excludes {page}")]
fn the_navigation_excludes(world: &WorldFixture, page: String) {
    let page = unquote(&page);
    assert!(navigation_pages(world).iter().all(|entry| entry != page));
}

#[then("the active navigation entry is {page}")]
fn the_active_navigation_entry_is(world: &WorldFixture, page: String) {
    let (_, body) = last_response(&world.world());
    let active: Vec<&str> = body
        .as_array()
        .expect("navigation array")
        .iter()
        .filter(|entry| entry["active"] == true)
        .filter_map(|entry| entry["page"].as_str())
        .collect();
    assert_eq!(active, [unquote(&page)]);
}

#[scenario(path = "tests/features/navigation.feature")]
fn navigation_scenarios(world: WorldFixture) {
    drop(world);
}
