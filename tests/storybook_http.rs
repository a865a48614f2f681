mod common;

use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_storybook_welcome() {
    let server = common::server();

    let response = server.get("/components").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Component Library"));
    assert!(html.contains("Quick Start"));
    assert!(html.contains("href=\"?category=buttons&amp;component=button\""));
}

#[tokio::test]
async fn test_storybook_detail() {
    let server = common::server();

    let response = server
        .get("/components")
        .add_query_param("category", "feedback")
        .add_query_param("component", "alert")
        .await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<span>Feedback</span>"));
    assert!(html.contains("This is an informational alert message."));
    for kind in ["Info", "Success", "Warning", "Danger"] {
        assert!(html.contains(&format!("{kind} message")));
    }
}

#[tokio::test]
async fn test_storybook_unknown_component_is_ok() {
    let server = common::server();

    let response = server
        .get("/components")
        .add_query_param("category", "cards")
        .add_query_param("component", "nope")
        .await;
    response.assert_status_ok();
    assert!(
        response
            .text()
            .contains("Component not found. Please select a component from the sidebar.")
    );
}

#[tokio::test]
async fn test_storybook_missing_template_placeholder() {
    let server = common::server();

    let response = server
        .get("/components")
        .add_query_param("category", "cards")
        .add_query_param("component", "listing-card")
        .await;
    response.assert_status_ok();
    assert!(response.text().contains("Component file not found"));
}

#[tokio::test]
async fn test_showcase_gallery() {
    let server = common::server();

    let response = server.get("/components/showcase").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Component Showcase"));
    assert!(html.contains("File not found: cards/listing-card"));
    assert!(html.contains("id=\"cat-shared\""));
}

#[tokio::test]
async fn test_registry_api() {
    let server = common::server();

    let response = server.get("/api/components").await;
    response.assert_status_ok();
    let body: Value = response.json();
    let categories = body["categories"].as_array().expect("categories array");
    let total: usize = categories
        .iter()
        .map(|c| c["components"].as_array().map_or(0, Vec::len))
        .sum();
    assert_eq!(body["total_components"].as_u64(), Some(total as u64));
    assert_eq!(categories[0]["id"], "layout");

    let response = server.get("/api/components/buttons/button").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["template_path"], "buttons/button");
    assert!(body["props"][0]["type"].is_string());

    let response = server.get("/api/components/buttons/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "component not found");
}

#[tokio::test]
async fn test_jwt_required_rejects_anonymous() {
    let mut config = common::config("", &["volunteering"]);
    config.security.jwt_required = true;
    let server = common::server_with(config);

    server
        .get("/components")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .get("/components")
        .authorization_bearer(common::token(1))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_invalid_token_rejected() {
    let server = common::server();

    server
        .get("/components")
        .authorization_bearer("not-a-jwt")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_rate_limit_rejects_after_burst() {
    let mut config = common::config("", &["volunteering"]);
    config.resilience.rate_limit_enabled = true;
    config.resilience.requests_per_second = 0.01;
    config.resilience.burst_size = 2;
    let server = common::server_with(config);

    server.get("/api/components").await.assert_status_ok();
    server.get("/api/components").await.assert_status_ok();
    server
        .get("/api/components")
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);
}
