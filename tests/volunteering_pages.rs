mod common;

use axum::http::StatusCode;
use chrono::NaiveDate;
use nexus_ui::volunteering::{InMemoryVolunteering, Opportunity, OrgStatus, Organization};

/// The demo community plus an organisation and opportunity owned by tenant 2.
fn two_tenants() -> InMemoryVolunteering {
    let created_at = NaiveDate::from_ymd_opt(2026, 4, 15)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .expect("valid date");
    InMemoryVolunteering::demo(1)
        .with_organization(Organization {
            id: 50,
            tenant_id: 2,
            owner_id: 2,
            name: "Harbour Watch".into(),
            website: None,
            status: OrgStatus::Approved,
        })
        .with_opportunity(Opportunity {
            id: 500,
            organization_id: 50,
            title: "Harbour litter sweep".into(),
            description: "Clear the slipway after the weekend market.".into(),
            location: Some("North Quay".into()),
            skills_needed: Vec::new(),
            start_date: None,
            end_date: None,
            hours_needed: None,
            created_at,
        })
}

#[tokio::test]
async fn test_listing_and_search() {
    let server = common::server();

    let response = server.get("/volunteering").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Community garden helper"));
    assert!(html.contains("Online tutoring"));
    // Pending organisations stay hidden
    assert!(!html.contains("Food parcel packing"));

    let response = server
        .get("/volunteering")
        .add_query_param("q", "TUTOR")
        .await;
    let html = response.text();
    assert!(html.contains("Online tutoring"));
    assert!(!html.contains("Community garden helper"));

    let response = server
        .get("/volunteering")
        .add_query_param("q", "astronaut")
        .await;
    response.assert_status_ok();
    assert!(response.text().contains("No opportunities found"));
}

#[tokio::test]
async fn test_feature_disabled() {
    let server = common::server_with(common::config("", &[]));

    let response = server.get("/volunteering").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.text(),
        "Volunteering module is disabled for this community."
    );
}

#[tokio::test]
async fn test_opportunity_detail() {
    let server = common::server();

    let response = server.get("/volunteering/1").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Community garden helper"));
    assert!(html.contains("Login to Apply"));
    assert!(html.contains("spots"));

    let response = server
        .get("/volunteering/1")
        .authorization_bearer(common::token(1))
        .await;
    assert!(response.text().contains("Already Applied"));

    let response = server
        .get("/volunteering/1")
        .add_query_param("msg", "applied")
        .await;
    assert!(response.text().contains("Application Sent!"));
}

#[tokio::test]
async fn test_opportunity_not_found() {
    let server = common::server();

    for path in ["/volunteering/999", "/volunteering/abc"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.text(), "Opportunity not found");
    }
}

#[tokio::test]
async fn test_other_tenant_opportunity_is_hidden() {
    let server =
        common::server_with_source(common::config("", &["volunteering"]), two_tenants());

    let response = server.get("/volunteering").await;
    assert!(!response.text().contains("Harbour litter sweep"));

    let response = server.get("/volunteering/500").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Opportunity not found");

    // The owner of both tenants' organisations only sees this tenant's on the dashboard
    let response = server
        .get("/volunteering/dashboard")
        .authorization_bearer(common::token(2))
        .await;
    response.assert_status_ok();
    assert!(!response.text().contains("Harbour Watch"));
}

#[tokio::test]
async fn test_dashboard_requires_login() {
    let server = common::server_with(common::config("/hub", &["volunteering"]));

    let response = server.get("/hub/volunteering/dashboard").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/hub/login");
}

#[tokio::test]
async fn test_dashboard_for_owner() {
    let server = common::server();

    let response = server
        .get("/volunteering/dashboard")
        .authorization_bearer(common::token(2))
        .await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Organisation Dashboard"));
    assert!(html.contains("Your organization is under review."));
    assert!(html.contains("Jane Smith"));
    assert!(html.contains("jane@example.org"));
}

#[tokio::test]
async fn test_certificate() {
    let server = common::server();

    let response = server.get("/volunteering/certificate").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.text(), "Access Denied");

    let response = server
        .get("/volunteering/certificate")
        .authorization_bearer(common::token(1))
        .await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(
        "This is to certify that Jane Smith has generously contributed 18.5 hours of volunteer service"
    ));
    assert!(html.contains("Green Streets"));
    assert!(html.contains("Riverside Food Bank"));
}

#[tokio::test]
async fn test_calendar_export() {
    let server = common::server();

    let response = server
        .get("/volunteering/applications/1/ics")
        .authorization_bearer(common::token(1))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.header("content-type"),
        "text/calendar; charset=utf-8"
    );
    assert!(
        response
            .header("content-disposition")
            .to_str()
            .unwrap()
            .contains("volunteer-shift.ics")
    );
    let body = response.text();
    assert!(body.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(body.contains("SUMMARY:Volunteer: Community garden helper\r\n"));
    assert!(body.contains("DESCRIPTION:Volunteering with Green Streets\r\n"));
    assert!(body.contains("UID:volunteer-application-1@nexus\r\n"));
}

#[tokio::test]
async fn test_calendar_export_rejects_invalid_bookings() {
    let server = common::server();

    server
        .get("/volunteering/applications/1/ics")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    // Pending, without a shift
    let response = server
        .get("/volunteering/applications/2/ics")
        .authorization_bearer(common::token(1))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Invalid Booking");

    // Someone else's application
    server
        .get("/volunteering/applications/1/ics")
        .authorization_bearer(common::token(2))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_tenant_base_path() {
    let server = common::server_with(common::config("/hub/", &["volunteering"]));

    let response = server.get("/hub/volunteering").await;
    response.assert_status_ok();
    assert!(response.text().contains("href=\"/hub/volunteering/1\""));

    server
        .get("/volunteering")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server.get("/components").await.assert_status_ok();
}
