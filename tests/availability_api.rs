mod common;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use taller_backend::db::models::AppointmentStatus;

use common::*;

struct ApiFixture {
    store: FakeStore,
    dealership_id: Uuid,
    workshop_id: Uuid,
    service_id: Uuid,
    advisor_id: Uuid,
}

/// Main workshop open Wednesdays 09:00-13:00, one 30-minute service, one
/// advisor covering every position for it.
fn api_fixture() -> ApiFixture {
    let dealership_id = Uuid::new_v4();
    let shop = workshop(dealership_id, true);
    let svc = service(dealership_id, "Cambio de aceite", 30);
    let advisor_id = Uuid::new_v4();

    let store = FakeStore {
        hours: vec![operating_hours(shop.id, 3, "09:00", "13:00", 3)],
        assignments: advisor_assignments(
            advisor_id,
            "Laura",
            &[1, 2, 3, 4, 5, 6, 7, 8],
            svc.id,
        ),
        workshops: vec![shop.clone()],
        services: vec![svc.clone()],
        ..FakeStore::default()
    };

    ApiFixture {
        store,
        dealership_id,
        workshop_id: shop.id,
        service_id: svc.id,
        advisor_id,
    }
}

fn advisors_uri(fixture: &ApiFixture, date: &str) -> String {
    format!(
        "/api/availability/advisors?dealershipId={}&serviceId={}&date={}",
        fixture.dealership_id, fixture.service_id, date
    )
}

#[tokio::test]
async fn open_day_lists_every_bookable_start() {
    let fixture = api_fixture();
    let app = build_router(fixture.store.clone());

    let response = get(app, &advisors_uri(&fixture, "2025-10-15")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body["availableSlots"],
        json!([
            "09:00:00", "09:30:00", "10:00:00", "10:30:00",
            "11:00:00", "11:30:00", "12:00:00", "12:30:00"
        ])
    );
    assert_eq!(body["totalSlots"], 8);
    assert_eq!(body["dayName"], "Miércoles");
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn closed_day_returns_empty_list_and_message() {
    let fixture = api_fixture();
    let app = build_router(fixture.store.clone());

    let response = get(app, &advisors_uri(&fixture, "2025-10-19")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["availableSlots"], json!([]));
    assert_eq!(body["totalSlots"], 0);
    assert_eq!(body["dayName"], "Domingo");
    assert_eq!(body["message"], "El taller no opera el día Domingo");
}

#[tokio::test]
async fn fully_booked_day_returns_empty_list_without_message() {
    let mut fixture = api_fixture();
    for time in ["09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "12:00", "12:30"] {
        fixture.store.appointments.push(booking(
            fixture.dealership_id,
            fixture.workshop_id,
            fixture.service_id,
            Some(fixture.advisor_id),
            "2025-10-15",
            time,
            AppointmentStatus::Pending,
        ));
    }
    let app = build_router(fixture.store.clone());

    let response = get(app, &advisors_uri(&fixture, "2025-10-15")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["availableSlots"], json!([]));
    assert_eq!(body["totalSlots"], 0);
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn missing_service_id_is_a_contractual_bad_request() {
    let fixture = api_fixture();
    let app = build_router(fixture.store.clone());

    let uri = format!(
        "/api/availability/advisors?dealershipId={}&date=2025-10-15",
        fixture.dealership_id
    );
    let response = get(app, &uri).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body, json!({"error": "Missing required parameter: serviceId"}));
}

#[tokio::test]
async fn missing_dealership_id_is_a_contractual_bad_request() {
    let fixture = api_fixture();
    let app = build_router(fixture.store.clone());

    let uri = format!(
        "/api/availability/advisors?serviceId={}&date=2025-10-15",
        fixture.service_id
    );
    let response = get(app, &uri).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body, json!({"error": "Missing required parameter: dealershipId"}));
}

#[tokio::test]
async fn malformed_date_is_rejected() {
    let fixture = api_fixture();
    let app = build_router(fixture.store.clone());

    let response = get(app, &advisors_uri(&fixture, "15/10/2025")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid date format. Expected YYYY-MM-DD");
}

#[tokio::test]
async fn malformed_uuid_is_rejected() {
    let fixture = api_fixture();
    let app = build_router(fixture.store.clone());

    let uri = format!(
        "/api/availability/advisors?dealershipId=not-a-uuid&serviceId={}&date=2025-10-15",
        fixture.service_id
    );
    let response = get(app, &uri).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid dealershipId format. Expected a UUID");
}

#[tokio::test]
async fn workshop_of_another_dealership_fails_resolution() {
    let mut fixture = api_fixture();
    let foreign_shop = workshop(Uuid::new_v4(), true);
    fixture.store.workshops.push(foreign_shop.clone());
    let app = build_router(fixture.store.clone());

    let uri = format!(
        "/api/availability/advisors?dealershipId={}&workshopId={}&serviceId={}&date=2025-10-15",
        fixture.dealership_id, foreign_shop.id, fixture.service_id
    );
    let response = get(app, &uri).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Error resolving workshop_id");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn dealership_without_main_workshop_fails_resolution() {
    let mut fixture = api_fixture();
    fixture.store.workshops[0].is_main = false;
    let app = build_router(fixture.store.clone());

    let response = get(app, &advisors_uri(&fixture, "2025-10-15")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Error resolving workshop_id");
}

#[tokio::test]
async fn unknown_service_is_not_found() {
    let fixture = api_fixture();
    let app = build_router(fixture.store.clone());

    let uri = format!(
        "/api/availability/advisors?dealershipId={}&serviceId={}&date=2025-10-15",
        fixture.dealership_id,
        Uuid::new_v4()
    );
    let response = get(app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn store_outage_is_a_server_error() {
    let mut fixture = api_fixture();
    fixture.store.fail_reads = true;
    let app = build_router(fixture.store.clone());

    let response = get(app, &advisors_uri(&fixture, "2025-10-15")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn repeated_identical_requests_return_identical_bodies() {
    let fixture = api_fixture();
    let uri = advisors_uri(&fixture, "2025-10-15");

    let first = get(build_router(fixture.store.clone()), &uri).await;
    let second = get(build_router(fixture.store.clone()), &uri).await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);

    assert_eq!(body_bytes(first).await, body_bytes(second).await);
}
