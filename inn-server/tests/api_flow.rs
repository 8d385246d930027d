//! HTTP API integration tests
//!
//! Drives the full axum app (router, auth middleware, handlers) with
//! in-process requests against a temp-directory database.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tempfile::TempDir;
use tower::ServiceExt;

use inn_server::api::build_app;
use inn_server::auth::hash_password;
use inn_server::db::repository;
use inn_server::{Config, ServerState};
use shared::models::{HotelCreate, RoomCreate, RoomType, role_names};

const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "admin-password-1";

struct TestApp {
    _dir: TempDir,
    state: ServerState,
    app: Router,
}

async fn setup() -> TestApp {
    let dir = TempDir::new().expect("temp dir");
    let config = Config::with_overrides(dir.path().to_str().unwrap(), 0);
    let state = ServerState::initialize(config).await.expect("state init");

    // one admin account for the staff/admin paths
    let admin_role = repository::role::find_by_name(&state.db.read_pool, role_names::ADMIN)
        .await
        .unwrap()
        .expect("admin role seeded by migration");
    repository::user::create(
        &state.db.write_pool,
        ADMIN_EMAIL,
        &hash_password(ADMIN_PASSWORD).unwrap(),
        "Admin",
        "User",
        None,
        &admin_role.id,
    )
    .await
    .unwrap();

    let app = build_app(state.clone());
    TestApp {
        _dir: dir,
        state,
        app,
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

async fn login(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        post_json(
            "/api/auth/login",
            None,
            json!({ "email": email, "password": password }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_is_public() {
    let test = setup().await;
    let (status, body) = send(&test.app, get("/api/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_register_login_me_flow() {
    let test = setup().await;

    let (status, body) = send(
        &test.app,
        post_json(
            "/api/auth/register",
            None,
            json!({
                "email": "jane@example.com",
                "password": "secret-password-1",
                "first_name": "Jane",
                "last_name": "Doe",
                "phone": null
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {body}");
    assert_eq!(body["email"], "jane@example.com");

    let token = login(&test.app, "jane@example.com", "secret-password-1").await;

    let (status, body) = send(&test.app, get("/api/auth/me", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "jane@example.com");
    // self-registration always lands on the customer role
    assert_eq!(body["role"], "customer");
}

#[tokio::test]
async fn test_login_rejects_bad_credentials_uniformly() {
    let test = setup().await;

    let wrong_password = post_json(
        "/api/auth/login",
        None,
        json!({ "email": ADMIN_EMAIL, "password": "wrong" }),
    );
    let (status_a, body_a) = send(&test.app, wrong_password).await;

    let unknown_user = post_json(
        "/api/auth/login",
        None,
        json!({ "email": "nobody@example.com", "password": "wrong" }),
    );
    let (status_b, body_b) = send(&test.app, unknown_user).await;

    // same status and message whether the account exists or not
    assert_eq!(status_a, StatusCode::BAD_REQUEST);
    assert_eq!(status_a, status_b);
    assert_eq!(body_a["message"], body_b["message"]);
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let test = setup().await;

    let (status, _) = send(&test.app, get("/api/hotels", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&test.app, get("/api/hotels", Some("not-a-jwt"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_room_listing_is_staff_only() {
    let test = setup().await;

    send(
        &test.app,
        post_json(
            "/api/auth/register",
            None,
            json!({
                "email": "guest@example.com",
                "password": "secret-password-1",
                "first_name": "Guest",
                "last_name": "User",
                "phone": null
            }),
        ),
    )
    .await;
    let guest_token = login(&test.app, "guest@example.com", "secret-password-1").await;

    let (status, _) = send(&test.app, get("/api/rooms", Some(&guest_token))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let admin_token = login(&test.app, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let (status, _) = send(&test.app, get("/api/rooms", Some(&admin_token))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_booking_create_and_conflict_over_api() {
    let test = setup().await;

    // fixtures straight through the repositories
    let hotel = repository::hotel::create(
        &test.state.db.write_pool,
        &HotelCreate {
            name: "API Hotel".to_string(),
            street_name: "High Street".to_string(),
            street_number: "2".to_string(),
            floor: None,
            city: "Testville".to_string(),
            zip_code: "11111".to_string(),
            country: "GB".to_string(),
        },
    )
    .await
    .unwrap();
    let room = repository::room::create(
        &test.state.db.write_pool,
        &RoomCreate {
            hotel_id: hotel.id,
            number: "101".to_string(),
            capacity: 2,
            price_per_night: Decimal::from_str("150.00").unwrap(),
            room_type: RoomType::Standard,
            floor: Some(1),
            description: None,
        },
    )
    .await
    .unwrap();

    send(
        &test.app,
        post_json(
            "/api/auth/register",
            None,
            json!({
                "email": "guest@example.com",
                "password": "secret-password-1",
                "first_name": "Guest",
                "last_name": "User",
                "phone": null
            }),
        ),
    )
    .await;
    let token = login(&test.app, "guest@example.com", "secret-password-1").await;

    let booking_body = json!({
        "check_in": "2026-10-10T14:00:00Z",
        "check_out": "2026-10-12T11:00:00Z",
        "adults": 2,
        "children": 0,
        "room_ids": [room.id]
    });

    let (status, body) = send(
        &test.app,
        post_json("/api/bookings", Some(&token), booking_body.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "booking failed: {body}");
    assert_eq!(body["status"], "pending");
    assert_eq!(body["nights"], 2);
    assert_eq!(body["total_price"], "300.00");
    let booking_id = body["id"].as_str().unwrap().to_string();

    // same window again conflicts
    let (status, body) = send(
        &test.app,
        post_json("/api/bookings", Some(&token), booking_body),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "E0005");

    // the owner reads their booking; staff confirm it
    let (status, body) = send(
        &test.app,
        get(&format!("/api/bookings/{booking_id}"), Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], booking_id.as_str());

    let admin_token = login(&test.app, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/bookings/{booking_id}/status"))
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {admin_token}"))
        .body(Body::from(json!({ "status": "confirmed" }).to_string()))
        .unwrap();
    let (status, body) = send(&test.app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "confirmed");
}

#[tokio::test]
async fn test_booked_hotel_delete_returns_conflict() {
    let test = setup().await;

    let hotel = repository::hotel::create(
        &test.state.db.write_pool,
        &HotelCreate {
            name: "API Hotel".to_string(),
            street_name: "High Street".to_string(),
            street_number: "2".to_string(),
            floor: None,
            city: "Testville".to_string(),
            zip_code: "11111".to_string(),
            country: "GB".to_string(),
        },
    )
    .await
    .unwrap();
    let room = repository::room::create(
        &test.state.db.write_pool,
        &RoomCreate {
            hotel_id: hotel.id.clone(),
            number: "101".to_string(),
            capacity: 2,
            price_per_night: Decimal::from_str("150.00").unwrap(),
            room_type: RoomType::Standard,
            floor: Some(1),
            description: None,
        },
    )
    .await
    .unwrap();

    send(
        &test.app,
        post_json(
            "/api/auth/register",
            None,
            json!({
                "email": "guest@example.com",
                "password": "secret-password-1",
                "first_name": "Guest",
                "last_name": "User",
                "phone": null
            }),
        ),
    )
    .await;
    let token = login(&test.app, "guest@example.com", "secret-password-1").await;
    let (status, _) = send(
        &test.app,
        post_json(
            "/api/bookings",
            Some(&token),
            json!({
                "check_in": "2026-10-10T14:00:00Z",
                "check_out": "2026-10-12T11:00:00Z",
                "adults": 1,
                "children": 0,
                "room_ids": [room.id]
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // the booking pins the hotel's rooms, so the delete is a client error,
    // not a server one
    let admin_token = login(&test.app, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/hotels/{}", hotel.id))
        .header(header::AUTHORIZATION, format!("Bearer {admin_token}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&test.app, request).await;
    assert_eq!(status, StatusCode::CONFLICT, "expected conflict: {body}");
    assert_eq!(body["code"], "E0004");
}

#[tokio::test]
async fn test_status_endpoint_only_moves_pending_bookings() {
    let test = setup().await;

    let hotel = repository::hotel::create(
        &test.state.db.write_pool,
        &HotelCreate {
            name: "API Hotel".to_string(),
            street_name: "High Street".to_string(),
            street_number: "2".to_string(),
            floor: None,
            city: "Testville".to_string(),
            zip_code: "11111".to_string(),
            country: "GB".to_string(),
        },
    )
    .await
    .unwrap();
    let room = repository::room::create(
        &test.state.db.write_pool,
        &RoomCreate {
            hotel_id: hotel.id,
            number: "101".to_string(),
            capacity: 2,
            price_per_night: Decimal::from_str("150.00").unwrap(),
            room_type: RoomType::Standard,
            floor: Some(1),
            description: None,
        },
    )
    .await
    .unwrap();

    send(
        &test.app,
        post_json(
            "/api/auth/register",
            None,
            json!({
                "email": "guest@example.com",
                "password": "secret-password-1",
                "first_name": "Guest",
                "last_name": "User",
                "phone": null
            }),
        ),
    )
    .await;
    let token = login(&test.app, "guest@example.com", "secret-password-1").await;
    let (status, body) = send(
        &test.app,
        post_json(
            "/api/bookings",
            Some(&token),
            json!({
                "check_in": "2026-10-10T14:00:00Z",
                "check_out": "2026-10-12T11:00:00Z",
                "adults": 1,
                "children": 0,
                "room_ids": [room.id]
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let booking_id = body["id"].as_str().unwrap().to_string();

    let admin_token = login(&test.app, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let put_status = |value: &str| {
        Request::builder()
            .method("PUT")
            .uri(format!("/api/bookings/{booking_id}/status"))
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {admin_token}"))
            .body(Body::from(json!({ "status": value }).to_string()))
            .unwrap()
    };

    // "pending" is not a valid target
    let (status, _) = send(&test.app, put_status("pending")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&test.app, put_status("cancelled")).await;
    assert_eq!(status, StatusCode::OK);

    // once cancelled the booking cannot be reopened
    let (status, body) = send(&test.app, put_status("confirmed")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "expected rejection: {body}");
}

#[tokio::test]
async fn test_booking_detail_hidden_from_other_customers() {
    let test = setup().await;

    for email in ["alice@example.com", "bob@example.com"] {
        send(
            &test.app,
            post_json(
                "/api/auth/register",
                None,
                json!({
                    "email": email,
                    "password": "secret-password-1",
                    "first_name": "Test",
                    "last_name": "User",
                    "phone": null
                }),
            ),
        )
        .await;
    }

    let hotel = repository::hotel::create(
        &test.state.db.write_pool,
        &HotelCreate {
            name: "API Hotel".to_string(),
            street_name: "High Street".to_string(),
            street_number: "2".to_string(),
            floor: None,
            city: "Testville".to_string(),
            zip_code: "11111".to_string(),
            country: "GB".to_string(),
        },
    )
    .await
    .unwrap();
    let room = repository::room::create(
        &test.state.db.write_pool,
        &RoomCreate {
            hotel_id: hotel.id,
            number: "101".to_string(),
            capacity: 2,
            price_per_night: Decimal::from_str("150.00").unwrap(),
            room_type: RoomType::Standard,
            floor: Some(1),
            description: None,
        },
    )
    .await
    .unwrap();

    let alice_token = login(&test.app, "alice@example.com", "secret-password-1").await;
    let (status, body) = send(
        &test.app,
        post_json(
            "/api/bookings",
            Some(&alice_token),
            json!({
                "check_in": "2026-10-10T14:00:00Z",
                "check_out": "2026-10-12T11:00:00Z",
                "adults": 1,
                "children": 0,
                "room_ids": [room.id]
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let booking_id = body["id"].as_str().unwrap().to_string();

    let bob_token = login(&test.app, "bob@example.com", "secret-password-1").await;
    let (status, _) = send(
        &test.app,
        get(&format!("/api/bookings/{booking_id}"), Some(&bob_token)),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
