//! Router-level API tests
//!
//! Drives the full axum router over an in-memory database with
//! `tower::ServiceExt::oneshot`, asserting the wire contracts the dashboards
//! depend on: paths, status codes, and response shapes.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use reward_server::{Config, DbService, ServerState, build_app};

async fn test_app() -> Router {
    let config = Config::with_overrides("/tmp/onereward-test", 0);
    let db = DbService::new_in_memory().await.unwrap();
    build_app().with_state(ServerState::new(config, db.pool))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn register_user(app: &Router, name: &str, email: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/users/register",
        Some(json!({
            "name": name,
            "email": email,
            "phone": "5551234567",
            "password": "secret",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["user"]["id"].as_i64().unwrap()
}

fn points_body(points: i64, restaurant: &str, tx_type: &str) -> Value {
    json!({
        "availablePoints": [{ "points": points, "restaurantName": restaurant }],
        "type": tx_type,
    })
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let app = test_app().await;
    register_user(&app, "Alice", "alice@example.com").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/users/register",
        Some(json!({
            "name": "Alice Again",
            "email": "alice@example.com",
            "phone": "5551234567",
            "password": "secret",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User already exists with this email");
}

#[tokio::test]
async fn test_register_validates_phone_and_password_match() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/users/register",
        Some(json!({
            "name": "Shorty",
            "email": "shorty@example.com",
            "phone": "123",
            "password": "secret",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please enter a valid phone number");

    let (status, body) = send(
        &app,
        "POST",
        "/api/users/register",
        Some(json!({
            "name": "Mismatch",
            "email": "mismatch@example.com",
            "phone": "5551234567",
            "password": "secret",
            "confirmPassword": "different",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Passwords don't match");
}

#[tokio::test]
async fn test_points_add_and_redeem_flow() {
    let app = test_app().await;
    let id = register_user(&app, "Alice", "alice@example.com").await;

    // Accrue 30, then 20
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/user/points/{id}"),
        Some(points_body(30, "CafeX", "add")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Points added successfully");
    assert_eq!(body["customer"]["availablePoints"][0]["points"], 30);

    send(
        &app,
        "PUT",
        &format!("/api/user/points/{id}"),
        Some(points_body(20, "CafeX", "add")),
    )
    .await;

    let (status, body) = send(&app, "GET", "/api/user/Alice/points", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["CafeX"], 50);

    // Overdraw rejected, balance untouched
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/user/points/{id}"),
        Some(points_body(70, "CafeX", "redeem")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Not enough points to redeem");

    let (_, body) = send(&app, "GET", "/api/user/Alice/points", None).await;
    assert_eq!(body["CafeX"], 50);

    // Exact redeem drains to zero and writes no history
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/user/points/{id}"),
        Some(points_body(50, "CafeX", "redeem")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Points redeemed successfully");
    assert_eq!(body["customer"]["availablePoints"][0]["points"], 0);
    assert_eq!(body["customer"]["redeemPoints"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_points_update_validations() {
    let app = test_app().await;
    let id = register_user(&app, "Alice", "alice@example.com").await;

    // Missing entry
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/user/points/{id}"),
        Some(json!({ "availablePoints": [], "type": "add" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Points and restaurant name are required");

    // Unknown transaction type
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/user/points/{id}"),
        Some(points_body(10, "CafeX", "transfer")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid transaction type");

    // Unknown user
    let (status, body) = send(
        &app,
        "PUT",
        "/api/user/points/999999",
        Some(points_body(10, "CafeX", "add")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Customer not found");
}

#[tokio::test]
async fn test_record_redemption_skips_balance_check() {
    let app = test_app().await;
    register_user(&app, "Alice", "alice@example.com").await;

    // No balance anywhere, yet the record lands
    let (status, body) = send(
        &app,
        "POST",
        "/api/users/redeem",
        Some(json!({
            "userEmail": "alice@example.com",
            "restaurantName": "CafeX",
            "points": 200,
            "description": "Free Dinner",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Redemption recorded successfully");

    // Balance is still untouched (no entry for CafeX)
    let (_, body) = send(&app, "GET", "/api/user/Alice/points", None).await;
    assert!(body.as_object().unwrap().is_empty());

    // And the history shows one entry
    let (status, body) = send(
        &app,
        "GET",
        "/api/users/redeem-details?email=alice@example.com&restaurant=CafeX",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["redemptions"].as_array().unwrap().len(), 1);
    assert_eq!(body["redemptions"][0]["points"], 200);
}

#[tokio::test]
async fn test_restaurant_stats_contract() {
    let app = test_app().await;
    let id = register_user(&app, "Alice", "alice@example.com").await;

    send(
        &app,
        "PUT",
        &format!("/api/user/points/{id}"),
        Some(points_body(100, "CafeX", "add")),
    )
    .await;
    send(
        &app,
        "POST",
        "/api/users/redeem",
        Some(json!({
            "userEmail": "alice@example.com",
            "restaurantName": "CafeX",
            "points": 50,
            "description": "Free Coffee",
        })),
    )
    .await;

    let (status, body) = send(&app, "GET", "/api/restaurant/CafeX/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalPointsIssued"], 150);
    assert_eq!(body["totalRedemptions"], 50);
    assert_eq!(body["totalUsers"], 1);
    assert_eq!(body["usersWithBalance"], 1);
    assert_eq!(body["totalUsersRedeemed"], 1);
    assert_eq!(body["highValueRedemptions"], 0);
    assert_eq!(body["averagePointsPerUser"], 150);
}

#[tokio::test]
async fn test_restaurant_redemptions_listing() {
    let app = test_app().await;
    register_user(&app, "Alice", "alice@example.com").await;

    for (points, description) in [(10, "small"), (200, "big")] {
        send(
            &app,
            "POST",
            "/api/users/redeem",
            Some(json!({
                "userEmail": "alice@example.com",
                "restaurantName": "CafeX",
                "points": points,
                "description": description,
            })),
        )
        .await;
    }

    let (status, body) = send(&app, "GET", "/api/restaurant/CafeX/redemptions", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    // Newest first
    assert_eq!(rows[0]["description"], "big");
    assert_eq!(rows[0]["customerName"], "Alice");
    assert_eq!(rows[0]["customerEmail"], "alice@example.com");
    assert_eq!(rows[0]["isHighValue"], true);
    assert_eq!(rows[1]["isHighValue"], false);
}

#[tokio::test]
async fn test_restaurants_crud_and_card_image() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/restaurants/create",
        Some(json!({ "name": "CafeX", "email": "cafex@example.com", "city": "Madrid" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Restaurant created successfully");

    // Duplicate email
    let (status, body) = send(
        &app,
        "POST",
        "/api/restaurants/create",
        Some(json!({ "name": "CafeX 2", "email": "cafex@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Restaurant with this email already exists");

    let (status, body) = send(&app, "GET", "/api/restaurants", None).await;
    assert_eq!(status, StatusCode::OK);
    let restaurants = body.as_array().unwrap();
    assert_eq!(restaurants.len(), 1);
    let id = restaurants[0]["id"].as_i64().unwrap();
    assert_eq!(restaurants[0]["city"], "Madrid");

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/restaurants/update/{id}"),
        Some(json!({ "status": "inactive" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["restaurant"]["status"], "inactive");
    assert_eq!(body["restaurant"]["name"], "CafeX");

    // Card image by id, read back by name
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/restaurant/{id}/card-image"),
        Some(json!({ "cardImage": "https://cdn.example.com/card.png" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cardImage"], "https://cdn.example.com/card.png");

    let (status, body) =
        send(&app, "GET", "/api/restaurant/by-name/CafeX/card-image", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "CafeX");
    assert_eq!(body["cardImage"], "https://cdn.example.com/card.png");

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/restaurants/delete/{id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", &format!("/api/restaurants/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_offers_crud_and_filter() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/offers",
        Some(json!({
            "title": "Free Coffee",
            "description": "One free coffee",
            "pointsRequired": 100,
            "restaurantName": "CafeX",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();
    assert_eq!(body["active"], true);

    send(
        &app,
        "POST",
        "/api/offers",
        Some(json!({
            "title": "Free Burger",
            "description": "One free burger",
            "pointsRequired": 250,
            "restaurantName": "BurgerY",
        })),
    )
    .await;

    let (_, body) = send(&app, "GET", "/api/offers", None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = send(&app, "GET", "/api/offers?restaurantName=CafeX", None).await;
    let offers = body.as_array().unwrap();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0]["title"], "Free Coffee");

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/offers/{id}"),
        Some(json!({ "active": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"], false);

    let (status, body) = send(&app, "DELETE", &format!("/api/offers/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Offer deleted successfully");

    let (status, body) = send(&app, "GET", &format!("/api/offers/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Offer not found");
}

#[tokio::test]
async fn test_scan_qr_matches_email_qr_and_phone() {
    let app = test_app().await;
    register_user(&app, "Alice", "alice@example.com").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/customer/scan-qr",
        Some(json!({ "qrCodeData": "alice@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Alice");

    // The generated QR identifier also matches
    let qr_content = body["data"]["qrContent"].as_str().unwrap().to_string();
    let (status, body) = send(
        &app,
        "POST",
        "/api/customer/scan-qr",
        Some(json!({ "qrCodeData": qr_content })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "alice@example.com");

    // Unknown payloads are a 404
    let (status, body) = send(
        &app,
        "POST",
        "/api/customer/scan-qr",
        Some(json!({ "qrCodeData": "nobody" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Customer not found");

    // Missing payload is a 400
    let (status, _) = send(&app, "POST", "/api/customer/scan-qr", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Phone lookup endpoint
    let (status, body) = send(&app, "GET", "/api/customer/by-phone/5551234567", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Alice");
}

#[tokio::test]
async fn test_sliders_flow() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/slider",
        Some(json!({ "title": "Welcome", "image": "https://cdn.example.com/1.png", "order": 2, "type": "top" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();
    assert_eq!(body["type"], "top");

    send(
        &app,
        "POST",
        "/api/slider",
        Some(json!({ "title": "First", "order": 1, "type": "top" })),
    )
    .await;

    let (status, body) = send(&app, "GET", "/api/sliders/top", None).await;
    assert_eq!(status, StatusCode::OK);
    let sliders = body.as_array().unwrap();
    assert_eq!(sliders.len(), 2);
    assert_eq!(sliders[0]["title"], "First");

    let (status, _) = send(&app, "DELETE", &format!("/api/slider/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/api/sliders/top", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_user_points_unknown_user() {
    let app = test_app().await;
    let (status, _) = send(&app, "GET", "/api/user/Ghost/points", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
