use super::helpers::{THANJAVUR, expect_status, get, place, read_json, send, spawn_app};
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use heritage_api::application::location::{ADDRESS_NOT_FOUND, LOOKUP_UNAVAILABLE};
use serde_json::{Value, json};

fn post_place(payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/places")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("failed to build place request")
}

#[tokio::test]
async fn create_place_stores_record_and_lists_it() {
    let app = spawn_app();

    let res = send(
        &app.app,
        post_place(json!({
            "name": "  Brihadeeswarar Temple ",
            "deity": "Shiva",
            "architectural_style": "Dravidian",
            "founding_year": 1010,
            "latitude": 10.7828,
            "longitude": 79.1318,
            "contributor_name": ""
        })),
    )
    .await;
    let receipt: Value = read_json(expect_status(res, StatusCode::CREATED).await).await;
    assert!(receipt["id"].is_string());
    assert_eq!(receipt["latitude"], json!(10.7828));
    assert_eq!(receipt["notices"], json!([]));
    assert_eq!(app.places.insert_count(), 1);

    let res = expect_status(get(&app.app, "/api/v1/places").await, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["places"][0]["name"], "Brihadeeswarar Temple");
    assert_eq!(body["places"][0]["architectural_style"], "Dravidian");
    assert!(body["places"][0]["contributor_name"].is_null());
}

#[tokio::test]
async fn blank_name_is_rejected_without_storing() {
    let app = spawn_app();

    let res = send(&app.app, post_place(json!({ "name": "   " }))).await;
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;
    assert!(
        body["error"].as_str().unwrap().contains("Temple name is required"),
        "unexpected error body: {body}"
    );
    assert_eq!(app.places.insert_count(), 0);
}

#[tokio::test]
async fn future_founding_year_and_half_coordinates_are_rejected() {
    let app = spawn_app();

    let res = send(&app.app, post_place(json!({ "name": "Future", "founding_year": 9999 }))).await;
    expect_status(res, StatusCode::BAD_REQUEST).await;

    let res = send(&app.app, post_place(json!({ "name": "Half", "latitude": 12.0 }))).await;
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;
    assert!(body["error"].as_str().unwrap().contains("both latitude and longitude"));

    let res = send(
        &app.app,
        post_place(json!({ "name": "Gothic", "architectural_style": "Gothic" })),
    )
    .await;
    expect_status(res, StatusCode::BAD_REQUEST).await;

    assert_eq!(app.places.insert_count(), 0);
}

#[tokio::test]
async fn address_is_geocoded_only_when_requested() {
    let app = spawn_app();

    let res = send(
        &app.app,
        post_place(json!({
            "name": "Big Temple",
            "location_address": "Thanjavur",
            "resolve_address": true
        })),
    )
    .await;
    let receipt: Value = read_json(expect_status(res, StatusCode::CREATED).await).await;
    assert_eq!(receipt["latitude"], json!(THANJAVUR.latitude));
    assert_eq!(receipt["longitude"], json!(THANJAVUR.longitude));

    let res = send(
        &app.app,
        post_place(json!({ "name": "Unresolved", "location_address": "Thanjavur" })),
    )
    .await;
    let receipt: Value = read_json(expect_status(res, StatusCode::CREATED).await).await;
    assert!(receipt["latitude"].is_null());
}

#[tokio::test]
async fn failed_lookup_saves_place_with_notice() {
    let app = spawn_app();

    let res = send(
        &app.app,
        post_place(json!({
            "name": "Lost Shrine",
            "location_address": "nowhere in particular",
            "resolve_address": true
        })),
    )
    .await;
    let receipt: Value = read_json(expect_status(res, StatusCode::CREATED).await).await;
    assert!(receipt["latitude"].is_null());
    assert_eq!(receipt["notices"], json!([ADDRESS_NOT_FOUND]));

    let res = send(
        &app.app,
        post_place(json!({
            "name": "Offline Shrine",
            "location_address": "offline",
            "resolve_address": true
        })),
    )
    .await;
    let receipt: Value = read_json(expect_status(res, StatusCode::CREATED).await).await;
    assert_eq!(receipt["notices"], json!([LOOKUP_UNAVAILABLE]));
    assert_eq!(app.places.insert_count(), 2);
}

#[tokio::test]
async fn browse_filters_and_sorts_places() {
    let app = spawn_app();
    app.places.push(place("Sun Temple", "Nagara", None));
    app.places.push(place("Airavatesvara", "Dravidian", None));
    app.places.push(place("Brihadeeswarar", "Dravidian", None));

    let res = get(&app.app, "/api/v1/places?category=Dravidian&sort=alphabetical").await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["places"][0]["name"], "Airavatesvara");
    assert_eq!(body["places"][1]["name"], "Brihadeeswarar");

    let res = get(&app.app, "/api/v1/places?q=sun&category=All").await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["places"][0]["name"], "Sun Temple");
}

#[tokio::test]
async fn unknown_filter_values_are_bad_requests() {
    let app = spawn_app();

    let res = get(&app.app, "/api/v1/places?range=yesterday").await;
    expect_status(res, StatusCode::BAD_REQUEST).await;

    let res = get(&app.app, "/api/v1/places?sort=popularity").await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
}
