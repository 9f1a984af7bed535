use super::helpers::{expect_status, get, read_json, spawn_app};
use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn geocode_distinguishes_found_missing_and_unavailable() {
    let app = spawn_app();

    let res = get(&app.app, "/api/v1/geo/geocode?address=Thanjavur").await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["found"], true);
    assert_eq!(body["coordinates"]["latitude"], 10.7828);

    let res = get(&app.app, "/api/v1/geo/geocode?address=Atlantis").await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["found"], false);
    assert!(body["coordinates"].is_null());

    let res = get(&app.app, "/api/v1/geo/geocode?address=offline").await;
    let body: Value = read_json(expect_status(res, StatusCode::SERVICE_UNAVAILABLE).await).await;
    assert_eq!(body["error"], "External service unavailable");

    let res = get(&app.app, "/api/v1/geo/geocode?address=%20%20").await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn ip_location_includes_readable_address() {
    let app = spawn_app();

    let res = get(&app.app, "/api/v1/geo/ip-location").await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["found"], true);
    assert_eq!(body["address"], "Bengaluru, Karnataka, India");
    assert_eq!(body["location"]["coordinates"]["latitude"], 12.9716);
}

#[tokio::test]
async fn distance_between_chennai_and_bengaluru() {
    let app = spawn_app();

    let res = get(
        &app.app,
        "/api/v1/geo/distance?lat1=13.0827&lon1=80.2707&lat2=12.9716&lon2=77.5946",
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    let km = body["distance_km"].as_f64().unwrap();
    assert!((km - 290.0).abs() < 5.0, "unexpected distance {km}");

    let res = get(&app.app, "/api/v1/geo/distance?lat1=91&lon1=0&lat2=0&lon2=0").await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn format_renders_hemispheres_and_missing_pairs() {
    let app = spawn_app();

    let res = get(&app.app, "/api/v1/geo/format?lat=-33.8688&lon=151.2093&precision=2").await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["formatted"], "33.87°S, 151.21°E");
    assert_eq!(body["valid"], true);

    let res = get(&app.app, "/api/v1/geo/format?lat=12.5").await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["formatted"], "No coordinates");
    assert_eq!(body["valid"], false);
}
