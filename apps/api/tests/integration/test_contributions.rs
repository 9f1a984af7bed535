use super::helpers::{
    contribution, expect_status, get, multipart_body, read_json, send, spawn_app,
    spawn_app_without_storage,
};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::{Duration, Utc};
use serde_json::Value;

async fn post_contribution(
    app: &Router,
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> axum::response::Response {
    let (boundary, body) = multipart_body(fields, file);
    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/contributions")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .expect("failed to build contribution request");
    send(app, req).await
}

#[tokio::test]
async fn image_contribution_is_uploaded_and_stored() {
    let app = spawn_app();

    let res = post_contribution(
        &app.app,
        &[
            ("title", "Gopuram at dawn"),
            ("category", "image"),
            ("latitude", "10.7828"),
            ("longitude", "79.1318"),
            ("contributor_name", "Meena"),
        ],
        Some(("gopuram.jpg", "image/jpeg", &b"\xff\xd8\xff\xe0fake-jpeg"[..])),
    )
    .await;
    let receipt: Value = read_json(expect_status(res, StatusCode::CREATED).await).await;
    let file_url = receipt["file_url"].as_str().expect("missing file_url");
    assert!(file_url.starts_with("https://test-storage.local/image/"));
    assert!(file_url.ends_with("_gopuram.jpg"));
    assert_eq!(app.storage.upload_count(), 1);
    assert_eq!(app.contributions.insert_count(), 1);

    let res = get(&app.app, "/api/v1/contributions?contributor=Meena").await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["contributions"][0]["category"], "image");
}

#[tokio::test]
async fn mismatched_file_type_is_rejected_before_upload() {
    let app = spawn_app();

    let res = post_contribution(
        &app.app,
        &[("title", "Chant"), ("category", "image")],
        Some(("chant.mp3", "audio/mpeg", &b"ID3fake"[..])),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;
    assert!(body["error"].as_str().unwrap().contains("File type mismatch"));
    assert_eq!(app.storage.upload_count(), 0);
    assert_eq!(app.contributions.insert_count(), 0);
}

#[tokio::test]
async fn missing_title_is_rejected() {
    let app = spawn_app();

    let res = post_contribution(&app.app, &[("title", " "), ("category", "event")], None).await;
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;
    assert!(body["error"].as_str().unwrap().contains("Title is required"));
    assert_eq!(app.contributions.insert_count(), 0);
}

#[tokio::test]
async fn non_numeric_latitude_is_rejected() {
    let app = spawn_app();

    let res = post_contribution(
        &app.app,
        &[("title", "Festival"), ("category", "event"), ("latitude", "north")],
        None,
    )
    .await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn nan_coordinates_are_rejected_instead_of_dropped() {
    let app = spawn_app();

    let res = post_contribution(
        &app.app,
        &[
            ("title", "Festival"),
            ("category", "event"),
            ("latitude", "NaN"),
            ("longitude", "NaN"),
        ],
        None,
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;
    assert_eq!(body["error"], "Latitude must be a number");
    assert_eq!(app.contributions.insert_count(), 0);
}

#[tokio::test]
async fn file_without_storage_fails_but_text_only_succeeds() {
    let app = spawn_app_without_storage();

    let res = post_contribution(
        &app.app,
        &[("title", "Deed"), ("category", "document")],
        Some(("deed.pdf", "application/pdf", &b"%PDF-1.4"[..])),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::INTERNAL_SERVER_ERROR).await).await;
    assert!(body["error"].as_str().unwrap().contains("not available"));
    assert_eq!(app.contributions.insert_count(), 0);

    let res = post_contribution(
        &app.app,
        &[
            ("title", "Chariot festival"),
            ("category", "Historical Event"),
            ("description", "Annual procession"),
        ],
        None,
    )
    .await;
    let receipt: Value = read_json(expect_status(res, StatusCode::CREATED).await).await;
    assert!(receipt["file_url"].is_null());
    assert_eq!(app.contributions.insert_count(), 1);
}

#[tokio::test]
async fn date_range_limits_contribution_feed() {
    let app = spawn_app();
    app.contributions
        .push(contribution("Old photo", "image", Utc::now() - Duration::days(40)));
    app.contributions
        .push(contribution("New photo", "image", Utc::now() - Duration::days(2)));

    let res = get(&app.app, "/api/v1/contributions?range=30d").await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["contributions"][0]["title"], "New photo");

    let res = get(&app.app, "/api/v1/contributions?sort=title&dir=desc").await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["contributions"][0]["title"], "Old photo");
}
