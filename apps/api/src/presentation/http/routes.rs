use super::{
    handlers::{contributions, dashboard, export, geo, health, map, places, statistics},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{Router, extract::DefaultBodyLimit, middleware, routing::get};
use tower_http::trace::TraceLayer;

/// Multipart framing and text fields on top of the file itself.
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes.saturating_add(FORM_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/dashboard", get(dashboard::get_dashboard))
        // Browse and submit
        .route(
            "/api/v1/places",
            get(places::list_places).post(places::create_place),
        )
        .route(
            "/api/v1/contributions",
            get(contributions::list_contributions)
                .post(contributions::create_contribution)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Statistics and exports
        .route("/api/v1/statistics", get(statistics::get_statistics))
        .route("/api/v1/export/places.csv", get(export::export_places))
        .route(
            "/api/v1/export/contributions.csv",
            get(export::export_contributions),
        )
        .route("/api/v1/export/locations.csv", get(export::export_locations))
        // Map
        .route("/api/v1/map", get(map::get_map))
        .route("/api/v1/map/select", get(map::select_on_map))
        // Geo utilities
        .route("/api/v1/geo/geocode", get(geo::geocode))
        .route("/api/v1/geo/ip-location", get(geo::ip_location))
        .route("/api/v1/geo/distance", get(geo::distance))
        .route("/api/v1/geo/format", get(geo::format))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
