use crate::{
    domain::shared::geo::{Coordinates, format_coordinates, haversine_distance, validate_coordinates},
    infrastructure::geocoding::traits::{IpLocation, LookupOutcome},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

const DEFAULT_PRECISION: usize = 6;
const MAX_PRECISION: usize = 10;

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct GeocodeResponse {
    pub found: bool,
    pub coordinates: Option<Coordinates>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct IpLocationResponse {
    pub found: bool,
    pub location: Option<IpLocation>,
    pub address: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct DistanceResponse {
    pub distance_km: f64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct FormatResponse {
    pub formatted: String,
    pub valid: bool,
}

#[derive(Deserialize)]
pub struct GeocodeQuery {
    pub address: String,
}

#[derive(Deserialize)]
pub struct DistanceQuery {
    pub lat1: f64,
    pub lon1: f64,
    pub lat2: f64,
    pub lon2: f64,
}

#[derive(Deserialize)]
pub struct FormatQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub precision: Option<usize>,
}

pub async fn geocode(
    State(state): State<AppState>,
    Query(query): Query<GeocodeQuery>,
) -> Result<Json<GeocodeResponse>, AppError> {
    let address = query.address.trim();
    if address.is_empty() {
        return Err(AppError::ValidationError("Address is required".into()));
    }

    match state.geocoder.geocode(address).await {
        LookupOutcome::Found(coordinates) => Ok(Json(GeocodeResponse {
            found: true,
            coordinates: Some(coordinates),
            message: None,
        })),
        LookupOutcome::NotFound => Ok(Json(GeocodeResponse {
            found: false,
            coordinates: None,
            message: Some(format!("No location found for \"{address}\"")),
        })),
        LookupOutcome::Unavailable(reason) => Err(AppError::ExternalService(reason)),
    }
}

pub async fn ip_location(State(state): State<AppState>) -> Result<Json<IpLocationResponse>, AppError> {
    match state.ip_locator.locate().await {
        LookupOutcome::Found(location) => Ok(Json(IpLocationResponse {
            found: true,
            address: Some(location.address()),
            location: Some(location),
            message: None,
        })),
        LookupOutcome::NotFound => Ok(Json(IpLocationResponse {
            found: false,
            location: None,
            address: None,
            message: Some("Could not determine your location".into()),
        })),
        LookupOutcome::Unavailable(reason) => Err(AppError::ExternalService(reason)),
    }
}

pub async fn distance(Query(query): Query<DistanceQuery>) -> Result<Json<DistanceResponse>, AppError> {
    let valid = validate_coordinates(Some(query.lat1), Some(query.lon1))
        && validate_coordinates(Some(query.lat2), Some(query.lon2));
    if !valid {
        return Err(AppError::ValidationError(
            "Latitude must be between -90 and 90 and longitude between -180 and 180".into(),
        ));
    }

    Ok(Json(DistanceResponse {
        distance_km: haversine_distance(query.lat1, query.lon1, query.lat2, query.lon2),
    }))
}

pub async fn format(Query(query): Query<FormatQuery>) -> Json<FormatResponse> {
    let precision = query.precision.unwrap_or(DEFAULT_PRECISION).min(MAX_PRECISION);
    Json(FormatResponse {
        formatted: format_coordinates(query.lat, query.lon, precision),
        valid: validate_coordinates(query.lat, query.lon),
    })
}
