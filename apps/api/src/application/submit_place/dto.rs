use crate::{
    application::non_blank,
    domain::shared::geo::{Coordinates, validate_coordinates},
};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use ts_rs::TS;
use validator::{Validate, ValidationError};

/// Place submission form.
#[derive(Debug, Clone, Default, Deserialize, Validate, TS)]
#[validate(schema(function = "validate_place_request", skip_on_field_errors = false))]
#[ts(export)]
pub struct SubmitPlaceRequest {
    #[validate(length(min = 1, max = 200, message = "Temple name is required (up to 200 characters)"))]
    pub name: String,
    pub deity: Option<String>,
    /// One of the fixed styles; blank means "Unknown".
    pub architectural_style: Option<String>,
    #[validate(range(min = 1, message = "Founding year must be a positive year"))]
    pub founding_year: Option<i32>,
    pub narrative: Option<String>,
    pub location_address: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: Option<f64>,
    pub contributor_name: Option<String>,
    /// Geocode `location_address` when no coordinates are given.
    #[serde(default)]
    pub resolve_address: bool,
}

impl SubmitPlaceRequest {
    /// Trims text fields; blank optional fields become `None`.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            deity: non_blank(self.deity),
            architectural_style: non_blank(self.architectural_style),
            narrative: non_blank(self.narrative),
            location_address: non_blank(self.location_address),
            contributor_name: non_blank(self.contributor_name),
            ..self
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_pair(self.latitude, self.longitude)
    }
}

fn validate_place_request(request: &SubmitPlaceRequest) -> Result<(), ValidationError> {
    if let Some(year) = request.founding_year {
        let current = Utc::now().year();
        if year > current {
            return Err(ValidationError::new("founding_year_in_future").with_message(
                format!("Founding year cannot be later than {current}").into(),
            ));
        }
    }
    validate_coordinate_pair(request.latitude, request.longitude)
}

/// Coordinates are all-or-nothing, and a complete pair must be a real
/// in-range position. Range attributes alone let NaN through.
pub fn validate_coordinate_pair(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<(), ValidationError> {
    match (latitude, longitude) {
        (None, None) => Ok(()),
        (Some(_), Some(_)) if validate_coordinates(latitude, longitude) => Ok(()),
        (Some(_), Some(_)) => Err(ValidationError::new("invalid_coordinates").with_message(
            "Latitude must be between -90 and 90 and longitude between -180 and 180".into(),
        )),
        _ => Err(ValidationError::new("incomplete_coordinates")
            .with_message("Provide both latitude and longitude, or neither".into())),
    }
}
