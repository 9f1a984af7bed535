use crate::{
    application::{non_blank, submit_place::dto::validate_coordinate_pair},
    domain::shared::geo::Coordinates,
};
use bytes::Bytes;
use validator::{Validate, ValidationError};

/// A file part received with a contribution.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Contribution submission form, assembled from multipart fields.
#[derive(Debug, Clone, Default, Validate)]
#[validate(schema(function = "validate_contribution_request", skip_on_field_errors = false))]
pub struct SubmitContributionRequest {
    #[validate(length(min = 1, max = 200, message = "Title is required (up to 200 characters)"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content category is required"))]
    pub category: String,
    pub description: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: Option<f64>,
    pub location_address: Option<String>,
    pub contributor_name: Option<String>,
    pub resolve_address: bool,
    pub file: Option<UploadedFile>,
}

impl SubmitContributionRequest {
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            category: self.category.trim().to_string(),
            description: non_blank(self.description),
            location_address: non_blank(self.location_address),
            contributor_name: non_blank(self.contributor_name),
            ..self
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_pair(self.latitude, self.longitude)
    }
}

fn validate_contribution_request(request: &SubmitContributionRequest) -> Result<(), ValidationError> {
    validate_coordinate_pair(request.latitude, request.longitude)
}
