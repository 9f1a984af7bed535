use super::dto::SubmitPlaceRequest;
use crate::{
    application::{SubmissionReceipt, location::resolve_location},
    domain::{
        place::{entity::NewPlace, repository::PlaceRepository, value_objects::ArchitecturalStyle},
        shared::errors::DomainError,
    },
    infrastructure::geocoding::traits::Geocoder,
};
use std::sync::Arc;
use tracing::{error, info, instrument};
use validator::Validate;

/// Validates and stores a place submission.
///
/// Validation runs to completion before any collaborator is called, so a
/// rejected submission never reaches the geocoder or the store.
pub struct SubmitPlaceUseCase {
    repository: Arc<dyn PlaceRepository>,
    geocoder: Arc<dyn Geocoder>,
}

impl SubmitPlaceUseCase {
    pub fn new(repository: Arc<dyn PlaceRepository>, geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            repository,
            geocoder,
        }
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn execute(&self, request: SubmitPlaceRequest) -> Result<SubmissionReceipt, DomainError> {
        let request = request.normalized();
        request
            .validate()
            .map_err(|e| DomainError::from_validation(&e))?;

        let architectural_style = match request.architectural_style.as_deref() {
            Some(style) => style.parse::<ArchitecturalStyle>().map_err(DomainError::ValidationError)?,
            None => ArchitecturalStyle::Unknown,
        };

        let mut notices = Vec::new();
        let coordinates = resolve_location(
            self.geocoder.as_ref(),
            request.coordinates(),
            request.location_address.as_deref(),
            request.resolve_address,
            &mut notices,
        )
        .await;

        let place = NewPlace {
            name: request.name,
            deity: request.deity,
            architectural_style,
            founding_year: request.founding_year,
            narrative: request.narrative,
            location_address: request.location_address,
            latitude: coordinates.map(|c| c.latitude),
            longitude: coordinates.map(|c| c.longitude),
            contributor_name: request.contributor_name,
        };

        let id = self.repository.insert(&place).await.map_err(|e| {
            error!("Failed to store place: {}", e);
            e
        })?;
        info!(%id, "place stored");

        Ok(SubmissionReceipt {
            id,
            latitude: place.latitude,
            longitude: place.longitude,
            file_url: None,
            notices,
        })
    }
}
