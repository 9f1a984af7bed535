use super::dto::{SubmitContributionRequest, UploadedFile};
use crate::{
    application::{SubmissionReceipt, location::resolve_location},
    domain::{
        contribution::{
            entity::{ContentCategory, NewContribution},
            media::{storage_key, validate_upload},
            repository::ContributionRepository,
        },
        shared::errors::DomainError,
    },
    infrastructure::{geocoding::traits::Geocoder, storage::traits::StorageService},
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Validates, uploads and stores a community contribution.
///
/// Every check (fields, file size, file type, storage availability) runs
/// before the geocoder, storage or store is contacted.
pub struct SubmitContributionUseCase {
    repository: Arc<dyn ContributionRepository>,
    storage: Arc<dyn StorageService>,
    geocoder: Arc<dyn Geocoder>,
    max_upload_bytes: usize,
}

impl SubmitContributionUseCase {
    pub fn new(
        repository: Arc<dyn ContributionRepository>,
        storage: Arc<dyn StorageService>,
        geocoder: Arc<dyn Geocoder>,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            repository,
            storage,
            geocoder,
            max_upload_bytes,
        }
    }

    fn check_file(&self, file: &UploadedFile, category: ContentCategory) -> Result<(), DomainError> {
        validate_upload(&file.file_name, file.data.len(), category, self.max_upload_bytes)
            .map_err(|rejection| DomainError::ValidationError(rejection.to_string()))?;
        if !self.storage.is_enabled() {
            warn!("file submitted while storage is disabled");
            return Err(DomainError::StorageError(
                "File uploads are not available on this server".to_string(),
            ));
        }
        Ok(())
    }

    #[instrument(skip(self, request), fields(
        title = %request.title,
        category = %request.category,
        file_bytes = request.file.as_ref().map(|f| f.data.len()).unwrap_or(0)
    ))]
    pub async fn execute(
        &self,
        request: SubmitContributionRequest,
    ) -> Result<SubmissionReceipt, DomainError> {
        let request = request.normalized();
        request
            .validate()
            .map_err(|e| DomainError::from_validation(&e))?;
        let category = request
            .category
            .parse::<ContentCategory>()
            .map_err(DomainError::ValidationError)?;
        if let Some(file) = &request.file {
            self.check_file(file, category)?;
        }

        let mut notices = Vec::new();
        let coordinates = resolve_location(
            self.geocoder.as_ref(),
            request.coordinates(),
            request.location_address.as_deref(),
            request.resolve_address,
            &mut notices,
        )
        .await;

        let file_url = match request.file {
            Some(file) => Some(self.upload(file, category).await?),
            None => None,
        };

        let contribution = NewContribution {
            title: request.title,
            category,
            description: request.description,
            file_url,
            latitude: coordinates.map(|c| c.latitude),
            longitude: coordinates.map(|c| c.longitude),
            location_address: request.location_address,
            contributor_name: request.contributor_name,
        };

        let id = self.repository.insert(&contribution).await.map_err(|e| {
            error!("Failed to store contribution: {}", e);
            e
        })?;
        info!(%id, "contribution stored");

        Ok(SubmissionReceipt {
            id,
            latitude: contribution.latitude,
            longitude: contribution.longitude,
            file_url: contribution.file_url,
            notices,
        })
    }

    async fn upload(&self, file: UploadedFile, category: ContentCategory) -> Result<String, DomainError> {
        let key = storage_key(&file.file_name, category, Utc::now(), Uuid::new_v4());
        let content_type = file.content_type.as_deref().unwrap_or(FALLBACK_CONTENT_TYPE);
        self.storage
            .upload(&key, file.data, content_type)
            .await
            .map_err(|e| {
                error!("Failed to upload {}: {}", key, e);
                DomainError::StorageError("Failed to upload file".to_string())
            })
    }
}
