use super::{dto::FilterSpec, filter::apply_filters};
use crate::{
    application::or_empty,
    domain::{
        contribution::{entity::Contribution, repository::ContributionRepository},
        place::{entity::Place, repository::PlaceRepository},
    },
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct PlaceListResponse {
    pub places: Vec<Place>,
    pub total: usize,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct ContributionListResponse {
    pub contributions: Vec<Contribution>,
    pub total: usize,
}

/// Reads the full record set for a kind and runs it through the browse
/// filter. Store failures render as an empty list.
pub struct BrowseUseCase {
    places: Arc<dyn PlaceRepository>,
    contributions: Arc<dyn ContributionRepository>,
}

impl BrowseUseCase {
    pub fn new(
        places: Arc<dyn PlaceRepository>,
        contributions: Arc<dyn ContributionRepository>,
    ) -> Self {
        Self {
            places,
            contributions,
        }
    }

    #[instrument(skip(self))]
    pub async fn places(&self, spec: &FilterSpec, now: DateTime<Utc>) -> Vec<Place> {
        let all = or_empty(self.places.list(spec.store_search()).await, "list_places");
        let filtered = apply_filters(all, spec, now);
        debug!(count = filtered.len(), "places after filtering");
        filtered
    }

    #[instrument(skip(self))]
    pub async fn contributions(&self, spec: &FilterSpec, now: DateTime<Utc>) -> Vec<Contribution> {
        let all = or_empty(
            self.contributions.list(spec.store_search()).await,
            "list_contributions",
        );
        let filtered = apply_filters(all, spec, now);
        debug!(count = filtered.len(), "contributions after filtering");
        filtered
    }

    pub async fn place_list(&self, spec: &FilterSpec, now: DateTime<Utc>) -> PlaceListResponse {
        let places = self.places(spec, now).await;
        PlaceListResponse {
            total: places.len(),
            places,
        }
    }

    pub async fn contribution_list(
        &self,
        spec: &FilterSpec,
        now: DateTime<Utc>,
    ) -> ContributionListResponse {
        let contributions = self.contributions(spec, now).await;
        ContributionListResponse {
            total: contributions.len(),
            contributions,
        }
    }
}
