use crate::{
    application::or_empty,
    domain::{
        contribution::{entity::Contribution, repository::ContributionRepository},
        place::repository::PlaceRepository,
        shared::record::Record,
    },
};
use serde::Serialize;
use std::{collections::HashSet, sync::Arc};
use tracing::instrument;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct DashboardResponse {
    pub place_count: i64,
    pub contribution_count: i64,
    /// Across both kinds; unnamed submissions count once as "Anonymous".
    pub contributor_count: usize,
    pub geotagged_count: usize,
    pub recent_contributions: Vec<Contribution>,
}

/// Home page aggregates. Every store read degrades to zero independently.
pub struct DashboardUseCase {
    places: Arc<dyn PlaceRepository>,
    contributions: Arc<dyn ContributionRepository>,
    recent_limit: i64,
}

impl DashboardUseCase {
    pub fn new(
        places: Arc<dyn PlaceRepository>,
        contributions: Arc<dyn ContributionRepository>,
        recent_limit: i64,
    ) -> Self {
        Self {
            places,
            contributions,
            recent_limit,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> DashboardResponse {
        let place_count = or_empty(self.places.count().await, "count_places");
        let contribution_count = or_empty(self.contributions.count().await, "count_contributions");
        let recent_contributions = or_empty(
            self.contributions.recent(self.recent_limit).await,
            "recent_contributions",
        );

        let places = or_empty(self.places.list(None).await, "list_places");
        let contributions = or_empty(self.contributions.list(None).await, "list_contributions");

        let contributors: HashSet<&str> = places
            .iter()
            .map(|p| p.contributor_label())
            .chain(contributions.iter().map(|c| c.contributor_label()))
            .collect();
        let geotagged_count = places.iter().filter(|p| p.coordinates().is_some()).count()
            + contributions.iter().filter(|c| c.coordinates().is_some()).count();

        DashboardResponse {
            place_count,
            contribution_count,
            contributor_count: contributors.len(),
            geotagged_count,
            recent_contributions,
        }
    }
}
