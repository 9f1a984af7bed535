use super::{
    aggregation::{century_histogram, geographic_spread, growth_rate, monthly_activity, summarize},
    dto::StatisticsResponse,
};
use crate::application::browse::{dto::FilterSpec, use_case::BrowseUseCase};
use chrono::{DateTime, Utc};
use tracing::instrument;

/// Builds the statistics dashboard from the filtered record sets.
pub struct StatisticsUseCase {
    browse: BrowseUseCase,
}

impl StatisticsUseCase {
    pub fn new(browse: BrowseUseCase) -> Self {
        Self { browse }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, spec: &FilterSpec, now: DateTime<Utc>) -> StatisticsResponse {
        let places = self.browse.places(spec, now).await;
        let contributions = self.browse.contributions(spec, now).await;

        StatisticsResponse {
            places: summarize(&places),
            contributions: summarize(&contributions),
            founding_centuries: century_histogram(&places),
            monthly_activity: monthly_activity(&contributions),
            growth_rate_per_day: growth_rate(&contributions),
            geographic_spread: geographic_spread(&places, &contributions),
        }
    }
}
