use crate::{
    application::browse::dto::{DateRange, FilterSpec},
    domain::shared::geo::Coordinates,
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CategoryCount {
    pub tag: String,
    pub count: usize,
}

/// Share of records carrying a value for one tracked field.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct FieldCompleteness {
    pub field: String,
    pub present: usize,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, TS)]
#[ts(export)]
pub struct RecordSummary {
    pub total: usize,
    pub with_coordinates: usize,
    /// Sorted by count descending, then tag ascending.
    pub category_distribution: Vec<CategoryCount>,
    /// Empty when `total` is zero.
    pub completeness: Vec<FieldCompleteness>,
    /// Unnamed submissions count as a single "Anonymous" contributor.
    pub distinct_contributors: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CenturyCount {
    pub century: i32,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct MonthCount {
    /// `YYYY-MM`
    pub month: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, TS)]
#[ts(export)]
pub struct GeographicSpread {
    pub places_with_coordinates: usize,
    pub contributions_with_coordinates: usize,
    pub latitude_span: Option<f64>,
    pub longitude_span: Option<f64>,
    pub center: Option<Coordinates>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct StatisticsResponse {
    pub places: RecordSummary,
    pub contributions: RecordSummary,
    pub founding_centuries: Vec<CenturyCount>,
    pub monthly_activity: Vec<MonthCount>,
    /// Contributions per active day; absent when activity spans under a day.
    pub growth_rate_per_day: Option<f64>,
    pub geographic_spread: GeographicSpread,
}

/// Statistics narrow both record kinds by text and date window only; style
/// and category tags differ between kinds.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatisticsQuery {
    pub q: Option<String>,
    pub range: Option<String>,
}

impl TryFrom<StatisticsQuery> for FilterSpec {
    type Error = String;

    fn try_from(q: StatisticsQuery) -> Result<Self, Self::Error> {
        Ok(FilterSpec {
            search_text: q.q,
            date_range: q.range.as_deref().unwrap_or_default().parse::<DateRange>()?,
            ..Default::default()
        })
    }
}
