use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ts_rs::TS;

/// Sentinel that disables the category and contributor filters.
pub const ALL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DateRange {
    #[default]
    AllTime,
    Last7Days,
    Last30Days,
    Last90Days,
}

impl DateRange {
    /// Earliest `created_at` kept by this range, or `None` when unrestricted.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let days = match self {
            Self::AllTime => return None,
            Self::Last7Days => 7,
            Self::Last30Days => 30,
            Self::Last90Days => 90,
        };
        Some(now - Duration::days(days))
    }
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" | "all_time" => Ok(Self::AllTime),
            "7d" | "last_7_days" => Ok(Self::Last7Days),
            "30d" | "last_30_days" => Ok(Self::Last30Days),
            "90d" | "last_90_days" => Ok(Self::Last90Days),
            other => Err(format!("unknown date range `{other}`; expected all|7d|30d|90d")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SortKey {
    #[default]
    CreatedAt,
    Alphabetical,
    FoundingYear,
}

impl SortKey {
    pub fn default_direction(&self) -> SortDirection {
        match self {
            Self::CreatedAt => SortDirection::Descending,
            Self::Alphabetical | Self::FoundingYear => SortDirection::Ascending,
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "recent" | "created_at" | "newest" => Ok(Self::CreatedAt),
            "alphabetical" | "name" | "title" => Ok(Self::Alphabetical),
            "year" | "founding_year" | "built_year" => Ok(Self::FoundingYear),
            other => Err(format!(
                "unknown sort key `{other}`; expected recent|alphabetical|year"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(format!("unknown sort direction `{other}`; expected asc|desc")),
        }
    }
}

/// User-selected browse criteria.
///
/// `sort_dir: None` means "the natural direction for `sort_key`": newest first
/// for `CreatedAt`, ascending otherwise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub search_text: Option<String>,
    pub category: Option<String>,
    pub contributor: Option<String>,
    pub date_range: DateRange,
    pub sort_key: SortKey,
    pub sort_dir: Option<SortDirection>,
}

impl FilterSpec {
    pub fn direction(&self) -> SortDirection {
        self.sort_dir
            .unwrap_or_else(|| self.sort_key.default_direction())
    }

    /// Search text worth pushing down to the store, if any.
    pub fn store_search(&self) -> Option<String> {
        self.search_text
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// Raw query-string form of [`FilterSpec`], shared by browse, feed and export
/// endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrowseQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub contributor: Option<String>,
    pub range: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

impl TryFrom<BrowseQuery> for FilterSpec {
    type Error = String;

    fn try_from(q: BrowseQuery) -> Result<Self, Self::Error> {
        Ok(FilterSpec {
            search_text: q.q,
            category: q.category,
            contributor: q.contributor,
            date_range: q.range.as_deref().unwrap_or_default().parse()?,
            sort_key: q.sort.as_deref().unwrap_or_default().parse()?,
            sort_dir: q.dir.as_deref().map(str::parse::<SortDirection>).transpose()?,
        })
    }
}
