use crate::domain::shared::record::{Record, RecordKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::value_objects::ArchitecturalStyle;

/// A documented heritage site.
///
/// # Invariants
/// - `name` is never empty.
/// - `founding_year`, when present, lies in `1..=current year` at insert time.
/// - `latitude`/`longitude` are either both set and in range, or both unset.
/// - `id` and `created_at` are assigned by the store and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Place {
    pub id: Uuid,
    pub name: String,
    /// Principal deity or dedication.
    pub deity: Option<String>,
    pub architectural_style: ArchitecturalStyle,
    pub founding_year: Option<i32>,
    /// History and significance, free text.
    pub narrative: Option<String>,
    pub location_address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// `None` means the submission was anonymous.
    pub contributor_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a place; the store fills in `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewPlace {
    pub name: String,
    pub deity: Option<String>,
    pub architectural_style: ArchitecturalStyle,
    pub founding_year: Option<i32>,
    pub narrative: Option<String>,
    pub location_address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub contributor_name: Option<String>,
}

impl Record for Place {
    fn kind(&self) -> RecordKind {
        RecordKind::Place
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn category_tag(&self) -> &str {
        self.architectural_style.as_str()
    }

    fn searchable_fields(&self) -> Vec<&str> {
        [
            Some(self.name.as_str()),
            self.narrative.as_deref(),
            self.location_address.as_deref(),
            self.deity.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn contributor_name(&self) -> Option<&str> {
        self.contributor_name.as_deref()
    }

    fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    fn founding_year(&self) -> Option<i32> {
        self.founding_year
    }

    fn tracked_fields(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("name", !self.name.trim().is_empty()),
            ("location_address", self.location_address.is_some()),
            ("coordinates", self.coordinates().is_some()),
            ("deity", self.deity.is_some()),
            ("founding_year", self.founding_year.is_some()),
            ("narrative", self.narrative.is_some()),
        ]
    }
}
