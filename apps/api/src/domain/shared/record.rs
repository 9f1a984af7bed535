use super::geo::Coordinates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Contributor bucket used for records submitted without a name.
pub const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecordKind {
    Place,
    Contribution,
}

/// Read-only view shared by places and contributions.
///
/// Browse filtering, statistics and map rendering are written against this
/// trait so the same pipeline serves both record kinds.
pub trait Record {
    fn kind(&self) -> RecordKind;
    fn id(&self) -> Uuid;
    /// Name for places, title for contributions.
    fn title(&self) -> &str;
    /// Architectural style for places, content category for contributions.
    fn category_tag(&self) -> &str;
    /// Free-text fields matched by the browse search box.
    fn searchable_fields(&self) -> Vec<&str>;
    fn created_at(&self) -> DateTime<Utc>;
    fn contributor_name(&self) -> Option<&str>;
    fn latitude(&self) -> Option<f64>;
    fn longitude(&self) -> Option<f64>;
    /// `(field, has_value)` for every field reported in completeness stats.
    fn tracked_fields(&self) -> Vec<(&'static str, bool)>;

    fn founding_year(&self) -> Option<i32> {
        None
    }

    fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_pair(self.latitude(), self.longitude())
    }

    /// Contributor name, or [`ANONYMOUS`] when none was given.
    fn contributor_label(&self) -> &str {
        self.contributor_name()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(ANONYMOUS)
    }

    fn is_anonymous(&self) -> bool {
        self.contributor_name()
            .map(str::trim)
            .is_none_or(str::is_empty)
    }
}
