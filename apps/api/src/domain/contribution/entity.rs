use crate::domain::shared::record::{Record, RecordKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use ts_rs::TS;
use uuid::Uuid;

/// A community submission: media, a document, a historical event, or
/// free-form information about a place.
///
/// # Invariants
/// - `title` is never empty.
/// - `file_url`, when present, was produced by the storage service after the
///   upload passed size and extension checks.
/// - `id` and `created_at` are assigned by the store and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Contribution {
    pub id: Uuid,
    pub title: String,
    pub category: ContentCategory,
    pub description: Option<String>,
    pub file_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location_address: Option<String>,
    pub contributor_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewContribution {
    pub title: String,
    pub category: ContentCategory,
    pub description: Option<String>,
    pub file_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location_address: Option<String>,
    pub contributor_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ContentCategory {
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "audio")]
    Audio,
    #[serde(rename = "document")]
    Document,
    #[serde(rename = "event")]
    Event,
    #[serde(rename = "place-info")]
    PlaceInfo,
}

impl ContentCategory {
    pub const ALL: [ContentCategory; 5] = [
        Self::Image,
        Self::Audio,
        Self::Document,
        Self::Event,
        Self::PlaceInfo,
    ];

    /// Stable tag stored in the `category` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Document => "document",
            Self::Event => "event",
            Self::PlaceInfo => "place-info",
        }
    }

    /// Human-facing label shown in forms and legends.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Image => "Photo/Image",
            Self::Audio => "Audio Recording",
            Self::Document => "Document",
            Self::Event => "Historical Event",
            Self::PlaceInfo => "Temple Information",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentCategory {
    type Err = String;

    /// Accepts either the stored tag or the display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| {
                c.as_str().eq_ignore_ascii_case(trimmed)
                    || c.label().eq_ignore_ascii_case(trimmed)
                    || c.as_str().replace('-', "_").eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| format!("unknown content category `{}`", trimmed))
    }
}

impl Record for Contribution {
    fn kind(&self) -> RecordKind {
        RecordKind::Contribution
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn category_tag(&self) -> &str {
        self.category.as_str()
    }

    fn searchable_fields(&self) -> Vec<&str> {
        [
            Some(self.title.as_str()),
            self.description.as_deref(),
            self.location_address.as_deref(),
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

    fn tracked_fields(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("title", !self.title.trim().is_empty()),
            ("description", self.description.is_some()),
            ("file_url", self.file_url.is_some()),
            ("location_address", self.location_address.is_some()),
            ("coordinates", self.coordinates().is_some()),
            ("contributor_name", self.contributor_name.is_some()),
        ]
    }
}
