use crate::domain::{
    contribution::entity::ContentCategory,
    shared::{
        geo::Coordinates,
        record::{Record, RecordKind},
    },
};
use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub icon: &'static str,
}

const PLACE_STYLE: MarkerStyle = MarkerStyle {
    color: "red",
    icon: "home",
};

const FALLBACK_STYLE: MarkerStyle = MarkerStyle {
    color: "gray",
    icon: "circle",
};

/// Marker colour and icon for a record. Places share one style;
/// contributions are styled by category, unknown tags fall back to gray.
pub fn marker_style(kind: RecordKind, tag: &str) -> MarkerStyle {
    if kind == RecordKind::Place {
        return PLACE_STYLE;
    }

    let (color, icon) = match tag.parse::<ContentCategory>() {
        Ok(ContentCategory::Image) => ("blue", "camera"),
        Ok(ContentCategory::Audio) => ("green", "music"),
        Ok(ContentCategory::Document) => ("orange", "file-text"),
        Ok(ContentCategory::Event) => ("purple", "calendar"),
        Ok(ContentCategory::PlaceInfo) => ("red", "info-circle"),
        Err(_) => return FALLBACK_STYLE,
    };
    MarkerStyle { color, icon }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Marker {
    pub kind: RecordKind,
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub position: Coordinates,
    pub color: String,
    pub icon: String,
    pub contributor: String,
}

/// One marker per record with a usable coordinate pair, in input order.
pub fn build_markers<T: Record>(records: &[T]) -> Vec<Marker> {
    records
        .iter()
        .filter_map(|record| {
            let position = record.coordinates()?;
            let style = marker_style(record.kind(), record.category_tag());
            Some(Marker {
                kind: record.kind(),
                id: record.id(),
                title: record.title().to_string(),
                category: record.category_tag().to_string(),
                position,
                color: style.color.to_string(),
                icon: style.icon.to_string(),
                contributor: record.contributor_label().to_string(),
            })
        })
        .collect()
}
