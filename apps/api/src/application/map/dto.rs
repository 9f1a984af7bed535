use super::{markers::Marker, viewport::Viewport};
use crate::domain::{contribution::entity::Contribution, place::entity::Place};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

fn shown() -> bool {
    true
}

/// Layer toggles and per-kind filters for the map view.
#[derive(Debug, Clone, Deserialize)]
pub struct MapQuery {
    #[serde(default = "shown")]
    pub show_places: bool,
    #[serde(default = "shown")]
    pub show_contributions: bool,
    /// Architectural style filter for places.
    pub style: Option<String>,
    /// Content category filter for contributions.
    pub category: Option<String>,
}

impl Default for MapQuery {
    fn default() -> Self {
        Self {
            show_places: true,
            show_contributions: true,
            style: None,
            category: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ClickQuery {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct MapResponse {
    pub viewport: Viewport,
    pub markers: Vec<Marker>,
    pub total: usize,
}

#[derive(Debug, Serialize, TS)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
#[ts(export)]
pub enum SelectedRecord {
    Place(Place),
    Contribution(Contribution),
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct SelectionResponse {
    /// `None` when no marker lies within the click tolerance.
    pub selected: Option<SelectedRecord>,
    pub distance: Option<f64>,
}
