use crate::{application::statistics::aggregation::Bounds, domain::shared::geo::Coordinates};
use serde::Serialize;
use ts_rs::TS;

/// Discrete zoom steps chosen from the spread of the displayed markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ZoomLevel {
    Street,
    Neighbourhood,
    City,
    Region,
    Continental,
}

impl ZoomLevel {
    /// Picks a level from the larger of the latitude and longitude spreads,
    /// in degrees.
    pub fn for_spread(spread: f64) -> Self {
        if spread < 0.01 {
            Self::Street
        } else if spread < 0.1 {
            Self::Neighbourhood
        } else if spread < 1.0 {
            Self::City
        } else if spread < 5.0 {
            Self::Region
        } else {
            Self::Continental
        }
    }

    /// Tile-server zoom number.
    pub fn level(&self) -> u8 {
        match self {
            Self::Street => 15,
            Self::Neighbourhood => 12,
            Self::City => 10,
            Self::Region => 8,
            Self::Continental => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Viewport {
    pub center: Coordinates,
    pub zoom_level: ZoomLevel,
    pub zoom: u8,
}

impl Viewport {
    fn new(center: Coordinates, zoom_level: ZoomLevel) -> Self {
        Self {
            center,
            zoom_level,
            zoom: zoom_level.level(),
        }
    }
}

/// Centres on the mean of `points`; with no points, `default_center` at the
/// widest zoom.
pub fn compute_viewport(points: &[Coordinates], default_center: Coordinates) -> Viewport {
    match Bounds::of(points) {
        Some(bounds) => Viewport::new(bounds.center, ZoomLevel::for_spread(bounds.max_spread())),
        None => Viewport::new(default_center, ZoomLevel::Continental),
    }
}
