use super::{
    dto::{MapQuery, MapResponse, SelectedRecord, SelectionResponse},
    markers::{Marker, build_markers},
    selection::{CLICK_EPSILON, resolve_click},
    viewport::compute_viewport,
};
use crate::{
    application::browse::{dto::FilterSpec, use_case::BrowseUseCase},
    domain::{
        contribution::entity::Contribution,
        place::entity::Place,
        shared::{
            errors::DomainError,
            geo::{Coordinates, validate_coordinates},
            record::RecordKind,
        },
    },
};
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

/// Records currently shown on the map, places before contributions.
struct Displayed {
    places: Vec<Place>,
    contributions: Vec<Contribution>,
}

impl Displayed {
    fn markers(&self) -> Vec<Marker> {
        let mut markers = build_markers(&self.places);
        markers.extend(build_markers(&self.contributions));
        markers
    }
}

pub struct MapUseCase {
    browse: BrowseUseCase,
    default_center: Coordinates,
}

impl MapUseCase {
    pub fn new(browse: BrowseUseCase, default_center: Coordinates) -> Self {
        Self {
            browse,
            default_center,
        }
    }

    async fn displayed(&self, query: &MapQuery, now: DateTime<Utc>) -> Displayed {
        let places = if query.show_places {
            let spec = FilterSpec {
                category: query.style.clone(),
                ..Default::default()
            };
            self.browse.places(&spec, now).await
        } else {
            Vec::new()
        };

        let contributions = if query.show_contributions {
            let spec = FilterSpec {
                category: query.category.clone(),
                ..Default::default()
            };
            self.browse.contributions(&spec, now).await
        } else {
            Vec::new()
        };

        Displayed {
            places,
            contributions,
        }
    }

    #[instrument(skip(self))]
    pub async fn view(&self, query: &MapQuery, now: DateTime<Utc>) -> MapResponse {
        let markers = self.displayed(query, now).await.markers();
        let points: Vec<Coordinates> = markers.iter().map(|m| m.position).collect();

        MapResponse {
            viewport: compute_viewport(&points, self.default_center),
            total: markers.len(),
            markers,
        }
    }

    /// Resolves a map click to the nearest displayed record.
    #[instrument(skip(self))]
    pub async fn select(
        &self,
        query: &MapQuery,
        latitude: f64,
        longitude: f64,
        now: DateTime<Utc>,
    ) -> Result<SelectionResponse, DomainError> {
        if !validate_coordinates(Some(latitude), Some(longitude)) {
            return Err(DomainError::ValidationError(format!(
                "Click position ({latitude}, {longitude}) is outside the valid coordinate range"
            )));
        }

        let displayed = self.displayed(query, now).await;
        let markers = displayed.markers();
        let Some((marker, distance)) = resolve_click(&markers, latitude, longitude, CLICK_EPSILON)
        else {
            debug!("click did not land on a marker");
            return Ok(SelectionResponse {
                selected: None,
                distance: None,
            });
        };

        let selected = match marker.kind {
            RecordKind::Place => displayed
                .places
                .into_iter()
                .find(|p| p.id == marker.id)
                .map(SelectedRecord::Place),
            RecordKind::Contribution => displayed
                .contributions
                .into_iter()
                .find(|c| c.id == marker.id)
                .map(SelectedRecord::Contribution),
        };

        Ok(SelectionResponse {
            distance: selected.as_ref().map(|_| distance),
            selected,
        })
    }
}
