use crate::{
    application::browse::use_case::BrowseUseCase,
    config::Config,
    domain::{contribution::repository::ContributionRepository, place::repository::PlaceRepository},
    infrastructure::{
        geocoding::traits::{Geocoder, IpLocator},
        storage::traits::StorageService,
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub places: Arc<dyn PlaceRepository>,
    pub contributions: Arc<dyn ContributionRepository>,
    pub storage: Arc<dyn StorageService>,
    pub geocoder: Arc<dyn Geocoder>,
    pub ip_locator: Arc<dyn IpLocator>,
}

impl AppState {
    pub fn browse(&self) -> BrowseUseCase {
        BrowseUseCase::new(self.places.clone(), self.contributions.clone())
    }
}
