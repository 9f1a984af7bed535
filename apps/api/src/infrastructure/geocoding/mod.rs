pub mod ip_api_locator;
pub mod nominatim_geocoder;
pub mod traits;
