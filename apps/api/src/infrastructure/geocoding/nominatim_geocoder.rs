use super::traits::{Geocoder, LookupOutcome};
use crate::{
    config::GeocoderConfig,
    domain::shared::geo::{Coordinates, validate_coordinates},
};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Geocoder backed by a Nominatim-compatible `/search` endpoint.
pub struct NominatimGeocoder {
    client: reqwest::Client,
    url: reqwest::Url,
    user_agent: String,
}

impl NominatimGeocoder {
    pub fn new(config: &GeocoderConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: reqwest::Url::parse(&config.url)?,
            user_agent: config.user_agent.clone(),
        })
    }

    fn search_url(&self, address: &str) -> reqwest::Url {
        let mut url = self.url.clone();
        url.query_pairs_mut()
            .append_pair("q", address)
            .append_pair("format", "json")
            .append_pair("limit", "1");
        url
    }
}

/// Reads the first usable match from a Nominatim JSON array.
pub fn parse_search_response(body: &str) -> LookupOutcome<Coordinates> {
    let places: Vec<NominatimPlace> = match serde_json::from_str(body) {
        Ok(places) => places,
        Err(err) => return LookupOutcome::Unavailable(format!("malformed geocoder response: {err}")),
    };

    let Some(first) = places.first() else {
        return LookupOutcome::NotFound;
    };

    let lat = first.lat.trim().parse::<f64>().ok();
    let lon = first.lon.trim().parse::<f64>().ok();
    match (lat, lon) {
        (Some(latitude), Some(longitude)) if validate_coordinates(lat, lon) => {
            LookupOutcome::Found(Coordinates {
                latitude,
                longitude,
            })
        }
        _ => LookupOutcome::Unavailable("geocoder returned invalid coordinates".to_string()),
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> LookupOutcome<Coordinates> {
        let address = address.trim();
        if address.is_empty() {
            return LookupOutcome::NotFound;
        }

        let response = match self
            .client
            .get(self.search_url(address))
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
        {
            Ok(res) => res,
            Err(err) => {
                warn!("geocoder request failed: {}", err);
                return LookupOutcome::Unavailable(err.to_string());
            }
        };

        if !response.status().is_success() {
            debug!(status = %response.status(), "geocoder returned non-success status");
            return LookupOutcome::NotFound;
        }

        match response.text().await {
            Ok(body) => parse_search_response(&body),
            Err(err) => {
                warn!("geocoder body read failed: {}", err);
                LookupOutcome::Unavailable(err.to_string())
            }
        }
    }
}
