use super::traits::{IpLocation, IpLocator, LookupOutcome};
use crate::{
    config::IpLocatorConfig,
    domain::shared::geo::{Coordinates, validate_coordinates},
};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IpApiResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<String>,
    region_name: Option<String>,
    country: Option<String>,
}

/// Locates the caller through an ip-api.com style JSON endpoint.
pub struct IpApiLocator {
    client: reqwest::Client,
    url: String,
}

impl IpApiLocator {
    pub fn new(config: &IpLocatorConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

/// A payload without `status == "success"` or with unusable coordinates is
/// a miss.
pub fn parse_ip_response(body: &str) -> LookupOutcome<IpLocation> {
    let Ok(payload) = serde_json::from_str::<IpApiResponse>(body) else {
        return LookupOutcome::NotFound;
    };
    if payload.status != "success" || !validate_coordinates(payload.lat, payload.lon) {
        return LookupOutcome::NotFound;
    }

    let (Some(latitude), Some(longitude)) = (payload.lat, payload.lon) else {
        return LookupOutcome::NotFound;
    };
    LookupOutcome::Found(IpLocation {
        coordinates: Coordinates {
            latitude,
            longitude,
        },
        city: payload.city,
        region: payload.region_name,
        country: payload.country,
    })
}

#[async_trait]
impl IpLocator for IpApiLocator {
    #[instrument(skip(self))]
    async fn locate(&self) -> LookupOutcome<IpLocation> {
        let response = match self.client.get(&self.url).send().await {
            Ok(res) => res,
            Err(err) if err.is_timeout() => {
                debug!("ip lookup timed out");
                return LookupOutcome::NotFound;
            }
            Err(err) => {
                warn!("ip lookup request failed: {}", err);
                return LookupOutcome::Unavailable(err.to_string());
            }
        };

        if !response.status().is_success() {
            debug!(status = %response.status(), "ip lookup returned non-success status");
            return LookupOutcome::NotFound;
        }

        match response.text().await {
            Ok(body) => parse_ip_response(&body),
            Err(err) => {
                debug!("ip lookup body read failed: {}", err);
                LookupOutcome::NotFound
            }
        }
    }
}
