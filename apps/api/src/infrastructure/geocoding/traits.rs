use crate::domain::shared::geo::Coordinates;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::Serialize;
use ts_rs::TS;

/// Result of an external lookup. Lookups never error: a miss and an
/// unreachable service are reported as distinct outcomes.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome<T> {
    Found(T),
    NotFound,
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct IpLocation {
    pub coordinates: Coordinates,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

impl IpLocation {
    /// `"City, Region, Country"` from whichever parts are known.
    pub fn address(&self) -> String {
        [&self.city, &self.region, &self.country]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Address to coordinates resolution.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// First match for `address`.
    async fn geocode(&self, address: &str) -> LookupOutcome<Coordinates>;
}

/// Location of the calling host's public IP.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IpLocator: Send + Sync {
    async fn locate(&self) -> LookupOutcome<IpLocation>;
}
