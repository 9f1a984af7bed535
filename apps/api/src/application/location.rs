//! Optional address lookup shared by both submission flows.

use crate::infrastructure::geocoding::traits::{Geocoder, LookupOutcome};
use crate::domain::shared::geo::Coordinates;
use tracing::{debug, info};

pub const ADDRESS_NOT_FOUND: &str =
    "Could not find coordinates for the given address; the record was saved without a map location.";
pub const LOOKUP_UNAVAILABLE: &str =
    "Address lookup is unavailable right now; the record was saved without a map location.";

/// Explicit coordinates win; otherwise the address is geocoded when the
/// submitter asked for it. A failed lookup adds a notice and never blocks
/// the submission.
pub async fn resolve_location(
    geocoder: &dyn Geocoder,
    explicit: Option<Coordinates>,
    address: Option<&str>,
    resolve_address: bool,
    notices: &mut Vec<String>,
) -> Option<Coordinates> {
    if explicit.is_some() {
        return explicit;
    }
    let address = address.filter(|_| resolve_address)?;

    match geocoder.geocode(address).await {
        LookupOutcome::Found(coordinates) => {
            info!(address, "address resolved to coordinates");
            Some(coordinates)
        }
        LookupOutcome::NotFound => {
            notices.push(ADDRESS_NOT_FOUND.to_string());
            None
        }
        LookupOutcome::Unavailable(reason) => {
            debug!(%reason, "geocoder unavailable during submission");
            notices.push(LOOKUP_UNAVAILABLE.to_string());
            None
        }
    }
}
