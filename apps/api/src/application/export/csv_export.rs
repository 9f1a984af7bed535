//! CSV serialisation of record sets. Headers mirror the store columns, so an
//! empty set still produces a header row.

use crate::domain::{
    contribution::entity::Contribution,
    place::entity::Place,
    shared::{errors::DomainError, record::Record},
};
use std::io::Write;

pub const PLACE_COLUMNS: [&str; 11] = [
    "id",
    "name",
    "location_address",
    "latitude",
    "longitude",
    "deity",
    "architectural_style",
    "founding_year",
    "narrative",
    "contributor_name",
    "created_at",
];

pub const CONTRIBUTION_COLUMNS: [&str; 10] = [
    "id",
    "title",
    "category",
    "description",
    "file_url",
    "latitude",
    "longitude",
    "location_address",
    "contributor_name",
    "created_at",
];

pub const LOCATION_COLUMNS: [&str; 4] = ["latitude", "longitude", "type", "name"];

impl From<csv::Error> for DomainError {
    fn from(err: csv::Error) -> Self {
        DomainError::InfrastructureError(format!("CSV serialisation failed: {err}"))
    }
}

fn opt<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

pub fn write_places<W: Write>(places: &[Place], writer: &mut csv::Writer<W>) -> Result<(), DomainError> {
    writer.write_record(PLACE_COLUMNS)?;
    for place in places {
        writer.write_record([
            place.id.to_string(),
            place.name.clone(),
            opt(&place.location_address),
            opt(&place.latitude),
            opt(&place.longitude),
            opt(&place.deity),
            place.architectural_style.to_string(),
            opt(&place.founding_year),
            opt(&place.narrative),
            opt(&place.contributor_name),
            place.created_at.to_rfc3339(),
        ])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_contributions<W: Write>(
    contributions: &[Contribution],
    writer: &mut csv::Writer<W>,
) -> Result<(), DomainError> {
    writer.write_record(CONTRIBUTION_COLUMNS)?;
    for c in contributions {
        writer.write_record([
            c.id.to_string(),
            c.title.clone(),
            c.category.to_string(),
            opt(&c.description),
            opt(&c.file_url),
            opt(&c.latitude),
            opt(&c.longitude),
            opt(&c.location_address),
            opt(&c.contributor_name),
            c.created_at.to_rfc3339(),
        ])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Every geotagged record of both kinds, places first.
pub fn write_locations<W: Write>(
    places: &[Place],
    contributions: &[Contribution],
    writer: &mut csv::Writer<W>,
) -> Result<(), DomainError> {
    writer.write_record(LOCATION_COLUMNS)?;
    let rows = places
        .iter()
        .map(|p| (p.coordinates(), "place", p.title()))
        .chain(contributions.iter().map(|c| (c.coordinates(), "contribution", c.title())));
    for (coordinates, kind, name) in rows {
        let Some(point) = coordinates else { continue };
        writer.write_record([
            point.latitude.to_string(),
            point.longitude.to_string(),
            kind.to_string(),
            name.to_string(),
        ])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Runs `write` against an in-memory writer and returns the bytes.
pub fn to_bytes<F>(write: F) -> Result<Vec<u8>, DomainError>
where
    F: FnOnce(&mut csv::Writer<Vec<u8>>) -> Result<(), DomainError>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    write(&mut writer)?;
    writer
        .into_inner()
        .map_err(|err| DomainError::InfrastructureError(format!("CSV buffer flush failed: {err}")))
}
