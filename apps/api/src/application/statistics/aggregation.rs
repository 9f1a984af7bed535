//! Single-pass summaries over an already filtered record set.

use super::dto::{
    CategoryCount, CenturyCount, FieldCompleteness, GeographicSpread, MonthCount, RecordSummary,
};
use crate::domain::shared::{geo::Coordinates, record::Record};
use std::collections::{BTreeMap, HashSet};

pub fn summarize<T: Record>(records: &[T]) -> RecordSummary {
    let total = records.len();
    if total == 0 {
        return RecordSummary::default();
    }

    let with_coordinates = records.iter().filter(|r| r.coordinates().is_some()).count();
    let contributors: HashSet<&str> = records.iter().map(|r| r.contributor_label()).collect();

    RecordSummary {
        total,
        with_coordinates,
        category_distribution: category_distribution(records),
        completeness: completeness(records),
        distinct_contributors: contributors.len(),
    }
}

pub fn category_distribution<T: Record>(records: &[T]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.category_tag()).or_default() += 1;
    }

    let mut distribution: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(tag, count)| CategoryCount {
            tag: tag.to_string(),
            count,
        })
        .collect();
    // BTreeMap already yields tags ascending; the stable sort keeps that for ties.
    distribution.sort_by(|a, b| b.count.cmp(&a.count));
    distribution
}

pub fn completeness<T: Record>(records: &[T]) -> Vec<FieldCompleteness> {
    let Some(first) = records.first() else {
        return Vec::new();
    };

    let mut present: Vec<(&'static str, usize)> = first
        .tracked_fields()
        .into_iter()
        .map(|(field, _)| (field, 0))
        .collect();
    for record in records {
        for (slot, (_, has_value)) in present.iter_mut().zip(record.tracked_fields()) {
            if has_value {
                slot.1 += 1;
            }
        }
    }

    let total = records.len() as f64;
    present
        .into_iter()
        .map(|(field, count)| FieldCompleteness {
            field: field.to_string(),
            present: count,
            ratio: count as f64 / total,
        })
        .collect()
}

/// Founding years bucketed by century, oldest first. Year 1..=100 is the 1st
/// century.
pub fn century_histogram<T: Record>(records: &[T]) -> Vec<CenturyCount> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for year in records.iter().filter_map(|r| r.founding_year()).filter(|y| *y > 0) {
        *counts.entry((year - 1) / 100 + 1).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(century, count)| CenturyCount {
            century,
            label: format!("{}{} century", century, ordinal_suffix(century)),
            count,
        })
        .collect()
}

/// Records per calendar month of `created_at`, ascending.
pub fn monthly_activity<T: Record>(records: &[T]) -> Vec<MonthCount> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        *counts
            .entry(record.created_at().format("%Y-%m").to_string())
            .or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(month, count)| MonthCount { month, count })
        .collect()
}

/// Records per day between the first and last submission.
pub fn growth_rate<T: Record>(records: &[T]) -> Option<f64> {
    let first = records.iter().map(|r| r.created_at()).min()?;
    let last = records.iter().map(|r| r.created_at()).max()?;
    let days = (last - first).num_days();
    (days >= 1).then(|| records.len() as f64 / days as f64)
}

pub fn geographic_spread<P: Record, C: Record>(places: &[P], contributions: &[C]) -> GeographicSpread {
    let place_points: Vec<Coordinates> = places.iter().filter_map(|r| r.coordinates()).collect();
    let contribution_points: Vec<Coordinates> =
        contributions.iter().filter_map(|r| r.coordinates()).collect();

    let mut spread = GeographicSpread {
        places_with_coordinates: place_points.len(),
        contributions_with_coordinates: contribution_points.len(),
        ..Default::default()
    };

    let points: Vec<Coordinates> = place_points.into_iter().chain(contribution_points).collect();
    if let Some(bounds) = Bounds::of(&points) {
        spread.latitude_span = Some(bounds.max_lat - bounds.min_lat);
        spread.longitude_span = Some(bounds.max_lon - bounds.min_lon);
        spread.center = Some(bounds.center);
    }
    spread
}

/// Extent and mean point of a non-empty coordinate set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
    pub center: Coordinates,
}

impl Bounds {
    pub fn of(points: &[Coordinates]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lon: first.longitude,
            max_lon: first.longitude,
            center: *first,
        };

        let (mut lat_sum, mut lon_sum) = (0.0, 0.0);
        for p in points {
            bounds.min_lat = bounds.min_lat.min(p.latitude);
            bounds.max_lat = bounds.max_lat.max(p.latitude);
            bounds.min_lon = bounds.min_lon.min(p.longitude);
            bounds.max_lon = bounds.max_lon.max(p.longitude);
            lat_sum += p.latitude;
            lon_sum += p.longitude;
        }

        let n = points.len() as f64;
        bounds.center = Coordinates {
            latitude: lat_sum / n,
            longitude: lon_sum / n,
        };
        Some(bounds)
    }

    /// The larger of the latitude and longitude extents.
    pub fn max_spread(&self) -> f64 {
        (self.max_lat - self.min_lat).max(self.max_lon - self.min_lon)
    }
}

fn ordinal_suffix(n: i32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
