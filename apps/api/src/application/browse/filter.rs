//! Browse filter pipeline: text search, category, contributor, date window,
//! then sort. Runs entirely in memory over a freshly read record set.

use super::dto::{ALL, FilterSpec, SortDirection, SortKey};
use crate::domain::shared::record::{ANONYMOUS, Record};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Applies `spec` to `records`, keeping store order for ties.
pub fn apply_filters<T: Record>(records: Vec<T>, spec: &FilterSpec, now: DateTime<Utc>) -> Vec<T> {
    let needle = spec.store_search().map(|s| s.to_lowercase());
    let category = active(spec.category.as_deref());
    let contributor = active(spec.contributor.as_deref());
    let cutoff = spec.date_range.cutoff(now);

    let mut kept: Vec<T> = records
        .into_iter()
        .filter(|r| needle.as_deref().is_none_or(|n| matches_text(r, n)))
        .filter(|r| category.is_none_or(|c| r.category_tag() == c))
        .filter(|r| contributor.is_none_or(|c| matches_contributor(r, c)))
        .filter(|r| cutoff.is_none_or(|c| r.created_at() >= c))
        .collect();

    sort_records(&mut kept, spec.sort_key, spec.direction());
    kept
}

/// Stable sort; a record missing the sort value always lands last.
pub fn sort_records<T: Record>(records: &mut [T], key: SortKey, dir: SortDirection) {
    let directed = |ord: Ordering| match dir {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    };

    match key {
        SortKey::CreatedAt => records.sort_by(|a, b| directed(a.created_at().cmp(&b.created_at()))),
        SortKey::Alphabetical => records.sort_by(|a, b| {
            directed(a.title().to_lowercase().cmp(&b.title().to_lowercase()))
        }),
        SortKey::FoundingYear => records.sort_by(|a, b| match (a.founding_year(), b.founding_year()) {
            (Some(x), Some(y)) => directed(x.cmp(&y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
    }
}

fn active(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
}

fn matches_text<T: Record>(record: &T, needle: &str) -> bool {
    record
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn matches_contributor<T: Record>(record: &T, wanted: &str) -> bool {
    if wanted.eq_ignore_ascii_case(ANONYMOUS) {
        record.is_anonymous()
    } else {
        record.contributor_name().map(str::trim) == Some(wanted)
    }
}
