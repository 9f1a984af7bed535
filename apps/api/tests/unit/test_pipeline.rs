use chrono::{Duration, TimeZone, Utc};
use heritage_api::{
    application::{
        browse::{
            dto::{DateRange, FilterSpec, SortDirection, SortKey},
            filter::{apply_filters, sort_records},
        },
        map::{
            markers::build_markers,
            selection::{CLICK_EPSILON, resolve_click},
            viewport::{ZoomLevel, compute_viewport},
        },
    },
    config::DEFAULT_MAP_CENTER,
    domain::{place::entity::Place, shared::geo::Coordinates},
};
use uuid::Uuid;

fn place(name: &str, year: Option<i32>, days_old: i64, at: Option<(f64, f64)>) -> Place {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    Place {
        id: Uuid::new_v4(),
        name: name.to_string(),
        deity: None,
        architectural_style: Default::default(),
        founding_year: year,
        narrative: None,
        location_address: None,
        latitude: at.map(|(lat, _)| lat),
        longitude: at.map(|(_, lon)| lon),
        contributor_name: None,
        created_at: now - Duration::days(days_old),
    }
}

#[test]
fn date_window_and_anonymous_contributor_filter() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let mut named = place("Named", None, 1, None);
    named.contributor_name = Some("Asha".into());
    let records = vec![named, place("Recent", None, 3, None), place("Old", None, 100, None)];

    let spec = FilterSpec {
        date_range: DateRange::Last7Days,
        contributor: Some("Anonymous".into()),
        ..Default::default()
    };
    let kept = apply_filters(records, &spec, now);
    let names: Vec<&str> = kept.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Recent"]);
}

#[test]
fn year_sort_keeps_undated_records_last() {
    let mut records = vec![
        place("Undated", None, 0, None),
        place("Medieval", Some(1200), 0, None),
        place("Ancient", Some(700), 0, None),
    ];

    sort_records(&mut records, SortKey::FoundingYear, SortDirection::Descending);
    let names: Vec<&str> = records.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Medieval", "Ancient", "Undated"]);
}

#[test]
fn viewport_zoom_tracks_marker_spread() {
    let empty = compute_viewport(&[], DEFAULT_MAP_CENTER);
    assert_eq!(empty.zoom_level, ZoomLevel::Continental);
    assert_eq!(empty.center, DEFAULT_MAP_CENTER);

    let points = [
        Coordinates { latitude: 12.0, longitude: 77.0 },
        Coordinates { latitude: 12.5, longitude: 77.2 },
    ];
    let view = compute_viewport(&points, DEFAULT_MAP_CENTER);
    assert_eq!(view.zoom_level, ZoomLevel::City);
    assert_eq!(view.zoom, 10);
}

#[test]
fn click_resolution_prefers_first_marker_within_tolerance() {
    let records = vec![
        place("First", None, 0, Some((10.0, 79.0))),
        place("Second", None, 0, Some((10.0, 79.0))),
        place("Unmapped", None, 0, None),
    ];
    let markers = build_markers(&records);
    assert_eq!(markers.len(), 2);

    let (hit, distance) = resolve_click(&markers, 10.0002, 79.0, CLICK_EPSILON).unwrap();
    assert_eq!(hit.title, "First");
    assert!(distance < CLICK_EPSILON);

    assert!(resolve_click(&markers, 10.002, 79.0, CLICK_EPSILON).is_none());
}
