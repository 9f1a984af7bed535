use super::markers::Marker;

/// Largest planar distance, in degrees, at which a click selects a marker.
pub const CLICK_EPSILON: f64 = 0.001;

/// The marker nearest to the click, if it lies strictly within `epsilon`.
///
/// Distance is planar in degree units. Markers are scanned in order and only
/// a strictly closer marker replaces the current best, so the earliest
/// marker wins ties.
pub fn resolve_click(markers: &[Marker], latitude: f64, longitude: f64, epsilon: f64) -> Option<(&Marker, f64)> {
    let mut best: Option<(&Marker, f64)> = None;
    for marker in markers {
        let distance = marker.position.planar_distance(latitude, longitude);
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((marker, distance));
        }
    }
    best.filter(|(_, distance)| *distance < epsilon)
}
