//! Bounding-box center and camera-fit region.
//!
//! Both derive from one min/max scan over the ring. The center is the
//! bounding-box midpoint — deliberately cheap, adequate for placing a name
//! label, and *not* the area centroid. Empty input maps to `{0,0}` and
//! margin-only spans rather than propagating NaN: these values feed markers
//! and camera animations directly.

use super::types::{FitRegion, GeoPoint, FIT_MARGIN_DEG};

/// Degree-extent of a ring: (min_lat, max_lat, min_lng, max_lng).
fn extent(ring: &[GeoPoint]) -> Option<(f64, f64, f64, f64)> {
    let first = ring.first()?;
    let mut min_lat = first.latitude;
    let mut max_lat = first.latitude;
    let mut min_lng = first.longitude;
    let mut max_lng = first.longitude;
    for p in &ring[1..] {
        min_lat = min_lat.min(p.latitude);
        max_lat = max_lat.max(p.latitude);
        min_lng = min_lng.min(p.longitude);
        max_lng = max_lng.max(p.longitude);
    }
    Some((min_lat, max_lat, min_lng, max_lng))
}

/// Bounding-box midpoint of a ring, for label placement.
///
/// Returns `{0,0}` for an empty ring. A NaN coordinate must never reach the
/// rendering layer, so a non-finite midpoint also collapses to 0.
pub fn centroid_bounds(ring: &[GeoPoint]) -> GeoPoint {
    match extent(ring) {
        Some((min_lat, max_lat, min_lng, max_lng)) => GeoPoint {
            latitude: finite_or_zero((min_lat + max_lat) / 2.0),
            longitude: finite_or_zero((min_lng + max_lng) / 2.0),
        },
        None => GeoPoint::new(0.0, 0.0),
    }
}

/// Camera region framing a ring with visible padding.
///
/// Spans are the ring's degree extent plus [`FIT_MARGIN_DEG`] per axis, so a
/// single tap (extent 0) still yields a `FIT_MARGIN_DEG`-sized viewport and
/// the region never collapses. Empty input centers on `{0,0}` with
/// margin-only spans.
pub fn fit_region(ring: &[GeoPoint]) -> FitRegion {
    let (span_lat, span_lng) = match extent(ring) {
        Some((min_lat, max_lat, min_lng, max_lng)) => (
            max_lat - min_lat + FIT_MARGIN_DEG,
            max_lng - min_lng + FIT_MARGIN_DEG,
        ),
        None => (FIT_MARGIN_DEG, FIT_MARGIN_DEG),
    };
    FitRegion {
        center: centroid_bounds(ring),
        span_lat: finite_or(span_lat, FIT_MARGIN_DEG),
        span_lng: finite_or(span_lng, FIT_MARGIN_DEG),
    }
}

#[inline]
fn finite_or_zero(x: f64) -> f64 {
    finite_or(x, 0.0)
}

#[inline]
fn finite_or(x: f64, fallback: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        fallback
    }
}
