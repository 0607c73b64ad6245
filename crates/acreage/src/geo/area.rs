//! Geodesic polygon area.
//!
//! Model
//! - Spherical excess after Chamberlain & Duquette, "Some algorithms for
//!   polygons on a sphere" (the formula behind common mapping-geometry
//!   libraries): sum `Δλ · (2 + sin φ₁ + sin φ₂)` over the closed ring's
//!   edges in radians, times `R²/2`, on a sphere of the WGS84 equatorial
//!   radius. Accurate to well under 1 % for parcel-scale polygons; the
//!   flat-Earth error only becomes visible for shapes spanning degrees.
//!
//! Contract
//! - Total over finite coordinates: degenerate rings (fewer than 3 points,
//!   coincident or collinear taps) yield exactly 0.00, winding direction is
//!   normalized away, and a non-finite intermediate clamps to 0.00 so NaN
//!   never reaches a rendering layer. Self-intersecting rings produce *a*
//!   number, not necessarily a meaningful one — callers wanting meaning
//!   must supply simple polygons.

use super::ring::close_ring;
use super::types::{GeoPoint, EARTH_RADIUS_M, SQ_FEET_PER_SQ_METER};

/// Enclosed area of a tapped ring, in square feet, rounded to 2 decimals.
///
/// The ring may be open or already closed; it is closed internally. The
/// result is always a finite, non-negative number.
pub fn geodesic_area(ring: &[GeoPoint]) -> f64 {
    let sq_feet = spherical_area_m2(ring) * SQ_FEET_PER_SQ_METER;
    if !sq_feet.is_finite() {
        return 0.0;
    }
    round2(sq_feet)
}

/// Unsigned spherical area of the closed ring in square meters.
fn spherical_area_m2(ring: &[GeoPoint]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let closed = close_ring(ring);
    let sum: f64 = closed
        .windows(2)
        .map(|edge| {
            let (p, q) = (edge[0], edge[1]);
            (q.longitude - p.longitude).to_radians()
                * (2.0 + p.latitude.to_radians().sin() + q.latitude.to_radians().sin())
        })
        .sum();
    sum.abs() * EARTH_RADIUS_M * EARTH_RADIUS_M / 2.0
}

#[inline]
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
