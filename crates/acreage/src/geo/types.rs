//! Coordinate value types and unit constants.
//!
//! - `GeoPoint`: a tapped map coordinate in decimal degrees.
//! - `FitRegion`: center + degree spans for framing a camera around a ring.
//! - Conversion/margin constants shared by `area` and `bounds`.

/// Square feet per square meter. Applied once, at the display boundary.
pub const SQ_FEET_PER_SQ_METER: f64 = 10.7639;

/// Padding, in coordinate degrees, added to each span of a [`FitRegion`] so a
/// framed viewport never collapses to zero size.
pub const FIT_MARGIN_DEG: f64 = 0.01;

/// Mean equatorial Earth radius in meters (WGS84 semi-major axis), the
/// sphere the area formula integrates over.
pub(crate) const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// A geographic coordinate in decimal degrees.
///
/// Preconditions (documented, not enforced): latitude in [-90, 90],
/// longitude in [-180, 180], both finite. Callers produce these from map
/// taps, which satisfy both by construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A camera-framing region around a ring: bounding-box midpoint plus the
/// ring's degree extent padded by [`FIT_MARGIN_DEG`] on each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitRegion {
    pub center: GeoPoint,
    pub span_lat: f64,
    pub span_lng: f64,
}
