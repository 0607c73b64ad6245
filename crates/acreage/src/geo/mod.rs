//! Pure geometry over tapped geographic rings.
//!
//! Purpose
//! - Provide the three operations the map screens need: ring closure,
//!   geodesic area in square feet, and a cheap representative center (plus
//!   the padded camera-fit region derived from the same extent scan).
//! - Keep every function total and side-effect-free: inputs are borrowed
//!   slices of `GeoPoint`, outputs are freshly allocated values, and no
//!   input shape panics or leaks a NaN to the caller.
//!
//! Why totality
//! - These values flow straight into label markers and camera animations;
//!   a NaN center or a thrown error mid-gesture is a rendering bug the
//!   engine cannot rely on callers to guard against. Degenerate rings
//!   (too few points, coincident taps) therefore map to defined results
//!   (zero area, `{0,0}` center) instead of errors.
//!
//! Code cross-refs: `types::{GeoPoint, FitRegion}`, `ring::close_ring`,
//! `area::geodesic_area`, `bounds::{centroid_bounds, fit_region}`.

mod area;
mod bounds;
mod ring;
mod types;

pub mod rand;

pub use area::geodesic_area;
pub use bounds::{centroid_bounds, fit_region};
pub use ring::close_ring;
pub use types::{FitRegion, GeoPoint, FIT_MARGIN_DEG, SQ_FEET_PER_SQ_METER};
