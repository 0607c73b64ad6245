//! Polygon geometry engine for map annotations.
//!
//! A user taps out a ring of geographic points on a map, names it, and reads
//! off its enclosed area in square feet. This crate is the computational core
//! behind that interaction:
//!
//! - `geo`: pure, stateless geometry over tap rings — closure, geodesic area,
//!   bounding-box center, camera-fit region.
//! - `session`: the one stateful interaction, modeled as an explicit mode
//!   value plus an event reducer so it is testable without any map widget.
//!
//! The rendering layer is an external collaborator: it feeds tap coordinates
//! and event values in, and receives plain coordinate data back. Nothing here
//! touches files, the network, or global state.

pub mod geo;
pub mod session;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geo::rand::{sample_ring, RingCfg, ReplayToken, VertexCount};
    pub use crate::geo::{
        centroid_bounds, close_ring, fit_region, geodesic_area, FitRegion, GeoPoint,
        FIT_MARGIN_DEG, SQ_FEET_PER_SQ_METER,
    };
    pub use crate::session::{Effect, Event, Mode, NamedArea, Rejection, Session};
}
