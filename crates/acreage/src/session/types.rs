//! Session value types: modes, events, effects, rejections.

use std::fmt;

use crate::geo::{FitRegion, GeoPoint};

/// Minimum taps before a ring may be finished into a named area.
pub const MIN_RING_POINTS: usize = 3;

/// A completed, named annotation. Immutable after save; removal from the
/// owning [`Session`](super::Session) is the only mutation.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedArea {
    /// The ring exactly as tapped, stored open (first ≠ last).
    pub ring: Vec<GeoPoint>,
    pub name: String,
}

/// What the user is currently doing. Selection/highlight is tracked
/// separately on the session so an area can stay highlighted in any mode.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Mode {
    #[default]
    Idle,
    /// Collecting taps into an in-progress ring.
    Drawing { ring: Vec<GeoPoint> },
    /// Ring finished, waiting for a name.
    Naming { ring: Vec<GeoPoint> },
}

/// A user gesture forwarded by the rendering layer.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// "Create area" pressed.
    BeginDrawing,
    /// Map tapped at a coordinate.
    Tap(GeoPoint),
    /// "Finished" pressed.
    FinishDrawing,
    /// Drawing abandoned.
    CancelDrawing,
    /// Name confirmed for the pending ring.
    SaveArea { name: String },
    /// Naming prompt dismissed; the pending ring is discarded.
    CancelNaming,
    /// An existing area picked from the list.
    Select(usize),
    /// An existing area removed from the list.
    Delete(usize),
}

/// What the rendering layer should do after an accepted event.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Nothing to render beyond the new session state.
    None,
    /// A new area landed at this index; refresh the list.
    AreaSaved(usize),
    /// Animate the camera to frame the selected area.
    FrameCamera(FitRegion),
}

/// A rejected event, with a user-facing message in its `Display` impl.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Tried to finish a ring with too few taps.
    InsufficientPoints { have: usize },
    /// Tried to start drawing while a draw or naming prompt is active.
    AlreadyActive,
    /// Finish/cancel arrived outside of drawing.
    NotDrawing,
    /// Save/cancel-naming arrived outside of naming.
    NotNaming,
    /// Select or delete pointed past the end of the list.
    NoSuchArea { index: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Rejection::InsufficientPoints { have } => write!(
                f,
                "You must draw at least {MIN_RING_POINTS} points to create a polygon (have {have})."
            ),
            Rejection::AlreadyActive => write!(f, "An area is already being drawn or named."),
            Rejection::NotDrawing => write!(f, "No drawing is in progress."),
            Rejection::NotNaming => write!(f, "No area is waiting for a name."),
            Rejection::NoSuchArea { index } => write!(f, "No area exists at index {index}."),
        }
    }
}

impl std::error::Error for Rejection {}
