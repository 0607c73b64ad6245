//! Drawing-session state machine.
//!
//! Purpose
//! - Model the one stateful interaction of the app — draw, name, select,
//!   delete — as an explicit `Session` value plus an event reducer, so the
//!   transition rules are testable without any map widget. The rendering
//!   layer forwards user gestures as [`Event`]s and acts on the returned
//!   [`Effect`].
//!
//! Rules the reducer enforces
//! - Finishing a ring needs at least [`MIN_RING_POINTS`] taps; fewer is a
//!   visible [`Rejection`], not a silent no-op.
//! - Saved rings are stored exactly as tapped (open); closure happens only
//!   inside area/rendering computations.
//! - Cancelling a draw or a naming prompt discards the pending ring whole.
//! - Deleting the highlighted area clears the highlight; deleting below it
//!   shifts it down so it keeps following the same area.
//!
//! Code cross-refs: `types::{Event, Effect, Mode, NamedArea, Rejection}`,
//! `reducer::Session`.

mod reducer;
mod types;

pub use reducer::Session;
pub use types::{Effect, Event, Mode, NamedArea, Rejection, MIN_RING_POINTS};

#[cfg(test)]
mod tests;
