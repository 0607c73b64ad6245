//! The session reducer: one `apply` step per user gesture.

use crate::geo::{centroid_bounds, fit_region, geodesic_area, GeoPoint};

use super::types::{Effect, Event, Mode, NamedArea, Rejection, MIN_RING_POINTS};

/// Owning state of the drawing interaction: the saved areas, the current
/// mode, and the highlighted list index (if any).
///
/// Single-writer by construction: one UI control flow applies events in
/// order. All geometry queries delegate to the pure `geo` functions, so the
/// session holds no derived values that could go stale.
#[derive(Clone, Debug, Default)]
pub struct Session {
    areas: Vec<NamedArea>,
    mode: Mode,
    selected: Option<usize>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn areas(&self) -> &[NamedArea] {
        &self.areas
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Highlighted list index, if an area is selected.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Display area of the saved ring at `index`, in square feet.
    pub fn area_square_feet(&self, index: usize) -> Option<f64> {
        self.areas.get(index).map(|a| geodesic_area(&a.ring))
    }

    /// Where to anchor the name label of the saved ring at `index`.
    pub fn label_anchor(&self, index: usize) -> Option<GeoPoint> {
        self.areas.get(index).map(|a| centroid_bounds(&a.ring))
    }

    /// Apply one user gesture. Accepted events mutate the session and return
    /// the effect the rendering layer should act on; rejected events leave
    /// the session untouched.
    pub fn apply(&mut self, event: Event) -> Result<Effect, Rejection> {
        match event {
            Event::BeginDrawing => match self.mode {
                Mode::Idle => {
                    self.mode = Mode::Drawing { ring: Vec::new() };
                    Ok(Effect::None)
                }
                _ => Err(Rejection::AlreadyActive),
            },
            Event::Tap(point) => {
                // Taps outside of drawing pan the map; they are not errors.
                if let Mode::Drawing { ring } = &mut self.mode {
                    ring.push(point);
                }
                Ok(Effect::None)
            }
            Event::FinishDrawing => match std::mem::take(&mut self.mode) {
                Mode::Drawing { ring } if ring.len() >= MIN_RING_POINTS => {
                    self.mode = Mode::Naming { ring };
                    Ok(Effect::None)
                }
                Mode::Drawing { ring } => {
                    let have = ring.len();
                    self.mode = Mode::Drawing { ring };
                    Err(Rejection::InsufficientPoints { have })
                }
                other => {
                    self.mode = other;
                    Err(Rejection::NotDrawing)
                }
            },
            Event::CancelDrawing => match self.mode {
                Mode::Drawing { .. } => {
                    self.mode = Mode::Idle;
                    Ok(Effect::None)
                }
                _ => Err(Rejection::NotDrawing),
            },
            Event::SaveArea { name } => match std::mem::take(&mut self.mode) {
                // The ring is stored exactly as tapped; closure happens only
                // inside area/rendering computations. Empty names are
                // permitted, merely discouraged.
                Mode::Naming { ring } => {
                    self.areas.push(NamedArea { ring, name });
                    Ok(Effect::AreaSaved(self.areas.len() - 1))
                }
                other => {
                    self.mode = other;
                    Err(Rejection::NotNaming)
                }
            },
            Event::CancelNaming => match self.mode {
                // Discard the pending ring whole; no partial save.
                Mode::Naming { .. } => {
                    self.mode = Mode::Idle;
                    Ok(Effect::None)
                }
                _ => Err(Rejection::NotNaming),
            },
            Event::Select(index) => match self.areas.get(index) {
                Some(area) => {
                    self.selected = Some(index);
                    Ok(Effect::FrameCamera(fit_region(&area.ring)))
                }
                None => Err(Rejection::NoSuchArea { index }),
            },
            Event::Delete(index) => {
                if index >= self.areas.len() {
                    return Err(Rejection::NoSuchArea { index });
                }
                self.areas.remove(index);
                self.selected = match self.selected {
                    Some(s) if s == index => None,
                    Some(s) if s > index => Some(s - 1),
                    other => other,
                };
                Ok(Effect::None)
            }
        }
    }
}
