use super::types::GeoPoint;

/// Close a tapped ring by appending its first point.
///
/// Rings are stored open (exactly the points tapped, first ≠ last); closure
/// happens only at computation boundaries like [`geodesic_area`] or a
/// renderer's path fill. Empty input stays empty — no point is fabricated.
/// The input is never mutated.
///
/// [`geodesic_area`]: super::geodesic_area
pub fn close_ring(points: &[GeoPoint]) -> Vec<GeoPoint> {
    let mut closed = points.to_vec();
    if let Some(&first) = points.first() {
        closed.push(first);
    }
    closed
}
