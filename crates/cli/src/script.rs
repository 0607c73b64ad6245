//! JSON formats for rings and event scripts.
//!
//! The engine itself exposes no file formats; everything serialized lives in
//! this crate. A ring file is a JSON array of `{latitude, longitude}`
//! records in tap order. A script file is a JSON array of tagged events,
//! one per user gesture, e.g.:
//!
//! ```json
//! [
//!   { "event": "begin-drawing" },
//!   { "event": "tap", "latitude": 0.0, "longitude": 0.0 },
//!   { "event": "finish-drawing" },
//!   { "event": "save-area", "name": "back lot" }
//! ]
//! ```

use std::fs;
use std::path::Path;

use acreage::geo::GeoPoint;
use acreage::session::Event;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One tapped coordinate as stored on disk.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PointRec {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<PointRec> for GeoPoint {
    fn from(p: PointRec) -> Self {
        GeoPoint::new(p.latitude, p.longitude)
    }
}

impl From<GeoPoint> for PointRec {
    fn from(p: GeoPoint) -> Self {
        PointRec {
            latitude: p.latitude,
            longitude: p.longitude,
        }
    }
}

/// One user gesture as stored in a script file.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum EventRec {
    BeginDrawing,
    Tap { latitude: f64, longitude: f64 },
    FinishDrawing,
    CancelDrawing,
    SaveArea { name: String },
    CancelNaming,
    Select { index: usize },
    Delete { index: usize },
}

impl From<EventRec> for Event {
    fn from(e: EventRec) -> Self {
        match e {
            EventRec::BeginDrawing => Event::BeginDrawing,
            EventRec::Tap {
                latitude,
                longitude,
            } => Event::Tap(GeoPoint::new(latitude, longitude)),
            EventRec::FinishDrawing => Event::FinishDrawing,
            EventRec::CancelDrawing => Event::CancelDrawing,
            EventRec::SaveArea { name } => Event::SaveArea { name },
            EventRec::CancelNaming => Event::CancelNaming,
            EventRec::Select { index } => Event::Select(index),
            EventRec::Delete { index } => Event::Delete(index),
        }
    }
}

pub fn load_ring(path: &Path) -> Result<Vec<GeoPoint>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading ring file {}", path.display()))?;
    let recs: Vec<PointRec> = serde_json::from_str(&text)
        .with_context(|| format!("parsing ring file {}", path.display()))?;
    Ok(recs.into_iter().map(GeoPoint::from).collect())
}

pub fn save_ring(path: &Path, ring: &[GeoPoint]) -> Result<()> {
    let recs: Vec<PointRec> = ring.iter().copied().map(PointRec::from).collect();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(&recs)?)
        .with_context(|| format!("writing ring file {}", path.display()))?;
    Ok(())
}

pub fn load_script(path: &Path) -> Result<Vec<EventRec>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading script file {}", path.display()))?;
    let recs: Vec<EventRec> = serde_json::from_str(&text)
        .with_context(|| format!("parsing script file {}", path.display()))?;
    Ok(recs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use acreage::geo::geodesic_area;

    #[test]
    fn ring_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triangle.json");
        let ring = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.001),
            GeoPoint::new(0.001, 0.001),
        ];
        save_ring(&path, &ring).unwrap();
        let loaded = load_ring(&path).unwrap();
        assert_eq!(loaded, ring);
        assert!(geodesic_area(&loaded) > 0.0);
    }

    #[test]
    fn script_events_parse_and_convert() {
        let text = r#"[
            { "event": "begin-drawing" },
            { "event": "tap", "latitude": 1.5, "longitude": -2.5 },
            { "event": "save-area", "name": "yard" },
            { "event": "delete", "index": 0 }
        ]"#;
        let recs: Vec<EventRec> = serde_json::from_str(text).unwrap();
        let events: Vec<Event> = recs.into_iter().map(Event::from).collect();
        assert_eq!(events[0], Event::BeginDrawing);
        assert_eq!(events[1], Event::Tap(GeoPoint::new(1.5, -2.5)));
        assert_eq!(events[2], Event::SaveArea { name: "yard".into() });
        assert_eq!(events[3], Event::Delete(0));
    }
}
