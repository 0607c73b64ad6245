//! Walk a scripted drawing session and print what the map would show.
//!
//! Usage:
//!   cargo run -p acreage --example trace_session
//!
//! Draws two small parcels near the default map location, selects one, then
//! deletes the other, printing areas and camera regions along the way.

use acreage::prelude::*;

fn main() {
    let mut session = Session::new();

    draw(&mut session, "north parcel", 37.7880, -122.4330, 0.0005);
    draw(&mut session, "south parcel", 37.7870, -122.4320, 0.0008);

    for (i, area) in session.areas().iter().enumerate() {
        let sqft = session.area_square_feet(i).unwrap_or(0.0);
        let anchor = session.label_anchor(i).unwrap_or(GeoPoint::new(0.0, 0.0));
        println!(
            "{i}: {name} — {sqft:.2} ft², label at ({lat:.5}, {lng:.5})",
            name = area.name,
            lat = anchor.latitude,
            lng = anchor.longitude,
        );
    }

    match session.apply(Event::Select(1)) {
        Ok(Effect::FrameCamera(region)) => println!(
            "camera: center ({:.5}, {:.5}), span {:.4} x {:.4}",
            region.center.latitude, region.center.longitude, region.span_lat, region.span_lng
        ),
        other => println!("select: {other:?}"),
    }

    if session.apply(Event::Delete(0)).is_ok() {
        println!(
            "after delete: {} area(s), highlight {:?}",
            session.areas().len(),
            session.selected()
        );
    }
}

/// Tap out a square of side `side` degrees with its corner at (lat, lng).
fn draw(session: &mut Session, name: &str, lat: f64, lng: f64, side: f64) {
    let taps = [
        GeoPoint::new(lat, lng),
        GeoPoint::new(lat, lng + side),
        GeoPoint::new(lat + side, lng + side),
        GeoPoint::new(lat + side, lng),
    ];
    let _ = session.apply(Event::BeginDrawing);
    for p in taps {
        let _ = session.apply(Event::Tap(p));
    }
    let _ = session.apply(Event::FinishDrawing);
    let _ = session.apply(Event::SaveArea { name: name.into() });
}
