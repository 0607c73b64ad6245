//! Command-line harness for the acreage geometry engine.
//!
//! Plays the role of the map UI: loads tap rings from JSON, asks the engine
//! for areas/centers/fit regions, replays gesture scripts through the
//! session reducer, and samples random rings for test fixtures.

use std::path::PathBuf;

use acreage::geo::rand::{sample_ring, ReplayToken, RingCfg, VertexCount};
use acreage::geo::{centroid_bounds, fit_region, geodesic_area, GeoPoint};
use acreage::session::{Effect, Event, Session};
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

mod script;

#[derive(Parser)]
#[command(name = "acreage")]
#[command(about = "Polygon area, center, and camera-fit computations over tap rings")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Enclosed area of a ring file, in square feet
    Area {
        #[arg(long)]
        ring: PathBuf,
    },
    /// Bounding-box midpoint of a ring file (label anchor)
    Center {
        #[arg(long)]
        ring: PathBuf,
    },
    /// Camera-fit region of a ring file (center + padded spans)
    Fit {
        #[arg(long)]
        ring: PathBuf,
    },
    /// Replay a gesture script through a fresh session and print the result
    Replay {
        #[arg(long)]
        script: PathBuf,
    },
    /// Sample a reproducible random ring and write it as a ring file
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 50.0)]
        radius_m: f64,
        #[arg(long, default_value_t = 37.78825)]
        lat: f64,
        #[arg(long, default_value_t = -122.4324)]
        lng: f64,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Area { ring } => area(ring),
        Action::Center { ring } => center(ring),
        Action::Fit { ring } => fit(ring),
        Action::Replay { script } => replay(script),
        Action::Sample {
            seed,
            index,
            vertices,
            radius_m,
            lat,
            lng,
            out,
        } => sample(seed, index, vertices, radius_m, lat, lng, out),
    }
}

fn area(path: PathBuf) -> Result<()> {
    let ring = script::load_ring(&path)?;
    let sqft = geodesic_area(&ring);
    tracing::info!(points = ring.len(), sqft, "area");
    println!("{sqft:.2}");
    Ok(())
}

fn center(path: PathBuf) -> Result<()> {
    let ring = script::load_ring(&path)?;
    let c = centroid_bounds(&ring);
    tracing::info!(points = ring.len(), "center");
    println!(
        "{}",
        serde_json::to_string(&script::PointRec::from(c))?
    );
    Ok(())
}

fn fit(path: PathBuf) -> Result<()> {
    let ring = script::load_ring(&path)?;
    let region = fit_region(&ring);
    tracing::info!(points = ring.len(), "fit");
    println!(
        "{}",
        serde_json::json!({
            "center": script::PointRec::from(region.center),
            "span_lat": region.span_lat,
            "span_lng": region.span_lng,
        })
    );
    Ok(())
}

fn replay(path: PathBuf) -> Result<()> {
    let events = script::load_script(&path)?;
    let mut session = Session::new();
    for (step, rec) in events.into_iter().enumerate() {
        let event = Event::from(rec);
        match session.apply(event) {
            Ok(Effect::FrameCamera(region)) => {
                tracing::info!(
                    step,
                    span_lat = region.span_lat,
                    span_lng = region.span_lng,
                    "frame_camera"
                );
            }
            Ok(Effect::AreaSaved(index)) => {
                tracing::info!(step, index, "area_saved");
            }
            Ok(Effect::None) => {}
            // A rejection is what the UI would show as an alert; the
            // session is untouched, so the replay keeps going.
            Err(rejection) => tracing::warn!(step, %rejection, "rejected"),
        }
    }

    let summary: Vec<_> = session
        .areas()
        .iter()
        .enumerate()
        .map(|(i, area)| {
            let anchor = centroid_bounds(&area.ring);
            serde_json::json!({
                "index": i,
                "name": area.name,
                "sqft": session.area_square_feet(i),
                "label": script::PointRec::from(anchor),
            })
        })
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "areas": summary,
            "selected": session.selected(),
        }))?
    );
    Ok(())
}

fn sample(
    seed: u64,
    index: u64,
    vertices: usize,
    radius_m: f64,
    lat: f64,
    lng: f64,
    out: PathBuf,
) -> Result<()> {
    let cfg = RingCfg {
        vertex_count: VertexCount::Fixed(vertices),
        center: GeoPoint::new(lat, lng),
        radius_m,
        ..RingCfg::default()
    };
    let ring = sample_ring(cfg, ReplayToken { seed, index });
    script::save_ring(&out, &ring)?;
    tracing::info!(
        seed,
        index,
        points = ring.len(),
        sqft = geodesic_area(&ring),
        out = %out.display(),
        "sampled"
    );
    Ok(())
}
