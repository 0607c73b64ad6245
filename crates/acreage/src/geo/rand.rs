//! Random tap rings (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of plausible user-drawn rings
//!   for property tests and benchmarks. Rings come out in tap order around a
//!   geographic center, star-shaped by construction (angles sorted), so they
//!   are simple polygons suitable for area assertions.
//!
//! Model
//! - Start from `n` equally spaced bearings on [0, 2π), add bounded angular
//!   and radial jitter, convert each (bearing, radius-in-meters) offset to a
//!   degree offset from the center using the local meter-per-degree scale.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::types::{GeoPoint, EARTH_RADIUS_M};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RingCfg {
    pub vertex_count: VertexCount,
    /// Center the ring is drawn around.
    pub center: GeoPoint,
    /// Base radius in meters before jitter.
    pub radius_m: f64,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `radius_m * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
}

impl Default for RingCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            center: GeoPoint::new(37.78825, -122.4324),
            radius_m: 50.0,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random simple tap ring around `cfg.center`.
///
/// Points come back open (first ≠ last) in counterclockwise tap order.
/// `cfg.center.latitude` must stay away from the poles; the longitude scale
/// degenerates as `cos(lat) → 0`.
pub fn sample_ring(cfg: RingCfg, tok: ReplayToken) -> Vec<GeoPoint> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng).max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.radius_m.max(1e-3);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let phase = rng.gen::<f64>() * 2.0 * std::f64::consts::PI;
    let mut bearings: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    bearings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let meters_per_deg = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;
    let lat_cos = cfg.center.latitude.to_radians().cos().max(1e-6);
    bearings
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-3) * r0;
            GeoPoint {
                latitude: cfg.center.latitude + th.sin() * r / meters_per_deg,
                longitude: cfg.center.longitude + th.cos() * r / (meters_per_deg * lat_cos),
            }
        })
        .collect()
}
