//! Seeded random triangle batches.
//!
//! Purpose
//! - Reproducible `[N, 3, 2]` inputs for benches, the CLI `sample` command and
//!   tests. Vertices are uniform in the box `[-half_width, half_width]²`.
//!
//! Model
//! - Each triangle is redrawn while `|2·area| < min_twice_area`, at most
//!   `max_attempts` times per triangle; if a draw never qualifies the whole
//!   sample is rejected (`None`).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//! - A box whose full width `2·half_width` overflows `f64` cannot be sampled
//!   uniformly and is rejected (`None`) up front.

use ndarray::Array3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::parallelogram_area;
use nalgebra::Vector2;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct TriangleCfg {
    /// Number of triangles in the batch.
    pub count: usize,
    /// Vertices lie in `[-half_width, half_width]²`. Non-positive or NaN means 1;
    /// infinite or so large that `2·half_width` overflows makes the draw fail.
    pub half_width: f64,
    /// Reject triangles whose doubled area magnitude is below this. `0` keeps all.
    pub min_twice_area: f64,
    pub max_attempts: usize,
}

impl Default for TriangleCfg {
    fn default() -> Self {
        Self {
            count: 1024,
            half_width: 1.0,
            min_twice_area: 1e-6,
            max_attempts: 64,
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
        // SplitMix64 finalizer.
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

/// Draw a triangle-major batch `[count, 3, 2]`.
pub fn draw_triangles(cfg: TriangleCfg, tok: ReplayToken) -> Option<Array3<f64>> {
    let mut rng = tok.to_std_rng();
    let w = if cfg.half_width > 0.0 { cfg.half_width } else { 1.0 };
    if !(2.0 * w).is_finite() {
        tracing::debug!(half_width = w, "sample box too wide");
        return None;
    }
    let min_area = cfg.min_twice_area.max(0.0);
    let attempts = cfg.max_attempts.max(1);
    let mut out = Array3::<f64>::zeros((cfg.count, 3, 2));
    for mut tri in out.outer_iter_mut() {
        let mut accepted = false;
        for _ in 0..attempts {
            let v: [Vector2<f64>; 3] =
                std::array::from_fn(|_| Vector2::new(rng.gen_range(-w..=w), rng.gen_range(-w..=w)));
            if parallelogram_area(v[1] - v[0], v[2] - v[0]).abs() < min_area {
                continue;
            }
            for (k, p) in v.iter().enumerate() {
                tri[[k, 0]] = p.x;
                tri[[k, 1]] = p.y;
            }
            accepted = true;
            break;
        }
        if !accepted {
            tracing::debug!(?tok, attempts, min_area, "triangle sample rejected");
            return None;
        }
    }
    Some(out)
}
