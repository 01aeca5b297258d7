//! Reproducible random triangles (replay tokens + strict validity).
//!
//! Purpose
//! - Feed property tests and benchmarks with triangles that always pass
//!   `sides_form_triangle`, without rejection loops.
//! - Provide exact right triangles (integer Pythagorean triples) that satisfy
//!   the exact-equality check in `is_right_triangle`.
//!
//! Model
//! - Two sides are uniform in `[min_side, max_side]`; the third is drawn from
//!   the inner 90% of the open interval `(|a − b|, a + b)`, which keeps a
//!   margin to degeneracy.
//! - Right triangles use Euclid's formula `(m² − n², 2mn, m² + n²)` scaled by a
//!   small integer, then shuffled.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::triangle::Sides;

/// Largest accepted Euclid parameter; keeps every squared side below 2^53.
const MAX_EUCLID_M: u64 = 1024;

const MIN_SIDE: f64 = 1e-9;
/// Largest sampled side; `a + b + c` cannot overflow below this.
const MAX_SIDE: f64 = f64::MAX / 4.0;

/// Side-length bounds for `draw_triangle`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleCfg {
    pub min_side: f64,
    pub max_side: f64,
}

impl Default for TriangleCfg {
    fn default() -> Self {
        Self {
            min_side: 0.1,
            max_side: 10.0,
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
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn advance(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

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

/// Draw side lengths of a non-degenerate triangle.
///
/// Bounds are sanitized: both are clamped into `[1e-9, f64::MAX / 4]` (NaN
/// and infinite bounds included) and `max_side` to at least `min_side`, so
/// every pairwise sum of sides stays finite. The third side may fall outside
/// `[min_side, max_side]`, it is only bounded by the triangle inequality.
pub fn draw_triangle(cfg: TriangleCfg, tok: ReplayToken) -> Sides {
    let mut rng = tok.to_std_rng();
    let lo_side = cfg.min_side.max(MIN_SIDE).min(MAX_SIDE);
    let hi_side = cfg.max_side.min(MAX_SIDE).max(lo_side);
    let a = lo_side + (hi_side - lo_side) * rng.gen::<f64>();
    let b = lo_side + (hi_side - lo_side) * rng.gen::<f64>();
    let lo = (a - b).abs();
    let hi = a + b;
    let u = 0.05 + 0.9 * rng.gen::<f64>();
    let c = lo + (hi - lo) * u;
    (a, b, c)
}

/// Draw an exact integer right triangle with Euclid parameter `m <= max_m`.
///
/// `max_m` is clamped to `[2, 1024]`. Sides come back in random order.
pub fn draw_right_triangle(tok: ReplayToken, max_m: u64) -> Sides {
    let mut rng = tok.to_std_rng();
    let max_m = max_m.clamp(2, MAX_EUCLID_M);
    let m = rng.gen_range(2..=max_m);
    let n = rng.gen_range(1..m);
    let k = rng.gen_range(1..=4u64);
    let mut s = [
        (k * (m * m - n * n)) as f64,
        (k * 2 * m * n) as f64,
        (k * (m * m + n * n)) as f64,
    ];
    s.shuffle(&mut rng);
    (s[0], s[1], s[2])
}
