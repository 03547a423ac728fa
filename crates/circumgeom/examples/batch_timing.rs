//! Timing probe for one large batch of random triangles.
//!
//! Prints batch size, wall time per operation and how many rows came back
//! non-finite (collinear draws), so serial and `--features rayon` builds can be
//! compared by hand:
//!   cargo run -p circumgeom --release --example batch_timing [-- <count>]

use std::time::Instant;

use circumgeom::api::{draw_triangles, CircumCfg, CircumEngine, ReplayToken, TriangleCfg};

fn main() {
    let count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1 << 20);
    let cfg = TriangleCfg {
        count,
        min_twice_area: 0.0,
        ..Default::default()
    };
    let tris = draw_triangles(cfg, ReplayToken { seed: 2024, index: 0 }).expect("sample");

    for (label, engine_cfg) in [
        ("serial", CircumCfg::serial()),
        (
            "parallel",
            CircumCfg {
                parallel: true,
                ..CircumCfg::default()
            },
        ),
    ] {
        let engine = CircumEngine::new(engine_cfg);
        let start = Instant::now();
        let circles = engine.circle_stacked(&tris).expect("well-formed batch");
        let elapsed = start.elapsed().as_secs_f64() * 1e3;
        let non_finite = circles.radii.iter().filter(|r| !r.is_finite()).count();
        println!("mode={label} count={count} time_ms={elapsed:.3} non_finite={non_finite}");
    }
}
