//! Criterion benches for the batched circumcircle engine.
//! Focus sizes: N in {0, 64, 4096, 65536}; serial vs parallel engine.
//! Results: by default under target/criterion. The parallel rows only differ
//! from serial when built with `--features rayon`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use circumgeom::api::{draw_triangles, CircumCfg, CircumEngine, ReplayToken, TriangleCfg};

fn bench_circum(c: &mut Criterion) {
    let mut group = c.benchmark_group("circum");
    let serial = CircumEngine::new(CircumCfg::serial());
    let parallel = CircumEngine::new(CircumCfg {
        parallel: true,
        par_min_batch: 1,
    });
    for &n in &[0usize, 64, 4096, 65536] {
        let cfg = TriangleCfg {
            count: n,
            ..Default::default()
        };
        let tris = draw_triangles(cfg, ReplayToken { seed: 43, index: n as u64 })
            .expect("default sampler accepts unit-box triangles");

        group.bench_with_input(BenchmarkId::new("center_stacked", n), &tris, |b, t| {
            b.iter(|| serial.center_stacked(t).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("radius_stacked", n), &tris, |b, t| {
            b.iter(|| serial.radius_stacked(t).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("circle_stacked", n), &tris, |b, t| {
            b.iter(|| serial.circle_stacked(t).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("circle_stacked_par", n), &tris, |b, t| {
            b.iter(|| parallel.circle_stacked(t).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_circum);
criterion_main!(benches);
