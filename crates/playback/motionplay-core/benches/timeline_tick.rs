//! Benchmarks for per-tick playback cost.
//!
//! Run:
//! - cargo bench -p motionplay-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use motionplay_core::{normalize, Config, MotionKind, RawResult, Timeline};

const FRAME_COUNTS: [usize; 3] = [100, 1_000, 10_000];
const DT: f64 = 1.0 / 60.0;

fn build_projectile(n: usize) -> RawResult {
    let times: Vec<f64> = (0..n).map(|i| i as f64 * 0.01).collect();
    let xs = times.iter().map(|t| 10.0 * t).collect();
    let ys = times.iter().map(|t| 10.0 * t - 4.9 * t * t).collect();
    RawResult::from_arrays([("times", times), ("positions_x", xs), ("positions_y", ys)])
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline_tick");
    let cfg = Config::default();

    for &n in &FRAME_COUNTS {
        let frames = normalize(&build_projectile(n), MotionKind::Projectile);
        group.bench_with_input(BenchmarkId::new("play_through", n), &frames, |b, frames| {
            b.iter(|| {
                let mut tl = Timeline::new(frames.clone(), MotionKind::Projectile, &cfg);
                tl.play();
                while let Some(up) = tl.tick(DT) {
                    black_box(up.frame_index);
                }
            });
        });
    }
    group.finish();
}

fn bench_seek(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline_seek");
    let cfg = Config::default();

    for &n in &FRAME_COUNTS {
        let frames = normalize(&build_projectile(n), MotionKind::Projectile);
        let mut tl = Timeline::new(frames, MotionKind::Projectile, &cfg);
        let last = n as f64 * 0.01;
        group.bench_function(BenchmarkId::new("scrub", n), |b| {
            let mut t = 0.0;
            b.iter(|| {
                t = (t + 0.37) % last;
                black_box(tl.seek(t));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tick, bench_seek);
criterion_main!(benches);
