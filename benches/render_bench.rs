//! Benchmarks for the snap renderer.
//!
//! Run with: cargo bench
//!
//! The whole pipeline is offline, so there is no realtime deadline to
//! meet; these exist to catch accidental regressions in the render
//! cost (the full 500ms scene should stay comfortably under a few
//! milliseconds of wall time).

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use snapgen::{
    config::RenderConfig,
    scene::{self, SceneParams},
    snap::{self, SnapParams},
};

fn bench_snap_event(c: &mut Criterion) {
    let cfg = RenderConfig::default();
    let mut group = c.benchmark_group("snap/event");

    let classic = SnapParams::classic();
    group.bench_function("classic", |b| {
        b.iter(|| snap::render_event(black_box(&cfg), black_box(&classic), black_box(42)))
    });

    let crunchy = SnapParams::crunchy();
    group.bench_function("crunchy", |b| {
        b.iter(|| snap::render_event(black_box(&cfg), black_box(&crunchy), black_box(42)))
    });

    group.finish();
}

fn bench_scene(c: &mut Criterion) {
    let cfg = RenderConfig::default();
    let recipe = SnapParams::classic();
    let scene_params = SceneParams::default();

    c.bench_function("scene/compose", |b| {
        b.iter(|| {
            scene::compose(
                black_box(&cfg),
                black_box(&recipe),
                black_box(&scene_params),
            )
        })
    });
}

criterion_group!(benches, bench_snap_event, bench_scene);
criterion_main!(benches);
