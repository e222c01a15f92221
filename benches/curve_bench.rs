use criterion::{criterion_group, criterion_main, Criterion};
use curve_viewer::app::use_cases::playback;
use curve_viewer::{generate, AppController, AppState, CurveKind};
use std::hint::black_box;

fn bench_curve_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_generation");

    group.bench_function("planar", |b| {
        b.iter(|| black_box(generate(black_box(CurveKind::Planar)).len()))
    });
    group.bench_function("helix", |b| {
        b.iter(|| black_box(generate(black_box(CurveKind::Helix)).len()))
    });

    group.finish();
}

fn bench_render_scene(c: &mut Criterion) {
    let controller = AppController::new();
    let mut state = AppState::new();
    for _ in 0..500 {
        playback::tick(&mut state);
    }

    c.bench_function("render_scene_build", |b| {
        b.iter(|| {
            let scene = controller.build_render_scene(black_box(&state));
            black_box(scene.planar_points().len())
        })
    });
}

criterion_group!(benches, bench_curve_generation, bench_render_scene);
criterion_main!(benches);
