// ─────────────────────────────────────────────────────────────────────
// HyperNav — Tick and Render Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for one frame's work: the integration pass and
//! the projection pass, at a few entity counts.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hypernav_core::{
    Complex, ControlIntent, Entity, HyperbolicPose, MobiusTransform, NavConfig, Navigator,
    RecordingSurface, ViewMode, Viewport,
};

fn scene(n: usize) -> Vec<Entity> {
    let mut entities = vec![Entity::ship(HyperbolicPose::IDENTITY)];
    for i in 1..n {
        let angle = i as f64 * 0.618 * std::f64::consts::TAU;
        let r = 0.9 * (i as f64 / n as f64);
        entities.push(Entity::drifter(
            HyperbolicPose::from_parts(Complex::from_polar(r, angle), angle),
            Complex::new(0.05, 0.0),
            0.3,
            0.03,
        ));
    }
    entities
}

// ── Navigator.update() ──────────────────────────────────────────────

fn bench_update(c: &mut Criterion) {
    let nav = Navigator::new(NavConfig::default()).unwrap();
    for &n in &[1usize, 64, 1024] {
        let mut entities = scene(n);
        c.bench_function(&format!("update_{n}"), |b| {
            b.iter(|| {
                nav.update(
                    black_box(&mut entities),
                    black_box(0.016),
                    ControlIntent::new(1.0, 0.2),
                )
            })
        });
    }
}

// ── Navigator.render() ──────────────────────────────────────────────

fn bench_render(c: &mut Criterion) {
    let mut nav = Navigator::new(NavConfig::default()).unwrap();
    let viewport = Viewport::fit(1280.0, 720.0, 16.0);
    let entities = scene(64);
    let mut surface = RecordingSurface::new();
    for mode in [ViewMode::Hyperbolic, ViewMode::Euclidean] {
        nav.set_view_mode(mode);
        c.bench_function(&format!("render_64_{mode:?}"), |b| {
            b.iter(|| {
                surface.clear();
                nav.render(
                    &mut surface,
                    black_box(&entities),
                    &viewport,
                    MobiusTransform::IDENTITY,
                );
            })
        });
    }
}

// ── Möbius primitives ───────────────────────────────────────────────

fn bench_mobius(c: &mut Criterion) {
    let t = MobiusTransform::translation(Complex::new(0.3, -0.2))
        .compose(MobiusTransform::rotation(0.7));
    let z = Complex::new(0.1, 0.4);
    c.bench_function("mobius_apply", |b| b.iter(|| black_box(t).apply(black_box(z))));
    c.bench_function("mobius_compose_renormalize", |b| {
        b.iter(|| black_box(t).compose(black_box(t)).renormalized())
    });
}

criterion_group!(benches, bench_update, bench_render, bench_mobius);
criterion_main!(benches);
