// ─────────────────────────────────────────────────────────────────────
// HyperNav — Geodesic Grid
// ─────────────────────────────────────────────────────────────────────
//! Two families of geodesics: the real axis carried along the imaginary
//! axis by `T(i·tanh(s/2))`, and the imaginary axis carried along the
//! real axis. Isometries send geodesics to geodesics, so every line is
//! a true hyperbolic straight line and neighbours are exactly `spacing`
//! apart where they cross the axes.

use hypernav_math::{metric, Complex, MobiusTransform};
use hypernav_types::ProjectionConfig;

use crate::projector::RenderContext;
use crate::surface::{DrawSurface, ScreenPoint, Stroke};

/// World-space samples of every grid geodesic. Built once per config;
/// only the projection changes between frames.
#[derive(Debug, Clone)]
pub struct Grid {
    lines: Vec<Vec<Complex>>,
}

impl Grid {
    pub fn new(cfg: &ProjectionConfig) -> Self {
        let samples = cfg.grid_segments.max(2);
        let n = cfg.grid_lines as i64;

        // Real-axis geodesic sampled by hyperbolic arclength.
        let axis: Vec<f64> = (0..samples)
            .map(|i| {
                let t = -cfg.grid_extent + 2.0 * cfg.grid_extent * i as f64 / (samples - 1) as f64;
                metric::point_at_distance(t)
            })
            .collect();

        let mut lines: Vec<Vec<Complex>> = Vec::with_capacity(2 * (2 * n as usize + 1));
        for k in -n..=n {
            let offset = metric::point_at_distance(k as f64 * cfg.grid_spacing);
            // Horizontal family: real axis shifted along +i.
            let shift = MobiusTransform::translation(Complex::new(0.0, offset));
            lines.push(
                axis.iter()
                    .map(|&x| shift.apply(Complex::new(x, 0.0)))
                    .collect(),
            );
            // Vertical family: imaginary axis shifted along +1.
            let shift = MobiusTransform::translation(Complex::new(offset, 0.0));
            lines.push(
                axis.iter()
                    .map(|&y| shift.apply(Complex::new(0.0, y)))
                    .collect(),
            );
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[Vec<Complex>] {
        &self.lines
    }
}

/// Project and draw every grid geodesic.
pub fn render_grid(surface: &mut dyn DrawSurface, ctx: &RenderContext, grid: &Grid) {
    let mut buf: Vec<ScreenPoint> = Vec::new();
    for line in grid.lines() {
        buf.clear();
        buf.extend(line.iter().map(|&z| ctx.to_screen(z)));
        surface.polyline(&buf, false, Stroke::Grid);
    }
}
