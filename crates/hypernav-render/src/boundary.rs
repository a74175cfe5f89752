// ─────────────────────────────────────────────────────────────────────
// HyperNav — Boundary Renderer
// ─────────────────────────────────────────────────────────────────────

use crate::projector::{RenderContext, ViewMode};
use crate::surface::{DrawSurface, Stroke};

/// Draw the view disk's rim.
///
/// In hyperbolic mode this is the ideal boundary at infinity. In
/// Euclidean mode nothing sits at infinity on screen; the same ring
/// marks a normalized distance of 1 instead.
pub fn render_boundary(surface: &mut dyn DrawSurface, ctx: &RenderContext) {
    let stroke = match ctx.mode {
        ViewMode::Hyperbolic => Stroke::Boundary,
        ViewMode::Euclidean => Stroke::ReferenceRing,
    };
    surface.circle(ctx.viewport.center(), ctx.viewport.radius, stroke);
}
