// ─────────────────────────────────────────────────────────────────────
// HyperNav — Entity Outlines
// ─────────────────────────────────────────────────────────────────────
//! Body-local outlines and their rendering.
//!
//! Each vertex goes through the entity's full pose (a Möbius map), not
//! a screen-space offset. That is what makes an outline shrink and bend
//! as the entity approaches the rim.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use hypernav_math::Complex;
use hypernav_physics::HyperbolicPose;

use crate::projector::RenderContext;
use crate::surface::{DrawSurface, ScreenPoint, Stroke};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Vertices in the body frame (disk coordinates around the origin,
    /// nose along +x).
    pub vertices: Vec<Complex>,
    pub closed: bool,
}

impl Shape {
    pub fn new(vertices: Vec<Complex>, closed: bool) -> Self {
        Self { vertices, closed }
    }

    /// Arrowhead hull, nose on +x.
    pub fn ship() -> Self {
        Self::new(
            vec![
                Complex::new(0.06, 0.0),
                Complex::new(-0.04, 0.035),
                Complex::new(-0.025, 0.0),
                Complex::new(-0.04, -0.035),
            ],
            true,
        )
    }

    /// Regular polygon of circumradius `radius` (disk units).
    pub fn polygon(radius: f64, sides: usize) -> Self {
        let sides = sides.max(3);
        Self::new(
            (0..sides)
                .map(|i| Complex::from_polar(radius, TAU * i as f64 / sides as f64))
                .collect(),
            true,
        )
    }

    /// Vertices carried into the world disk by `pose`.
    pub fn world_vertices<'a>(
        &'a self,
        pose: &'a HyperbolicPose,
    ) -> impl Iterator<Item = Complex> + 'a {
        self.vertices.iter().map(move |&v| pose.local_to_world(v))
    }
}

/// Project an outline placed at `pose` and draw it.
pub fn render_shape(
    surface: &mut dyn DrawSurface,
    ctx: &RenderContext,
    pose: &HyperbolicPose,
    shape: &Shape,
    stroke: Stroke,
) {
    if shape.vertices.is_empty() {
        return;
    }
    let points: Vec<ScreenPoint> = shape
        .world_vertices(pose)
        .map(|w| ctx.to_screen(w))
        .collect();
    surface.polyline(&points, shape.closed, stroke);
}
