// ─────────────────────────────────────────────────────────────────────
// HyperNav — Projector
// ─────────────────────────────────────────────────────────────────────
//! Disk point → screen point.
//!
//!   n          = d_hyp(0, z) / distance_scale
//!   fraction   = tanh(k · n)   (hyperbolic)
//!              = n             (euclidean)
//!   screen     = center + fraction · radius · z/|z|
//!
//! With k = 1 and distance_scale = 2, tanh(d/2) = |z| and the
//! hyperbolic view is the literal Poincaré disk.

use serde::{Deserialize, Serialize};

use hypernav_math::{metric, Complex, MobiusTransform};
use hypernav_physics::HyperbolicPose;
use hypernav_types::ProjectionConfig;

use crate::surface::ScreenPoint;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Hyperbolic,
    Euclidean,
}

impl ViewMode {
    pub fn from_euclidean_flag(is_euclidean: bool) -> Self {
        if is_euclidean {
            ViewMode::Euclidean
        } else {
            ViewMode::Hyperbolic
        }
    }

    pub fn is_euclidean(&self) -> bool {
        matches!(self, ViewMode::Euclidean)
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Hyperbolic => ViewMode::Euclidean,
            ViewMode::Euclidean => ViewMode::Hyperbolic,
        }
    }
}

/// Where the disk sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center_x: f64,
    pub center_y: f64,
    /// Screen radius of the view disk, in pixels.
    pub radius: f64,
}

impl Viewport {
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }

    /// Largest disk centred in a `width × height` canvas, with a margin.
    pub fn fit(width: f64, height: f64, margin: f64) -> Self {
        let radius = (0.5 * width.min(height) - margin).max(1.0);
        Self::new(0.5 * width, 0.5 * height, radius)
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.center_x, self.center_y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    compression: f64,
    distance_scale: f64,
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(&ProjectionConfig::default())
    }
}

impl Projector {
    pub fn new(cfg: &ProjectionConfig) -> Self {
        Self {
            compression: cfg.compression,
            distance_scale: cfg.distance_scale,
        }
    }

    /// Normalized parametric distance of a disk point.
    pub fn normalized_distance(&self, z: Complex) -> f64 {
        metric::distance_from_origin(z) / self.distance_scale
    }

    /// Fraction of the view radius at which normalized distance `n`
    /// is drawn.
    pub fn radial_fraction(&self, n: f64, mode: ViewMode) -> f64 {
        match mode {
            ViewMode::Hyperbolic => (self.compression * n).tanh(),
            ViewMode::Euclidean => n,
        }
    }

    pub fn project_point(&self, z: Complex, viewport: &Viewport, mode: ViewMode) -> ScreenPoint {
        let fraction = self.radial_fraction(self.normalized_distance(z), mode);
        let offset = z.normalize().scale(fraction * viewport.radius);
        ScreenPoint::new(viewport.center_x + offset.re, viewport.center_y - offset.im)
    }

    pub fn project_pose(
        &self,
        pose: &HyperbolicPose,
        viewport: &Viewport,
        mode: ViewMode,
    ) -> ScreenPoint {
        self.project_point(pose.position(), viewport, mode)
    }
}

/// Everything one render pass needs to turn world points into pixels.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub projector: Projector,
    pub viewport: Viewport,
    pub mode: ViewMode,
    /// World → view transform applied before projection.
    pub camera: MobiusTransform,
}

impl RenderContext {
    pub fn new(projector: Projector, viewport: Viewport, mode: ViewMode) -> Self {
        Self {
            projector,
            viewport,
            mode,
            camera: MobiusTransform::IDENTITY,
        }
    }

    pub fn with_camera(mut self, camera: MobiusTransform) -> Self {
        self.camera = camera;
        self
    }

    pub fn to_screen(&self, world: Complex) -> ScreenPoint {
        self.projector
            .project_point(self.camera.apply(world), &self.viewport, self.mode)
    }
}
