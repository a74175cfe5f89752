// ─────────────────────────────────────────────────────────────────────
// HyperNav — Drawing Surface
// ─────────────────────────────────────────────────────────────────────
//! The externally supplied 2D target. Implementations own colours,
//! line widths and dash patterns; the renderers only say which kind of
//! stroke each primitive is.

use serde::{Deserialize, Serialize};

/// Screen coordinates in pixels, y growing downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &ScreenPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// What a primitive depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stroke {
    /// The disk's ideal boundary (hyperbolic view).
    Boundary,
    /// Unit normalized-distance ring (Euclidean view).
    ReferenceRing,
    Grid,
    Ship,
    Drifter,
}

pub trait DrawSurface {
    fn circle(&mut self, center: ScreenPoint, radius: f64, stroke: Stroke);

    fn polyline(&mut self, points: &[ScreenPoint], closed: bool, stroke: Stroke);
}

/// One recorded primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Circle {
        center: ScreenPoint,
        radius: f64,
        stroke: Stroke,
    },
    Polyline {
        points: Vec<ScreenPoint>,
        closed: bool,
        stroke: Stroke,
    },
}

impl DrawCommand {
    pub fn stroke(&self) -> Stroke {
        match self {
            DrawCommand::Circle { stroke, .. } | DrawCommand::Polyline { stroke, .. } => *stroke,
        }
    }
}

/// Surface that stores every primitive, for headless use and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn with_stroke(&self, stroke: Stroke) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |c| c.stroke() == stroke)
    }
}

impl DrawSurface for RecordingSurface {
    fn circle(&mut self, center: ScreenPoint, radius: f64, stroke: Stroke) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            stroke,
        });
    }

    fn polyline(&mut self, points: &[ScreenPoint], closed: bool, stroke: Stroke) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            closed,
            stroke,
        });
    }
}
