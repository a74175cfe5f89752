// ─────────────────────────────────────────────────────────────────────
// HyperNav — Dual-Mode Projector
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Projection of disk poses onto a screen, in two interpretations:
//!
//! - **Hyperbolic**: radial fraction `tanh(k · n)` of the normalized
//!   hyperbolic distance `n`. The infinite plane fits in the view disk
//!   and shapes shrink toward its rim.
//! - **Euclidean**: radial fraction `n`. A flat reading of the same
//!   pose data, kept only for side-by-side comparison.
//!
//! Everything here reads poses and never mutates them. The only side
//! effects are calls on the caller's `DrawSurface`.

pub mod boundary;
pub mod grid;
pub mod projector;
pub mod shape;
pub mod surface;

pub use boundary::render_boundary;
pub use grid::{render_grid, Grid};
pub use projector::{Projector, RenderContext, ViewMode, Viewport};
pub use shape::{render_shape, Shape};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface, ScreenPoint, Stroke};
