// ─────────────────────────────────────────────────────────────────────
// HyperNav — Poincaré Disk Algebra
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Complex numbers, Möbius transforms and the hyperbolic metric of the
//! Poincaré disk.
//!
//! Every type here is an immutable `Copy` value. Degenerate input is
//! clamped, never reported: a caller mistake must end up as a visual
//! artifact, not as NaN flowing into the render pass.

pub mod complex;
pub mod metric;
pub mod mobius;

pub use complex::Complex;
pub use metric::{clamp_to_disk, distance, distance_from_origin, point_at_distance};
pub use mobius::MobiusTransform;

/// Denominator magnitude below which `MobiusTransform::apply` treats
/// the input as sitting on a pole.
pub const POLE_EPSILON: f64 = 1e-12;

/// Gap kept between clamped points and the unit circle.
pub const BOUNDARY_MARGIN: f64 = 1e-6;

/// Largest magnitude a clamped point may have.
pub const MAX_DISK_RADIUS: f64 = 1.0 - BOUNDARY_MARGIN;
