// ─────────────────────────────────────────────────────────────────────
// HyperNav — Hyperbolic Navigation Physics
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Rigid-body placement and motion in the Poincaré disk.
//!
//! A pose is a disk automorphism; motion is expressed in the body frame
//! and applied by post-multiplication:
//!
//!   pose ← pose · (T(v·dt) · R(ω·dt))
//!
//! Flat vector addition of positions is never used. It would leave the
//! disk and misstate hyperbolic distance.

pub mod control;
pub mod pose;
pub mod rigid_body;

pub use control::{clamp_dt, ControlIntent};
pub use pose::HyperbolicPose;
pub use rigid_body::RigidBody;
