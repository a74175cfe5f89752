// ─────────────────────────────────────────────────────────────────────
// HyperNav — Navigation Core
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Externally driven tick and render pass over a caller-owned set of
//! entities.
//!
//! The host loop owns scheduling, input polling and the entity list.
//! Each frame it calls `Navigator::update(dt)` once, then
//! `Navigator::render` once.
//!
//! # Invariants
//!
//! 1. **Disk containment**: every entity position stays strictly inside
//!    the unit disk, whatever `dt` or control input is supplied.
//! 2. **Read/write separation**: `update` is the only path that mutates
//!    poses; `render` takes `&[Entity]` and only reads them.
//! 3. **Bounded steps**: `dt` is clamped to `max_dt` once per tick before
//!    any entity is integrated.

pub mod entity;
pub mod navigator;

pub use entity::{Drifter, Entity, Ship};
pub use navigator::Navigator;

pub use hypernav_math::{Complex, MobiusTransform};
pub use hypernav_physics::{ControlIntent, HyperbolicPose, RigidBody};
pub use hypernav_render::{DrawSurface, RecordingSurface, ViewMode, Viewport};
pub use hypernav_types::{HyperNavError, HyperNavResult, NavConfig};
