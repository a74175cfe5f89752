// ─────────────────────────────────────────────────────────────────────
// HyperNav — Core Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Configuration and error hierarchy shared by the HyperNav crates.
//!
//! The math, physics and projection layers are total: they clamp
//! degenerate input instead of failing. Errors only surface at the
//! configuration and snapshot boundaries.

pub mod config;
pub mod error;

pub use config::{DampingMode, NavConfig, PhysicsConfig, ProjectionConfig};
pub use error::{HyperNavError, HyperNavResult};
