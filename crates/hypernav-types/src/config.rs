// ─────────────────────────────────────────────────────────────────────
// HyperNav — Configuration
// ─────────────────────────────────────────────────────────────────────
//! Tuning values for the integrator and the projector.
//!
//! None of these are physical constants of the hyperbolic plane; they
//! are feel / visual knobs with defaults that match the reference
//! navigation behaviour.

use serde::{Deserialize, Serialize};

use crate::error::{HyperNavError, HyperNavResult};

/// How the per-tick velocity damping factor is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DampingMode {
    /// Factor applied once per tick, independent of `dt`.
    /// Frame-rate dependent; this is the reference behaviour.
    #[default]
    PerTick,
    /// Factor raised to `dt * reference_rate`, so that a tick of
    /// `1 / reference_rate` seconds decays by exactly one factor.
    TimeNormalized { reference_rate: f64 },
}

impl DampingMode {
    /// Effective multiplier for a tick of `dt` seconds given the
    /// configured per-tick `factor`.
    pub fn factor(&self, factor: f64, dt: f64) -> f64 {
        match *self {
            DampingMode::PerTick => factor,
            DampingMode::TimeNormalized { reference_rate } => factor.powf(dt * reference_rate),
        }
    }
}

/// Integrator tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Linear velocity (disk units / s) added per unit of thrust.
    /// Default: 0.05.
    pub thrust_gain: f64,

    /// Angular velocity (rad / s) added per unit of turn.
    /// Default: 0.3.
    pub turn_gain: f64,

    /// Multiplicative decay of the body-frame linear velocity.
    /// 1.0 disables damping. Default: 0.95.
    pub linear_damping: f64,

    /// Multiplicative decay of the angular velocity.
    /// 1.0 disables damping. Default: 0.9.
    pub angular_damping: f64,

    /// Whether damping is applied per tick or per elapsed second.
    pub damping_mode: DampingMode,

    /// Upper bound on a single tick's elapsed time (seconds).
    /// Default: 0.1.
    pub max_dt: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            thrust_gain: 0.05,
            turn_gain: 0.3,
            linear_damping: 0.95,
            angular_damping: 0.9,
            damping_mode: DampingMode::PerTick,
            max_dt: 0.1,
        }
    }
}

impl PhysicsConfig {
    /// Same gains, with both damping factors set to 1.0.
    pub fn undamped(&self) -> Self {
        Self {
            linear_damping: 1.0,
            angular_damping: 1.0,
            ..self.clone()
        }
    }
}

/// Projector / renderer tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Compression constant `k` in `tanh(k · n)`. Default: 1.0.
    pub compression: f64,

    /// Hyperbolic distance mapped to a normalized distance of 1.
    /// With `compression = 1` and `distance_scale = 2` the hyperbolic
    /// view is the exact Poincaré disk. Default: 2.0.
    pub distance_scale: f64,

    /// Hyperbolic distance between neighbouring grid geodesics.
    /// Default: 0.75.
    pub grid_spacing: f64,

    /// Number of grid geodesics on each side of the origin, per axis.
    /// Default: 4.
    pub grid_lines: usize,

    /// Polyline samples per grid geodesic. Default: 48.
    pub grid_segments: usize,

    /// Hyperbolic half-length of each sampled grid geodesic.
    /// Default: 6.0.
    pub grid_extent: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            compression: 1.0,
            distance_scale: 2.0,
            grid_spacing: 0.75,
            grid_lines: 4,
            grid_segments: 48,
            grid_extent: 6.0,
        }
    }
}

/// Full runtime configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub physics: PhysicsConfig,
    pub projection: ProjectionConfig,
}

fn require_finite(name: &str, v: f64) -> HyperNavResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(HyperNavError::Config(format!("{name} must be finite, got {v}")))
    }
}

impl NavConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> HyperNavResult<()> {
        let p = &self.physics;
        require_finite("thrust_gain", p.thrust_gain)?;
        require_finite("turn_gain", p.turn_gain)?;
        if p.thrust_gain < 0.0 || p.turn_gain < 0.0 {
            return Err(HyperNavError::Config(format!(
                "gains must be >= 0, got thrust_gain={} turn_gain={}",
                p.thrust_gain, p.turn_gain
            )));
        }
        for (name, v) in [
            ("linear_damping", p.linear_damping),
            ("angular_damping", p.angular_damping),
        ] {
            if !(v > 0.0 && v <= 1.0) {
                return Err(HyperNavError::Config(format!(
                    "{name} must be in (0, 1], got {v}"
                )));
            }
        }
        if let DampingMode::TimeNormalized { reference_rate } = p.damping_mode {
            if !(reference_rate.is_finite() && reference_rate > 0.0) {
                return Err(HyperNavError::Config(format!(
                    "reference_rate must be > 0, got {reference_rate}"
                )));
            }
        }
        if !(p.max_dt.is_finite() && p.max_dt > 0.0) {
            return Err(HyperNavError::Config(format!(
                "max_dt must be > 0, got {}",
                p.max_dt
            )));
        }

        let q = &self.projection;
        for (name, v) in [
            ("compression", q.compression),
            ("distance_scale", q.distance_scale),
            ("grid_spacing", q.grid_spacing),
            ("grid_extent", q.grid_extent),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(HyperNavError::Config(format!(
                    "{name} must be > 0, got {v}"
                )));
            }
        }
        if q.grid_segments < 2 {
            return Err(HyperNavError::Config(format!(
                "grid_segments must be >= 2, got {}",
                q.grid_segments
            )));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> HyperNavResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| HyperNavError::Config(format!("JSON parse error: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
