// ─────────────────────────────────────────────────────────────────────
// HyperNav — Rigid Body Integrator
// ─────────────────────────────────────────────────────────────────────
//! Per-entity pose plus body-frame velocity state.
//!
//! One step of `integrate(dt)`:
//!
//!   Δ    = T(v·dt) · R(ω·dt)
//!   pose ← pose · Δ
//!   v    ← v · λ_lin,   ω ← ω · λ_ang
//!
//! Thrust and turn add to `v` and `ω`; the multiplicative decay bounds
//! the steady-state speed at `gain / (1 − λ)` without any clamp.

use serde::{Deserialize, Serialize};

use hypernav_math::{Complex, MobiusTransform};
use hypernav_types::PhysicsConfig;

use crate::control::ControlIntent;
use crate::pose::HyperbolicPose;

/// Velocities below this are snapped to zero so a coasting body
/// eventually comes to an exact rest.
const REST_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    pose: HyperbolicPose,
    /// Body-frame linear velocity (disk units / s).
    local_velocity: Complex,
    /// Angular velocity (rad / s), counter-clockwise positive.
    angular_velocity: f64,
}

impl RigidBody {
    /// Body at the disk origin, facing +x, at rest.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(pose: HyperbolicPose) -> Self {
        Self {
            pose,
            ..Self::default()
        }
    }

    /// Seed velocities directly, e.g. for bodies with no controller.
    pub fn with_velocity(mut self, local_velocity: Complex, angular_velocity: f64) -> Self {
        self.local_velocity = if local_velocity.is_finite() {
            local_velocity
        } else {
            Complex::ZERO
        };
        self.angular_velocity = if angular_velocity.is_finite() {
            angular_velocity
        } else {
            0.0
        };
        self
    }

    pub fn pose(&self) -> &HyperbolicPose {
        &self.pose
    }

    pub fn local_velocity(&self) -> Complex {
        self.local_velocity
    }

    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    pub fn is_at_rest(&self) -> bool {
        self.local_velocity == Complex::ZERO && self.angular_velocity == 0.0
    }

    /// Add `v · thrust_gain` along the body +x axis. `v` is clamped to
    /// [−1, 1].
    pub fn apply_thrust(&mut self, v: f64, physics: &PhysicsConfig) {
        let v = ControlIntent::new(v, 0.0).thrust;
        self.local_velocity = self.local_velocity + Complex::new(v * physics.thrust_gain, 0.0);
    }

    /// Add `v · turn_gain` to the angular velocity. `v` is clamped to
    /// [−1, 1].
    pub fn apply_turn(&mut self, v: f64, physics: &PhysicsConfig) {
        let v = ControlIntent::new(0.0, v).turn;
        self.angular_velocity += v * physics.turn_gain;
    }

    pub fn apply_control(&mut self, intent: ControlIntent, physics: &PhysicsConfig) {
        self.apply_thrust(intent.thrust, physics);
        self.apply_turn(intent.turn, physics);
    }

    /// Advance the pose by `dt` seconds, then decay both velocities.
    ///
    /// `dt` is expected to be clamped by the caller; non-positive or
    /// non-finite values are a no-op. A body at rest keeps its pose
    /// bit-for-bit.
    pub fn integrate(&mut self, dt: f64, physics: &PhysicsConfig) {
        if !(dt.is_finite() && dt > 0.0) || self.is_at_rest() {
            return;
        }

        let delta = MobiusTransform::translation(self.local_velocity.scale(dt))
            .compose(MobiusTransform::rotation(self.angular_velocity * dt));
        self.pose = self.pose.compose(delta);

        let mode = physics.damping_mode;
        self.local_velocity = self
            .local_velocity
            .scale(mode.factor(physics.linear_damping, dt));
        self.angular_velocity *= mode.factor(physics.angular_damping, dt);

        if self.local_velocity.magnitude() < REST_EPSILON {
            self.local_velocity = Complex::ZERO;
        }
        if self.angular_velocity.abs() < REST_EPSILON {
            self.angular_velocity = 0.0;
        }
    }
}
