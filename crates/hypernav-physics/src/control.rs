// ─────────────────────────────────────────────────────────────────────
// HyperNav — Control Intent and Tick Time
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

/// Clamp a control axis to [−1, 1]; NaN reads as no input.
#[inline]
fn clamp_axis(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(-1.0, 1.0)
    }
}

/// Thrust / turn request for one tick, both in [−1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlIntent {
    /// +1 full ahead, −1 full astern.
    pub thrust: f64,
    /// +1 full counter-clockwise, −1 full clockwise.
    pub turn: f64,
}

impl ControlIntent {
    pub const IDLE: ControlIntent = ControlIntent {
        thrust: 0.0,
        turn: 0.0,
    };

    pub fn new(thrust: f64, turn: f64) -> Self {
        Self {
            thrust: clamp_axis(thrust),
            turn: clamp_axis(turn),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.thrust == 0.0 && self.turn == 0.0
    }
}

/// Bound one tick's elapsed time to `[0, max_dt]`.
///
/// A suspended host can hand over seconds of elapsed time at once; a
/// single step that large is not a meaningful integration step.
pub fn clamp_dt(dt: f64, max_dt: f64) -> f64 {
    if !dt.is_finite() || dt < 0.0 {
        log::debug!("clamp_dt: invalid dt {dt}, using 0");
        return 0.0;
    }
    if dt > max_dt {
        log::debug!("clamp_dt: dt {dt:.4}s clamped to {max_dt:.4}s");
        return max_dt;
    }
    dt
}
