// ─────────────────────────────────────────────────────────────────────
// HyperNav — Möbius Transforms
// ─────────────────────────────────────────────────────────────────────
//! Möbius maps f(z) = (a·z + b) / (c·z + d) stored as the 2×2 complex
//! matrix [[a, b], [c, d]].
//!
//! Composition is matrix multiplication and always reads right to left:
//!
//!   A.compose(B).apply(z) == A.apply(B.apply(z))
//!
//! `A * B` is the same product. Disk automorphisms (the poses) are the
//! matrices of the form λ·[[p, q], [q̄, p̄]] with |q| < |p|.

use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::metric::clamp_to_disk;
use crate::{MAX_DISK_RADIUS, POLE_EPSILON};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MobiusTransform {
    a: Complex,
    b: Complex,
    c: Complex,
    d: Complex,
}

impl Default for MobiusTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl MobiusTransform {
    pub const IDENTITY: MobiusTransform = MobiusTransform {
        a: Complex::ONE,
        b: Complex::ZERO,
        c: Complex::ZERO,
        d: Complex::ONE,
    };

    pub const fn new(a: Complex, b: Complex, c: Complex, d: Complex) -> Self {
        Self { a, b, c, d }
    }

    /// Coefficients `(a, b, c, d)`.
    pub fn coefficients(&self) -> (Complex, Complex, Complex, Complex) {
        (self.a, self.b, self.c, self.d)
    }

    /// Disk automorphism sending 0 to `a`: [[1, a], [ā, 1]].
    ///
    /// `translation(a).inverse()` is `translation(-a)`. An `a` on or
    /// outside the unit circle is pulled back to `MAX_DISK_RADIUS`.
    pub fn translation(a: Complex) -> Self {
        let a = if a.is_finite() && a.magnitude() < 1.0 {
            a
        } else {
            log::warn!("translation: |a| = {} outside the disk, clamping", a.magnitude());
            clamp_to_disk(a)
        };
        Self::new(Complex::ONE, a, a.conjugate(), Complex::ONE)
    }

    /// Rotation by `theta` radians about the origin: [[e^{iθ}, 0], [0, 1]].
    pub fn rotation(theta: f64) -> Self {
        Self::new(Complex::exp_i(theta), Complex::ZERO, Complex::ZERO, Complex::ONE)
    }

    /// Evaluate the map at `z`.
    ///
    /// Near a pole (`|c·z + d| < POLE_EPSILON`) the result is the
    /// numerator's direction at radius `MAX_DISK_RADIUS` instead of an
    /// infinity.
    pub fn apply(&self, z: Complex) -> Complex {
        let num = self.a * z + self.b;
        let den = self.c * z + self.d;
        if den.magnitude() < POLE_EPSILON {
            log::warn!("apply: z = {z} is within {POLE_EPSILON:e} of a pole, clamping");
            return num.normalize().scale(MAX_DISK_RADIUS);
        }
        num / den
    }

    /// Matrix product `self · other`: apply `other` first, then `self`.
    pub fn compose(self, other: MobiusTransform) -> MobiusTransform {
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        let (p, q, r, s) = (other.a, other.b, other.c, other.d);
        Self::new(a * p + b * r, a * q + b * s, c * p + d * r, c * q + d * s)
    }

    /// Adjugate [[d, −b], [−c, a]]. Equals the inverse up to the scalar
    /// `1 / det`, which Möbius maps ignore.
    pub fn inverse(self) -> MobiusTransform {
        Self::new(self.d, -self.b, -self.c, self.a)
    }

    pub fn determinant(&self) -> Complex {
        self.a * self.d - self.b * self.c
    }

    pub fn is_degenerate(&self) -> bool {
        let det = self.determinant();
        !det.is_finite() || det.magnitude() < POLE_EPSILON
    }

    /// Derivative f'(z) = det / (c·z + d)².
    pub fn derivative(&self, z: Complex) -> Complex {
        let den = self.c * z + self.d;
        self.determinant() / (den * den)
    }

    /// Same map scaled to unit determinant, or `None` if degenerate.
    fn unit_determinant(self) -> Option<MobiusTransform> {
        if self.is_degenerate() {
            return None;
        }
        let k = Complex::ONE / self.determinant().sqrt();
        Some(Self::new(self.a * k, self.b * k, self.c * k, self.d * k))
    }

    /// Whether this maps the open unit disk onto itself.
    pub fn is_disk_automorphism(&self) -> bool {
        let Some(m) = self.unit_determinant() else {
            return false;
        };
        let tol = 1e-9 * (m.a.magnitude() + m.b.magnitude()).max(1.0);
        m.a.approx_eq(m.d.conjugate(), tol)
            && m.b.approx_eq(m.c.conjugate(), tol)
            && m.b.magnitude() < m.a.magnitude()
    }

    /// Re-project a drifted disk automorphism onto [[p, q], [q̄, p̄]]
    /// with |p|² − |q|² = 1.
    ///
    /// Repeated composition lets round-off pull the matrix off that
    /// form and shrink its determinant toward underflow. The map itself
    /// is unchanged when the input was already an automorphism.
    /// Degenerate input is returned as is.
    pub fn renormalized(self) -> MobiusTransform {
        let Some(m) = self.unit_determinant() else {
            log::warn!("renormalized: degenerate transform left untouched");
            return self;
        };
        let p = (m.a + m.d.conjugate()).scale(0.5);
        let q = (m.b + m.c.conjugate()).scale(0.5);
        let norm = p.magnitude_squared() - q.magnitude_squared();
        if !(norm > 0.0 && norm.is_finite()) {
            return m;
        }
        let k = 1.0 / norm.sqrt();
        let (p, q) = (p.scale(k), q.scale(k));
        Self::new(p, q, q.conjugate(), p.conjugate())
    }

    /// Coefficient-wise comparison. Two matrices differing by a scalar
    /// factor describe the same map but are not `approx_eq`.
    pub fn approx_eq(&self, other: &MobiusTransform, tol: f64) -> bool {
        self.a.approx_eq(other.a, tol)
            && self.b.approx_eq(other.b, tol)
            && self.c.approx_eq(other.c, tol)
            && self.d.approx_eq(other.d, tol)
    }
}

/// `A * B` is `A.compose(B)`.
impl Mul for MobiusTransform {
    type Output = MobiusTransform;

    fn mul(self, rhs: MobiusTransform) -> MobiusTransform {
        self.compose(rhs)
    }
}
