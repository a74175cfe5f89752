// ─────────────────────────────────────────────────────────────────────
// HyperNav — Complex Numbers
// ─────────────────────────────────────────────────────────────────────
//! Minimal field arithmetic over `(re, im)` pairs.
//!
//! Division by zero yields `Complex::ZERO`. Callers that need a
//! non-degenerate quotient check `magnitude()` first.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A complex number `re + i·im`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex::new(0.0, 0.0);
    pub const ONE: Complex = Complex::new(1.0, 0.0);
    pub const I: Complex = Complex::new(0.0, 1.0);

    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    /// Unit phasor `e^{iθ}`.
    pub fn exp_i(theta: f64) -> Self {
        Self::from_polar(1.0, theta)
    }

    pub fn conjugate(self) -> Self {
        Self::new(self.re, -self.im)
    }

    pub fn magnitude(self) -> f64 {
        self.re.hypot(self.im)
    }

    pub fn magnitude_squared(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Argument in (−π, π].
    pub fn argument(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Unit vector in the same direction; `ZERO` stays `ZERO`.
    pub fn normalize(self) -> Self {
        let s = self.re.abs().max(self.im.abs());
        if s == 0.0 {
            return Self::ZERO;
        }
        let w = Self::new(self.re / s, self.im / s);
        w.scale(1.0 / w.magnitude())
    }

    /// Principal square root.
    pub fn sqrt(self) -> Self {
        Self::from_polar(self.magnitude().sqrt(), 0.5 * self.argument())
    }

    pub fn scale(self, s: f64) -> Self {
        Self::new(self.re * s, self.im * s)
    }

    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    pub fn approx_eq(self, other: Self, tol: f64) -> bool {
        (self.re - other.re).abs() <= tol && (self.im - other.im).abs() <= tol
    }
}

impl Add for Complex {
    type Output = Complex;
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;
    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;
    fn mul(self, rhs: f64) -> Complex {
        self.scale(rhs)
    }
}

/// Quotient `self / rhs`; `ZERO` when `rhs` is exactly zero.
///
/// Smith's scaling keeps `|rhs|²` out of the computation, so huge and
/// tiny finite divisors neither overflow nor underflow.
impl Div for Complex {
    type Output = Complex;
    fn div(self, rhs: Complex) -> Complex {
        if rhs.re == 0.0 && rhs.im == 0.0 {
            return Complex::ZERO;
        }
        if rhs.re.abs() >= rhs.im.abs() {
            let r = rhs.im / rhs.re;
            let den = rhs.re + rhs.im * r;
            Complex::new((self.re + self.im * r) / den, (self.im - self.re * r) / den)
        } else {
            let r = rhs.re / rhs.im;
            let den = rhs.re * r + rhs.im;
            Complex::new((self.re * r + self.im) / den, (self.im * r - self.re) / den)
        }
    }
}

impl Neg for Complex {
    type Output = Complex;
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::new(re, 0.0)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < 0.0 {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}
