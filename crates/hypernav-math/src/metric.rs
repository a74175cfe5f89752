// ─────────────────────────────────────────────────────────────────────
// HyperNav — Poincaré Disk Metric
// ─────────────────────────────────────────────────────────────────────
//! Hyperbolic distances in the Poincaré disk (curvature −1):
//!
//!   d(0, z) = 2·artanh|z|
//!   d(z, w) = 2·artanh(|z − w| / |1 − w̄z|)
//!
//! Both diverge at the unit circle, so inputs are pulled back to
//! `MAX_DISK_RADIUS` first.

use crate::complex::Complex;
use crate::MAX_DISK_RADIUS;

/// Pull `z` back inside the open disk.
///
/// Points with `|z| > MAX_DISK_RADIUS` keep their direction. An infinite
/// component points along its sign; NaN input maps to the origin.
#[inline]
pub fn clamp_to_disk(z: Complex) -> Complex {
    if z.re.is_nan() || z.im.is_nan() {
        log::warn!("clamp_to_disk: NaN point {z:?}, mapping to origin");
        return Complex::ZERO;
    }
    if !z.is_finite() {
        let axis = |x: f64| if x.is_infinite() { x.signum() } else { 0.0 };
        return Complex::new(axis(z.re), axis(z.im))
            .normalize()
            .scale(MAX_DISK_RADIUS);
    }
    if z.magnitude() > MAX_DISK_RADIUS {
        return z.normalize().scale(MAX_DISK_RADIUS);
    }
    z
}

/// Hyperbolic distance from the origin to `z`.
pub fn distance_from_origin(z: Complex) -> f64 {
    2.0 * clamp_to_disk(z).magnitude().atanh()
}

/// Hyperbolic distance between two disk points.
pub fn distance(z: Complex, w: Complex) -> f64 {
    let z = clamp_to_disk(z);
    let w = clamp_to_disk(w);
    let den = (Complex::ONE - w.conjugate() * z).magnitude();
    if den == 0.0 {
        return 0.0;
    }
    let ratio = ((z - w).magnitude() / den).min(MAX_DISK_RADIUS);
    2.0 * ratio.atanh()
}

/// Euclidean radius of the disk point at hyperbolic distance `rho`
/// from the origin. Inverse of `distance_from_origin` along a ray.
pub fn point_at_distance(rho: f64) -> f64 {
    (0.5 * rho).tanh()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_keeps_direction_of_infinite_points() {
        let z = clamp_to_disk(Complex::new(f64::INFINITY, 0.0));
        assert_eq!(z, Complex::new(MAX_DISK_RADIUS, 0.0));
        let z = clamp_to_disk(Complex::new(0.3, f64::NEG_INFINITY));
        assert_eq!(z, Complex::new(0.0, -MAX_DISK_RADIUS));
        let z = clamp_to_disk(Complex::new(f64::NEG_INFINITY, f64::INFINITY));
        assert!((z.magnitude() - MAX_DISK_RADIUS).abs() < 1e-12);
        assert!((z.argument() - 0.75 * std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_clamp_maps_nan_to_origin() {
        assert_eq!(clamp_to_disk(Complex::new(f64::NAN, 0.0)), Complex::ZERO);
        assert_eq!(clamp_to_disk(Complex::new(f64::INFINITY, f64::NAN)), Complex::ZERO);
    }

    #[test]
    fn test_origin_distance_zero() {
        assert_eq!(distance_from_origin(Complex::ZERO), 0.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let z = Complex::new(0.3, 0.4);
        let w = Complex::new(-0.5, 0.1);
        assert!((distance(z, w) - distance(w, z)).abs() < 1e-12);
    }

    #[test]
    fn test_distance_matches_origin_form() {
        let z = Complex::new(0.2, -0.6);
        assert!((distance(z, Complex::ZERO) - distance_from_origin(z)).abs() < 1e-12);
    }

    #[test]
    fn test_point_at_distance_inverts() {
        for &r in &[0.0, 0.1, 0.5, 0.9, 0.99] {
            let rho = distance_from_origin(Complex::new(r, 0.0));
            assert!((point_at_distance(rho) - r).abs() < 1e-12, "r={r}");
        }
    }

    #[test]
    fn test_distance_grows_near_boundary() {
        let near = distance_from_origin(Complex::new(0.5, 0.0));
        let far = distance_from_origin(Complex::new(0.99, 0.0));
        // Euclidean gap 0.49 vs. hyperbolic gap > 4.
        assert!(far - near > 4.0);
    }

    #[test]
    fn test_boundary_is_finite() {
        let d = distance_from_origin(Complex::new(1.0, 0.0));
        assert!(d.is_finite());
        let d = distance(Complex::new(1.0, 0.0), Complex::new(-1.0, 0.0));
        assert!(d.is_finite());
    }

    #[test]
    fn test_clamp_to_disk() {
        let z = clamp_to_disk(Complex::new(0.0, 3.0));
        assert!((z.magnitude() - MAX_DISK_RADIUS).abs() < 1e-12);
        assert!(z.re.abs() < 1e-12 && z.im > 0.0);
        assert_eq!(clamp_to_disk(Complex::new(f64::NAN, 0.0)), Complex::ZERO);
        let inside = Complex::new(0.1, 0.2);
        assert_eq!(clamp_to_disk(inside), inside);
    }
}
