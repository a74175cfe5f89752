// ─────────────────────────────────────────────────────────────────────
// HyperNav — Hyperbolic Pose
// ─────────────────────────────────────────────────────────────────────
//! An entity's placement: the disk automorphism carrying the body frame
//! (origin, +x heading) to the world frame.
//!
//! Every automorphism factors as T(p) · R(θ), so a pose is fully
//! described by its position `p = f(0)` and orientation `θ = arg f'(0)`.

use serde::{Deserialize, Serialize};

use hypernav_math::{metric, Complex, MobiusTransform, MAX_DISK_RADIUS};
use hypernav_types::{HyperNavError, HyperNavResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MobiusTransform", into = "MobiusTransform")]
pub struct HyperbolicPose {
    transform: MobiusTransform,
}

impl HyperbolicPose {
    pub const IDENTITY: HyperbolicPose = HyperbolicPose {
        transform: MobiusTransform::IDENTITY,
    };

    /// Pose at `position` facing `orientation` radians.
    ///
    /// Positions outside `MAX_DISK_RADIUS` are pulled back inside.
    pub fn from_parts(position: Complex, orientation: f64) -> Self {
        let transform = MobiusTransform::translation(metric::clamp_to_disk(position))
            .compose(MobiusTransform::rotation(orientation))
            .renormalized();
        Self { transform }
    }

    /// Wrap an externally built transform, rejecting anything that is
    /// not a disk automorphism.
    pub fn from_transform(transform: MobiusTransform) -> HyperNavResult<Self> {
        if transform.is_degenerate() {
            return Err(HyperNavError::Validation(
                "pose transform is degenerate (ad - bc ≈ 0)".to_string(),
            ));
        }
        if !transform.is_disk_automorphism() {
            return Err(HyperNavError::Validation(
                "pose transform does not preserve the unit disk".to_string(),
            ));
        }
        Ok(Self::contained(transform.renormalized()))
    }

    /// Enforce `|position| <= MAX_DISK_RADIUS` by rebuilding from parts.
    fn contained(transform: MobiusTransform) -> Self {
        let pose = Self { transform };
        let p = pose.position();
        if p.magnitude() > MAX_DISK_RADIUS || !p.is_finite() {
            log::debug!(
                "pose drifted to |p| = {:.9}, pulling back inside the disk",
                p.magnitude()
            );
            return Self::from_parts(p, pose.orientation());
        }
        pose
    }

    pub fn transform(&self) -> MobiusTransform {
        self.transform
    }

    /// World position of the body origin: `f(0)`.
    pub fn position(&self) -> Complex {
        self.transform.apply(Complex::ZERO)
    }

    /// World angle of the body +x axis at the body origin, in (−π, π].
    pub fn orientation(&self) -> f64 {
        self.transform.derivative(Complex::ZERO).argument()
    }

    /// Unit world-frame direction of the body +x axis.
    pub fn heading(&self) -> Complex {
        Complex::exp_i(self.orientation())
    }

    /// Map a body-frame point into the world disk.
    pub fn local_to_world(&self, local: Complex) -> Complex {
        self.transform.apply(local)
    }

    /// Map a world point into this body's frame.
    pub fn world_to_local(&self, world: Complex) -> Complex {
        self.transform.inverse().apply(world)
    }

    /// Hyperbolic distance from the world origin.
    pub fn distance_from_origin(&self) -> f64 {
        metric::distance_from_origin(self.position())
    }

    pub fn distance_to(&self, other: &HyperbolicPose) -> f64 {
        metric::distance(self.position(), other.position())
    }

    /// Body-frame update: `self · delta`.
    ///
    /// `delta` is expressed relative to the current frame, so a forward
    /// step always moves along the current heading.
    pub fn compose(self, delta: MobiusTransform) -> Self {
        Self::contained(self.transform.compose(delta).renormalized())
    }

    /// Pose of `self` as seen from `observer`'s frame.
    pub fn relative_to(&self, observer: &HyperbolicPose) -> HyperbolicPose {
        Self::contained(
            observer
                .transform
                .inverse()
                .compose(self.transform)
                .renormalized(),
        )
    }
}

impl TryFrom<MobiusTransform> for HyperbolicPose {
    type Error = HyperNavError;

    fn try_from(transform: MobiusTransform) -> HyperNavResult<Self> {
        Self::from_transform(transform)
    }
}

impl From<HyperbolicPose> for MobiusTransform {
    fn from(pose: HyperbolicPose) -> Self {
        pose.transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_identity() {
        let p = HyperbolicPose::IDENTITY;
        assert_eq!(p.position(), Complex::ZERO);
        assert_eq!(p.orientation(), 0.0);
        assert_eq!(HyperbolicPose::default(), p);
    }

    #[test]
    fn test_from_parts() {
        let p = HyperbolicPose::from_parts(Complex::new(0.3, -0.4), 1.2);
        assert!(p.position().approx_eq(Complex::new(0.3, -0.4), 1e-12));
        assert!((p.orientation() - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_from_parts_clamps_position() {
        let p = HyperbolicPose::from_parts(Complex::new(5.0, 0.0), 0.0);
        assert!(p.position().magnitude() <= MAX_DISK_RADIUS + 1e-12);
        assert!(p.position().magnitude() < 1.0);
    }

    #[test]
    fn test_forward_step_follows_heading() {
        let p = HyperbolicPose::from_parts(Complex::ZERO, FRAC_PI_2);
        let moved = p.compose(MobiusTransform::translation(Complex::new(0.2, 0.0)));
        // Facing +i, a body-frame +x step lands on the +i axis.
        assert!(moved.position().approx_eq(Complex::new(0.0, 0.2), 1e-12));
        assert!((moved.orientation() - FRAC_PI_2).abs() < 1e-12);
        assert!(p.heading().approx_eq(Complex::I, 1e-12));
        assert!(moved.heading().approx_eq(Complex::I, 1e-12));
        assert!(moved.position().normalize().approx_eq(p.heading(), 1e-12));
    }

    #[test]
    fn test_local_world_round_trip() {
        let p = HyperbolicPose::from_parts(Complex::new(-0.5, 0.2), 2.5);
        let local = Complex::new(0.05, -0.02);
        let back = p.world_to_local(p.local_to_world(local));
        assert!(back.approx_eq(local, 1e-12));
        assert!(p.local_to_world(Complex::ZERO).approx_eq(p.position(), 1e-12));
    }

    #[test]
    fn test_relative_to_self_is_identity() {
        let p = HyperbolicPose::from_parts(Complex::new(0.6, 0.1), -0.8);
        let r = p.relative_to(&p);
        assert!(r.position().approx_eq(Complex::ZERO, 1e-12));
        assert!(r.orientation().abs() < 1e-12);
    }

    #[test]
    fn test_distance_is_isometry_invariant() {
        let a = HyperbolicPose::from_parts(Complex::new(0.1, 0.2), 0.0);
        let b = HyperbolicPose::from_parts(Complex::new(-0.4, 0.5), 1.0);
        let observer = HyperbolicPose::from_parts(Complex::new(0.7, -0.2), 0.3);
        let d = a.distance_to(&b);
        let d_rel = a.relative_to(&observer).distance_to(&b.relative_to(&observer));
        assert!((d - d_rel).abs() < 1e-9, "{d} vs {d_rel}");
    }

    #[test]
    fn test_from_transform_rejects() {
        let scale = MobiusTransform::new(
            Complex::new(3.0, 0.0),
            Complex::ZERO,
            Complex::ZERO,
            Complex::ONE,
        );
        assert!(matches!(
            HyperbolicPose::from_transform(scale),
            Err(HyperNavError::Validation(_))
        ));
        let degenerate =
            MobiusTransform::new(Complex::ONE, Complex::ONE, Complex::ONE, Complex::ONE);
        assert!(HyperbolicPose::from_transform(degenerate).is_err());
    }

    #[test]
    fn test_from_transform_accepts_automorphism() {
        let t = MobiusTransform::translation(Complex::new(0.2, 0.2))
            .compose(MobiusTransform::rotation(0.4));
        let p = HyperbolicPose::from_transform(t).unwrap();
        assert!(p.position().approx_eq(Complex::new(0.2, 0.2), 1e-12));
    }

    #[test]
    fn test_serde_round_trip() {
        let p = HyperbolicPose::from_parts(Complex::new(0.1, -0.3), 0.9);
        let json = serde_json::to_string(&p).unwrap();
        let back: HyperbolicPose = serde_json::from_str(&json).unwrap();
        assert!(back.position().approx_eq(p.position(), 1e-12));
        assert!((back.orientation() - p.orientation()).abs() < 1e-12);
    }

    static RIM_WARNINGS: AtomicUsize = AtomicUsize::new(0);

    struct RimWarningCounter;

    impl log::Log for RimWarningCounter {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if record.level() <= log::Level::Warn && record.target() == "hypernav_physics::pose" {
                RIM_WARNINGS.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn flush(&self) {}
    }

    static COUNTER: RimWarningCounter = RimWarningCounter;

    #[test]
    fn test_pushing_against_rim_is_quiet() {
        let _ = log::set_logger(&COUNTER);
        log::set_max_level(log::LevelFilter::Trace);
        let before = RIM_WARNINGS.load(Ordering::SeqCst);

        let mut p = HyperbolicPose::from_parts(Complex::new(MAX_DISK_RADIUS, 0.0), 0.0);
        let push = MobiusTransform::translation(Complex::new(0.5, 0.0));
        for _ in 0..600 {
            p = p.compose(push);
            assert!(p.position().magnitude() <= MAX_DISK_RADIUS + 1e-12);
        }
        assert_eq!(RIM_WARNINGS.load(Ordering::SeqCst), before);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let json = r#"{"a":{"re":2.0,"im":0.0},"b":{"re":0.0,"im":0.0},
                       "c":{"re":0.0,"im":0.0},"d":{"re":1.0,"im":0.0}}"#;
        assert!(serde_json::from_str::<HyperbolicPose>(json).is_err());
    }
}
