// ─────────────────────────────────────────────────────────────────────
// HyperNav — Entity Kinds
// ─────────────────────────────────────────────────────────────────────
//! Closed set of entity kinds, each with `integrate` and `render`.

use hypernav_math::Complex;
use hypernav_physics::{ControlIntent, HyperbolicPose, RigidBody};
use hypernav_render::{render_shape, DrawSurface, RenderContext, Shape, Stroke};
use hypernav_types::PhysicsConfig;

/// Player-controlled body: responds to thrust and turn, damped.
#[derive(Debug, Clone)]
pub struct Ship {
    pub body: RigidBody,
    pub shape: Shape,
}

/// Uncontrolled body coasting at a fixed body-frame velocity.
#[derive(Debug, Clone)]
pub struct Drifter {
    pub body: RigidBody,
    pub shape: Shape,
}

#[derive(Debug, Clone)]
pub enum Entity {
    Ship(Ship),
    Drifter(Drifter),
}

impl Entity {
    pub fn ship(pose: HyperbolicPose) -> Self {
        Entity::Ship(Ship {
            body: RigidBody::at(pose),
            shape: Shape::ship(),
        })
    }

    /// Drifter with constant body-frame `velocity` (disk units / s) and
    /// `spin` (rad / s), drawn as a hexagon of circumradius `radius`.
    pub fn drifter(pose: HyperbolicPose, velocity: Complex, spin: f64, radius: f64) -> Self {
        Entity::Drifter(Drifter {
            body: RigidBody::at(pose).with_velocity(velocity, spin),
            shape: Shape::polygon(radius, 6),
        })
    }

    pub fn body(&self) -> &RigidBody {
        match self {
            Entity::Ship(s) => &s.body,
            Entity::Drifter(d) => &d.body,
        }
    }

    pub fn pose(&self) -> &HyperbolicPose {
        self.body().pose()
    }

    pub fn is_controllable(&self) -> bool {
        matches!(self, Entity::Ship(_))
    }

    /// Feed control input. Only ships respond.
    pub fn control(&mut self, intent: ControlIntent, physics: &PhysicsConfig) {
        if let Entity::Ship(s) = self {
            s.body.apply_control(intent, physics);
        }
    }

    /// Advance by `dt` seconds (already clamped).
    pub fn integrate(&mut self, dt: f64, physics: &PhysicsConfig) {
        match self {
            Entity::Ship(s) => s.body.integrate(dt, physics),
            // No decay: a drifter keeps its spawn velocity forever.
            Entity::Drifter(d) => d.body.integrate(dt, &physics.undamped()),
        }
    }

    pub fn render(&self, surface: &mut dyn DrawSurface, ctx: &RenderContext) {
        match self {
            Entity::Ship(s) => render_shape(surface, ctx, s.body.pose(), &s.shape, Stroke::Ship),
            Entity::Drifter(d) => {
                render_shape(surface, ctx, d.body.pose(), &d.shape, Stroke::Drifter)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypernav_render::{Projector, RecordingSurface, ViewMode, Viewport};

    #[test]
    fn test_only_ships_take_control() {
        let physics = PhysicsConfig::default();
        let mut ship = Entity::ship(HyperbolicPose::IDENTITY);
        let mut rock = Entity::drifter(HyperbolicPose::IDENTITY, Complex::ZERO, 0.0, 0.05);
        ship.control(ControlIntent::new(1.0, 0.0), &physics);
        rock.control(ControlIntent::new(1.0, 0.0), &physics);
        assert!(!ship.body().is_at_rest());
        assert!(rock.body().is_at_rest());
        assert!(ship.is_controllable());
        assert!(!rock.is_controllable());
    }

    #[test]
    fn test_drifter_keeps_cruising() {
        let physics = PhysicsConfig::default();
        let mut rock = Entity::drifter(
            HyperbolicPose::IDENTITY,
            Complex::new(0.2, 0.0),
            0.5,
            0.05,
        );
        for _ in 0..100 {
            rock.integrate(0.05, &physics);
        }
        assert_eq!(rock.body().local_velocity(), Complex::new(0.2, 0.0));
        assert_eq!(rock.body().angular_velocity(), 0.5);
        assert!(rock.pose().position().magnitude() > 0.0);
        assert!(rock.pose().position().magnitude() < 1.0);
    }

    #[test]
    fn test_ship_decays() {
        let physics = PhysicsConfig::default();
        let mut ship = Entity::ship(HyperbolicPose::IDENTITY);
        ship.control(ControlIntent::new(1.0, 1.0), &physics);
        ship.integrate(0.05, &physics);
        assert!(ship.body().local_velocity().re < physics.thrust_gain);
        assert!(ship.body().angular_velocity() < physics.turn_gain);
    }

    #[test]
    fn test_render_strokes() {
        let ctx = RenderContext::new(
            Projector::default(),
            Viewport::new(0.0, 0.0, 100.0),
            ViewMode::Hyperbolic,
        );
        let mut s = RecordingSurface::new();
        Entity::ship(HyperbolicPose::IDENTITY).render(&mut s, &ctx);
        Entity::drifter(HyperbolicPose::IDENTITY, Complex::ZERO, 0.0, 0.05).render(&mut s, &ctx);
        assert_eq!(s.with_stroke(Stroke::Ship).count(), 1);
        assert_eq!(s.with_stroke(Stroke::Drifter).count(), 1);
    }
}
