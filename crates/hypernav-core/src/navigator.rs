// ─────────────────────────────────────────────────────────────────────
// HyperNav — Navigator (tick + render pass)
// ─────────────────────────────────────────────────────────────────────

use hypernav_math::MobiusTransform;
use hypernav_physics::{clamp_dt, ControlIntent, HyperbolicPose};
use hypernav_render::{
    render_boundary, render_grid, DrawSurface, Grid, Projector, RenderContext, ViewMode, Viewport,
};
use hypernav_types::{HyperNavResult, NavConfig};

use crate::entity::Entity;

/// Drives integration and rendering for a caller-owned entity slice.
pub struct Navigator {
    config: NavConfig,
    projector: Projector,
    grid: Grid,
    view_mode: ViewMode,
}

impl Navigator {
    /// Validate `config` and precompute the grid.
    pub fn new(config: NavConfig) -> HyperNavResult<Self> {
        config.validate()?;
        Ok(Self {
            projector: Projector::new(&config.projection),
            grid: Grid::new(&config.projection),
            view_mode: ViewMode::default(),
            config,
        })
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if mode != self.view_mode {
            log::info!("view mode: {:?} -> {:?}", self.view_mode, mode);
        }
        self.view_mode = mode;
    }

    /// Set from the host's "use Euclidean projection" flag.
    pub fn set_euclidean(&mut self, is_euclidean: bool) {
        self.set_view_mode(ViewMode::from_euclidean_flag(is_euclidean));
    }

    pub fn toggle_view_mode(&mut self) {
        self.set_view_mode(self.view_mode.toggled());
    }

    /// One tick: clamp `dt`, feed `intent` to every controllable
    /// entity, integrate all of them. Returns the `dt` actually used.
    pub fn update(&self, entities: &mut [Entity], dt: f64, intent: ControlIntent) -> f64 {
        let physics = &self.config.physics;
        let dt = clamp_dt(dt, physics.max_dt);
        let intent = ControlIntent::new(intent.thrust, intent.turn);
        for entity in entities.iter_mut() {
            if !intent.is_idle() {
                entity.control(intent, physics);
            }
            entity.integrate(dt, physics);
        }
        dt
    }

    /// Camera transform that centres `pose` on screen, keeping world
    /// orientation.
    pub fn follow(pose: &HyperbolicPose) -> MobiusTransform {
        MobiusTransform::translation(-pose.position())
    }

    /// Draw boundary, grid, then every entity, in the current view mode.
    pub fn render(
        &self,
        surface: &mut dyn DrawSurface,
        entities: &[Entity],
        viewport: &Viewport,
        camera: MobiusTransform,
    ) {
        let ctx = RenderContext::new(self.projector, *viewport, self.view_mode).with_camera(camera);
        render_boundary(surface, &ctx);
        render_grid(surface, &ctx, &self.grid);
        for entity in entities {
            entity.render(surface, &ctx);
        }
        log::trace!("rendered {} entities in {:?} mode", entities.len(), self.view_mode);
    }
}
