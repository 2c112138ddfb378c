//! The per-frame coordinator.

use glam::{Vec2, Vec3};
use rand::Rng;
use web_time::{Duration, Instant};

use super::command::ViewerCommand;
use crate::animation::{
    EasingFunction, Tween, TweenAttribute, TweenKey, TweenScheduler,
};
use crate::camera::Camera;
use crate::error::VitrineError;
use crate::options::Options;
use crate::picking::{self, Selection};
use crate::render::RenderBackend;
use crate::scene::SceneRegistry;
use crate::util::frame_timing::FrameTiming;

/// Owns the whole viewer state (registry, camera, selection, scheduler,
/// frame clock) and coordinates it against a render backend.
///
/// The host drives it with exactly two calls: [`execute`](Self::execute)
/// for each command its input layer produces, and [`tick`](Self::tick)
/// once per display refresh. Both are synchronous; a click is fully
/// applied before the call returns, so the frame loop never observes a
/// half-applied transition.
pub struct Viewer<R: RenderBackend> {
    options: Options,
    registry: SceneRegistry,
    camera: Camera,
    selection: Selection,
    scheduler: TweenScheduler,
    timing: FrameTiming,
    viewport: Vec2,
    fullscreen: bool,
    backend: R,
}

impl<R: RenderBackend> Viewer<R> {
    /// Build a viewer: grid registry from the options' layout, camera on
    /// the +Z axis looking at the origin.
    pub fn new(
        options: Options,
        width: u32,
        height: u32,
        backend: R,
    ) -> Self {
        let registry = SceneRegistry::grid(
            options.scene.grid_spacing,
            options.scene.grid_depth,
            Vec3::from_array(options.colors.inactive),
        );
        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, options.camera.distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: if height > 0 {
                width as f32 / height as f32
            } else {
                1.0
            },
            fovy: options.camera.fovy,
            znear: options.camera.znear,
            zfar: options.camera.zfar,
        };

        Self {
            options,
            registry,
            camera,
            selection: Selection::Idle,
            scheduler: TweenScheduler::new(),
            timing: FrameTiming::new(),
            viewport: Vec2::new(width as f32, height as f32),
            fullscreen: false,
            backend,
        }
    }

    /// Execute one command at `now`.
    ///
    /// `now` is the host loop's clock and becomes the start time of any
    /// tween the command spawns.
    pub fn execute(&mut self, command: ViewerCommand, now: Instant) {
        match command {
            ViewerCommand::Pick { screen } => self.handle_pick(screen, now),
            ViewerCommand::ToggleFullscreen => {
                self.fullscreen = !self.fullscreen;
                self.backend.set_fullscreen(self.fullscreen);
            }
            ViewerCommand::Resize { width, height } => {
                self.viewport = Vec2::new(width as f32, height as f32);
                self.camera.set_viewport(width, height);
                self.backend.resize(width, height);
            }
        }
    }

    /// Advance one frame: spin the focused object, advance tweens,
    /// render.
    ///
    /// A failed lookup logs and skips that mutation; a single bad tick
    /// must never take the render loop down.
    pub fn tick(&mut self, now: Instant) {
        let dt = self.timing.tick(now);

        if let Selection::Focused(id) = self.selection {
            match self.registry.get_mut(id) {
                Ok(object) => {
                    object.rotation.y += dt.as_secs_f32()
                        * self.options.animation.rotation_rate;
                }
                Err(e) => log::warn!("focus spin skipped: {e}"),
            }
        }

        self.scheduler.update(now, &mut self.registry);
        self.backend.render(&self.registry, &self.camera);
    }

    /// Apply a click: deactivate first, then focus the nearest hit.
    ///
    /// The deactivate-then-reprocess order means a click on empty space
    /// just releases, a click on another object retargets in one event,
    /// and a click on the focused object itself refocuses it.
    fn handle_pick(&mut self, screen: Vec2, now: Instant) {
        let hits = picking::pick(
            screen,
            self.viewport,
            &self.camera,
            self.registry.all(),
        );

        if let Err(e) = self.release_focus(now) {
            log::warn!("release skipped: {e}");
        }

        if let Some(hit) = hits.first() {
            if let Err(e) = self.focus(hit.id, now) {
                log::warn!("focus skipped: {e}");
            }
        }
    }

    /// Send the focused object home and return to `Idle`. No-op when
    /// nothing is focused.
    fn release_focus(&mut self, now: Instant) -> Result<(), VitrineError> {
        let Selection::Focused(id) = self.selection else {
            return Ok(());
        };
        // Reset the slot first so a stale id can't wedge the machine.
        self.selection = Selection::Idle;

        let inactive = Vec3::from_array(self.options.colors.inactive);
        let duration = self.random_duration();
        let (from, home) = {
            let object = self.registry.get_mut(id).map_err(|_| {
                VitrineError::InvariantViolation(format!(
                    "focused object {id} is not in the registry"
                ))
            })?;
            object.color = inactive;
            (object.position, object.rest_position())
        };

        self.scheduler.start(Tween::new(
            TweenKey {
                object: id,
                attribute: TweenAttribute::Position,
            },
            from,
            home,
            now,
            duration,
            EasingFunction::DEFAULT,
        ));
        Ok(())
    }

    /// Highlight `id` and tween it to the focal point.
    fn focus(&mut self, id: u32, now: Instant) -> Result<(), VitrineError> {
        let highlight = Vec3::from_array(self.options.colors.highlight);
        let focal = Vec3::from_array(self.options.scene.focal_point);
        let duration = self.random_duration();
        let from = {
            let object = self.registry.get_mut(id)?;
            object.color = highlight;
            object.position
        };

        self.scheduler.start(Tween::new(
            TweenKey {
                object: id,
                attribute: TweenAttribute::Position,
            },
            from,
            focal,
            now,
            duration,
            EasingFunction::DEFAULT,
        ));
        self.selection = Selection::Focused(id);
        Ok(())
    }

    /// A fresh duration in the configured [min, max) range, or zero
    /// (snap) when animation is disabled.
    fn random_duration(&self) -> Duration {
        let animation = &self.options.animation;
        if !animation.enabled {
            return Duration::ZERO;
        }
        let min = animation.min_duration_ms;
        let max = animation.max_duration_ms.max(min + 1);
        Duration::from_millis(rand::rng().random_range(min..max))
    }

    // -- Accessors --

    /// The scene registry.
    #[must_use]
    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The tween scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &TweenScheduler {
        &self.scheduler
    }

    /// Whether any tween is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.scheduler.is_animating()
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    /// Whether the viewer believes it is fullscreen.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Current viewport size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// The render backend.
    #[must_use]
    pub fn backend(&self) -> &R {
        &self.backend
    }
}
