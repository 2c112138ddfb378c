//! The seam between the viewer core and an actual renderer.
//!
//! The crate never draws; it hands the registry and camera to a
//! [`RenderBackend`] once per tick. A windowed host implements this with
//! its graphics stack; [`LogBackend`] is the headless stand-in used by
//! the demo binary and tests.

use crate::camera::Camera;
use crate::scene::SceneRegistry;

/// External rendering collaborator.
pub trait RenderBackend {
    /// Draw one frame from the current registry and camera state.
    fn render(&mut self, registry: &SceneRegistry, camera: &Camera);

    /// The display surface was resized.
    fn resize(&mut self, _width: u32, _height: u32) {}

    /// Fullscreen was toggled.
    fn set_fullscreen(&mut self, _enabled: bool) {}
}

/// Headless backend that renders to the log.
#[derive(Debug, Default)]
pub struct LogBackend {
    frames: u64,
}

impl LogBackend {
    /// Create a backend with a zeroed frame counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames rendered so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderBackend for LogBackend {
    fn render(&mut self, registry: &SceneRegistry, _camera: &Camera) {
        self.frames += 1;
        log::trace!(
            "frame {}: {} objects",
            self.frames,
            registry.len()
        );
    }

    fn resize(&mut self, width: u32, height: u32) {
        log::debug!("surface resized to {width}x{height}");
    }

    fn set_fullscreen(&mut self, enabled: bool) {
        log::debug!(
            "fullscreen {}",
            if enabled { "entered" } else { "exited" }
        );
    }
}
