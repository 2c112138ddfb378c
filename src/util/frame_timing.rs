//! Frame clock: per-tick delta and a smoothed FPS readout.

use web_time::{Duration, Instant};

/// Per-tick clock: frame delta plus a smoothed FPS readout.
///
/// The delta drives the focus spin and tween progress; the FPS figure is
/// what a host overlay displays.
pub struct FrameTiming {
    /// Previous tick timestamp; `None` until the first tick.
    last_tick: Option<Instant>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a frame timer. The first tick reports a zero delta.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_tick: None,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Advance the clock to `now` and return the elapsed time since the
    /// previous tick (zero on the first call, and for a `now` earlier
    /// than the last tick).
    pub fn tick(&mut self, now: Instant) -> Duration {
        let elapsed = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_tick = Some(now);

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        elapsed
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}
