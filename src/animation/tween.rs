//! A single in-flight attribute animation.

use glam::Vec3;
use web_time::{Duration, Instant};

use super::easing::EasingFunction;

/// Which mutable attribute of a scene object a tween writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenAttribute {
    /// World-space position.
    Position,
    /// Display color (RGB, 0..1 per channel).
    Color,
}

/// Identity of a tween: one object attribute.
///
/// The scheduler holds at most one tween per key; starting a new tween on
/// an occupied key replaces the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenKey {
    /// Id of the scene object being animated.
    pub object: u32,
    /// The attribute being written.
    pub attribute: TweenAttribute,
}

/// A timed interpolation of one attribute from a start to an end value.
#[derive(Debug, Clone)]
pub struct Tween {
    /// What this tween writes to.
    pub key: TweenKey,
    /// Value at progress 0.
    pub start: Vec3,
    /// Value at progress 1.
    pub end: Vec3,
    /// When the tween began.
    pub start_time: Instant,
    /// Total duration. Zero completes on the first update.
    pub duration: Duration,
    /// Easing curve applied to raw progress.
    pub easing: EasingFunction,
}

impl Tween {
    /// Create a tween starting at `start_time`.
    #[must_use]
    pub fn new(
        key: TweenKey,
        start: Vec3,
        end: Vec3,
        start_time: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            key,
            start,
            end,
            start_time,
            duration,
            easing,
        }
    }

    /// Raw progress of this tween at `now`, in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start_time);
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated value at `now`, with easing applied.
    #[inline]
    #[must_use]
    pub fn sample(&self, now: Instant) -> Vec3 {
        let t = self.easing.evaluate(self.progress(now));
        self.start.lerp(self.end, t)
    }

    /// Whether the tween has reached its target at `now`.
    #[inline]
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}
