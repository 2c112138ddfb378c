//! Animation system: easing curves, attribute tweens, and the scheduler
//! that advances them once per frame tick.

pub mod easing;
mod scheduler;
mod tween;

pub use easing::EasingFunction;
pub use scheduler::TweenScheduler;
pub use tween::{Tween, TweenAttribute, TweenKey};
