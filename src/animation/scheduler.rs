//! Keyed tween scheduling.
//!
//! The scheduler owns every in-flight [`Tween`], advances them once per
//! frame tick, and writes the interpolated values into the scene registry.
//! Tween identity is the (object, attribute) pair: starting a tween on an
//! occupied key cancels and replaces the old one, so two tweens never
//! fight over the same attribute.

use glam::Vec3;
use rustc_hash::FxHashMap;
use web_time::Instant;

use super::tween::{Tween, TweenAttribute, TweenKey};
use crate::scene::{SceneObject, SceneRegistry};

/// Owns and advances all in-flight attribute tweens.
#[derive(Debug, Default)]
pub struct TweenScheduler {
    tweens: FxHashMap<TweenKey, Tween>,
}

impl TweenScheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tweens: FxHashMap::default(),
        }
    }

    /// Start a tween, replacing any in-flight tween on the same key.
    ///
    /// Callers build tweens from the attribute's *current* value, so a
    /// replacement picks up mid-flight without snapping.
    pub fn start(&mut self, tween: Tween) {
        let _ = self.tweens.insert(tween.key, tween);
    }

    /// Advance every tween to `now` and write the interpolated values
    /// into `registry`. Tweens that reach their target are retired after
    /// their final value is written.
    pub fn update(&mut self, now: Instant, registry: &mut SceneRegistry) {
        if self.tweens.is_empty() {
            return;
        }

        let mut done: Vec<TweenKey> = Vec::new();
        for (key, tween) in &self.tweens {
            let Ok(object) = registry.get_mut(key.object) else {
                // The registry is fixed, so this is unreachable in
                // practice; drop the orphan tween and keep the frame.
                log::warn!(
                    "tween targets missing object {}; dropping",
                    key.object
                );
                done.push(*key);
                continue;
            };

            apply(object, key.attribute, tween.sample(now));
            if tween.is_complete(now) {
                done.push(*key);
            }
        }

        for key in done {
            let _ = self.tweens.remove(&key);
        }
    }

    /// Jump every tween to its end value and retire it.
    pub fn skip(&mut self, registry: &mut SceneRegistry) {
        for (key, tween) in self.tweens.drain() {
            if let Ok(object) = registry.get_mut(key.object) {
                apply(object, key.attribute, tween.end);
            }
        }
    }

    /// Discard all tweens without applying final values.
    pub fn cancel_all(&mut self) {
        self.tweens.clear();
    }

    /// Whether any tween is in flight.
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
    }

    /// Number of in-flight tweens.
    #[inline]
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.tweens.len()
    }

    /// The in-flight tween on `key`, if any.
    #[must_use]
    pub fn get(&self, key: TweenKey) -> Option<&Tween> {
        self.tweens.get(&key)
    }
}

/// Write an interpolated value into the addressed attribute.
fn apply(object: &mut SceneObject, attribute: TweenAttribute, value: Vec3) {
    match attribute {
        TweenAttribute::Position => object.position = value,
        TweenAttribute::Color => object.color = value,
    }
}
