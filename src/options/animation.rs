use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Focus/return animation parameters.
pub struct AnimationOptions {
    /// Whether focus moves animate at all. When false they snap.
    pub enabled: bool,
    /// Lower bound (inclusive) of the random tween duration, in ms.
    pub min_duration_ms: u64,
    /// Upper bound (exclusive) of the random tween duration, in ms.
    pub max_duration_ms: u64,
    /// Spin rate of the focused object, in radians per second.
    pub rotation_rate: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            min_duration_ms: 1000,
            max_duration_ms: 2000,
            rotation_rate: 0.5,
        }
    }
}
