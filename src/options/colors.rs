use serde::{Deserialize, Serialize};

/// Color palette options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// RGB color of unfocused objects.
    pub inactive: [f32; 3],
    /// RGB color of the focused object.
    pub highlight: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            inactive: [0.5, 0.5, 0.5],
            highlight: [0.5, 0.0, 0.5],
        }
    }
}
