use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Grid layout and focal-point parameters.
pub struct SceneOptions {
    /// Distance between adjacent grid slots along X and Y.
    pub grid_spacing: f32,
    /// Z depth shared by every grid slot.
    pub grid_depth: f32,
    /// World position a focused object animates to.
    pub focal_point: [f32; 3],
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            grid_spacing: 5.0,
            grid_depth: 10.0,
            focal_point: [0.0, 0.0, 25.0],
        }
    }
}
