//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (grid layout, animation timing, colors, camera
//! placement) are consolidated here. Options serialize to/from TOML; all
//! sub-structs use `#[serde(default)]` so partial files (e.g. only
//! overriding `[colors]`) work correctly.

mod animation;
mod camera;
mod colors;
mod scene;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};

use crate::error::VitrineError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Grid layout and focal point.
    pub scene: SceneOptions,
    /// Focus/return animation timing.
    pub animation: AnimationOptions,
    /// Color palette.
    pub colors: ColorOptions,
    /// Camera projection and placement.
    pub camera: CameraOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`VitrineError::Io`] if the file cannot be read,
    /// [`VitrineError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let content = std::fs::read_to_string(path).map_err(VitrineError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`VitrineError::OptionsParse`] on serialization failure,
    /// [`VitrineError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), VitrineError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VitrineError::Io)?;
        }
        std::fs::write(path, content).map_err(VitrineError::Io)
    }
}
