//! The viewer's complete interactive vocabulary.
//!
//! Every user-facing operation (click, double-click, resize) is
//! represented as a `ViewerCommand`. Consumers construct commands (or
//! take them from an [`InputProcessor`](crate::input::InputProcessor))
//! and pass them to [`Viewer::execute`](super::Viewer::execute). The
//! viewer never cares *how* a command was triggered.

use glam::Vec2;

/// A discrete operation the viewer can perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerCommand {
    /// Pick at a screen position: deactivate any focused object, then
    /// focus the nearest object under the point, if any.
    Pick {
        /// Click position in physical pixels, origin top-left.
        screen: Vec2,
    },

    /// Enter or leave fullscreen (forwarded to the render backend).
    ToggleFullscreen,

    /// The display surface was resized.
    Resize {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}
