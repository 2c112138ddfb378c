//! The viewer engine: command vocabulary and per-frame coordination.

mod command;
mod core;

pub use command::ViewerCommand;
pub use self::core::Viewer;
