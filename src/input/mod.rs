//! Platform-agnostic input events and their translation into commands.

mod event;
mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::InputProcessor;
