//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! double-click timing). It is the only thing that sits between raw
//! window events and the engine's
//! [`execute`](crate::engine::Viewer::execute) method.

use glam::Vec2;
use web_time::{Duration, Instant};

use super::event::{InputEvent, MouseButton};
use crate::engine::ViewerCommand;

const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(400);

/// Converts raw window events into [`ViewerCommand`]s.
///
/// A primary-button release is a click and always emits a pick at the
/// current cursor position; a second click within the double-click
/// threshold additionally emits a fullscreen toggle, matching
/// browser-style click/dblclick delivery.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// for cmd in processor.handle_event(event, Instant::now()) {
///     viewer.execute(cmd, Instant::now());
/// }
/// ```
#[derive(Debug)]
pub struct InputProcessor {
    /// Current cursor position in physical pixels.
    cursor: Vec2,
    /// Timestamp of the previous click, if it can still pair into a
    /// double click.
    last_click: Option<Instant>,
}

impl InputProcessor {
    /// Create a processor with no pending click state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor: Vec2::ZERO,
            last_click: None,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Process a raw input event and return the commands it produces.
    ///
    /// `now` comes from the host loop so that click pairing shares the
    /// viewer's clock.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        now: Instant,
    ) -> Vec<ViewerCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(x, y);
                Vec::new()
            }
            InputEvent::MouseButton { button, pressed } => {
                if button != MouseButton::Left || pressed {
                    return Vec::new();
                }
                self.handle_click(now)
            }
            InputEvent::Resized { width, height } => {
                vec![ViewerCommand::Resize { width, height }]
            }
        }
    }

    /// A primary-button release: emit the pick, and the fullscreen
    /// toggle when it completes a double click.
    fn handle_click(&mut self, now: Instant) -> Vec<ViewerCommand> {
        let mut commands = vec![ViewerCommand::Pick {
            screen: self.cursor,
        }];

        let paired = self.last_click.is_some_and(|last| {
            now.saturating_duration_since(last) < DOUBLE_CLICK_THRESHOLD
        });
        if paired {
            // A pair consumes both clicks; a third click starts fresh.
            self.last_click = None;
            commands.push(ViewerCommand::ToggleFullscreen);
        } else {
            self.last_click = Some(now);
        }

        commands
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
