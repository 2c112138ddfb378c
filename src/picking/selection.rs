//! The single active-selection slot.

/// Focus state of the viewer: nothing, or exactly one object.
///
/// This is a plain value threaded through the engine, never global
/// state. The engine's click handler is the only writer; the frame loop
/// only reads it to decide which object spins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Selection {
    /// No object is focused.
    #[default]
    Idle,
    /// A specific object by id, moved to the focal point and rotating.
    Focused(u32),
}

impl Selection {
    /// Id of the focused object, if any.
    #[inline]
    #[must_use]
    pub fn focused_id(self) -> Option<u32> {
        match self {
            Self::Idle => None,
            Self::Focused(id) => Some(id),
        }
    }

    /// Whether any object is focused.
    #[inline]
    #[must_use]
    pub fn is_focused(self) -> bool {
        matches!(self, Self::Focused(_))
    }
}
