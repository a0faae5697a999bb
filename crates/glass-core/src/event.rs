//! Input events delivered to widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event delivered to a widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Mouse left widget bounds
    MouseLeave,
    /// Touch started
    TouchStart {
        /// Touch identifier
        id: TouchId,
        /// Touch position
        position: Point,
    },
    /// Touch ended
    TouchEnd {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
    },
    /// Touch cancelled (e.g., palm rejection)
    TouchCancel {
        /// Touch identifier
        id: TouchId,
    },
    /// Key pressed
    KeyDown {
        /// Key pressed
        key: Key,
    },
    /// Widget gained focus
    FocusIn,
    /// Widget lost focus
    FocusOut,
}

impl Event {
    /// Screen position carried by the event, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. }
            | Self::TouchStart { position, .. }
            | Self::TouchEnd { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Touch identifier for multi-touch tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TouchId(pub u32);

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MouseButton {
    /// Primary button
    #[default]
    Left,
    /// Secondary button
    Right,
    /// Wheel button
    Middle,
}

/// Keyboard keys widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Enter / Return
    Enter,
    /// Space bar
    Space,
    /// Escape
    Escape,
    /// Tab
    Tab,
}

impl Key {
    /// Whether the key activates a focused control.
    #[must_use]
    pub const fn is_activation(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}
