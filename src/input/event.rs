/// Platform-agnostic input events.
///
/// These are fed into an [`InputBehaviour`](super::InputBehaviour) which
/// converts them into [`CameraCommand`](crate::command::CameraCommand)
/// values.
///
/// # Example
///
/// ```ignore
/// let cmd = behaviour.handle_event(
///     &InputEvent::MouseMove { x: 100.0, y: 200.0 },
///     camera.position(),
///     viewport,
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key was pressed.
    KeyDown {
        /// DOM `key` value (`"Escape"`, `"r"`, ...).
        key: String,
        /// Legacy numeric key code (`which`), 0 when unknown.
        key_code: u32,
    },
    /// Mouse button pressed.
    MouseDown {
        /// Which button.
        button: MouseButton,
        /// Pointer x in client pixels.
        x: f32,
        /// Pointer y in client pixels.
        y: f32,
    },
    /// Mouse button released.
    MouseUp {
        /// Which button.
        button: MouseButton,
    },
    /// Pointer moved to an absolute client position.
    MouseMove {
        /// Pointer x in client pixels.
        x: f32,
        /// Pointer y in client pixels.
        y: f32,
    },
    /// Scroll wheel.
    Wheel {
        /// Amount scrolled.
        delta: WheelDelta,
    },
}

/// Scroll amount as reported by the different wheel event flavours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelDelta {
    /// `mousewheel` `wheelDelta`, positive when scrolling away from the
    /// user. Passed through unscaled.
    Raw(f32),
    /// `DOMMouseScroll` `detail` in lines, positive when scrolling toward the
    /// user.
    Lines(f32),
}

/// Mouse button identifier, numbered like the DOM's legacy `which`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// No button held.
    #[default]
    None,
    /// Primary (left) mouse button.
    Left,
    /// Middle mouse button (wheel click).
    Middle,
    /// Secondary (right) mouse button.
    Right,
}

impl MouseButton {
    /// Map a legacy `which` value (1 = left, 2 = middle, 3 = right).
    #[must_use]
    pub fn from_which(which: u32) -> Self {
        match which {
            1 => Self::Left,
            2 => Self::Middle,
            3 => Self::Right,
            _ => Self::None,
        }
    }

    /// Map a standard `MouseEvent.button` value (0 = left, 1 = middle,
    /// 2 = right).
    #[must_use]
    pub fn from_dom_button(button: i16) -> Self {
        match button {
            0 => Self::Left,
            1 => Self::Middle,
            2 => Self::Right,
            _ => Self::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn which_and_button_numbering_agree() {
        assert_eq!(MouseButton::from_which(1), MouseButton::from_dom_button(0));
        assert_eq!(MouseButton::from_which(2), MouseButton::Middle);
        assert_eq!(MouseButton::from_dom_button(1), MouseButton::Middle);
        assert_eq!(MouseButton::from_which(3), MouseButton::Right);
        assert_eq!(MouseButton::from_which(0), MouseButton::None);
        assert_eq!(MouseButton::from_dom_button(4), MouseButton::None);
    }
}
