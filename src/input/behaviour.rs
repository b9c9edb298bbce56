//! Converts raw pointer and keyboard events into camera commands.
//!
//! `InputBehaviour` owns all transient input state (held button, press
//! point, camera snapshot) and the key-binding map. It never touches the
//! camera itself: it reads the raw camera position at mouse-down and hands
//! back a [`CameraCommand`] for the caller to apply.

use glam::Vec2;

use super::event::{InputEvent, MouseButton, WheelDelta};
use super::keyboard::{KeyAction, KEY_CODE_ESCAPE};
use super::mouse::DragState;
use crate::command::CameraCommand;
use crate::options::{InputOptions, KeybindingOptions, PreviewOptions};
use crate::util::vector::Vector3;

/// Maps input events onto camera commands.
///
/// | Event | Condition | Command |
/// |---|---|---|
/// | key down | bound to [`KeyAction::Reset`] | [`CameraCommand::Reset`] |
/// | mouse down | any button | none, records drag state |
/// | mouse up | any | none, clears held button |
/// | mouse move | middle held | [`CameraCommand::Rotate`] |
/// | mouse move | left held | [`CameraCommand::Move`] |
/// | wheel | always | [`CameraCommand::Zoom`] |
#[derive(Debug, Clone)]
pub struct InputBehaviour {
    drag: DragState,
    rotate_sensitivity: f32,
    input: InputOptions,
    key_bindings: KeybindingOptions,
}

impl InputBehaviour {
    /// Create a behaviour with default sensitivity and key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::from_options(&PreviewOptions::default())
    }

    /// Create a behaviour configured from options.
    #[must_use]
    pub fn from_options(options: &PreviewOptions) -> Self {
        Self {
            drag: DragState::default(),
            rotate_sensitivity: options.camera.rotate_sensitivity,
            input: options.input.clone(),
            key_bindings: options.keybindings.clone(),
        }
    }

    /// Button currently held.
    #[must_use]
    pub fn pressed_button(&self) -> MouseButton {
        self.drag.pressed_button
    }

    /// Pointer location at the last mouse-down.
    #[must_use]
    pub fn pressed_position(&self) -> Vector3 {
        self.drag.pressed_position
    }

    /// Camera position recorded at the last mouse-down.
    #[must_use]
    pub fn last_camera_position(&self) -> Vector3 {
        self.drag.last_camera_position
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Drop any held button, e.g. when the window loses focus mid-drag.
    pub fn release(&mut self) {
        self.drag.release();
    }

    /// Process one event and return zero or one commands.
    ///
    /// `camera_position` is the camera's raw position, snapshotted on
    /// mouse-down. `viewport` is the window's inner size, used as the
    /// reference for middle-button rotation.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        camera_position: Vector3,
        viewport: Vec2,
    ) -> Option<CameraCommand> {
        match *event {
            InputEvent::KeyDown { ref key, key_code } => {
                self.handle_key_down(key, key_code)
            }
            InputEvent::MouseDown { button, x, y } => {
                self.drag.press(button, x, y, camera_position);
                None
            }
            InputEvent::MouseUp { .. } => {
                self.drag.release();
                None
            }
            InputEvent::MouseMove { x, y } => {
                self.handle_mouse_move(x, y, viewport)
            }
            InputEvent::Wheel { delta } => Some(CameraCommand::Zoom {
                amount: self.wheel_amount(delta),
            }),
        }
    }

    fn handle_key_down(
        &self,
        key: &str,
        key_code: u32,
    ) -> Option<CameraCommand> {
        let action = self.key_bindings.lookup(key).or_else(|| {
            // Browsers without `key` only report the numeric code.
            (key.is_empty() && key_code == KEY_CODE_ESCAPE)
                .then_some(KeyAction::Reset)
        })?;
        match action {
            KeyAction::Reset => Some(CameraCommand::Reset),
        }
    }

    fn handle_mouse_move(
        &self,
        x: f32,
        y: f32,
        viewport: Vec2,
    ) -> Option<CameraCommand> {
        match self.drag.pressed_button {
            MouseButton::Middle => {
                let center = viewport / 2.0;
                Some(CameraCommand::Rotate {
                    x: (center.y - y) * self.rotate_sensitivity,
                    y: (center.x - x) * self.rotate_sensitivity,
                    z: 0.0,
                })
            }
            MouseButton::Left => {
                let (x, y) = self.drag.drag_target(x, y);
                Some(CameraCommand::Move { x, y })
            }
            MouseButton::None | MouseButton::Right => None,
        }
    }

    fn wheel_amount(&self, delta: WheelDelta) -> f32 {
        match delta {
            WheelDelta::Raw(amount) => amount,
            WheelDelta::Lines(lines) => -lines * self.input.line_scale,
        }
    }
}

impl Default for InputBehaviour {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn escape() -> InputEvent {
        InputEvent::KeyDown {
            key: "Escape".into(),
            key_code: KEY_CODE_ESCAPE,
        }
    }

    #[test]
    fn escape_resets() {
        let mut input = InputBehaviour::new();
        assert_eq!(
            input.handle_event(&escape(), Vector3::ZERO, VIEWPORT),
            Some(CameraCommand::Reset)
        );
    }

    #[test]
    fn bare_key_code_still_resets() {
        let mut input = InputBehaviour::new();
        let event = InputEvent::KeyDown {
            key: String::new(),
            key_code: KEY_CODE_ESCAPE,
        };
        assert_eq!(
            input.handle_event(&event, Vector3::ZERO, VIEWPORT),
            Some(CameraCommand::Reset)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut input = InputBehaviour::new();
        let event = InputEvent::KeyDown {
            key: "a".into(),
            key_code: 65,
        };
        assert_eq!(input.handle_event(&event, Vector3::ZERO, VIEWPORT), None);
    }

    #[test]
    fn rebound_reset_key() {
        let mut input = InputBehaviour::new();
        input.key_bindings_mut().bind(KeyAction::Reset, "r");
        let r = InputEvent::KeyDown {
            key: "r".into(),
            key_code: 82,
        };
        assert_eq!(
            input.handle_event(&r, Vector3::ZERO, VIEWPORT),
            Some(CameraCommand::Reset)
        );
        assert_eq!(
            input.handle_event(&escape(), Vector3::ZERO, VIEWPORT),
            None
        );
    }

    #[test]
    fn left_drag_moves_relative_to_press() {
        let mut input = InputBehaviour::new();
        let down = InputEvent::MouseDown {
            button: MouseButton::Left,
            x: 100.0,
            y: 100.0,
        };
        assert_eq!(input.handle_event(&down, Vector3::ZERO, VIEWPORT), None);
        let cmd = input.handle_event(
            &InputEvent::MouseMove { x: 150.0, y: 120.0 },
            Vector3::ZERO,
            VIEWPORT,
        );
        assert_eq!(cmd, Some(CameraCommand::Move { x: 50.0, y: 20.0 }));
    }

    #[test]
    fn left_drag_continues_from_previous_camera_position() {
        let mut input = InputBehaviour::new();
        let down = InputEvent::MouseDown {
            button: MouseButton::Left,
            x: 10.0,
            y: 10.0,
        };
        let camera = Vector3::new(50.0, 20.0, 7.0);
        let _ = input.handle_event(&down, camera, VIEWPORT);
        assert_eq!(input.last_camera_position(), Vector3::new(50.0, 20.0, 7.0));
        // camera position passed on move is ignored, only the snapshot counts
        let cmd = input.handle_event(
            &InputEvent::MouseMove { x: 0.0, y: 30.0 },
            Vector3::new(999.0, 999.0, 0.0),
            VIEWPORT,
        );
        assert_eq!(cmd, Some(CameraCommand::Move { x: 40.0, y: 40.0 }));
    }

    #[test]
    fn middle_drag_rotates_around_viewport_center() {
        let mut input = InputBehaviour::new();
        let down = InputEvent::MouseDown {
            button: MouseButton::Middle,
            x: 0.0,
            y: 0.0,
        };
        let _ = input.handle_event(&down, Vector3::ZERO, VIEWPORT);
        let cmd = input.handle_event(
            &InputEvent::MouseMove { x: 200.0, y: 100.0 },
            Vector3::ZERO,
            VIEWPORT,
        );
        // ((300 - 100) * 0.01, (400 - 200) * 0.01, 0)
        let Some(CameraCommand::Rotate { x, y, z }) = cmd else {
            panic!("expected rotate, got {cmd:?}");
        };
        assert!((x - 2.0).abs() < 1e-5);
        assert!((y - 2.0).abs() < 1e-5);
        assert_eq!(z, 0.0);
    }

    #[test]
    fn moves_without_button_or_with_right_do_nothing() {
        let mut input = InputBehaviour::new();
        let mv = InputEvent::MouseMove { x: 5.0, y: 5.0 };
        assert_eq!(input.handle_event(&mv, Vector3::ZERO, VIEWPORT), None);

        let down = InputEvent::MouseDown {
            button: MouseButton::Right,
            x: 0.0,
            y: 0.0,
        };
        let _ = input.handle_event(&down, Vector3::ZERO, VIEWPORT);
        assert_eq!(input.pressed_button(), MouseButton::Right);
        assert_eq!(input.handle_event(&mv, Vector3::ZERO, VIEWPORT), None);
    }

    #[test]
    fn mouse_up_ends_drag() {
        let mut input = InputBehaviour::new();
        let down = InputEvent::MouseDown {
            button: MouseButton::Left,
            x: 0.0,
            y: 0.0,
        };
        let _ = input.handle_event(&down, Vector3::ZERO, VIEWPORT);
        let up = InputEvent::MouseUp {
            button: MouseButton::Left,
        };
        assert_eq!(input.handle_event(&up, Vector3::ZERO, VIEWPORT), None);
        assert_eq!(input.pressed_button(), MouseButton::None);
        let mv = InputEvent::MouseMove { x: 30.0, y: 30.0 };
        assert_eq!(input.handle_event(&mv, Vector3::ZERO, VIEWPORT), None);
    }

    #[test]
    fn wheel_delta_passes_through() {
        let mut input = InputBehaviour::new();
        let wheel = InputEvent::Wheel {
            delta: WheelDelta::Raw(120.0),
        };
        assert_eq!(
            input.handle_event(&wheel, Vector3::ZERO, VIEWPORT),
            Some(CameraCommand::Zoom { amount: 120.0 })
        );
    }

    #[test]
    fn legacy_scroll_lines_are_scaled_and_inverted() {
        let mut input = InputBehaviour::new();
        let wheel = InputEvent::Wheel {
            delta: WheelDelta::Lines(3.0),
        };
        assert_eq!(
            input.handle_event(&wheel, Vector3::ZERO, VIEWPORT),
            Some(CameraCommand::Zoom { amount: -120.0 })
        );
    }

    #[test]
    fn sensitivity_from_options() {
        let mut options = PreviewOptions::default();
        options.camera.rotate_sensitivity = 0.5;
        let mut input = InputBehaviour::from_options(&options);
        let down = InputEvent::MouseDown {
            button: MouseButton::Middle,
            x: 0.0,
            y: 0.0,
        };
        let _ = input.handle_event(&down, Vector3::ZERO, VIEWPORT);
        let cmd = input.handle_event(
            &InputEvent::MouseMove { x: 400.0, y: 290.0 },
            Vector3::ZERO,
            VIEWPORT,
        );
        assert_eq!(cmd, Some(CameraCommand::Rotate { x: 5.0, y: 0.0, z: 0.0 }));
    }
}
