use crate::util::vector::Vector3;

use super::event::MouseButton;

/// Drag bookkeeping recorded at mouse-down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    /// Button currently held, or [`MouseButton::None`].
    pub pressed_button: MouseButton,
    /// Pointer location at the last mouse-down.
    pub pressed_position: Vector3,
    /// Raw camera position at the last mouse-down.
    pub last_camera_position: Vector3,
}

impl DragState {
    /// Record a press of `button` at `(x, y)` with the camera at
    /// `camera_position`.
    pub fn press(
        &mut self,
        button: MouseButton,
        x: f32,
        y: f32,
        camera_position: Vector3,
    ) {
        self.pressed_button = button;
        let _ = self.pressed_position.set(x, y, 0.0);
        let _ = camera_position.clone_to(&mut self.last_camera_position);
    }

    /// Forget the held button. The snapshots are kept until the next press.
    pub fn release(&mut self) {
        self.pressed_button = MouseButton::None;
    }

    /// Camera pan for a pointer at `(x, y)`: the offset from the press point
    /// added to the camera position recorded at press time.
    #[must_use]
    pub fn drag_target(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x - self.pressed_position.x + self.last_camera_position.x,
            y - self.pressed_position.y + self.last_camera_position.y,
        )
    }
}
