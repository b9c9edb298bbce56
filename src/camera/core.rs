use crate::util::vector::Vector3;

/// Raw camera state shared by every [`CameraSource`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraState {
    /// Pan offset (x, y) and zoom depth (z), in CSS pixels.
    pub position: Vector3,
    /// Rotation around the x, y and z axes, in degrees.
    pub rotation: Vector3,
}

impl CameraState {
    /// Zero position and rotation.
    pub fn reset(&mut self) {
        let _ = self.position.reset();
        let _ = self.rotation.reset();
    }
}

/// A camera the stage can render from and input can drive.
///
/// The mutating commands (`reset`, `zoom`, `move_to`, `rotate`) always act
/// on the raw state. What the stage draws each frame comes from
/// [`frame_position`](Self::frame_position) and
/// [`frame_rotation`](Self::frame_rotation), which implementations may ease
/// toward the raw state instead of snapping to it.
pub trait CameraSource {
    /// Raw state.
    fn state(&self) -> &CameraState;

    /// Raw state, mutable.
    fn state_mut(&mut self) -> &mut CameraState;

    /// Raw position, ignoring any display smoothing.
    fn position(&self) -> Vector3 {
        self.state().position
    }

    /// Raw rotation, ignoring any display smoothing.
    fn rotation(&self) -> Vector3 {
        self.state().rotation
    }

    /// Return to the origin with no rotation.
    fn reset(&mut self) {
        self.state_mut().reset();
    }

    /// Move along the depth axis. Unbounded in both directions.
    fn zoom(&mut self, amount: f32) {
        self.state_mut().position.z += amount;
    }

    /// Set the pan offset, leaving depth untouched.
    fn move_to(&mut self, x: f32, y: f32) {
        let position = &mut self.state_mut().position;
        position.x = x;
        position.y = y;
    }

    /// Set the rotation absolutely.
    fn rotate(&mut self, x: f32, y: f32, z: f32) {
        let _ = self.state_mut().rotation.set(x, y, z);
    }

    /// Position to draw this frame. Called once per rendered frame.
    fn frame_position(&mut self) -> Vector3;

    /// Rotation to draw this frame. Called once per rendered frame.
    fn frame_rotation(&mut self) -> Vector3;
}

/// Camera whose displayed values are exactly its raw state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectCamera {
    state: CameraState,
}

impl DirectCamera {
    /// Camera at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CameraSource for DirectCamera {
    fn state(&self) -> &CameraState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CameraState {
        &mut self.state
    }

    fn frame_position(&mut self) -> Vector3 {
        self.state.position
    }

    fn frame_rotation(&mut self) -> Vector3 {
        self.state.rotation
    }
}
