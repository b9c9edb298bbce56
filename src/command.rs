//! The camera's complete interactive vocabulary.
//!
//! Every camera change, whether triggered by a key press, a mouse gesture
//! or a programmatic call, is a `CameraCommand`. Input produces them,
//! [`PreviewSession::execute`](crate::session::PreviewSession::execute)
//! applies them.

use crate::camera::CameraSource;

/// A single operation on a [`CameraSource`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Return to the origin with no rotation.
    Reset,

    /// Set the pan offset.
    Move {
        /// Horizontal offset in CSS pixels.
        x: f32,
        /// Vertical offset in CSS pixels.
        y: f32,
    },

    /// Set the rotation in degrees.
    Rotate {
        /// Rotation around the horizontal axis.
        x: f32,
        /// Rotation around the vertical axis.
        y: f32,
        /// Rotation around the depth axis.
        z: f32,
    },

    /// Move along the depth axis.
    Zoom {
        /// Signed distance; positive moves toward the viewer.
        amount: f32,
    },
}

impl CameraCommand {
    /// Apply this command to `camera`.
    pub fn apply(self, camera: &mut dyn CameraSource) {
        log::trace!("camera command {self:?}");
        match self {
            Self::Reset => camera.reset(),
            Self::Move { x, y } => camera.move_to(x, y),
            Self::Rotate { x, y, z } => camera.rotate(x, y, z),
            Self::Zoom { amount } => camera.zoom(amount),
        }
    }
}
