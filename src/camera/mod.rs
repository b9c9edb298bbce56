//! Camera model for the preview stage.
//!
//! Provides the [`CameraSource`] interface with two display policies:
//! [`DirectCamera`] snaps to its raw state, [`SmoothedCamera`] eases toward
//! it.

/// Camera state, the `CameraSource` trait, and the direct camera.
pub mod core;
/// Exponentially smoothed camera.
pub mod smoothed;

pub use self::core::{CameraSource, CameraState, DirectCamera};
pub use smoothed::SmoothedCamera;
