use super::core::{CameraSource, CameraState};
use crate::options::CameraOptions;
use crate::util::smoothing::ExponentialDecay;
use crate::util::vector::Vector3;

/// Camera that eases its displayed position and rotation toward the raw
/// state.
///
/// Each call to [`frame_position`](CameraSource::frame_position) or
/// [`frame_rotation`](CameraSource::frame_rotation) advances the displayed
/// value one decay step, so the easing speed is tied to the caller's frame
/// rate.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedCamera {
    state: CameraState,
    smoothed_position: Vector3,
    smoothed_rotation: Vector3,
    position_decay: ExponentialDecay,
    rotation_decay: ExponentialDecay,
}

impl SmoothedCamera {
    /// Camera at the origin with the default decays (0.75 position, 0.9
    /// rotation).
    #[must_use]
    pub fn new() -> Self {
        Self::with_decay(ExponentialDecay::POSITION, ExponentialDecay::ROTATION)
    }

    /// Camera at the origin with explicit decays.
    #[must_use]
    pub fn with_decay(
        position_decay: ExponentialDecay,
        rotation_decay: ExponentialDecay,
    ) -> Self {
        Self {
            state: CameraState::default(),
            smoothed_position: Vector3::ZERO,
            smoothed_rotation: Vector3::ZERO,
            position_decay,
            rotation_decay,
        }
    }

    /// Camera configured from options.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self::with_decay(
            ExponentialDecay::new(options.position_decay),
            ExponentialDecay::new(options.rotation_decay),
        )
    }

    /// Last displayed position, without advancing it.
    #[must_use]
    pub fn smoothed_position(&self) -> Vector3 {
        self.smoothed_position
    }

    /// Last displayed rotation, without advancing it.
    #[must_use]
    pub fn smoothed_rotation(&self) -> Vector3 {
        self.smoothed_rotation
    }
}

impl Default for SmoothedCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraSource for SmoothedCamera {
    fn state(&self) -> &CameraState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CameraState {
        &mut self.state
    }

    fn frame_position(&mut self) -> Vector3 {
        self.position_decay
            .step_vector(&mut self.smoothed_position, self.state.position);
        self.smoothed_position
    }

    fn frame_rotation(&mut self) -> Vector3 {
        self.rotation_decay
            .step_vector(&mut self.smoothed_rotation, self.state.rotation);
        self.smoothed_rotation
    }
}
