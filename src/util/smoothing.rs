//! Exponential smoothing for displayed camera values.
//!
//! Each call moves the displayed value a fixed fraction of the way toward
//! its target, so repeated calls with a constant target converge
//! geometrically without overshoot.

use super::vector::Vector3;

/// Exponential decay toward a target value.
///
/// `decay` is the fraction of the previous displayed value kept on each
/// step: `next = current * decay + target * (1 - decay)`. It is clamped to
/// `[0.0, 1.0]`; `0.0` snaps immediately and `1.0` never moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDecay {
    decay: f32,
}

impl ExponentialDecay {
    /// Default decay for camera position.
    pub const POSITION: Self = Self { decay: 0.75 };
    /// Default decay for camera rotation.
    pub const ROTATION: Self = Self { decay: 0.9 };

    /// Create a decay with the given retained fraction.
    #[must_use]
    pub fn new(decay: f32) -> Self {
        Self {
            decay: decay.clamp(0.0, 1.0),
        }
    }

    /// Fraction of the previous value retained per step.
    #[must_use]
    pub fn decay(&self) -> f32 {
        self.decay
    }

    /// Advance a scalar one step toward `target`.
    #[inline]
    #[must_use]
    pub fn step(&self, current: f32, target: f32) -> f32 {
        current * self.decay + target * (1.0 - self.decay)
    }

    /// Advance `current` one step toward `target` in place.
    pub fn step_vector(&self, current: &mut Vector3, target: Vector3) {
        let mut pull = target;
        let _ = current
            .multiply_scalar(self.decay)
            .add(*pull.multiply_scalar(1.0 - self.decay));
    }
}

impl Default for ExponentialDecay {
    #[inline]
    fn default() -> Self {
        Self::POSITION
    }
}
