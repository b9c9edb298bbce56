//! Mutable three-component vector with in-place arithmetic.
//!
//! Camera state and drag snapshots are held as [`Vector3`] so that the
//! per-frame update can mutate them without reallocating. Conversions to
//! and from [`glam::Vec3`] are provided for transform math at the stage
//! boundary.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A 3-component `f32` value mutated in place by its owner.
///
/// Every mutating method returns `&mut Self` so calls can be chained:
///
/// ```
/// use preview3d::util::vector::Vector3;
///
/// let mut v = Vector3::new(1.0, 2.0, 3.0);
/// v.multiply_scalar(2.0).add(Vector3::new(1.0, 1.0, 1.0));
/// assert_eq!(v, Vector3::new(3.0, 5.0, 7.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
    /// Depth component.
    pub z: f32,
}

impl Vector3 {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Replace all three components.
    pub fn set(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Set every component to zero.
    pub fn reset(&mut self) -> &mut Self {
        self.set(0.0, 0.0, 0.0)
    }

    /// Componentwise in-place addition.
    pub fn add(&mut self, other: Self) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self
    }

    /// Scale every component in place.
    pub fn multiply_scalar(&mut self, scalar: f32) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
        self
    }

    /// Round every component to `places` decimal places.
    ///
    /// Components too large to scale by `10^places` are kept as they are,
    /// as is the whole vector when `10^places` overflows `f32`.
    pub fn round(&mut self, places: u32) -> &mut Self {
        let factor = 10f32.powi(places.min(i32::MAX as u32) as i32);
        if !factor.is_finite() {
            return self;
        }
        self.round_by(factor)
    }

    /// Round using the historical factor `10 * (places - 1)`.
    ///
    /// Older releases computed the rounding factor this way, which for
    /// `places = 3` rounds to the nearest 1/20 rather than 1/1000. Kept only
    /// for callers that need to reproduce previously recorded transforms.
    /// `places` of 0 or 1 yields a non-positive factor; the vector is left
    /// untouched in that case instead of producing NaN.
    pub fn round_legacy(&mut self, places: i32) -> &mut Self {
        let factor = 10.0 * (places - 1) as f32;
        if factor <= 0.0 {
            return self;
        }
        self.round_by(factor)
    }

    fn round_by(&mut self, factor: f32) -> &mut Self {
        self.x = round_component(self.x, factor);
        self.y = round_component(self.y, factor);
        self.z = round_component(self.z, factor);
        self
    }

    /// Copy this vector's values into `other`.
    pub fn clone_to(&self, other: &mut Self) -> &Self {
        let _ = other.set(self.x, self.y, self.z);
        self
    }
}

fn round_component(value: f32, factor: f32) -> f32 {
    let scaled = value * factor;
    if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    }
}

impl From<Vec3> for Vector3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for Vec3 {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
