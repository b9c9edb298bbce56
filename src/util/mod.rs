//! Shared math utilities.
//!
//! [`vector::Vector3`] holds camera state; [`smoothing::ExponentialDecay`]
//! eases displayed values toward it.

pub mod smoothing;
pub mod vector;
