use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera control and display-smoothing parameters.
pub struct CameraOptions {
    /// Ease displayed values toward the camera instead of snapping.
    #[schemars(title = "Smoothing")]
    pub smoothing: bool,
    /// Fraction of the displayed position kept each frame.
    #[schemars(
        title = "Position Easing",
        range(min = 0.0, max = 0.99),
        extend("step" = 0.01)
    )]
    pub position_decay: f32,
    /// Fraction of the displayed rotation kept each frame.
    #[schemars(
        title = "Rotation Easing",
        range(min = 0.0, max = 0.99),
        extend("step" = 0.01)
    )]
    pub rotation_decay: f32,
    /// Degrees of rotation per pixel of pointer offset from the viewport
    /// center.
    #[schemars(
        title = "Rotate Sensitivity",
        range(min = 0.001, max = 0.1),
        extend("step" = 0.001)
    )]
    pub rotate_sensitivity: f32,
    /// Decimal places kept when writing the transform.
    #[schemars(skip)]
    pub round_places: u32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            smoothing: true,
            position_decay: 0.75,
            rotation_decay: 0.9,
            rotate_sensitivity: 0.01,
            round_places: 3,
        }
    }
}
