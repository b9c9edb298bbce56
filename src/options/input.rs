use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Wheel normalisation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
pub struct InputOptions {
    /// Zoom distance per scrolled line (legacy `DOMMouseScroll` events).
    #[schemars(
        title = "Line Scale",
        range(min = 1.0, max = 200.0),
        extend("step" = 1.0)
    )]
    pub line_scale: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self { line_scale: 40.0 }
    }
}
