use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Perspective container parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Stage", inline)]
#[serde(default)]
pub struct StageOptions {
    /// Distance from the viewer to the z = 0 plane, in CSS pixels.
    #[schemars(
        title = "Perspective",
        range(min = 100.0, max = 4000.0),
        extend("step" = 50.0)
    )]
    pub perspective: f32,
}

impl Default for StageOptions {
    fn default() -> Self {
        Self { perspective: 800.0 }
    }
}
