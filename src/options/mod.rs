//! Centralized preview options with TOML and JSON support.
//!
//! All tweakable constants (smoothing, sensitivity, perspective, wheel
//! normalisation, keybindings) are consolidated here. Options serialize
//! to/from TOML for presets on disk, and from JSON when handed over by the
//! embedding page.

mod camera;
mod input;
mod keybindings;
mod stage;

use std::path::Path;

pub use camera::CameraOptions;
pub use input::InputOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use stage::StageOptions;

use crate::error::PreviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial files (e.g. only overriding `[stage]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct PreviewOptions {
    /// Camera control and smoothing parameters.
    pub camera: CameraOptions,
    /// Perspective container parameters.
    pub stage: StageOptions,
    /// Wheel normalisation parameters.
    pub input: InputOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl PreviewOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(PreviewOptions)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, PreviewError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| PreviewError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Parse options from JSON text. Missing fields use defaults.
    pub fn from_json_str(content: &str) -> Result<Self, PreviewError> {
        let mut opts: Self = serde_json::from_str(content)
            .map_err(|e| PreviewError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PreviewError> {
        let content = std::fs::read_to_string(path).map_err(PreviewError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PreviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PreviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PreviewError::Io)?;
        }
        std::fs::write(path, content).map_err(PreviewError::Io)
    }
}
