use serde::{Deserialize, Serialize};

/// Legacy key code for Escape.
pub const KEY_CODE_ESCAPE: u32 = 27;

/// Preview actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// reset = "Escape"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Return the camera to the origin.
    Reset,
}
