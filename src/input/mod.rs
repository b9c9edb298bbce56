//! Input handling: event types, drag state, and the behaviour that converts
//! raw pointer and keyboard events into camera commands.

/// Converts raw events into camera commands.
pub mod behaviour;
/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Drag state recorded at mouse-down.
pub(crate) mod mouse;

pub use behaviour::InputBehaviour;
pub use event::{InputEvent, MouseButton, WheelDelta};
pub use keyboard::{KeyAction, KEY_CODE_ESCAPE};
