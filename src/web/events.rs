//! Translation from DOM events to [`InputEvent`]s.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, KeyboardEvent, MouseEvent, UiEvent};

use crate::input::{InputEvent, MouseButton, WheelDelta};

/// Window events a running preview listens to.
pub const WINDOW_EVENTS: &[&str] = &[
    "keydown",
    "mousemove",
    "mousedown",
    "mouseup",
    "mousewheel",
    "DOMMouseScroll",
];

fn client_position(event: &MouseEvent) -> (f32, f32) {
    (event.client_x() as f32, event.client_y() as f32)
}

/// Legacy `mousewheel` events carry `wheelDelta`, which web-sys does not
/// expose.
fn wheel_delta(event: &Event) -> f32 {
    js_sys::Reflect::get(event, &JsValue::from_str("wheelDelta"))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

/// Convert a DOM event named `name` into an input event.
///
/// Returns `None` for event types that are not preview input or that do
/// not carry the expected interface.
#[must_use]
pub fn translate(name: &str, event: &Event) -> Option<InputEvent> {
    match name {
        "keydown" => {
            let key = event.dyn_ref::<KeyboardEvent>()?;
            Some(InputEvent::KeyDown {
                key: key.key(),
                key_code: key.key_code(),
            })
        }
        "mousemove" => {
            let (x, y) = client_position(event.dyn_ref::<MouseEvent>()?);
            Some(InputEvent::MouseMove { x, y })
        }
        "mousedown" => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            let (x, y) = client_position(mouse);
            Some(InputEvent::MouseDown {
                button: MouseButton::from_dom_button(mouse.button()),
                x,
                y,
            })
        }
        "mouseup" => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            Some(InputEvent::MouseUp {
                button: MouseButton::from_dom_button(mouse.button()),
            })
        }
        "mousewheel" => Some(InputEvent::Wheel {
            delta: WheelDelta::Raw(wheel_delta(event)),
        }),
        "DOMMouseScroll" => {
            let ui = event.dyn_ref::<UiEvent>()?;
            Some(InputEvent::Wheel {
                delta: WheelDelta::Lines(ui.detail() as f32),
            })
        }
        _ => None,
    }
}
