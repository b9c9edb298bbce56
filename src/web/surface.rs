use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, Window};

use crate::stage::Surface;

/// [`Surface`] backed by real DOM nodes.
#[derive(Debug, Clone)]
pub struct DomSurface {
    window: Window,
    stage: HtmlElement,
    media: HtmlElement,
}

impl DomSurface {
    /// Wrap a stage container and the media element nested in it.
    #[must_use]
    pub fn new(window: Window, stage: HtmlElement, media: HtmlElement) -> Self {
        Self {
            window,
            stage,
            media,
        }
    }

    /// The stage container.
    #[must_use]
    pub fn stage_element(&self) -> &HtmlElement {
        &self.stage
    }

    /// The media element.
    #[must_use]
    pub fn media_element(&self) -> &HtmlElement {
        &self.media
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("failed to set {property}: {e:?}");
    }
}

fn js_dimension(value: Result<JsValue, JsValue>) -> f32 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
}

fn offset_size(element: &HtmlElement) -> Vec2 {
    Vec2::new(element.offset_width() as f32, element.offset_height() as f32)
}

impl Surface for DomSurface {
    fn set_stage_style(&mut self, property: &str, value: &str) {
        set_style(&self.stage, property, value);
    }

    fn set_media_style(&mut self, property: &str, value: &str) {
        set_style(&self.media, property, value);
    }

    fn stage_size(&self) -> Vec2 {
        offset_size(&self.stage)
    }

    fn media_size(&self) -> Vec2 {
        offset_size(&self.media)
    }

    fn viewport_size(&self) -> Vec2 {
        Vec2::new(
            js_dimension(self.window.inner_width()),
            js_dimension(self.window.inner_height()),
        )
    }
}
