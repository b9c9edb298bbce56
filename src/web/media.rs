use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement, HtmlVideoElement};

use super::listener::EventListener;
use crate::error::PreviewError;
use crate::media::{Media, MediaTag};

/// A created media element and the listeners that keep it inert.
pub struct MediaElement {
    /// The `<img>` or `<video>` node.
    pub element: HtmlElement,
    /// `dragstart`/`selectstart` suppressors, removed on drop.
    pub listeners: Vec<EventListener>,
}

fn create<T: JsCast>(
    document: &Document,
    tag: MediaTag,
) -> Result<T, PreviewError> {
    document
        .create_element(tag.name())?
        .dyn_into::<T>()
        .map_err(|_| {
            PreviewError::Dom(format!("<{tag}> has an unexpected type"))
        })
}

/// Build the display element for `media`.
///
/// Returns `Ok(None)` for files that are neither image nor video; the
/// caller decides what to show instead.
pub fn create_media_element(
    document: &Document,
    media: &Media,
) -> Result<Option<MediaElement>, PreviewError> {
    let Some(spec) = media.element_spec() else {
        return Ok(None);
    };

    let element: HtmlElement = match spec.tag {
        MediaTag::Img => {
            let img: HtmlImageElement = create(document, spec.tag)?;
            img.set_src(&spec.src);
            img.into()
        }
        MediaTag::Video => {
            let video: HtmlVideoElement = create(document, spec.tag)?;
            video.set_src(&spec.src);
            video.set_autoplay(spec.autoplay);
            video.set_loop(spec.looping);
            video.set_controls(spec.controls);
            video.into()
        }
    };

    let listeners = make_inert(&element)?;
    element.set_id(&spec.id);
    log::debug!("created <{}> for {}", spec.tag, media.file());
    Ok(Some(MediaElement { element, listeners }))
}

/// Mark `element` non-draggable and non-selectable and cancel drag/select
/// starts on it.
pub fn make_inert(
    element: &HtmlElement,
) -> Result<Vec<EventListener>, PreviewError> {
    element.set_draggable(false);
    element.set_attribute("unselectable", "on")?;
    Ok(vec![
        EventListener::suppress(element, "dragstart")?,
        EventListener::suppress(element, "selectstart")?,
    ])
}
