//! Browser bindings: DOM surface, media elements, window listeners and the
//! `wasm-bindgen` entry point.
//!
//! ```js
//! import init, { Preview, initLogging } from "./pkg/preview3d.js";
//!
//! await init();
//! initLogging();
//! const stage = document.getElementById("stage");
//! const preview = Preview.mount(stage, "shot.png", true);
//! (function frame() { preview.update(); requestAnimationFrame(frame); })();
//! ```

/// DOM event → input event translation.
pub mod events;
/// Self-removing event listeners.
pub mod listener;
/// `<img>`/`<video>` creation.
pub mod media;
/// `Surface` implementation over DOM nodes.
pub mod surface;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use self::events::{translate, WINDOW_EVENTS};
use self::listener::EventListener;
use self::media::{create_media_element, make_inert};
use self::surface::DomSurface;
use crate::command::CameraCommand;
use crate::error::PreviewError;
use crate::media::Media;
use crate::options::PreviewOptions;
use crate::session::PreviewSession;

type SharedSession = Rc<RefCell<PreviewSession<DomSurface>>>;

/// Install the console logger and panic hook. Safe to call more than once.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
}

/// JSON Schema of the options accepted by
/// [`Preview::mount_with_options`].
#[wasm_bindgen(js_name = optionsSchema)]
pub fn options_schema() -> Result<String, JsValue> {
    serde_json::to_string(&PreviewOptions::json_schema())
        .map_err(|e| PreviewError::OptionsParse(e.to_string()).into())
}

/// An interactive preview mounted in a page.
///
/// Window listeners are attached by [`start`](Self::start) and removed by
/// [`stop`](Self::stop) or when the preview is freed.
#[wasm_bindgen]
pub struct Preview {
    session: SharedSession,
    window: web_sys::Window,
    window_listeners: Vec<EventListener>,
    // keeps dragstart/selectstart suppressed for the preview's lifetime
    _media_listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl Preview {
    /// Build a media element for `file`, nest it in `stage` and start
    /// listening.
    pub fn mount(
        stage: HtmlElement,
        file: &str,
        smoothed: bool,
    ) -> Result<Preview, JsValue> {
        let mut options = PreviewOptions::default();
        options.camera.smoothing = smoothed;
        Ok(Self::mount_inner(stage, file, &options)?)
    }

    /// Like [`mount`](Self::mount) with options given as JSON.
    #[wasm_bindgen(js_name = mountWithOptions)]
    pub fn mount_with_options(
        stage: HtmlElement,
        file: &str,
        options_json: &str,
    ) -> Result<Preview, JsValue> {
        let options = PreviewOptions::from_json_str(options_json)?;
        Ok(Self::mount_inner(stage, file, &options)?)
    }

    /// Use an existing media element already nested in `stage`.
    pub fn attach(
        stage: HtmlElement,
        media: HtmlElement,
        smoothed: bool,
    ) -> Result<Preview, JsValue> {
        let mut options = PreviewOptions::default();
        options.camera.smoothing = smoothed;
        let listeners = make_inert(&media)?;
        Ok(Self::assemble(stage, media, listeners, &options)?)
    }

    /// Attach window listeners. No-op when already running.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if !self.window_listeners.is_empty() {
            return Ok(());
        }
        for &name in WINDOW_EVENTS {
            let session = Rc::clone(&self.session);
            let listener = EventListener::new(&self.window, name, move |event| {
                let Some(input) = translate(name, &event) else {
                    return;
                };
                match session.try_borrow_mut() {
                    Ok(mut session) => {
                        let _ = session.handle_event(&input);
                    }
                    Err(_) => log::warn!("dropped {name} event: session busy"),
                }
            })?;
            self.window_listeners.push(listener);
        }
        self.session.borrow_mut().start();
        Ok(())
    }

    /// Remove window listeners. The media stays where it is.
    pub fn stop(&mut self) {
        self.window_listeners.clear();
        self.session.borrow_mut().stop();
    }

    /// Whether window listeners are attached.
    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.session.borrow().is_running()
    }

    /// Render the current camera state. Call once per animation frame.
    pub fn update(&self) {
        self.session.borrow_mut().update();
    }

    /// Return the camera to the origin.
    pub fn reset(&self) {
        self.session.borrow_mut().execute(CameraCommand::Reset);
    }
}

impl Preview {
    fn mount_inner(
        stage: HtmlElement,
        file: &str,
        options: &PreviewOptions,
    ) -> Result<Self, PreviewError> {
        let window = web_sys::window()
            .ok_or_else(|| PreviewError::Dom("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| PreviewError::Dom("no document".into()))?;

        let media = Media::new(file);
        let created = create_media_element(&document, &media)?.ok_or_else(
            || PreviewError::UnsupportedMedia(media.file().to_owned()),
        )?;
        let _ = stage.append_child(&created.element)?;
        Self::assemble(stage, created.element, created.listeners, options)
    }

    fn assemble(
        stage: HtmlElement,
        media: HtmlElement,
        media_listeners: Vec<EventListener>,
        options: &PreviewOptions,
    ) -> Result<Self, PreviewError> {
        let window = web_sys::window()
            .ok_or_else(|| PreviewError::Dom("no global window".into()))?;
        let surface = DomSurface::new(window.clone(), stage, media);
        let session = PreviewSession::with_surface(surface, options);
        let mut preview = Self {
            session: Rc::new(RefCell::new(session)),
            window,
            window_listeners: Vec::new(),
            _media_listeners: media_listeners,
        };
        preview.start()?;
        Ok(preview)
    }
}
