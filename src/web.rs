//! Browser backend over `web-sys`, plus the wasm entry point.
//!
//! Slideshows start as soon as the module is instantiated. Page-wide settings
//! come from the root element:
//!
//! ```html
//! <html data-slideshow-config='{"debug": true}'>
//! <script type="module">
//!   import init from "./slideshow_widget.js";
//!   await init();
//! </script>
//! ```

use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, DocumentReadyState, Element, Event, HtmlElement,
    HtmlImageElement, KeyboardEvent, TouchEvent,
};

use crate::bootstrap;
use crate::config::Config;
use crate::constants::CONFIG_ATTR;
use crate::gesture::Point;
use crate::platform::{Listener, Platform};

/// Runs on module instantiation: activate every slideshow on the page.
#[wasm_bindgen(start)]
pub fn start() {
    tracing_wasm::set_as_global_default();
    let Some(platform) = WebPlatform::new() else {
        warn!(target: "slideshow", "no document available, slideshows not started");
        return;
    };
    let config = Config::from_page_attribute(platform.page_config().as_deref());
    bootstrap::start(platform, config);
}

#[derive(Clone)]
pub struct WebPlatform {
    document: Document,
}

impl WebPlatform {
    /// The current window's document, if there is one.
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    pub fn from_document(document: Document) -> Self {
        Self { document }
    }

    /// Raw `data-slideshow-config` of the root element.
    pub fn page_config(&self) -> Option<String> {
        self.document.document_element()?.get_attribute(CONFIG_ATTR)
    }
}

fn class_selector(class: &str) -> String {
    format!(".{class}")
}

fn first_touch(event: &Event) -> Option<Point> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().item(0)?;
    Some(Point::new(touch.client_x() as f32, touch.client_y() as f32))
}

impl Platform for WebPlatform {
    type Element = Element;

    fn is_loading(&self) -> bool {
        self.document.ready_state() == DocumentReadyState::Loading
    }

    fn on_ready(&self, callback: Box<dyn FnOnce()>) {
        let handler = Closure::once_into_js(move || callback());
        if let Err(err) = self
            .document
            .add_event_listener_with_callback("DOMContentLoaded", handler.unchecked_ref())
        {
            warn!(target: "slideshow", ?err, "could not wait for DOMContentLoaded");
        }
    }

    fn find_all(&self, class: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(&class_selector(class)) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|idx| list.item(idx))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn find(&self, scope: &Element, class: &str) -> Option<Element> {
        scope.query_selector(&class_selector(class)).ok().flatten()
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_image(&self, element: &Element, src: &str, alt: &str) {
        match element.dyn_ref::<HtmlImageElement>() {
            Some(img) => {
                img.set_src(src);
                img.set_alt(alt);
            }
            None => {
                for (name, value) in [("src", src), ("alt", alt)] {
                    if let Err(err) = element.set_attribute(name, value) {
                        warn!(target: "slideshow", name, ?err, "could not set image attribute");
                    }
                }
            }
        }
    }

    fn image_src(&self, element: &Element) -> String {
        match element.dyn_ref::<HtmlImageElement>() {
            Some(img) => img.src(),
            None => element.get_attribute("src").unwrap_or_default(),
        }
    }

    fn make_focusable(&self, element: &Element) {
        if let Some(element) = element.dyn_ref::<HtmlElement>() {
            element.set_tab_index(0);
        }
    }

    fn listen(&self, element: &Element, listener: Listener) {
        let event_type = listener.event_type();
        let passive = matches!(listener, Listener::TouchStart(_) | Listener::TouchEnd(_));

        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| match &listener {
            Listener::Click(handler) | Listener::ImageError(handler) => handler(),
            Listener::KeyDown(handler) => {
                if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                    if handler(&key_event.key()) {
                        event.prevent_default();
                    }
                }
            }
            Listener::TouchStart(handler) | Listener::TouchEnd(handler) => {
                if let Some(at) = first_touch(&event) {
                    handler(at);
                }
            }
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        if let Err(err) = element.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            warn!(target: "slideshow", event_type, ?err, "could not bind listener");
        }
        // Widgets have no teardown; the listener lives as long as the page
        callback.forget();
    }

    fn preload(&self, src: &str) {
        match HtmlImageElement::new() {
            Ok(img) => img.set_src(src),
            Err(err) => warn!(target: "slideshow", src, ?err, "could not create preload image"),
        }
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                warn!(target: "slideshow", ?err, "could not show alert");
            }
        }
    }
}
