//! Browser bindings for the page behaviors, compiled with the `hydrate` feature.
//!
//! Implements the [`crate::dom`] traits for `web_sys` types and wires both
//! behaviors to real DOM events once the document is ready.

use std::cell::RefCell;

use leptos::{
    ev,
    prelude::{WindowListenerHandle, window_event_listener},
};
use log::{debug, error};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, HtmlAnchorElement, Location, Window,
};

use crate::{
    config::ScriptConfig,
    delete_guard::DeleteConfirmationGuard,
    dom::{
        ClickEvent, ClickSource, Confirm, DeleteControl, NavElement, Navigate, PageDocument,
        Viewport,
    },
    error::ScriptError,
    nav_scroll::NavScrollController,
    page::{self, PageInit},
};

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl From<JsValue> for ScriptError {
    fn from(value: JsValue) -> Self {
        Self::Dom(js_error(&value))
    }
}

impl NavElement for Element {
    fn client_height(&self) -> i32 {
        Self::client_height(self)
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) -> Result<(), ScriptError> {
        self.class_list().add_1(class).map_err(Into::into)
    }

    fn remove_class(&self, class: &str) -> Result<(), ScriptError> {
        self.class_list().remove_1(class).map_err(Into::into)
    }
}

impl Viewport for Document {
    fn scroll_top(&self) -> Result<f64, ScriptError> {
        let body = self.body().ok_or(ScriptError::NoBody)?;
        Ok(-body.get_bounding_client_rect().top())
    }
}

impl PageDocument for Document {
    fn ready_state(&self) -> String {
        Self::ready_state(self)
    }

    fn on_content_loaded(&self, init: Box<dyn FnOnce()>) -> Result<(), ScriptError> {
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        let listener = Closure::once_into_js(init);
        self.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            listener.unchecked_ref(),
            &options,
        )?;
        Ok(())
    }

    fn element_text(&self, id: &str) -> Option<String> {
        self.get_element_by_id(id).and_then(|element| element.text_content())
    }
}

/// Non-anchor controls have no `href` property, so the `href` attribute is read
/// as written (unresolved), or an empty string when absent.
impl DeleteControl for Element {
    fn destination(&self) -> String {
        // Anchors report the resolved absolute URL, like the `href` property.
        self.dyn_ref::<HtmlAnchorElement>().map_or_else(
            || self.get_attribute("href").unwrap_or_default(),
            HtmlAnchorElement::href,
        )
    }
}

impl ClickEvent for Event {
    fn prevent_default(&self) {
        Self::prevent_default(self);
    }
}

impl ClickSource for Element {
    type Event = Event;

    fn on_click(&self, handler: Box<dyn Fn(&Self, &Event)>) -> Result<(), ScriptError> {
        let element = self.clone();
        let listener =
            Closure::<dyn Fn(Event)>::new(move |event: Event| handler(&element, &event));
        self.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
        // The element owns the listener for the rest of the page's life.
        listener.forget();
        Ok(())
    }
}

/// Native `window.confirm` prompt.
pub struct BrowserDialog(pub Window);

impl Confirm for BrowserDialog {
    fn confirm(&self, message: &str) -> Result<bool, ScriptError> {
        self.0.confirm_with_message(message).map_err(Into::into)
    }
}

/// Navigates by assigning `location.href`.
pub struct BrowserLocation(pub Location);

impl Navigate for BrowserLocation {
    fn navigate(&self, url: &str) -> Result<(), ScriptError> {
        self.0
            .set_href(url)
            .map_err(|err| ScriptError::Navigation {
                url: url.to_string(),
                reason: js_error(&err),
            })
    }
}

/// Looks up the navigation bar and starts reacting to window scroll events.
///
/// The scroll listener is registered through Leptos, which does not report a
/// failed `addEventListener`; only the element lookup can fail here.
///
/// # Errors
///
/// Returns `ScriptError::MissingElement` when the configured id is absent.
pub fn install_nav_scroll(
    document: &Document,
    config: &ScriptConfig,
) -> Result<WindowListenerHandle, ScriptError> {
    let nav = document
        .get_element_by_id(&config.nav_id)
        .ok_or_else(|| ScriptError::MissingElement(config.nav_id.clone()))?;
    let controller = RefCell::new(NavScrollController::new(nav, config.nav_classes()));
    debug!(
        "navigation bar height {}px",
        controller.borrow().header_height()
    );

    let document = document.clone();
    Ok(window_event_listener(ev::scroll, move |_| {
        if let Err(err) = controller.borrow_mut().sync(&document) {
            error!("navigation bar update failed: {err}");
        }
    }))
}

/// Guards every element matching the configured delete selector.
///
/// # Errors
///
/// Fails if the selector is invalid or a listener cannot be registered.
pub fn install_delete_guard(
    window: &Window,
    document: &Document,
    config: &ScriptConfig,
) -> Result<usize, ScriptError> {
    let nodes = document.query_selector_all(&config.delete_selector)?;
    let controls = (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok());

    let guard = DeleteConfirmationGuard::new(
        BrowserDialog(window.clone()),
        BrowserLocation(window.location()),
        config.confirm_message.clone(),
    );
    guard.attach(controls)
}

/// Initializes both behaviors against the live page.
pub fn init_page(
    window: &Window,
    document: &Document,
    config: &ScriptConfig,
) -> PageInit<WindowListenerHandle, usize> {
    page::initialize(
        || install_nav_scroll(document, config),
        || install_delete_guard(window, document, config),
    )
}

/// Entry point used by the `frontend` crate.
///
/// # Errors
///
/// Fails when there is no window or document, or the ready listener cannot be
/// registered. Errors inside either behavior are logged by [`init_page`].
pub fn start() -> Result<(), ScriptError> {
    let window = web_sys::window().ok_or(ScriptError::NoWindow)?;
    let document = window.document().ok_or(ScriptError::NoDocument)?;

    page::start(&document, move |document, config| {
        let init = init_page(&window, document, &config);
        if init.is_complete() {
            debug!("page scripts attached");
        }
    })
}
