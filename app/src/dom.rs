//! Traits the behaviors use to reach the page.
//!
//! The controllers never touch `web_sys` directly. The `hydrate` build implements
//! these traits for the real browser types in [`crate::browser`]; tests implement
//! them with in-memory fakes.

use crate::error::ScriptError;

/// An element whose class list and rendered height can be inspected and changed.
pub trait NavElement {
    /// Rendered inner height in CSS pixels (`clientHeight`).
    fn client_height(&self) -> i32;

    fn has_class(&self, class: &str) -> bool;

    /// # Errors
    ///
    /// Returns `ScriptError::Dom` if the class list rejects the change.
    fn add_class(&self, class: &str) -> Result<(), ScriptError>;

    /// # Errors
    ///
    /// Returns `ScriptError::Dom` if the class list rejects the change.
    fn remove_class(&self, class: &str) -> Result<(), ScriptError>;
}

/// Source of the document's current vertical scroll offset.
pub trait Viewport {
    /// Distance in pixels the document has scrolled down from its top.
    ///
    /// # Errors
    ///
    /// Returns an error when the offset cannot be measured.
    fn scroll_top(&self) -> Result<f64, ScriptError>;
}

/// A control carrying the URL of a delete endpoint.
pub trait DeleteControl {
    /// The control's `href`, or an empty string if it has none.
    fn destination(&self) -> String;
}

/// An activation event whose default action can be suppressed.
pub trait ClickEvent {
    fn prevent_default(&self);
}

/// Something click handlers can be attached to.
pub trait ClickSource: Sized {
    type Event: ClickEvent;

    /// Registers `handler` to run on every click of this source. The handler
    /// receives the clicked source along with the event.
    ///
    /// # Errors
    ///
    /// Returns `ScriptError::Dom` if the listener cannot be registered.
    fn on_click(&self, handler: Box<dyn Fn(&Self, &Self::Event)>) -> Result<(), ScriptError>;
}

/// A blocking yes/no decision made by the user.
pub trait Confirm {
    /// Returns `Ok(true)` only when the user accepted.
    ///
    /// # Errors
    ///
    /// Returns an error when the prompt could not be shown.
    fn confirm(&self, message: &str) -> Result<bool, ScriptError>;
}

/// Moves the current browsing context to another URL.
pub trait Navigate {
    /// # Errors
    ///
    /// Returns `ScriptError::Navigation` if the platform refuses the URL.
    fn navigate(&self, url: &str) -> Result<(), ScriptError>;
}

/// The document the behaviors start up against.
pub trait PageDocument {
    /// The `document.readyState` string: `loading`, `interactive` or `complete`.
    fn ready_state(&self) -> String;

    /// Runs `init` once, when `DOMContentLoaded` fires.
    ///
    /// # Errors
    ///
    /// Returns `ScriptError::Dom` if the listener cannot be registered.
    fn on_content_loaded(&self, init: Box<dyn FnOnce()>) -> Result<(), ScriptError>;

    /// Text of the element with the given id, if the element exists.
    fn element_text(&self, id: &str) -> Option<String>;
}
