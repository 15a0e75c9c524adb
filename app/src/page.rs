//! Page start-up: waits for the document to be parsed, reads the page's
//! configuration, then runs each behavior's initializer inside its own failure
//! boundary so one broken feature never keeps the other from attaching.

use log::{error, info, warn};

use crate::{
    config::{CONFIG_ELEMENT_ID, ScriptConfig},
    dom::PageDocument,
    error::ScriptError,
};

/// Result of initializing both behaviors on a page.
#[derive(Debug)]
pub struct PageInit<N, D> {
    pub nav: Result<N, ScriptError>,
    pub delete_guard: Result<D, ScriptError>,
}

impl<N, D> PageInit<N, D> {
    /// `true` when both behaviors attached.
    pub const fn is_complete(&self) -> bool {
        self.nav.is_ok() && self.delete_guard.is_ok()
    }
}

/// Runs `nav` and then `delete_guard`, logging but otherwise containing any error.
pub fn initialize<N, D>(
    nav: impl FnOnce() -> Result<N, ScriptError>,
    delete_guard: impl FnOnce() -> Result<D, ScriptError>,
) -> PageInit<N, D> {
    info!("Script loaded. Attaching event listeners...");

    let nav = nav().inspect_err(|err| error!("navigation bar disabled: {err}"));
    let delete_guard =
        delete_guard().inspect_err(|err| error!("delete confirmation disabled: {err}"));

    PageInit { nav, delete_guard }
}

/// Reads the optional JSON configuration element, falling back to defaults.
pub fn load_config(document: &impl PageDocument) -> ScriptConfig {
    let Some(raw) = document.element_text(CONFIG_ELEMENT_ID) else {
        return ScriptConfig::default();
    };

    ScriptConfig::from_json(&raw).unwrap_or_else(|err| {
        warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
        ScriptConfig::default()
    })
}

/// Runs `init` now if the document has been parsed, otherwise on `DOMContentLoaded`.
///
/// # Errors
///
/// Fails if the `DOMContentLoaded` listener cannot be registered.
pub fn when_ready(
    document: &impl PageDocument,
    init: impl FnOnce() + 'static,
) -> Result<(), ScriptError> {
    if document.ready_state() != "loading" {
        init();
        return Ok(());
    }
    document.on_content_loaded(Box::new(init))
}

/// Waits for the document, then loads the configuration and hands both to `init`.
///
/// The configuration element is read only after parsing has finished, so an
/// element placed after the loading script is still seen.
///
/// # Errors
///
/// Fails if the `DOMContentLoaded` listener cannot be registered.
pub fn start<D>(document: &D, init: impl FnOnce(&D, ScriptConfig) + 'static) -> Result<(), ScriptError>
where
    D: PageDocument + Clone + 'static,
{
    let ready_document = document.clone();
    when_ready(document, move || {
        let config = load_config(&ready_document);
        init(&ready_document, config);
    })
}
