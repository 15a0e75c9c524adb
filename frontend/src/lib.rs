//! This crate provides the WebAssembly (WASM) entry point for the blog's
//! client-side page scripts.
//!
//! It initializes client-side logging and the panic hook, then hands off to
//! `app::browser::start`, which attaches the navigation bar and delete
//! confirmation behaviors once the document is ready.

#[wasm_bindgen::prelude::wasm_bindgen(start)]
/// Starts the page scripts when the WASM module is instantiated.
///
/// Start-up failures are reported to the console; they never throw into the
/// host page.
pub fn start() {
    // Initialize console logging for client-side debugging.
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if let Err(err) = app::browser::start() {
        log::error!("page scripts not started: {err}");
    }
}

