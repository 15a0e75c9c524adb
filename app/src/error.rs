//! This module defines `ScriptError`, the single error type shared by the page
//! behaviors.
//!
//! Browser calls report failures as opaque JavaScript values; the `hydrate`
//! bindings flatten those into the `Dom` and `Navigation` variants so the rest of
//! the crate stays independent of `wasm-bindgen`.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("required element `#{0}` is missing")]
    MissingElement(String),
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("navigation to `{url}` failed: {reason}")]
    Navigation { url: String, reason: String },
    #[error("invalid page script configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ScriptError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
