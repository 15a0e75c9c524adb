//! Client-side behaviors for the server-rendered blog pages.
//!
//! - [`nav_scroll::NavScrollController`] pins, hides and reveals the `#mainNav`
//!   bar as the reader scrolls.
//! - [`delete_guard::DeleteConfirmationGuard`] asks for confirmation before a
//!   `.btn-delete` link is followed.
//!
//! Both work against the traits in [`dom`], so they run natively in tests. The
//! `hydrate` feature adds [`browser`], which binds them to the live page.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod config;
pub mod delete_guard;
pub mod dom;
pub mod error;
pub mod nav_scroll;
pub mod page;
pub mod types;

pub use config::ScriptConfig;
pub use delete_guard::DeleteConfirmationGuard;
pub use error::ScriptError;
pub use nav_scroll::NavScrollController;
pub use types::{ClickOutcome, NavClasses, ScrollDirection};
