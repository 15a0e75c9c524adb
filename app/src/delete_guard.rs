//! This module defines `DeleteConfirmationGuard`, which stops delete links from
//! navigating until the user has confirmed the deletion.
//!
//! Every click has its default action suppressed first. The guard then asks the
//! injected [`Confirm`] implementation, and only a `true` answer reaches the
//! [`Navigate`] implementation with the link's original destination.

use std::rc::Rc;

use log::{debug, error, warn};

use crate::{
    dom::{ClickEvent, ClickSource, Confirm, DeleteControl, Navigate},
    error::ScriptError,
    types::ClickOutcome,
};

pub struct DeleteConfirmationGuard<C, N> {
    dialog: C,
    navigator: N,
    message: String,
}

impl<C: Confirm, N: Navigate> DeleteConfirmationGuard<C, N> {
    pub fn new(dialog: C, navigator: N, message: impl Into<String>) -> Self {
        Self {
            dialog,
            navigator,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Handles one click on `control`.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be shown or the navigation is
    /// refused. The default action has already been suppressed in both cases.
    pub fn handle_click(
        &self,
        control: &impl DeleteControl,
        event: &impl ClickEvent,
    ) -> Result<ClickOutcome, ScriptError> {
        debug!("Delete button clicked.");
        event.prevent_default();

        if !self.dialog.confirm(&self.message)? {
            debug!("Deletion canceled.");
            return Ok(ClickOutcome::Cancelled);
        }

        let destination = control.destination();
        self.navigator.navigate(&destination)?;
        debug!("Post deletion confirmed.");
        Ok(ClickOutcome::Navigated(destination))
    }
}

impl<C: Confirm + 'static, N: Navigate + 'static> DeleteConfirmationGuard<C, N> {
    /// Attaches one click handler per control and returns how many were guarded.
    ///
    /// An empty set of controls is not an error; it is reported with a warning.
    ///
    /// # Errors
    ///
    /// Stops at the first control whose listener cannot be registered.
    pub fn attach<T, I>(self, controls: I) -> Result<usize, ScriptError>
    where
        I: IntoIterator<Item = T>,
        T: DeleteControl + ClickSource + 'static,
    {
        let guard = Rc::new(self);
        let mut attached = 0;
        for control in controls {
            let guard = Rc::clone(&guard);
            control.on_click(Box::new(move |target: &T, event: &T::Event| {
                if let Err(err) = guard.handle_click(target, event) {
                    error!("delete confirmation failed: {err}");
                }
            }))?;
            attached += 1;
        }

        if attached == 0 {
            warn!("No delete buttons found.");
        }
        Ok(attached)
    }
}
