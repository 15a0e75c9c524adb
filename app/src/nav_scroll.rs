//! This module defines `NavScrollController`, which hides the navigation bar while
//! the reader scrolls down and reveals it again when they scroll up.
//!
//! Once the page has scrolled past the bar's own height the bar is pinned with the
//! fixed class. Scrolling up while pinned adds the visible class; scrolling up to
//! the very top clears both classes.

use log::trace;

use crate::{
    dom::{NavElement, Viewport},
    error::ScriptError,
    types::{NavClasses, ScrollDirection},
};

pub struct NavScrollController<E> {
    nav: E,
    classes: NavClasses,
    header_height: f64,
    scroll_pos: f64,
}

impl<E: NavElement> NavScrollController<E> {
    /// Takes ownership of the navigation element and records its current height.
    pub fn new(nav: E, classes: NavClasses) -> Self {
        let header_height = f64::from(nav.client_height());
        Self {
            nav,
            classes,
            header_height,
            scroll_pos: 0.0,
        }
    }

    /// Applies one scroll event at offset `current_top`.
    ///
    /// An offset equal to the previous one is treated as downward movement.
    ///
    /// # Errors
    ///
    /// Propagates class list failures from the element. The recorded offset is
    /// only updated once every class change has succeeded.
    pub fn on_scroll(&mut self, current_top: f64) -> Result<ScrollDirection, ScriptError> {
        let direction = if current_top < self.scroll_pos {
            if current_top > 0.0 && self.nav.has_class(&self.classes.fixed) {
                self.nav.add_class(&self.classes.visible)?;
            } else {
                self.nav.remove_class(&self.classes.visible)?;
                self.nav.remove_class(&self.classes.fixed)?;
            }
            ScrollDirection::Up
        } else {
            self.nav.remove_class(&self.classes.visible)?;
            if current_top > self.header_height && !self.nav.has_class(&self.classes.fixed) {
                self.nav.add_class(&self.classes.fixed)?;
            }
            ScrollDirection::Down
        };
        trace!("scroll {direction:?} from {} to {current_top}", self.scroll_pos);
        self.scroll_pos = current_top;
        Ok(direction)
    }

    /// Reads the offset from `viewport` and applies it.
    ///
    /// # Errors
    ///
    /// Fails if the viewport cannot be measured or a class change fails.
    pub fn sync(&mut self, viewport: &impl Viewport) -> Result<ScrollDirection, ScriptError> {
        let current_top = viewport.scroll_top()?;
        self.on_scroll(current_top)
    }

    pub const fn header_height(&self) -> f64 {
        self.header_height
    }

    /// Offset seen by the most recent scroll event.
    pub const fn scroll_pos(&self) -> f64 {
        self.scroll_pos
    }

    pub const fn nav(&self) -> &E {
        &self.nav
    }
}
