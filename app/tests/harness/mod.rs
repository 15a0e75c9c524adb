//! In-memory stand-ins for the page elements the behaviors attach to.
#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    collections::BTreeSet,
    rc::Rc,
};

use app::{
    ScriptError,
    dom::{ClickEvent, ClickSource, DeleteControl, NavElement, Viewport},
};

/// Navigation bar with a fixed height and a mutable class set.
pub struct FakeNav {
    height: i32,
    classes: RefCell<BTreeSet<String>>,
    /// Class names the element refuses to accept.
    rejected: RefCell<Vec<String>>,
}

impl FakeNav {
    pub fn new(height: i32) -> Self {
        Self {
            height,
            classes: RefCell::new(BTreeSet::new()),
            rejected: RefCell::new(Vec::new()),
        }
    }

    pub fn with_classes(height: i32, classes: &[&str]) -> Self {
        let nav = Self::new(height);
        nav.classes
            .borrow_mut()
            .extend(classes.iter().map(ToString::to_string));
        nav
    }

    pub fn reject(&self, class: &str) {
        self.rejected.borrow_mut().push(class.to_string());
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl NavElement for FakeNav {
    fn client_height(&self) -> i32 {
        self.height
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn add_class(&self, class: &str) -> Result<(), ScriptError> {
        if self.rejected.borrow().iter().any(|c| c == class) {
            return Err(ScriptError::Dom(format!("cannot add `{class}`")));
        }
        self.classes.borrow_mut().insert(class.to_string());
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), ScriptError> {
        self.classes.borrow_mut().remove(class);
        Ok(())
    }
}

/// Viewport reporting whatever offset the test last set.
#[derive(Default)]
pub struct FakeViewport(Cell<f64>);

impl FakeViewport {
    pub fn scroll_to(&self, top: f64) {
        self.0.set(top);
    }
}

impl Viewport for FakeViewport {
    fn scroll_top(&self) -> Result<f64, ScriptError> {
        Ok(self.0.get())
    }
}

/// Click event counting how often its default action was suppressed.
#[derive(Default)]
pub struct FakeClick {
    prevented: Cell<u32>,
}

impl FakeClick {
    pub fn prevented(&self) -> u32 {
        self.prevented.get()
    }
}

impl ClickEvent for FakeClick {
    fn prevent_default(&self) {
        self.prevented.set(self.prevented.get() + 1);
    }
}

type Handlers = Rc<RefCell<Vec<Box<dyn Fn(&FakeButton, &FakeClick)>>>>;

/// Delete link; clones share their registered handlers like DOM node handles do.
#[derive(Clone)]
pub struct FakeButton {
    href: String,
    handlers: Handlers,
}

impl FakeButton {
    pub fn new(href: &str) -> Self {
        Self {
            href: href.to_string(),
            handlers: Rc::default(),
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Dispatches a click to every handler and returns the event.
    pub fn click(&self) -> FakeClick {
        let event = FakeClick::default();
        for handler in self.handlers.borrow().iter() {
            handler(self, &event);
        }
        event
    }
}

impl DeleteControl for FakeButton {
    fn destination(&self) -> String {
        self.href.clone()
    }
}

impl ClickSource for FakeButton {
    type Event = FakeClick;

    fn on_click(&self, handler: Box<dyn Fn(&Self, &FakeClick)>) -> Result<(), ScriptError> {
        self.handlers.borrow_mut().push(handler);
        Ok(())
    }
}

/// Asserts a record at `level` containing `text` was logged on this thread since
/// `testing_logger::setup`, then clears the captured records.
pub fn assert_logged(level: log::Level, text: &str) {
    testing_logger::validate(|captured| {
        assert!(
            captured
                .iter()
                .any(|record| record.level == level && record.body.contains(text)),
            "expected a {level} record containing {text:?}, got {:?}",
            captured
                .iter()
                .map(|record| (record.level, record.body.as_str()))
                .collect::<Vec<_>>()
        );
    });
}
