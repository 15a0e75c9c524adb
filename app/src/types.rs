//! Small value types passed between the behaviors and their callers.

/// Direction a scroll event was classified as, relative to the previous offset.
///
/// An event at the same offset as the previous one counts as `Down`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// The pair of CSS classes the navigation bar controller toggles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavClasses {
    /// Pins the bar (`position: fixed` in the stylesheet).
    pub fixed: String,
    /// Reveals a pinned bar.
    pub visible: String,
}

impl Default for NavClasses {
    fn default() -> Self {
        Self {
            fixed: "is-fixed".to_string(),
            visible: "is-visible".to_string(),
        }
    }
}

/// What a guarded delete click ended up doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The user confirmed and the page was sent to this destination.
    Navigated(String),
    /// The user declined; the page stays where it is.
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_classes_default_names() {
        let classes = NavClasses::default();
        assert_eq!(classes.fixed, "is-fixed");
        assert_eq!(classes.visible, "is-visible");
    }
}
