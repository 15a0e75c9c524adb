//! Runtime configuration for the page behaviors.
//!
//! The defaults match the markup the blog templates emit. A page can override any
//! field by embedding a JSON document in an element with id
//! [`CONFIG_ELEMENT_ID`], for example:
//!
//! ```html
//! <script type="application/json" id="page-scripts-config">
//!   { "confirmMessage": "Delete this draft?" }
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use crate::{error::ScriptError, types::NavClasses};

/// Id of the optional element holding a JSON [`ScriptConfig`].
pub const CONFIG_ELEMENT_ID: &str = "page-scripts-config";

pub const DEFAULT_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this post?";

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ScriptConfig {
    /// Id of the navigation bar element.
    pub nav_id: String,
    pub fixed_class: String,
    pub visible_class: String,
    /// CSS selector matching every delete control.
    pub delete_selector: String,
    /// Question shown before a delete proceeds.
    pub confirm_message: String,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            nav_id: "mainNav".to_string(),
            fixed_class: "is-fixed".to_string(),
            visible_class: "is-visible".to_string(),
            delete_selector: ".btn-delete".to_string(),
            confirm_message: DEFAULT_CONFIRM_MESSAGE.to_string(),
        }
    }
}

impl ScriptConfig {
    /// Parses a configuration document. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ScriptError::Config` when `raw` is not valid JSON for this shape,
    /// or when a selector or class name is blank.
    pub fn from_json(raw: &str) -> Result<Self, ScriptError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ScriptError> {
        let required = [
            ("navId", &self.nav_id),
            ("fixedClass", &self.fixed_class),
            ("visibleClass", &self.visible_class),
            ("deleteSelector", &self.delete_selector),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ScriptError::Config(format!("`{name}` must not be empty")));
            }
        }
        // `classList.add` rejects tokens containing whitespace.
        for (name, value) in [
            ("fixedClass", &self.fixed_class),
            ("visibleClass", &self.visible_class),
        ] {
            if value.contains(|c: char| c.is_ascii_whitespace()) {
                return Err(ScriptError::Config(format!(
                    "`{name}` must be a single class name, got `{value}`"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn nav_classes(&self) -> NavClasses {
        NavClasses {
            fixed: self.fixed_class.clone(),
            visible: self.visible_class.clone(),
        }
    }
}
