//! Describes which editor options differ between two configs.
//!
//! Hosts raise a [`ConfigChange`] on every editor whose options were
//! replaced; listeners ask [`ConfigChange::affects`] before reacting.

use serde::{Deserialize, Serialize};

use crate::schema::EditorConfig;

/// An individually addressable editor option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum EditorOption {
    FocusOnHover,
}

impl EditorOption {
    /// Dotted key as it appears in the config file.
    pub fn key(self) -> &'static str {
        match self {
            EditorOption::FocusOnHover => "editor.focus_on_hover",
        }
    }
}

/// The set of options that changed in one configuration update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigChange {
    options: Vec<EditorOption>,
}

impl ConfigChange {
    pub fn new(options: impl IntoIterator<Item = EditorOption>) -> Self {
        let mut change = Self::default();
        for option in options {
            if !change.options.contains(&option) {
                change.options.push(option);
            }
        }
        change
    }

    /// Diff two editor configs.
    pub fn between(old: &EditorConfig, new: &EditorConfig) -> Self {
        let mut options = Vec::new();
        if old.focus_on_hover != new.focus_on_hover {
            options.push(EditorOption::FocusOnHover);
        }
        Self { options }
    }

    pub fn affects(&self, option: EditorOption) -> bool {
        self.options.contains(&option)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn options(&self) -> &[EditorOption] {
        &self.options
    }
}
