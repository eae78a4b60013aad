//! Scenario files: a scripted sequence of host events.
//!
//! ```toml
//! [[step]]
//! action = "open_editor"
//! editor = "left"
//! focus_on_hover = true
//!
//! [[step]]
//! action = "hover_editor"
//! editor = "left"
//! ```

use hover_common::{HoverError, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    OpenEditor {
        editor: String,
        /// Falls back to `editor.focus_on_hover` from the config.
        #[serde(default)]
        focus_on_hover: Option<bool>,
    },
    CloseEditor {
        editor: String,
    },
    OpenTerminal {
        terminal: String,
    },
    CloseTerminal {
        terminal: String,
    },
    SetFocusOnHover {
        editor: String,
        enabled: bool,
    },
    HoverEditor {
        editor: String,
    },
    HoverTerminal {
        terminal: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    #[serde(rename = "step", default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| HoverError::Scenario(format!("invalid scenario: {e}")))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }
}
