//! Per-editor options.

use serde::{Deserialize, Serialize};

/// Options every editor instance reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Move input focus to the editor or a terminal when the mouse moves over it.
    pub focus_on_hover: bool,
}

impl EditorConfig {
    pub fn with_focus_on_hover(enabled: bool) -> Self {
        Self {
            focus_on_hover: enabled,
        }
    }
}
