use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::{EditorId, TerminalId};

/// Whatever currently holds input focus in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum FocusTarget {
    Editor(EditorId),
    Terminal(TerminalId),
}

impl fmt::Display for FocusTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusTarget::Editor(id) => id.fmt(f),
            FocusTarget::Terminal(id) => id.fmt(f),
        }
    }
}

/// Pointer position reported with a mouse-move, in cells relative to the
/// widget that raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MouseMoveEvent {
    pub column: u16,
    pub row: u16,
}

impl MouseMoveEvent {
    pub fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }
}
