use std::path::PathBuf;

use crate::id::{EditorId, TerminalId};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HoverError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0} is already registered")]
    DuplicateEditor(EditorId),

    #[error("{0} is not registered")]
    UnknownEditor(EditorId),

    #[error("{0} is not open")]
    UnknownTerminal(TerminalId),

    #[error("scenario error: {0}")]
    Scenario(String),
}
