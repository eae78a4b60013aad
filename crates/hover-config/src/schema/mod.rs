//! Configuration schema types for hover focus.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod editor;
mod logging;

pub use editor::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    pub schema_version: u32,
    pub editor: EditorConfig,
    pub logging: LoggingConfig,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            schema_version: CONFIG_SCHEMA_VERSION,
            editor: EditorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
