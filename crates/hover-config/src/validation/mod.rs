//! Configuration validation.
//!
//! Each check pushes a message onto a shared list; the orchestrator
//! folds them into a single `ConfigError`.

mod helpers;


use crate::schema::{HoverConfig, CONFIG_SCHEMA_VERSION};
use hover_common::ConfigError;

use helpers::validate_range;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HoverConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_schema(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_schema(errors: &mut Vec<String>, config: &HoverConfig) {
    validate_range(
        errors,
        "schema_version",
        config.schema_version,
        1,
        CONFIG_SCHEMA_VERSION,
    );
}
