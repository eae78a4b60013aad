//! Default TOML config template with inline documentation comments.

/// The default config file content.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Hover focus configuration
# Only override what you want to change -- missing fields use defaults.

schema_version = 1

[editor]
# Move input focus to an editor or terminal pane when the mouse moves over it.
# focus_on_hover = false

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
}
