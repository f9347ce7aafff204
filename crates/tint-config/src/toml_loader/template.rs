//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Tint Configuration
# Only override what you want to change -- missing fields use defaults.

[palette]
# color_count = 11           # 2-20
# lightness_curve = 0.3      # -1.0-1.0, 0 = linear
# light_bg = "#ffffff"
# dark_bg = "#1a1a1a"
# default_base = "#6366f1"

[storage]
# data_file = "/path/to/palettes.json"
# autosave = true

[export]
# collection_name = "Color Palette"

[logging]
# level = "tint=info"
"##
}
