//! Site stylesheet: theme palette variables followed by the base rules.

use crate::config::{ColorModeConfig, ThemePalette};

const BASE_STYLESHEET: &str = include_str!("../../assets/base.css");

/// Renders `css/site.css` for the configured palette.
pub fn render_stylesheet(theme: &ThemePalette, color_mode: &ColorModeConfig) -> String {
    let mut css = String::from(":root {\n");
    for (field, value) in theme.entries() {
        let name = field.trim_start_matches("theme.").replace('_', "-");
        css.push_str(&format!("  --folio-{name}: {value};\n"));
    }
    css.push_str("}\n");

    if color_mode.respect_prefers_color_scheme {
        css.push_str(concat!(
            "@media (prefers-color-scheme: dark) {\n",
            "  :root {\n",
            "    --folio-background: #1b1b1d;\n",
            "    --folio-surface: #242526;\n",
            "    --folio-text: #e3e3e3;\n",
            "  }\n",
            "}\n",
        ));
    }

    css.push('\n');
    css.push_str(BASE_STYLESHEET);
    css
}
