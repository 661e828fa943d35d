//! Custom-property stylesheet for the whole icon catalog

use crate::catalog;

use super::svg_to_base64_uri;

/// Emit one `--icon-<name>` custom property per catalog icon under `:root`
pub fn catalog_variables() -> String {
    let mut css = String::from(":root {\n");
    for icon in catalog::flatten() {
        css.push_str(&format!(
            "  --icon-{}: url(\"{}\");\n",
            icon.name,
            svg_to_base64_uri(icon.markup)
        ));
    }
    css.push('}');
    css
}
