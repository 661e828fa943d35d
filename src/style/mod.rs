//! CSS generation for mask-image icons
//!
//! The icon is drawn through `mask-image`, so it takes the element's text
//! color. Each rule carries the standard and the `-webkit-` prefixed property
//! with the same payload.
//!
//! # Example
//!
//! ```rust
//! use button_icons::style::generate_icon_style;
//!
//! let css = generate_icon_style(".btn", None, Some("arrow-right"), Some("#ff0000"));
//! assert!(css.contains("-webkit-mask-image"));
//! assert!(css.contains("color: #ff0000;"));
//!
//! assert_eq!(generate_icon_style(".btn", None, None, None), "");
//! ```

pub mod config;
pub mod data_uri;
pub mod variables;

use tracing::warn;

use crate::catalog;
use crate::error::IconError;

pub use config::StyleConfig;
pub use data_uri::{svg_to_base64_uri, svg_to_data_uri};
pub use variables::catalog_variables;

/// Append `suffix` to every sub-selector of a comma-separated selector list
///
/// Sub-selectors are kept byte-for-byte; an empty suffix returns the list
/// unchanged.
pub fn append_selectors(selectors: &str, suffix: &str) -> String {
    selectors
        .split(',')
        .map(|subselector| {
            if suffix.is_empty() {
                subselector.to_string()
            } else {
                format!("{} {}", subselector, suffix)
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Pick the SVG markup for a style rule. A named icon takes precedence over
/// raw markup.
fn style_markup<'a>(
    icon: Option<&'a str>,
    icon_name: Option<&str>,
) -> Result<Option<&'a str>, IconError> {
    match non_empty(icon_name) {
        Some(name) => catalog::resolve(name).map(|entry| Some(entry.markup)),
        None => Ok(non_empty(icon)),
    }
}

/// Build the CSS rule for an icon, reporting an unknown icon name as an error
///
/// Returns `Ok("")` when neither `icon` nor `icon_name` is set.
pub fn try_generate_icon_style(
    selector: &str,
    icon: Option<&str>,
    icon_name: Option<&str>,
    color: Option<&str>,
    config: &StyleConfig,
) -> Result<String, IconError> {
    let Some(svg) = style_markup(icon, icon_name)? else {
        return Ok(String::new());
    };

    let data_uri = svg_to_data_uri(svg);
    let mut declarations = vec![
        format!("mask-image: url(\"{}\");", data_uri),
        format!("-webkit-mask-image: url(\"{}\");", data_uri),
    ];
    if let Some(color) = non_empty(color) {
        declarations.push(format!("color: {};", color));
    }

    let selectors = append_selectors(selector, config.suffix.as_deref().unwrap_or_default());
    let body = declarations
        .iter()
        .map(|d| format!("    {}\n", d))
        .collect::<String>();

    Ok(format!("{} {{\n{}}}", selectors, body))
}

/// Build the CSS rule for an icon with an explicit configuration
///
/// An unknown icon name is logged and yields the empty string.
pub fn generate_icon_style_with_config(
    selector: &str,
    icon: Option<&str>,
    icon_name: Option<&str>,
    color: Option<&str>,
    config: &StyleConfig,
) -> String {
    match try_generate_icon_style(selector, icon, icon_name, color, config) {
        Ok(css) => css,
        Err(err) => {
            warn!(selector, %err, "skipping icon style");
            String::new()
        }
    }
}

/// Build the CSS rule for an icon with the default configuration
///
/// The empty string means there is nothing to render; callers must not emit
/// a `<style>` element for it.
pub fn generate_icon_style(
    selector: &str,
    icon: Option<&str>,
    icon_name: Option<&str>,
    color: Option<&str>,
) -> String {
    generate_icon_style_with_config(selector, icon, icon_name, color, &StyleConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SVG: &str = "<svg>I</svg>";

    #[test]
    fn test_append_selectors_each_subselector() {
        assert_eq!(
            append_selectors(".a,.b .c, .d", "::after"),
            ".a ::after,.b .c ::after, .d ::after"
        );
    }

    #[test]
    fn test_append_selectors_empty_suffix() {
        assert_eq!(append_selectors(".a, .b", ""), ".a, .b");
    }

    #[test]
    fn test_append_selectors_entry_count() {
        let out = append_selectors(".x,.y,.z", "span");
        let entries: Vec<_> = out.split(',').collect();
        assert_eq!(entries, vec![".x span", ".y span", ".z span"]);
    }

    #[test]
    fn test_no_icon_is_empty() {
        assert_eq!(generate_icon_style(".btn", None, None, None), "");
        assert_eq!(generate_icon_style(".btn", Some(""), Some(""), None), "");
    }

    #[test]
    fn test_unresolved_name_is_empty() {
        assert_eq!(
            generate_icon_style(".btn", None, Some("nonexistent-name"), None),
            ""
        );
    }

    #[test]
    fn test_try_reports_unresolved_name() {
        let result = try_generate_icon_style(
            ".btn",
            None,
            Some("nonexistent-name"),
            None,
            &StyleConfig::default(),
        );
        assert_eq!(result, Err(IconError::unresolved("nonexistent-name")));
    }

    #[test]
    fn test_both_mask_declarations_share_payload() {
        let css = generate_icon_style(".btn", Some(SVG), None, None);
        let uri = svg_to_data_uri(SVG);
        assert!(css.contains(&format!("\n    mask-image: url(\"{}\");", uri)));
        assert!(css.contains(&format!("-webkit-mask-image: url(\"{}\");", uri)));
    }

    #[test]
    fn test_color_declaration() {
        let css = generate_icon_style(".btn", Some(SVG), None, Some("#ff0000"));
        assert!(css.contains("color: #ff0000;"));

        let css = generate_icon_style(".btn", Some(SVG), None, None);
        assert!(!css.contains("color:"));
    }

    #[test]
    fn test_named_icon_wins_over_raw_markup() {
        let css = generate_icon_style(".btn", Some(SVG), Some("arrow-left"), None);
        let expected = svg_to_data_uri(catalog::lookup("arrow-left").unwrap().markup);
        assert!(css.contains(&expected));
        assert!(!css.contains(&svg_to_data_uri(SVG)));
    }

    #[test]
    fn test_rule_shape() {
        let config = StyleConfig::new().with_suffix("i");
        let css = try_generate_icon_style(".a,.b", Some("<b/>"), None, Some("red"), &config)
            .unwrap();
        assert_eq!(
            css,
            ".a i,.b i {\n    mask-image: url(\"data:image/svg+xml,%3Cb%2F%3E\");\n    -webkit-mask-image: url(\"data:image/svg+xml,%3Cb%2F%3E\");\n    color: red;\n}"
        );
    }

    #[test]
    fn test_default_suffix_targets_link_pseudo_element() {
        let css = generate_icon_style(".one,.two", Some(SVG), None, None);
        assert!(css.starts_with(
            ".one .wp-block-button__link::after,.two .wp-block-button__link::after {"
        ));
    }
}
