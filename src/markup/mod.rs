//! Icon injection into rendered button markup
//!
//! Two edits are made to the fragment: the root tag gains a
//! `has-icon__<slug>` class, and the icon is placed inside the link, before
//! or after its text. The root tag is parsed; the link is found by pattern.
//!
//! # Example
//!
//! ```rust
//! use button_icons::markup::inject_icon;
//!
//! let html = inject_icon(
//!     r#"<div class="wp-block-button"><a class="wp-block-button__link">Click</a></div>"#,
//!     "<svg>I</svg>",
//!     "",
//!     false,
//! );
//! assert!(html.contains(r#"class="wp-block-button has-icon__custom""#));
//! assert!(html.contains(r#"Click<span class="wp-block-button__link-icon" aria-hidden="true"><svg>I</svg></span></a>"#));
//! ```
//!
//! Injection is not idempotent: each call adds another wrapper, so it must
//! run once per render.

pub mod anchor;
pub mod config;
pub mod lexer;
pub mod tag;

use tracing::{debug, warn};

use crate::catalog;
use crate::error::MarkupError;

pub use config::MarkupConfig;
pub use tag::{parse_root_tag, Attribute, Quote, StartTag};

/// Add `class` to the root tag of `fragment`
///
/// Fails when the fragment has no parseable root tag; the fragment itself is
/// never modified in that case.
pub fn add_root_class(fragment: &str, class: &str) -> Result<String, MarkupError> {
    let tag = parse_root_tag(fragment)?;
    Ok(tag.add_class(fragment, class))
}

/// Inject an icon with the default configuration
///
/// `icon` is raw SVG markup and takes precedence; otherwise `icon_name` is
/// looked up in the catalog. When both are empty the fragment is returned
/// unchanged.
pub fn inject_icon(fragment: &str, icon: &str, icon_name: &str, position_left: bool) -> String {
    inject_icon_with_config(
        fragment,
        icon,
        icon_name,
        position_left,
        &MarkupConfig::default(),
    )
}

/// Inject an icon with an explicit configuration
pub fn inject_icon_with_config(
    fragment: &str,
    icon: &str,
    icon_name: &str,
    position_left: bool,
    config: &MarkupConfig,
) -> String {
    if icon.is_empty() && icon_name.is_empty() {
        return fragment.to_string();
    }

    let markup = if !icon.is_empty() {
        icon
    } else {
        match catalog::resolve(icon_name) {
            Ok(entry) => entry.markup,
            Err(err) => {
                warn!(%err, "skipping icon injection");
                return fragment.to_string();
            }
        }
    };

    let slug = if icon_name.is_empty() {
        config.custom_slug.as_str()
    } else {
        icon_name
    };

    let annotated = match add_root_class(fragment, &config.state_class(slug)) {
        Ok(html) => html,
        Err(err) => {
            debug!(%err, "root tag not annotated");
            fragment.to_string()
        }
    };

    let wrapper = config.wrap_icon(markup);
    match anchor::splice(&annotated, &config.anchor_tag, &wrapper, position_left) {
        Some(html) => html,
        None => {
            debug!(tag = %config.anchor_tag, "no link element, icon not inserted");
            annotated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BUTTON: &str =
        r#"<div class="wp-block-button"><a class="wp-block-button__link">Click</a></div>"#;

    #[test]
    fn test_no_icon_is_exact_noop() {
        assert_eq!(inject_icon(BUTTON, "", "", false), BUTTON);
        assert_eq!(inject_icon(BUTTON, "", "", true), BUTTON);
    }

    #[test]
    fn test_custom_icon_right() {
        assert_eq!(
            inject_icon(BUTTON, "<svg>I</svg>", "", false),
            r#"<div class="wp-block-button has-icon__custom"><a class="wp-block-button__link">Click<span class="wp-block-button__link-icon" aria-hidden="true"><svg>I</svg></span></a></div>"#
        );
    }

    #[test]
    fn test_custom_icon_left() {
        assert_eq!(
            inject_icon(BUTTON, "<svg>I</svg>", "", true),
            r#"<div class="wp-block-button has-icon__custom"><a class="wp-block-button__link"><span class="wp-block-button__link-icon" aria-hidden="true"><svg>I</svg></span>Click</a></div>"#
        );
    }

    #[test]
    fn test_named_icon_uses_catalog_markup() {
        let html = inject_icon(BUTTON, "", "download", false);
        let markup = catalog::lookup("download").unwrap().markup;
        assert!(html.contains("has-icon__download"));
        assert!(html.contains(&format!("Click<span class=\"wp-block-button__link-icon\" aria-hidden=\"true\">{}</span></a>", markup)));
    }

    #[test]
    fn test_raw_markup_wins_with_name_as_slug() {
        let html = inject_icon(BUTTON, "<svg>raw</svg>", "next", false);
        assert!(html.contains("has-icon__next"));
        assert!(html.contains("<svg>raw</svg>"));
        assert!(!html.contains(catalog::lookup("next").unwrap().markup));
    }

    #[test]
    fn test_unresolved_name_without_markup_is_noop() {
        assert_eq!(inject_icon(BUTTON, "", "nonexistent-name", false), BUTTON);
    }

    #[test]
    fn test_missing_link_only_annotates() {
        let fragment = r#"<div class="wp-block-button"><span>Click</span></div>"#;
        assert_eq!(
            inject_icon(fragment, "<svg/>", "", false),
            r#"<div class="wp-block-button has-icon__custom"><span>Click</span></div>"#
        );
    }

    #[test]
    fn test_preserves_existing_attributes() {
        let fragment = r#"<div id='b1' class="wp-block-button is-style-outline" data-x=1><a href="/go">Go</a></div>"#;
        let html = inject_icon(fragment, "<svg/>", "arrow-right", true);
        assert!(html.starts_with(
            r#"<div id='b1' class="wp-block-button is-style-outline has-icon__arrow-right" data-x=1>"#
        ));
    }

    #[test]
    fn test_not_idempotent() {
        let once = inject_icon(BUTTON, "<svg/>", "", false);
        let twice = inject_icon(&once, "<svg/>", "", false);
        assert_eq!(twice.matches("aria-hidden").count(), 2);
        // The class is already present, so the root tag keeps a single token.
        assert_eq!(twice.matches("has-icon__custom").count(), 1);
    }

    #[test]
    fn test_unparseable_root_still_inserts_icon() {
        let fragment = r#"<div class="x><a>Go</a>"#;
        let html = inject_icon(fragment, "<svg/>", "", false);
        assert!(html.contains("<svg/>"));
    }
}
