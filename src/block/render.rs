//! Delivered-page rendering of button blocks

use crate::markup::inject_icon_with_config;
use crate::settings::Settings;

use super::IconAttributes;

/// Name of the host's button block type
pub const BUTTON_BLOCK: &str = "core/button";

/// A block instance as handed over by the host renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub name: String,
    pub attrs: IconAttributes,
}

impl Block {
    pub fn new(name: impl Into<String>, attrs: IconAttributes) -> Self {
        Self {
            name: name.into(),
            attrs,
        }
    }

    /// A `core/button` block
    pub fn button(attrs: IconAttributes) -> Self {
        Self::new(BUTTON_BLOCK, attrs)
    }
}

/// Rendered markup together with the block that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    pub content: String,
    pub block: Block,
}

/// Add the block's icon to its rendered markup
///
/// Blocks other than the configured button block, and buttons without an
/// icon, are returned unchanged.
pub fn render_block_button(content: &str, block: &Block, settings: &Settings) -> String {
    if block.name != settings.block_name || !block.attrs.has_icon() {
        return content.to_string();
    }

    inject_icon_with_config(
        content,
        block.attrs.icon(),
        block.attrs.icon_name(),
        block.attrs.icon_position_left,
        &settings.markup,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BUTTON: &str =
        r#"<div class="wp-block-button"><a class="wp-block-button__link wp-element-button">Read more</a></div>"#;

    #[test]
    fn test_other_block_unchanged() {
        let block = Block::new(
            "core/paragraph",
            IconAttributes {
                icon_name: Some("info".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(render_block_button(BUTTON, &block, &Settings::default()), BUTTON);
    }

    #[test]
    fn test_button_without_icon_unchanged() {
        let block = Block::button(IconAttributes::default());
        assert_eq!(render_block_button(BUTTON, &block, &Settings::default()), BUTTON);
    }

    #[test]
    fn test_named_icon_left() {
        let block = Block::button(IconAttributes {
            icon_name: Some("chevron-left".to_string()),
            icon_position_left: true,
            ..Default::default()
        });
        let html = render_block_button(BUTTON, &block, &Settings::default());
        assert!(html.starts_with(r#"<div class="wp-block-button has-icon__chevron-left">"#));
        assert!(html.contains(r#"wp-element-button"><span class="wp-block-button__link-icon" aria-hidden="true"><svg"#));
        assert!(html.ends_with("</svg></span>Read more</a></div>"));
    }

    #[test]
    fn test_custom_block_name_from_settings() {
        let settings = Settings::from_str("[block]\nname = \"acme/cta\"").unwrap();
        let block = Block::new(
            "acme/cta",
            IconAttributes {
                icon: Some("<svg/>".to_string()),
                ..Default::default()
            },
        );
        let html = render_block_button(BUTTON, &block, &settings);
        assert!(html.contains("has-icon__custom"));
    }
}
