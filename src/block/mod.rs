//! Button block attributes and editor integration
//!
//! The host stores a flat attribute bag per block. This module describes the
//! icon attributes added to the button block type, the classes the editor
//! applies to a block carrying them, and the hook chain that wires both into
//! the host.

pub mod hooks;
pub mod render;

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::markup::MarkupConfig;

pub use hooks::{register_defaults, EditorBlock, Filters, Hooks};
pub use render::{render_block_button, Block, RenderedBlock, BUTTON_BLOCK};

/// Icon attributes persisted on a button block
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconAttributes {
    /// Raw SVG markup for a custom icon
    pub icon: Option<String>,
    /// Key into the icon catalog
    pub icon_name: Option<String>,
    /// Place the icon before the text instead of after it
    pub icon_position_left: bool,
    /// Spread text and icon to the edges of the button
    pub justify_space_between: bool,
}

impl IconAttributes {
    /// Parse an attribute bag from TOML
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Raw icon markup, or `""` when unset
    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or_default()
    }

    /// Icon name, or `""` when unset
    pub fn icon_name(&self) -> &str {
        self.icon_name.as_deref().unwrap_or_default()
    }

    /// Whether either kind of icon is set
    pub fn has_icon(&self) -> bool {
        !self.icon().is_empty() || !self.icon_name().is_empty()
    }

    /// Slug used in the state class: the icon name, or `custom_slug` for raw markup
    pub fn slug<'a>(&'a self, custom_slug: &'a str) -> &'a str {
        match self.icon_name() {
            "" => custom_slug,
            name => name,
        }
    }
}

/// Value type of a block attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeKind {
    String,
    Boolean { default: bool },
}

/// A block type as registered with the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockType {
    pub name: String,
    pub attributes: BTreeMap<String, AttributeKind>,
}

impl BlockType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, kind: AttributeKind) -> Self {
        self.attributes.insert(name.into(), kind);
        self
    }
}

/// Add the icon attributes to `block_type` when it is the button block
///
/// Existing attributes are kept; other block types pass through unchanged.
pub fn add_icon_attributes(mut block_type: BlockType, button_block: &str) -> BlockType {
    if block_type.name != button_block {
        return block_type;
    }

    let icon_attributes = [
        ("icon", AttributeKind::String),
        ("iconName", AttributeKind::String),
        ("iconPositionLeft", AttributeKind::Boolean { default: false }),
        ("justifySpaceBetween", AttributeKind::Boolean { default: false }),
    ];
    for (name, kind) in icon_attributes {
        block_type.attributes.insert(name.to_string(), kind);
    }
    block_type
}

/// Class list for a block in the editor canvas
///
/// Without an icon, `existing` is returned unchanged. Otherwise the state
/// class and the position/justify modifiers are appended to the existing
/// tokens, skipping any already present.
pub fn editor_classes(existing: &str, attrs: &IconAttributes, config: &MarkupConfig) -> String {
    if !attrs.has_icon() {
        return existing.to_string();
    }

    let mut classes: Vec<String> = existing.split_whitespace().map(str::to_string).collect();
    let mut push = |class: String| {
        if !classes.contains(&class) {
            classes.push(class);
        }
    };

    push(config.state_class(attrs.slug(&config.custom_slug)));
    if attrs.icon_position_left {
        push("has-icon-position__left".to_string());
    }
    if attrs.justify_space_between {
        push("has-justified-space-between".to_string());
    }
    classes.join(" ")
}
