//! Button Icons - icon support for rendered button blocks
//!
//! This library turns an icon choice stored on a button block into output:
//! a mask-image CSS rule for the editing surface, and an icon `<span>` spliced
//! into the delivered button markup.
//!
//! # Example
//!
//! ```rust
//! use button_icons::{generate_icon_style, inject_icon};
//!
//! let css = generate_icon_style(".wp-block-button", None, Some("download"), None);
//! assert!(css.contains("mask-image"));
//!
//! let html = inject_icon(
//!     r#"<div class="wp-block-button"><a>Get it</a></div>"#,
//!     "",
//!     "download",
//!     true,
//! );
//! assert!(html.contains("has-icon__download"));
//! ```

pub mod block;
pub mod catalog;
pub mod error;
pub mod markup;
pub mod settings;
pub mod style;

pub use block::{Block, IconAttributes};
pub use catalog::IconCatalogEntry;
pub use error::{IconError, MarkupError};
pub use markup::{inject_icon, inject_icon_with_config, MarkupConfig};
pub use settings::{Settings, SettingsError};
pub use style::{generate_icon_style, generate_icon_style_with_config, StyleConfig};

use thiserror::Error;

/// Errors surfaced to command-line and host callers
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("icon error: {0}")]
    Icon(#[from] IconError),

    #[error("markup error: {0}")]
    Markup(#[from] MarkupError),

    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("invalid attributes: {0}")]
    Attributes(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Style rule for a block instance, using the suffix for its icon position
///
/// Returns the empty string when the block has no icon or its icon name is
/// unknown.
pub fn block_style(
    selector: &str,
    attrs: &IconAttributes,
    color: Option<&str>,
    settings: &Settings,
) -> String {
    let config = settings.style.for_position(attrs.icon_position_left);
    generate_icon_style_with_config(
        selector,
        attrs.icon.as_deref(),
        attrs.icon_name.as_deref(),
        color,
        &config,
    )
}
