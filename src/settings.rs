//! TOML settings for class names, selectors and the target block
//!
//! Every key is optional; anything left out keeps its built-in value.
//!
//! ```toml
//! [block]
//! name = "core/button"
//!
//! [markup]
//! wrapper_class = "wp-block-button__link-icon"
//! class_prefix = "has-icon__"
//! custom_slug = "custom"
//! anchor_tag = "a"
//!
//! [style]
//! suffix = ".wp-block-button__link::after"
//! left_suffix = ".wp-block-button__link::before"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::block::BUTTON_BLOCK;
use crate::markup::MarkupConfig;
use crate::style::StyleConfig;

/// Errors that can occur when loading or parsing settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Block type that receives icons
    pub block_name: String,
    pub markup: MarkupConfig,
    pub style: StyleConfig,
}

/// TOML structure for deserializing settings
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlSettings {
    block: Option<TomlBlock>,
    markup: Option<TomlMarkup>,
    style: Option<TomlStyle>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlBlock {
    name: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlMarkup {
    wrapper_class: Option<String>,
    class_prefix: Option<String>,
    custom_slug: Option<String>,
    anchor_tag: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlStyle {
    suffix: Option<String>,
    left_suffix: Option<String>,
}

/// Empty strings switch a suffix off
fn suffix(value: Option<String>, default: Option<String>) -> Option<String> {
    match value {
        Some(s) if s.is_empty() => None,
        Some(s) => Some(s),
        None => default,
    }
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        let parsed: TomlSettings = toml::from_str(content)?;
        let mut settings = Settings::default();

        if let Some(block) = parsed.block {
            if let Some(name) = block.name {
                settings.block_name = name;
            }
        }

        if let Some(markup) = parsed.markup {
            let config = &mut settings.markup;
            if let Some(v) = markup.wrapper_class {
                config.wrapper_class = v;
            }
            if let Some(v) = markup.class_prefix {
                config.class_prefix = v;
            }
            if let Some(v) = markup.custom_slug {
                config.custom_slug = v;
            }
            if let Some(v) = markup.anchor_tag {
                config.anchor_tag = v;
            }
        }

        if let Some(style) = parsed.style {
            let config = &mut settings.style;
            config.suffix = suffix(style.suffix, config.suffix.take());
            config.left_suffix = suffix(style.left_suffix, config.left_suffix.take());
        }

        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            block_name: BUTTON_BLOCK.to_string(),
            markup: MarkupConfig::default(),
            style: StyleConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_settings_are_defaults() {
        let settings = Settings::from_str("").expect("Should parse");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.block_name, "core/button");
    }

    #[test]
    fn test_partial_override() {
        let settings = Settings::from_str(
            r#"
            [markup]
            wrapper_class = "btn-icon"

            [style]
            suffix = ".link::after"
            "#,
        )
        .expect("Should parse");
        assert_eq!(settings.markup.wrapper_class, "btn-icon");
        assert_eq!(settings.markup.class_prefix, "has-icon__");
        assert_eq!(settings.style.suffix.as_deref(), Some(".link::after"));
        assert_eq!(
            settings.style.left_suffix.as_deref(),
            Some(".wp-block-button__link::before")
        );
    }

    #[test]
    fn test_empty_suffix_disables_it() {
        let settings = Settings::from_str("[style]\nsuffix = \"\"").unwrap();
        assert_eq!(settings.style.suffix, None);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = Settings::from_str("[markup]\nwrapper = \"x\"");
        assert!(matches!(result, Err(SettingsError::ParseError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Settings::from_file(Path::new("/nonexistent/button-icons.toml"));
        assert!(matches!(result, Err(SettingsError::IoError(_))));
    }
}
