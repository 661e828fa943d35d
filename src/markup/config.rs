//! Configuration for icon injection

/// Class names and element shapes used when patching button markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupConfig {
    /// Class of the `<span>` wrapping the icon
    pub wrapper_class: String,

    /// Prefix of the state class added to the root tag
    pub class_prefix: String,

    /// Slug used in the state class for raw markup with no icon name
    pub custom_slug: String,

    /// Tag name of the link element receiving the icon
    pub anchor_tag: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            wrapper_class: "wp-block-button__link-icon".to_string(),
            class_prefix: "has-icon__".to_string(),
            custom_slug: "custom".to_string(),
            anchor_tag: "a".to_string(),
        }
    }
}

impl MarkupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wrapper_class(mut self, class: impl Into<String>) -> Self {
        self.wrapper_class = class.into();
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    pub fn with_custom_slug(mut self, slug: impl Into<String>) -> Self {
        self.custom_slug = slug.into();
        self
    }

    pub fn with_anchor_tag(mut self, tag: impl Into<String>) -> Self {
        self.anchor_tag = tag.into();
        self
    }

    /// State class for an icon slug, e.g. `has-icon__arrow-right`
    pub fn state_class(&self, slug: &str) -> String {
        format!("{}{}", self.class_prefix, slug)
    }

    /// Inert wrapper around icon markup, hidden from assistive technology
    pub fn wrap_icon(&self, markup: &str) -> String {
        format!(
            r#"<span class="{}" aria-hidden="true">{}</span>"#,
            self.wrapper_class, markup
        )
    }
}
