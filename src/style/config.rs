//! Configuration for icon style rules

/// Selector suffix appended to every sub-selector of a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    /// Suffix for icons placed after the text; `None` targets the selector itself
    pub suffix: Option<String>,

    /// Suffix for icons placed before the text
    pub left_suffix: Option<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            suffix: Some(".wp-block-button__link::after".to_string()),
            left_suffix: Some(".wp-block-button__link::before".to_string()),
        }
    }
}

impl StyleConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the suffix used for trailing icons
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Set the suffix used for leading icons
    pub fn with_left_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.left_suffix = Some(suffix.into());
        self
    }

    /// Target the selector itself, with no suffix
    pub fn without_suffix(mut self) -> Self {
        self.suffix = None;
        self.left_suffix = None;
        self
    }

    /// Configuration whose `suffix` matches the icon position
    pub fn for_position(&self, left: bool) -> Self {
        let suffix = if left {
            self.left_suffix.clone()
        } else {
            self.suffix.clone()
        };
        Self {
            suffix,
            left_suffix: self.left_suffix.clone(),
        }
    }
}
