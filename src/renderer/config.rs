//! Configuration for HTML rendering

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a render configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read render config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse render config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration options for rendering
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Reject values outside the known content kinds instead of emitting
    /// their `Display` form
    pub strict: bool,
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set strict mode
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert!(!config.strict);
    }

    #[test]
    fn test_builder_pattern() {
        let config = RenderConfig::new().with_strict(true);
        assert!(config.strict);
    }

    #[test]
    fn test_parse_toml() {
        let config = RenderConfig::from_str("strict = true").expect("Should parse");
        assert!(config.strict);

        let config = RenderConfig::from_str("").expect("Should parse");
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_unknown_field_error() {
        let result = RenderConfig::from_str("stirct = true");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_error() {
        let result = RenderConfig::from_file(Path::new("/nonexistent/render.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
