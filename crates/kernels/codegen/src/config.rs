//! Kernel stream configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Formatting settings for a [`KernelStream`](crate::KernelStream).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Text emitted once per indentation level. Must be non-empty whitespace.
    pub indent_unit: String,
    /// Whether lines with no content still receive indentation.
    pub indent_blank_lines: bool,
}

impl StreamConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_unit.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "indent_unit must not be empty".to_string(),
            ));
        }
        if !self.indent_unit.chars().all(|c| c == ' ' || c == '\t') {
            return Err(ConfigError::InvalidConfig(format!(
                "indent_unit must contain only spaces or tabs, got {:?}",
                self.indent_unit
            )));
        }
        Ok(())
    }

    /// Config indenting with `width` spaces per level.
    pub fn spaces(width: usize) -> Self {
        Self {
            indent_unit: " ".repeat(width),
            ..Self::default()
        }
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            indent_unit: "    ".to_string(),
            indent_blank_lines: false,
        }
    }
}
