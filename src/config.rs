//! Explorer configuration.

use crate::error::{DepscopeError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Maximum render depth accepted by [`ExplorerConfig::validate`]. Deeper
/// trees are still held in memory; this only bounds what the tree view will
/// descend into.
pub const MAX_RENDER_DEPTH: usize = 32;

/// Which tab the explorer opens on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum ViewKind {
    #[default]
    Tree,
    Flat,
    Analysis,
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tree => write!(f, "tree"),
            Self::Flat => write!(f, "flat"),
            Self::Analysis => write!(f, "analysis"),
        }
    }
}

/// Settings for the explorer shell.
///
/// All fields have defaults so a partial (or absent) config file works.
/// The engine itself is configuration-free; these knobs only shape how the
/// consumer renders its output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExplorerConfig {
    /// How many levels the tree view descends. Nodes beyond this depth are
    /// structurally present but not rendered or expanded further.
    pub max_depth: usize,
    /// Tab the explorer opens on
    pub default_view: ViewKind,
    /// Theme name for the TUI ("dark" or "light")
    pub theme: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            default_view: ViewKind::default(),
            theme: "dark".to_string(),
        }
    }
}

impl ExplorerConfig {
    /// Check the configuration for out-of-range values.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(DepscopeError::Config(
                "maxDepth must be at least 1".to_string(),
            ));
        }
        if self.max_depth > MAX_RENDER_DEPTH {
            return Err(DepscopeError::Config(format!(
                "maxDepth {} exceeds limit {MAX_RENDER_DEPTH}",
                self.max_depth
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ExplorerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_depth, 3);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let config = ExplorerConfig {
            max_depth: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_excessive_depth_rejected() {
        let config = ExplorerConfig {
            max_depth: 1000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: ExplorerConfig = serde_json::from_str(r#"{"maxDepth": 5}"#).unwrap();
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.default_view, ViewKind::Tree);
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn test_default_view_parses_camel_case() {
        let config: ExplorerConfig =
            serde_json::from_str(r#"{"defaultView": "analysis"}"#).unwrap();
        assert_eq!(config.default_view, ViewKind::Analysis);
    }
}
