//! Project-level metadata and authoritative counters.

use super::DependencyNode;
use serde::{Deserialize, Serialize};

/// One project and its dependency forest.
///
/// The counter fields are authoritative summary numbers supplied by the data
/// source. They describe the full project and are deliberately distinct from
/// the figures [`crate::stats::aggregate`] recomputes over a (possibly
/// filtered) live tree; the two are never mixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub total_dependencies: u32,
    pub direct_dependencies: u32,
    pub dev_dependencies: u32,
    pub vulnerabilities: u32,
    pub outdated_dependencies: u32,
    /// Top-level dependencies; each subtree is owned by exactly one parent
    #[serde(default)]
    pub dependencies: Vec<DependencyNode>,
}

impl Project {
    /// `name` with the authoritative total, for list displays.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!("{} ({} dependencies)", self.name, self.total_dependencies)
    }
}
