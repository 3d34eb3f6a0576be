//! Core dependency record structures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a package entered the dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyKind {
    Direct,
    Dev,
    Peer,
    Optional,
    /// Fail-closed catch-all for values outside the known set.
    /// Never matches a specific kind filter.
    #[serde(other)]
    Unknown,
}

impl DependencyKind {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Dev => "dev",
            Self::Peer => "peer",
            Self::Optional => "optional",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Relative footprint tag. Opaque to the engine, used only for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SizeClass {
    Large,
    Medium,
    Small,
    Micro,
    #[serde(other)]
    Unknown,
}

impl SizeClass {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Large => "large",
            Self::Medium => "medium",
            Self::Small => "small",
            Self::Micro => "micro",
            Self::Unknown => "unknown",
        }
    }
}

/// Health status of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyStatus {
    Active,
    Deprecated,
    SecurityIssue,
    Outdated,
    /// Fail-closed catch-all, see [`DependencyKind::Unknown`].
    #[serde(other)]
    Unknown,
}

impl DependencyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Deprecated => "deprecated",
            Self::SecurityIssue => "security issue",
            Self::Outdated => "outdated",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for DependencyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One package dependency and its transitive children.
///
/// Children are an ordered forest; insertion order is significant and is
/// preserved through filtering. A missing `children` field in the source
/// data deserializes to an empty list, not an error. Depth is not stored,
/// it is derived during traversal (roots are depth 0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyNode {
    /// Package name, unique within its parent's child list but not globally
    pub name: String,
    /// Version string, treated as opaque (no semver parsing)
    pub version: String,
    pub kind: DependencyKind,
    pub size_class: SizeClass,
    pub status: DependencyStatus,
    /// Free text, searchable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_downloads: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainer_count: Option<u32>,
    /// Known vulnerability count; a positive value marks the node as
    /// security-relevant independent of `status`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vulnerability_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DependencyNode>,
}

impl DependencyNode {
    /// Whether this node is security-relevant: flagged by status or by a
    /// positive vulnerability count. A node matching both counts once.
    #[must_use]
    pub fn is_security_risk(&self) -> bool {
        self.status == DependencyStatus::SecurityIssue
            || self.vulnerability_count.is_some_and(|n| n > 0)
    }

    /// `name@version` display form.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }

    /// Shallow copy with a replacement child list. Used by the structural
    /// filter when rebuilding a pruned tree.
    #[must_use]
    pub fn with_children(&self, children: Vec<Self>) -> Self {
        let mut node = self.clone();
        node.children = children;
        node
    }
}

/// Visit every node of a forest in pre-order, passing the accumulated depth
/// (roots are depth 0). A node is visited before its children; children are
/// visited in original order before following siblings.
pub fn walk<'a, F>(nodes: &'a [DependencyNode], mut visit: F)
where
    F: FnMut(&'a DependencyNode, usize),
{
    fn go<'a, F>(nodes: &'a [DependencyNode], depth: usize, visit: &mut F)
    where
        F: FnMut(&'a DependencyNode, usize),
    {
        for node in nodes {
            visit(node, depth);
            go(&node.children, depth + 1, visit);
        }
    }
    go(nodes, 0, &mut visit);
}

/// Count every node reachable in a forest, at every depth.
#[must_use]
pub fn count_nodes(nodes: &[DependencyNode]) -> usize {
    let mut count = 0;
    walk(nodes, |_, _| count += 1);
    count
}
