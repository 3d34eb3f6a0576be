//! Filter criteria and the tree-preserving structural filter.
//!
//! Filtering runs in two layers: [`FilterCriteria`] decides whether a single
//! node is a direct match, and [`filter_tree`] rebuilds the forest so that a
//! node survives iff it matches directly or has a surviving descendant.
//! Matching descendants therefore stay reachable from the root even when
//! every ancestor on the path fails the predicate itself.

use crate::model::{DependencyKind, DependencyNode, DependencyStatus};
use serde::{Deserialize, Serialize};

/// Combined search/kind/status criteria for a single node.
///
/// `None` for kind or status means "all"; an empty search string matches
/// every node. A node is a direct match iff all three clauses hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring over name and description
    pub search: String,
    /// Restrict to one dependency kind
    pub kind: Option<DependencyKind>,
    /// Restrict to one status
    pub status: Option<DependencyStatus>,
}

impl FilterCriteria {
    /// Criteria that match every node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no filters are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.kind.is_none() && self.status.is_none()
    }

    /// Set the search term.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restrict to one dependency kind.
    #[must_use]
    pub fn with_kind(mut self, kind: DependencyKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Restrict to one status.
    #[must_use]
    pub fn with_status(mut self, status: DependencyStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Clear all filters.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether `node` is a direct match: search, kind, and status clauses
    /// all hold. Substring matching, not tokenized or fuzzy. An absent
    /// description simply never matches the search clause.
    #[must_use]
    pub fn matches(&self, node: &DependencyNode) -> bool {
        self.matches_search(node) && self.matches_kind(node) && self.matches_status(node)
    }

    fn matches_search(&self, node: &DependencyNode) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        if node.name.to_lowercase().contains(&needle) {
            return true;
        }
        node.description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(&needle))
    }

    fn matches_kind(&self, node: &DependencyNode) -> bool {
        self.kind.is_none_or(|k| k == node.kind)
    }

    fn matches_status(&self, node: &DependencyNode) -> bool {
        self.status.is_none_or(|s| s == node.status)
    }

    /// Short summary of active filters for status lines.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if !self.search.is_empty() {
            parts.push(format!("search \"{}\"", self.search));
        }
        if let Some(kind) = self.kind {
            parts.push(format!("kind {kind}"));
        }
        if let Some(status) = self.status {
            parts.push(format!("status {status}"));
        }
        if parts.is_empty() {
            "no filters".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Rebuild a forest keeping each node iff it is a direct match or has a
/// surviving descendant.
///
/// Post-order recursion: children are filtered first, independently of
/// whether their parent matches (a matching parent does not exempt children
/// from the predicate). A non-matching node with surviving children is
/// rewritten to carry only those children; a non-matching node with none is
/// dropped. Sibling order is preserved. Pure: the input forest is untouched
/// and equal inputs always produce a deep-equal output, which may be empty.
#[must_use]
pub fn filter_tree(nodes: &[DependencyNode], criteria: &FilterCriteria) -> Vec<DependencyNode> {
    nodes
        .iter()
        .filter_map(|node| {
            let children = filter_tree(&node.children, criteria);
            if criteria.matches(node) || !children.is_empty() {
                Some(node.with_children(children))
            } else {
                None
            }
        })
        .collect()
}
