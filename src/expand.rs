//! Expand/collapse state for the tree view.

use std::collections::HashSet;

/// Set of expanded node names, owned by the presentation session.
///
/// Created empty (every node collapsed), toggled by user action, discarded
/// when the view goes away. Filtering never touches this state: a node
/// hidden by a search and revealed again later keeps its prior expansion
/// because tracking is keyed by name, independent of tree shape.
///
/// The key is the bare node name, not a path, so two distinct nodes sharing
/// a name at different tree positions share expansion state. Known quirk,
/// kept as-is; see DESIGN.md.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `name` in the expanded set.
    pub fn toggle(&mut self, name: &str) {
        if !self.expanded.remove(name) {
            self.expanded.insert(name.to_string());
        }
    }

    #[must_use]
    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.contains(name)
    }

    pub fn expand(&mut self, name: &str) {
        self.expanded.insert(name.to_string());
    }

    pub fn collapse(&mut self, name: &str) {
        self.expanded.remove(name);
    }

    /// Collapse everything.
    pub fn clear(&mut self) {
        self.expanded.clear();
    }

    #[must_use]
    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }
}
