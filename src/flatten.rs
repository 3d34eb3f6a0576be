//! Pre-order linearization of a dependency forest.

use crate::model::{walk, DependencyNode};

/// One node in the flat view, with the traversal context the hierarchy gave
/// it.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRow<'a> {
    pub node: &'a DependencyNode,
    /// Depth at which the node sat in the forest (roots are 0)
    pub depth: usize,
}

/// Linearize a forest depth-first: a node before its children, children
/// before following siblings. Hierarchy is discarded, traversal order kept.
///
/// Applies no filtering of its own; it operates on whatever forest it is
/// given, so run [`crate::filter::filter_tree`] first if a filtered view is
/// wanted. Visits every node exactly once: the output length always equals
/// the forest's total node count.
#[must_use]
pub fn flatten(nodes: &[DependencyNode]) -> Vec<&DependencyNode> {
    let mut out = Vec::new();
    walk(nodes, |node, _| out.push(node));
    out
}

/// [`flatten`] with the derived depth attached to each row, for renderers
/// that indent by level.
#[must_use]
pub fn flatten_with_depth(nodes: &[DependencyNode]) -> Vec<FlatRow<'_>> {
    let mut out = Vec::new();
    walk(nodes, |node, depth| out.push(FlatRow { node, depth }));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{count_nodes, DependencyKind, DependencyStatus, SizeClass};

    fn node(name: &str, children: Vec<DependencyNode>) -> DependencyNode {
        DependencyNode {
            name: name.to_string(),
            version: "1.0.0".to_string(),
            kind: DependencyKind::Direct,
            size_class: SizeClass::Small,
            status: DependencyStatus::Active,
            description: None,
            license: None,
            weekly_downloads: None,
            last_updated: None,
            maintainer_count: None,
            vulnerability_count: None,
            children,
        }
    }

    #[test]
    fn test_flatten_preorder_order() {
        let forest = vec![
            node("a", vec![node("b", vec![node("c", vec![])]), node("d", vec![])]),
            node("e", vec![]),
        ];
        let names: Vec<_> = flatten(&forest).iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_flatten_len_equals_node_count() {
        let forest = vec![
            node("a", vec![node("b", vec![]), node("c", vec![])]),
            node("d", vec![node("e", vec![node("f", vec![])])]),
        ];
        assert_eq!(flatten(&forest).len(), count_nodes(&forest));
    }

    #[test]
    fn test_flatten_empty_forest() {
        assert!(flatten(&[]).is_empty());
    }

    #[test]
    fn test_flatten_with_depth() {
        let forest = vec![node("a", vec![node("b", vec![node("c", vec![])])])];
        let depths: Vec<_> = flatten_with_depth(&forest)
            .iter()
            .map(|row| (row.node.name.clone(), row.depth))
            .collect();
        assert_eq!(
            depths,
            vec![
                ("a".to_string(), 0),
                ("b".to_string(), 1),
                ("c".to_string(), 2),
            ]
        );
    }
}
