//! Derived risk statistics over a dependency forest.
//!
//! These figures are recomputed from whatever forest they are handed:
//! typically the full project tree, but a filtered subtree works the same
//! way for "visible" counts. They are distinct from the authoritative
//! project-level counters on [`crate::model::Project`], which come from the
//! data source and are never recomputed here.

use crate::model::{walk, DependencyNode, DependencyStatus};
use serde::{Deserialize, Serialize};

/// Summary statistics for one forest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeStats {
    /// Every node reachable, at every depth
    pub total_nodes: usize,
    /// Nodes flagged by status or by a positive vulnerability count,
    /// counted once each
    pub security_issues: usize,
    /// Nodes with outdated status
    pub outdated: usize,
    /// `security_issues / total_nodes` as a round-half-up integer
    /// percentage; 0 for an empty forest
    pub affected_ratio: u8,
}

/// Compute [`TreeStats`] in a single pre-order pass.
#[must_use]
pub fn aggregate(nodes: &[DependencyNode]) -> TreeStats {
    let mut stats = TreeStats::default();
    walk(nodes, |node, _| {
        stats.total_nodes += 1;
        if node.is_security_risk() {
            stats.security_issues += 1;
        }
        if node.status == DependencyStatus::Outdated {
            stats.outdated += 1;
        }
    });
    stats.affected_ratio = percentage(stats.security_issues, stats.total_nodes);
    stats
}

/// Round-half-up integer percentage, 0 when the denominator is 0.
fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DependencyKind, SizeClass};

    fn node(name: &str, status: DependencyStatus, vulns: Option<u32>) -> DependencyNode {
        DependencyNode {
            name: name.to_string(),
            version: "1.0.0".to_string(),
            kind: DependencyKind::Direct,
            size_class: SizeClass::Small,
            status,
            description: None,
            license: None,
            weekly_downloads: None,
            last_updated: None,
            maintainer_count: None,
            vulnerability_count: vulns,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_empty_forest_yields_zeroes() {
        assert_eq!(aggregate(&[]), TreeStats::default());
    }

    #[test]
    fn test_nested_security_issue_counts() {
        // react > axios > follow-redirects, plus one unrelated active leaf
        let mut axios = node("axios", DependencyStatus::Outdated, None);
        axios
            .children
            .push(node("follow-redirects", DependencyStatus::SecurityIssue, Some(1)));
        let mut react = node("react", DependencyStatus::Active, None);
        react.children.push(axios);
        let forest = vec![react, node("tslib", DependencyStatus::Active, None)];

        let stats = aggregate(&forest);
        assert_eq!(stats.total_nodes, 4);
        assert_eq!(stats.security_issues, 1);
        assert_eq!(stats.outdated, 1);
        assert_eq!(stats.affected_ratio, 25);
    }

    #[test]
    fn test_security_issue_counted_once_when_doubly_flagged() {
        // status and vulnerability count both mark the node
        let forest = vec![node("bad", DependencyStatus::SecurityIssue, Some(3))];
        let stats = aggregate(&forest);
        assert_eq!(stats.security_issues, 1);
        assert_eq!(stats.affected_ratio, 100);
    }

    #[test]
    fn test_vulnerability_count_alone_flags_node() {
        let forest = vec![
            node("quiet-risk", DependencyStatus::Active, Some(2)),
            node("fine", DependencyStatus::Active, Some(0)),
            node("also-fine", DependencyStatus::Active, None),
        ];
        assert_eq!(aggregate(&forest).security_issues, 1);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(percentage(1, 8), 13); // 12.5 rounds up
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(0, 5), 0);
        assert_eq!(percentage(5, 5), 100);
    }
}
