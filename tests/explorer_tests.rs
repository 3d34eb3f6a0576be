//! Integration tests for the explorer engine over a realistic dataset.

use depscope::model::{DependencyKind, DependencyStatus};
use depscope::{
    aggregate, count_nodes, filter_tree, flatten, load_projects, select_project, ExpansionState,
    FilterCriteria, Project, ProjectMap,
};
use std::path::Path;

fn fixture() -> ProjectMap {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/projects.json");
    load_projects(&path).expect("fixture dataset should load")
}

fn storefront(projects: &ProjectMap) -> &Project {
    select_project(projects, Some("storefront")).expect("storefront project exists")
}

#[test]
fn dataset_loads_both_projects_in_order() {
    let projects = fixture();
    let names: Vec<_> = projects.keys().cloned().collect();
    assert_eq!(names, ["storefront", "api-gateway"]);
    // default selection is the first project in file order
    assert_eq!(select_project(&projects, None).unwrap().name, "storefront");
}

#[test]
fn security_filter_keeps_full_ancestor_path() {
    let projects = fixture();
    let project = storefront(&projects);

    let criteria = FilterCriteria::new().with_status(DependencyStatus::SecurityIssue);
    let filtered = filter_tree(&project.dependencies, &criteria);

    // Only the react → axios → follow-redirects path survives. Neither
    // react (active) nor axios (outdated) is a direct match; both are kept
    // as surviving ancestors.
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "react");
    assert_eq!(filtered[0].children.len(), 1);
    assert_eq!(filtered[0].children[0].name, "axios");
    assert_eq!(filtered[0].children[0].children[0].name, "follow-redirects");
    assert_eq!(count_nodes(&filtered), 3);
}

#[test]
fn every_surviving_node_matches_or_has_matching_descendant() {
    let projects = fixture();
    let project = storefront(&projects);
    let criteria = FilterCriteria::new().with_status(DependencyStatus::Deprecated);
    let filtered = filter_tree(&project.dependencies, &criteria);

    for node in flatten(&filtered) {
        let has_matching_descendant = flatten(&node.children)
            .iter()
            .any(|d| d.status == DependencyStatus::Deprecated);
        assert!(
            node.status == DependencyStatus::Deprecated || has_matching_descendant,
            "{} survived without justification",
            node.name
        );
    }
}

#[test]
fn noop_filter_returns_deep_equal_forest() {
    let projects = fixture();
    let project = storefront(&projects);
    let filtered = filter_tree(&project.dependencies, &FilterCriteria::new());
    assert_eq!(filtered, project.dependencies);
}

#[test]
fn search_covers_descriptions() {
    let projects = fixture();
    let project = storefront(&projects);

    // "bundler" only appears in webpack's description
    let criteria = FilterCriteria::new().with_search("bundler");
    let filtered = filter_tree(&project.dependencies, &criteria);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "webpack");
    assert!(
        filtered[0].children.is_empty(),
        "webpack matched directly; its non-matching subtree is pruned"
    );
}

#[test]
fn kind_and_search_compose() {
    let projects = fixture();
    let project = storefront(&projects);

    let criteria = FilterCriteria::new()
        .with_search("lodash")
        .with_kind(DependencyKind::Dev);
    let filtered = filter_tree(&project.dependencies, &criteria);

    // Only the dev-kind lodash under webpack matches; the direct-kind copy
    // under react does not.
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "webpack");
    assert_eq!(filtered[0].children[0].name, "lodash");
    assert_eq!(filtered[0].children[0].kind, DependencyKind::Dev);
}

#[test]
fn impossible_filter_yields_empty_forest() {
    let projects = fixture();
    let project = storefront(&projects);
    let criteria = FilterCriteria::new().with_search("no-such-package-anywhere");
    assert!(filter_tree(&project.dependencies, &criteria).is_empty());
}

#[test]
fn flatten_visits_every_node_once() {
    let projects = fixture();
    let project = storefront(&projects);
    let flat = flatten(&project.dependencies);
    assert_eq!(flat.len(), count_nodes(&project.dependencies));
    assert_eq!(flat.len(), 9);

    // pre-order: react's subtree fully precedes webpack's
    let names: Vec<_> = flat.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "react",
            "axios",
            "follow-redirects",
            "lodash",
            "left-pad",
            "webpack",
            "lodash",
            "left-pad",
            "tslib"
        ]
    );
}

#[test]
fn aggregate_counts_deeply_nested_security_issue() {
    let projects = fixture();
    let project = storefront(&projects);

    // Restrict to react's subtree plus tslib: 4 nodes, one security issue.
    let subtree = vec![
        project.dependencies[0].children[0].clone(), // axios > follow-redirects
        project.dependencies[0].children[1].children[0].clone(), // left-pad
        project.dependencies[2].clone(),             // tslib
    ];
    let stats = aggregate(&subtree);
    assert_eq!(stats.total_nodes, 4);
    assert_eq!(stats.security_issues, 1);
    assert_eq!(stats.affected_ratio, 25);
}

#[test]
fn aggregate_works_on_filtered_views() {
    let projects = fixture();
    let project = storefront(&projects);

    let full = aggregate(&project.dependencies);
    assert_eq!(full.total_nodes, 9);
    assert_eq!(full.security_issues, 1);
    assert_eq!(full.outdated, 1);
    assert_eq!(full.affected_ratio, 11); // round(1/9*100)

    let criteria = FilterCriteria::new().with_status(DependencyStatus::SecurityIssue);
    let visible = aggregate(&filter_tree(&project.dependencies, &criteria));
    assert_eq!(visible.total_nodes, 3);
    assert_eq!(visible.security_issues, 1);
    assert_eq!(visible.affected_ratio, 33);
}

#[test]
fn authoritative_counters_are_not_recomputed() {
    let projects = fixture();
    let project = storefront(&projects);

    // The data source reports 9 total dependencies; the aggregator happens
    // to agree on this fixture, but the counters are carried verbatim.
    assert_eq!(project.total_dependencies, 9);
    assert_eq!(project.vulnerabilities, 1);
}

#[test]
fn duplicate_names_share_expansion_state() {
    // lodash appears under react and under webpack. One toggle affects
    // both instances; this is current, documented behavior.
    let mut expansion = ExpansionState::new();
    expansion.toggle("lodash");
    assert!(expansion.is_expanded("lodash"));

    // No per-path distinction exists: whichever subtree asks gets the
    // same answer.
    assert!(expansion.is_expanded("lodash"));

    expansion.toggle("lodash");
    assert!(!expansion.is_expanded("lodash"));
}

#[test]
fn filtering_does_not_touch_expansion_state() {
    let projects = fixture();
    let project = storefront(&projects);

    let mut expansion = ExpansionState::new();
    expansion.toggle("react");

    let criteria = FilterCriteria::new().with_search("tslib");
    let filtered = filter_tree(&project.dependencies, &criteria);
    assert_eq!(filtered.len(), 1);

    // react was filtered out of the view, but its expansion is remembered
    assert!(expansion.is_expanded("react"));
}
