//! Non-interactive command implementations.
//!
//! Each subcommand loads the dataset, selects a project, applies the same
//! pure transforms the TUI uses, and prints the result to stdout.

use crate::config::ExplorerConfig;
use crate::data::{load_projects, select_project};
use crate::error::{DepscopeError, Result};
use crate::filter::{filter_tree, FilterCriteria};
use crate::flatten::flatten_with_depth;
use crate::stats::aggregate;
use crate::tui::ExplorerApp;
use clap::ValueEnum;
use std::path::Path;

/// Output format for the `stats` subcommand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StatsFormat {
    #[default]
    Summary,
    Json,
}

impl std::fmt::Display for StatsFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Print the filtered forest as a flat, depth-indented listing.
pub fn run_list(dataset: &Path, project: Option<&str>, criteria: &FilterCriteria) -> Result<()> {
    let projects = load_projects(dataset)?;
    let project = select_project(&projects, project)?;
    let filtered = filter_tree(&project.dependencies, criteria);

    let rows = flatten_with_depth(&filtered);
    for row in &rows {
        let node = row.node;
        let marker = if node.is_security_risk() { "!" } else { " " };
        let name = format!("{:indent$}{}", "", node.name, indent = row.depth * 2);
        println!(
            "{marker} {name:<40} {:<10} {:<9} {}",
            node.version,
            node.kind.label(),
            node.status.label(),
        );
    }
    println!();
    println!(
        "{} of {} nodes match ({})",
        rows.len(),
        crate::model::count_nodes(&project.dependencies),
        criteria.summary()
    );
    Ok(())
}

/// Print derived statistics for the (optionally filtered) tree.
pub fn run_stats(
    dataset: &Path,
    project: Option<&str>,
    criteria: &FilterCriteria,
    format: StatsFormat,
) -> Result<()> {
    let projects = load_projects(dataset)?;
    let project = select_project(&projects, project)?;
    let filtered = filter_tree(&project.dependencies, criteria);
    let stats = aggregate(&filtered);

    match format {
        StatsFormat::Json => {
            let json = serde_json::to_string_pretty(&stats).map_err(|e| {
                DepscopeError::Config(format!("failed to serialize stats: {e}"))
            })?;
            println!("{json}");
        }
        StatsFormat::Summary => {
            println!("Project: {}", project.name);
            println!("  Nodes in view:     {}", stats.total_nodes);
            println!("  Security issues:   {}", stats.security_issues);
            println!("  Outdated:          {}", stats.outdated);
            println!("  Affected packages: {}%", stats.affected_ratio);
            println!();
            println!(
                "Reported by data source: {} total, {} vulnerable, {} outdated",
                project.total_dependencies,
                project.vulnerabilities,
                project.outdated_dependencies
            );
        }
    }
    Ok(())
}

/// Launch the interactive explorer, pre-filtered by any CLI criteria.
pub fn run_view(
    dataset: &Path,
    project: Option<&str>,
    config: ExplorerConfig,
    criteria: &FilterCriteria,
) -> Result<()> {
    config.validate()?;
    let projects = load_projects(dataset)?;
    let project = select_project(&projects, project)?.clone();

    tracing::info!(project = %project.name, "starting explorer");
    let mut app = ExplorerApp::new(project, config).with_criteria(criteria);
    crate::tui::run(&mut app).map_err(|e| DepscopeError::Io {
        path: None,
        message: "terminal error".to_string(),
        source: e,
    })
}
