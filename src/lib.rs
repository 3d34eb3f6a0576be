//! **depscope**: interactive dependency tree explorer and risk analyzer.
//!
//! depscope loads a project's dependency forest from a JSON dataset and
//! provides live filtering, a flattened list view, and derived risk
//! statistics, behind both an interactive TUI and plain CLI subcommands.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the [`DependencyNode`] tree shape, a [`Project`] with
//!   authoritative counters supplied by the data source, and the pre-order
//!   [`walk`] traversal contract every other component builds on.
//! - **[`filter`]**: [`FilterCriteria`] (search/kind/status predicate) and
//!   [`filter_tree`], the tree-preserving structural filter: a node
//!   survives iff it matches directly or has a surviving descendant, so
//!   matching nodes stay reachable through their non-matching ancestors.
//! - **[`expand`]**: [`ExpansionState`], the name-keyed expand/collapse set
//!   owned by the presentation session, orthogonal to filtering.
//! - **[`flatten`]**: pre-order linearization of a (filtered) forest.
//! - **[`stats`]**: [`aggregate`], recomputed risk figures over a forest,
//!   distinct from the authoritative project counters.
//! - **[`tui`]** / **[`cli`]**: thin shells that re-run the pure transforms
//!   on every parameter change and render the results.
//!
//! All engine operations are synchronous, pure transformations over an
//! in-memory tree; the expansion set is the only mutable state.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use depscope::{load_projects, select_project, filter_tree, FilterCriteria};
//! use depscope::model::DependencyStatus;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let projects = load_projects(Path::new("projects.json"))?;
//!     let project = select_project(&projects, None)?;
//!
//!     let criteria = FilterCriteria::new().with_status(DependencyStatus::SecurityIssue);
//!     let risky = filter_tree(&project.dependencies, &criteria);
//!
//!     println!("{} top-level paths lead to a security issue", risky.len());
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // usize↔f64/u8 casts in percentage math are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // TUI render functions are inherently long
    clippy::too_many_lines
)]

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod expand;
pub mod filter;
pub mod flatten;
pub mod model;
pub mod stats;
pub mod tui;

// Re-export main types for convenience
pub use config::{ExplorerConfig, ViewKind};
pub use data::{load_projects, select_project, ProjectMap};
pub use error::{DataErrorKind, DepscopeError, Result};
pub use expand::ExpansionState;
pub use filter::{filter_tree, FilterCriteria};
pub use flatten::{flatten, flatten_with_depth, FlatRow};
pub use model::{count_nodes, walk, DependencyNode, Project};
pub use stats::{aggregate, TreeStats};
