//! Data model for dependency trees.
//!
//! A [`Project`] owns a forest of [`DependencyNode`]s. The tree is built
//! once per selected project and never mutated in place; every filtering or
//! flattening operation returns a new structure.

mod node;
mod project;

pub use node::{
    count_nodes, walk, DependencyKind, DependencyNode, DependencyStatus, SizeClass,
};
pub use project::Project;
