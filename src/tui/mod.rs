//! Interactive explorer TUI using ratatui.
//!
//! The TUI is a thin stateful shell over the pure engine: it owns the
//! search/filter parameters and the expansion set, and re-runs the
//! structural filter whenever a parameter changes. The tree, flat, and
//! analysis tabs are read-only projections over one canonical filtered
//! forest.

mod app;
pub mod filter;
pub mod theme;
mod ui;

pub use app::{ExplorerApp, ExplorerTab, TreeRow};
pub use filter::{CycleFilter, FilterState, KindChoice, StatusChoice};
pub use theme::ColorScheme;
pub use ui::run;
