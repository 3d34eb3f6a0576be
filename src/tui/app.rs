//! Application state for the explorer TUI.
//!
//! The app is a thin stateful shell over the pure engine: every parameter
//! change (search keystroke, filter cycle) re-runs the full structural
//! filter over the project forest and caches the result for rendering.

use crate::config::{ExplorerConfig, ViewKind};
use crate::expand::ExpansionState;
use crate::filter::{filter_tree, FilterCriteria};
use crate::model::{DependencyNode, Project};
use crate::tui::filter::{FilterState, KindChoice, StatusChoice};
use crate::tui::theme::ColorScheme;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Active content tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplorerTab {
    #[default]
    Tree,
    Flat,
    Analysis,
}

impl ExplorerTab {
    pub(crate) const ALL: [Self; 3] = [Self::Tree, Self::Flat, Self::Analysis];

    pub(crate) fn title(self) -> &'static str {
        match self {
            Self::Tree => "Tree",
            Self::Flat => "Flat",
            Self::Analysis => "Analysis",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Tree => Self::Flat,
            Self::Flat => Self::Analysis,
            Self::Analysis => Self::Tree,
        }
    }
}

impl From<ViewKind> for ExplorerTab {
    fn from(view: ViewKind) -> Self {
        match view {
            ViewKind::Tree => Self::Tree,
            ViewKind::Flat => Self::Flat,
            ViewKind::Analysis => Self::Analysis,
        }
    }
}

/// One renderable row of the tree view.
#[derive(Debug, Clone)]
pub struct TreeRow<'a> {
    pub node: &'a DependencyNode,
    pub depth: usize,
    /// Whether this node is the last child at its position
    pub is_last: bool,
    /// For each ancestor level, whether that ancestor was a last child
    /// (controls the vertical rule glyphs)
    pub ancestors_last: Vec<bool>,
    pub expanded: bool,
    /// Node can be expanded: it has children and sits above the depth bound
    pub expandable: bool,
}

/// Main application state for exploring one project.
pub struct ExplorerApp {
    pub(crate) project: Project,
    pub(crate) config: ExplorerConfig,
    pub(crate) scheme: ColorScheme,
    pub(crate) active_tab: ExplorerTab,
    /// Live search input
    pub(crate) search: String,
    pub(crate) search_active: bool,
    pub(crate) kind_filter: FilterState<KindChoice>,
    pub(crate) status_filter: FilterState<StatusChoice>,
    pub(crate) expansion: ExpansionState,
    /// Canonical filtered forest; every tab is a projection over this
    pub(crate) filtered: Vec<DependencyNode>,
    pub(crate) selected: usize,
    pub(crate) should_quit: bool,
}

impl ExplorerApp {
    #[must_use]
    pub fn new(project: Project, config: ExplorerConfig) -> Self {
        let scheme = ColorScheme::from_name(&config.theme);
        let active_tab = config.default_view.into();
        let mut app = Self {
            project,
            config,
            scheme,
            active_tab,
            search: String::new(),
            search_active: false,
            kind_filter: FilterState::new(),
            status_filter: FilterState::new(),
            expansion: ExpansionState::new(),
            filtered: Vec::new(),
            selected: 0,
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// Seed the shell's filter state from criteria assembled elsewhere, so
    /// the explorer opens with the filter already applied.
    #[must_use]
    pub fn with_criteria(mut self, criteria: &FilterCriteria) -> Self {
        self.search = criteria.search.clone();
        self.kind_filter.current = KindChoice::from_kind(criteria.kind);
        self.status_filter.current = StatusChoice::from_status(criteria.status);
        self.refresh();
        self
    }

    /// Current criteria assembled from the shell's filter state.
    pub(crate) fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone(),
            kind: self.kind_filter.current.as_kind(),
            status: self.status_filter.current.as_status(),
        }
    }

    /// Re-run the structural filter over the full project forest.
    pub(crate) fn refresh(&mut self) {
        self.filtered = filter_tree(&self.project.dependencies, &self.criteria());
        self.clamp_selection();
    }

    /// Tree rows currently visible: expansion gated by [`ExpansionState`]
    /// and bounded by the configured max depth. The structural filter is
    /// depth-agnostic; the bound is enforced here, at the consumer.
    pub(crate) fn tree_rows(&self) -> Vec<TreeRow<'_>> {
        fn push_level<'a>(
            nodes: &'a [DependencyNode],
            depth: usize,
            max_depth: usize,
            expansion: &ExpansionState,
            ancestors_last: &[bool],
            rows: &mut Vec<TreeRow<'a>>,
        ) {
            for (i, node) in nodes.iter().enumerate() {
                let is_last = i == nodes.len() - 1;
                let expandable = !node.children.is_empty() && depth < max_depth;
                let expanded = expandable && expansion.is_expanded(&node.name);
                rows.push(TreeRow {
                    node,
                    depth,
                    is_last,
                    ancestors_last: ancestors_last.to_vec(),
                    expanded,
                    expandable,
                });
                if expanded {
                    let mut nested = ancestors_last.to_vec();
                    nested.push(is_last);
                    push_level(&node.children, depth + 1, max_depth, expansion, &nested, rows);
                }
            }
        }

        let mut rows = Vec::new();
        push_level(
            &self.filtered,
            0,
            self.config.max_depth,
            &self.expansion,
            &[],
            &mut rows,
        );
        rows
    }

    fn row_count(&self) -> usize {
        match self.active_tab {
            ExplorerTab::Tree => self.tree_rows().len(),
            ExplorerTab::Flat => crate::flatten::flatten(&self.filtered).len(),
            ExplorerTab::Analysis => 0,
        }
    }

    fn clamp_selection(&mut self) {
        let total = self.row_count();
        if total == 0 {
            self.selected = 0;
        } else if self.selected >= total {
            self.selected = total - 1;
        }
    }

    fn select_next(&mut self) {
        let total = self.row_count();
        if total > 0 && self.selected < total - 1 {
            self.selected += 1;
        }
    }

    fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Toggle expansion of the node under the cursor.
    fn toggle_selected(&mut self) {
        if self.active_tab != ExplorerTab::Tree {
            return;
        }
        let name = self
            .tree_rows()
            .get(self.selected)
            .filter(|row| row.expandable)
            .map(|row| row.node.name.clone());
        if let Some(name) = name {
            self.expansion.toggle(&name);
            self.clamp_selection();
        }
    }

    fn clear_filters(&mut self) {
        self.search.clear();
        self.search_active = false;
        self.kind_filter.reset();
        self.status_filter.reset();
        self.refresh();
    }

    /// Collapse every expanded node, returning the tree view to roots only.
    fn collapse_all(&mut self) {
        if self.expansion.expanded_count() == 0 {
            return;
        }
        self.expansion.clear();
        self.clamp_selection();
    }

    /// Process one key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.search_active {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.search_active = false,
                KeyCode::Backspace => {
                    self.search.pop();
                    self.refresh();
                }
                KeyCode::Char(c) => {
                    self.search.push(c);
                    self.refresh();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('/') => self.search_active = true,
            KeyCode::Tab => self.active_tab = self.active_tab.next(),
            KeyCode::Char('1') => self.active_tab = ExplorerTab::Tree,
            KeyCode::Char('2') => self.active_tab = ExplorerTab::Flat,
            KeyCode::Char('3') => self.active_tab = ExplorerTab::Analysis,
            KeyCode::Char('t') => {
                self.kind_filter.next();
                self.refresh();
            }
            KeyCode::Char('T') => {
                self.kind_filter.prev();
                self.refresh();
            }
            KeyCode::Char('s') => {
                self.status_filter.next();
                self.refresh();
            }
            KeyCode::Char('S') => {
                self.status_filter.prev();
                self.refresh();
            }
            KeyCode::Char('c') => self.clear_filters(),
            KeyCode::Char('x') => self.collapse_all(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            _ => {}
        }
    }
}
