//! Terminal setup and rendering for the explorer TUI.

use super::app::{ExplorerApp, ExplorerTab, TreeRow};
use crate::flatten::flatten_with_depth;
use crate::model::count_nodes;
use crate::stats::aggregate;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, List, ListItem, ListState, Paragraph, Row, Table, TableState, Tabs},
};
use std::io::{self, stdout};
use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Run the explorer TUI until the user quits.
pub fn run(app: &mut ExplorerApp) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        terminal.draw(|frame| render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn render(frame: &mut Frame, app: &ExplorerApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(5),    // Content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);
    match app.active_tab {
        ExplorerTab::Tree => render_tree(frame, chunks[2], app),
        ExplorerTab::Flat => render_flat(frame, chunks[2], app),
        ExplorerTab::Analysis => render_analysis(frame, chunks[2], app),
    }
    render_status_bar(frame, chunks[3], app);
    render_footer(frame, chunks[4], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let scheme = &app.scheme;
    let title = match &app.project.description {
        Some(desc) => format!("{} — {desc}", app.project.name),
        None => app.project.name.clone(),
    };
    let line = Line::from(vec![
        Span::styled(
            fit_width(&title, area.width.saturating_sub(2) as usize),
            Style::default().fg(scheme.primary).bold(),
        ),
    ]);
    let counters = Line::from(Span::styled(
        format!(
            "{} deps reported · {} direct · {} dev · {} vulnerable · {} outdated",
            app.project.total_dependencies,
            app.project.direct_dependencies,
            app.project.dev_dependencies,
            app.project.vulnerabilities,
            app.project.outdated_dependencies,
        ),
        Style::default().fg(scheme.muted),
    ));
    frame.render_widget(Paragraph::new(vec![line, counters]), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let scheme = &app.scheme;
    let selected = ExplorerTab::ALL
        .iter()
        .position(|t| *t == app.active_tab)
        .unwrap_or(0);
    let tabs = Tabs::new(ExplorerTab::ALL.iter().map(|t| t.title()))
        .select(selected)
        .style(Style::default().fg(scheme.text))
        .highlight_style(Style::default().fg(scheme.accent).bold())
        .block(Block::bordered());
    frame.render_widget(tabs, area);
}

fn tree_row_line<'a>(row: &TreeRow<'a>, app: &ExplorerApp) -> Line<'a> {
    let scheme = &app.scheme;
    let mut prefix = String::new();
    for is_last in &row.ancestors_last {
        prefix.push_str(if *is_last { "   " } else { "│  " });
    }
    if row.depth > 0 {
        prefix.push_str(if row.is_last { "└─ " } else { "├─ " });
    }
    let indicator = if row.expandable {
        if row.expanded {
            "▼ "
        } else {
            "▶ "
        }
    } else {
        "  "
    };

    let mut spans = vec![
        Span::styled(prefix, Style::default().fg(scheme.muted)),
        Span::styled(indicator.to_string(), Style::default().fg(scheme.accent)),
        Span::styled(row.node.label(), Style::default().fg(scheme.text)),
        Span::raw(" "),
        Span::styled(
            format!("[{}]", row.node.status.label()),
            Style::default().fg(scheme.status_color(row.node.status)),
        ),
    ];
    if let Some(vulns) = row.node.vulnerability_count.filter(|n| *n > 0) {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" {vulns} "),
            Style::default().fg(scheme.badge_fg).bg(scheme.error).bold(),
        ));
    }
    Line::from(spans)
}

fn render_tree(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let scheme = &app.scheme;
    let rows = app.tree_rows();

    if rows.is_empty() {
        let empty = Paragraph::new("No dependencies match the current filters")
            .style(Style::default().fg(scheme.muted))
            .block(Block::bordered().title("Dependency Tree"));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = rows.iter().map(|row| ListItem::new(tree_row_line(row, app))).collect();
    let list = List::new(items)
        .block(Block::bordered().title("Dependency Tree"))
        .highlight_style(Style::default().bg(scheme.selection).bold());
    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_flat(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let scheme = &app.scheme;
    let header = Row::new(["Package", "Version", "Kind", "Status", "Size", "Vulns"])
        .style(Style::default().fg(scheme.primary).bold());

    let rows: Vec<Row> = flatten_with_depth(&app.filtered)
        .iter()
        .map(|flat| {
            let node = flat.node;
            let indent = "  ".repeat(flat.depth);
            Row::new(vec![
                Span::raw(format!("{indent}{}", node.name)),
                Span::raw(node.version.clone()),
                Span::raw(node.kind.label()),
                Span::styled(
                    node.status.label(),
                    Style::default().fg(scheme.status_color(node.status)),
                ),
                Span::raw(node.size_class.label()),
                Span::raw(
                    node.vulnerability_count
                        .map_or(String::from("-"), |n| n.to_string()),
                ),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(15),
            Constraint::Length(8),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(Block::bordered().title("Flattened View"))
    .row_highlight_style(Style::default().bg(scheme.selection).bold());

    let mut state = TableState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_analysis(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let scheme = &app.scheme;
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left: figures recomputed over the filtered (visible) forest
    let stats = aggregate(&app.filtered);
    let visible = Paragraph::new(vec![
        stat_line("Visible nodes", stats.total_nodes.to_string(), scheme.text),
        stat_line(
            "Security issues",
            stats.security_issues.to_string(),
            scheme.error,
        ),
        stat_line("Outdated", stats.outdated.to_string(), scheme.warning),
        stat_line(
            "Affected packages",
            format!("{}%", stats.affected_ratio),
            if stats.affected_ratio > 0 {
                scheme.error
            } else {
                scheme.success
            },
        ),
    ])
    .block(Block::bordered().title("Visible Tree (computed)"));
    frame.render_widget(visible, halves[0]);

    // Right: authoritative counters from the data source, never recomputed
    let project = &app.project;
    let reported = Paragraph::new(vec![
        stat_line(
            "Total dependencies",
            project.total_dependencies.to_string(),
            scheme.text,
        ),
        stat_line(
            "Direct",
            project.direct_dependencies.to_string(),
            scheme.text,
        ),
        stat_line("Dev", project.dev_dependencies.to_string(), scheme.text),
        stat_line(
            "Vulnerabilities",
            project.vulnerabilities.to_string(),
            scheme.error,
        ),
        stat_line(
            "Outdated",
            project.outdated_dependencies.to_string(),
            scheme.warning,
        ),
    ])
    .block(Block::bordered().title("Project (reported)"));
    frame.render_widget(reported, halves[1]);
}

fn stat_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{label:<20}")),
        Span::styled(value, Style::default().fg(color).bold()),
    ])
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let scheme = &app.scheme;
    let line = if app.search_active {
        Line::from(vec![
            Span::styled("search: ", Style::default().fg(scheme.accent)),
            Span::raw(app.search.clone()),
            Span::styled("█", Style::default().fg(scheme.accent)),
        ])
    } else {
        let mut status = format!(
            "{} · {} matching",
            app.criteria().summary(),
            count_nodes(&app.filtered)
        );
        let expanded = app.expansion.expanded_count();
        if app.active_tab == ExplorerTab::Tree && expanded > 0 {
            status.push_str(&format!(" · {expanded} expanded"));
        }
        Line::from(Span::styled(status, Style::default().fg(scheme.muted)))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let hints =
        "q quit · / search · t kind · s status · c clear · x collapse · ↑↓ move · ⏎ expand · tab view";
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(app.scheme.muted)),
        area,
    );
}

/// Truncate a string to a display width, appending an ellipsis when cut.
/// Strings that already fit, exact width included, pass through unchanged.
fn fit_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max.saturating_sub(1) {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}
