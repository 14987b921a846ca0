//! Main view
//!
//! Header line, PR table and status bar.

use crate::actions::{Action, ContextAction, FilterAction, NavigationAction, PullRequestAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::{
    HeaderViewModel, PrTableContent, PrTableViewModel, StatusBarViewModel,
};
use crate::views::status_bar::StatusBarWidget;
use crate::views::{View, ViewId};
use gh_pr_recent_theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// The PR table, always at the bottom of the view stack
#[derive(Debug, Clone)]
pub struct PullRequestView;

impl PullRequestView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PullRequestView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for PullRequestView {
    fn view_id(&self) -> ViewId {
        ViewId::PullRequests
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::VIM_NAVIGATION_BINDINGS | PanelCapabilities::ITEM_NAVIGATION
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => PullRequestAction::NavigateNext,
            NavigationAction::Previous => PullRequestAction::NavigatePrevious,
            NavigationAction::ToTop => PullRequestAction::NavigateToTop,
            NavigationAction::ToBottom => PullRequestAction::NavigateToBottom,
        };
        Some(Action::PullRequest(action))
    }

    fn translate_context_action(&self, action: ContextAction, _state: &AppState) -> Option<Action> {
        match action {
            ContextAction::Confirm => Some(Action::PullRequest(PullRequestAction::OpenInBrowser)),
            ContextAction::ToggleSelect => None,
        }
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::PullRequest(_)
                | Action::Filter(FilterAction::ClearAll)
                | Action::ViewContext(_)
                | Action::Navigate(_)
                | Action::Global(_)
        )
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Table
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let vm = PrTableViewModel::from_state(state);
    render_header(&vm.header, &state.theme, chunks[0], f);
    render_table(&vm, &state.theme, chunks[1], f);

    let status_vm = StatusBarViewModel::from_state(state);
    f.render_widget(StatusBarWidget(&status_vm), chunks[2]);
}

fn render_header(header: &HeaderViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let mut spans = vec![Span::styled(" gh-pr-recent ", theme.panel_title())];
    for (label, value) in &header.fields {
        spans.push(Span::styled(" │ ", theme.muted()));
        spans.push(Span::styled(format!("{}: ", label), theme.muted()));
        spans.push(Span::styled(value.clone(), theme.text()));
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(header.status_text.chars().count() as u16 + 1),
        ])
        .split(area);

    let background = Style::default().bg(theme.bg_secondary);
    f.render_widget(Paragraph::new(Line::from(spans)).style(background), chunks[0]);
    f.render_widget(
        Paragraph::new(Line::from(header.status_text.clone()).right_aligned())
            .style(background.fg(header.status_color)),
        chunks[1],
    );
}

fn render_table(vm: &PrTableViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let mut hints = vec![Span::raw(" ")];
    for (keys, description) in &vm.hints {
        hints.push(Span::styled(keys.clone(), theme.key_hint()));
        hints.push(Span::styled(format!(" {}  ", description), theme.key_description()));
    }

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent_primary))
        .title(vm.title.clone())
        .title_style(theme.panel_title())
        .title_bottom(Line::from(hints))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let table_area = match &vm.content {
        PrTableContent::Message { text, style } => {
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(text.clone(), *style)).centered()),
                inner,
            );
            return;
        }
        PrTableContent::Error { text, style } => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(0)])
                .split(inner);
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(text.clone(), *style))),
                chunks[0],
            );
            chunks[1]
        }
        PrTableContent::Rows => inner,
    };

    let header = Row::new(
        ["Repository", "PR Number", "Status", "Title", "Last Updated"]
            .into_iter()
            .map(|h| Cell::from(h).style(theme.table_header())),
    )
    .style(theme.table_header().add_modifier(Modifier::BOLD))
    .height(1);

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.repository.clone()),
                Cell::from(row.number.clone()),
                Cell::from(row.status.clone()).style(Style::default().fg(row.status_color)),
                Cell::from(row.title.clone()),
                Cell::from(row.updated.clone()),
            ])
            .style(row.style)
            .height(1)
        })
        .collect();

    let widths = [
        Constraint::Length(24),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Min(20),
        Constraint::Length(18),
    ];

    let table = Table::new(rows, widths).header(header).column_spacing(1);

    // Selection styling is baked into the rows; the state only keeps the cursor in view
    let mut table_state = TableState::default().with_selected(
        (!vm.rows.is_empty()).then_some(vm.selected_index),
    );
    f.render_stateful_widget(table, table_area, &mut table_state);
}
