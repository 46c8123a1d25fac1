//! TUI Views
//!
//! Renders the single-screen layout: input, tool list, output, and a status
//! line with key hints.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use transform_text::ToolCatalog;

use super::colors::Palette;
use super::state::{AppState, Focus, StatusKind};

/// Render the whole screen.
pub fn render(state: &AppState, catalog: &ToolCatalog, frame: &mut Frame) {
    let palette = Palette::for_theme(state.theme);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(6), Constraint::Length(1)])
        .split(frame.area());

    let title = Line::from(Span::styled(
        " Transform Text ",
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(title).style(palette.base()), rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(26)])
        .split(rows[1]);

    let panes = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[0]);

    render_text_pane(frame, panes[0], " Input ", &state.input, state.focus == Focus::Input, &palette);

    let output_title = match &state.applied {
        Some(key) => format!(" Output ({}) ", key),
        None => " Output ".to_string(),
    };
    render_text_pane(frame, panes[1], &output_title, &state.output, false, &palette);
    render_tools(frame, columns[1], state, catalog, &palette);
    render_status(frame, rows[2], state, &palette);
}

fn render_text_pane(frame: &mut Frame, area: Rect, title: &str, text: &str, focused: bool, palette: &Palette) {
    let border = if focused { palette.accent } else { palette.dim };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(Style::default().fg(border));
    let paragraph = Paragraph::new(text.to_string())
        .style(palette.base())
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_tools(frame: &mut Frame, area: Rect, state: &AppState, catalog: &ToolCatalog, palette: &Palette) {
    let border = if state.focus == Focus::Tools { palette.accent } else { palette.dim };
    let items: Vec<ListItem> = catalog.tools().map(|tool| ListItem::new(tool.label.clone())).collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Tools ")
                .border_style(Style::default().fg(border)),
        )
        .style(palette.base())
        .highlight_style(Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !catalog.is_empty() {
        list_state.select(Some(state.selected.min(catalog.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let line = match &state.copy_status {
        Some(status) => {
            let (icon, color) = match status.kind {
                StatusKind::Success => ("✓", palette.success),
                StatusKind::Warning => ("!", palette.warning),
                StatusKind::Error => ("✗", palette.error),
            };
            Line::from(Span::styled(format!(" {} {}", icon, status.text), Style::default().fg(color)))
        }
        None => Line::from(vec![
            Span::styled(" tab", Style::default().fg(palette.accent)),
            Span::raw(" focus  "),
            Span::styled("^t", Style::default().fg(palette.accent)),
            Span::raw(" apply  "),
            Span::styled("^y", Style::default().fg(palette.accent)),
            Span::raw(" copy  "),
            Span::styled("^l", Style::default().fg(palette.accent)),
            Span::raw(" theme  "),
            Span::styled("esc", Style::default().fg(palette.accent)),
            Span::raw(" quit"),
        ]),
    };
    frame.render_widget(Paragraph::new(line).style(palette.base()), area);
}
