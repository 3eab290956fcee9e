pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Screen, Section};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(2), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Bottom bar
        ])
        .split(frame.area());

    render_info_bar(frame, layout[0], state, &theme);
    components::tabs::render_tabs(frame, layout[1], state.section, &theme);

    let content = layout[2];
    match (state.screen, state.section) {
        (Screen::Form, _) => screens::form::render(frame, content, state),
        (Screen::Main, Section::Home) => screens::home::render(frame, content, state),
        (Screen::Main, Section::Ledger) => screens::ledger::render(frame, content, state),
        (Screen::Main, Section::Jar) => screens::jar::render(frame, content, state),
        (Screen::Main, Section::Stats) => screens::stats::render(frame, content, state),
    }

    render_bottom_bar(frame, layout[3], state, &theme);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let refresh = state
        .last_refresh
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    let line = Line::from(vec![
        Span::styled("Backend", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}  ", state.base_url)),
        Span::styled("Refresh", Style::default().fg(theme.dim)),
        Span::raw(format!(": {refresh}")),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = Vec::new();
    if state.screen == Screen::Main {
        parts = components::tabs::tab_shortcuts(theme);
        parts.push(components::hints::hint_separator(theme));
    }

    let hints = components::hints::context_hints(state);
    parts.extend(components::hints::hints_to_spans(&hints, theme));

    parts.push(components::hints::hint_separator(theme));
    let quit = if state.screen == Screen::Form {
        "Ctrl+C"
    } else {
        "q"
    };
    parts.push(Span::styled(quit, Style::default().fg(theme.accent)));
    parts.push(Span::raw(" quit"));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
