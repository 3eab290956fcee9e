use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::AppState,
    ui::{
        components::{
            card::{Card, StatCard},
            money::{inline_progress_bar, styled_amount, styled_amount_bold},
        },
        screens::ledger::render_list,
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    // Jar and balance summary above the transaction list
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(layout[0]);

    render_jar_summary(frame, cols[0], state, &theme);
    render_balance(frame, cols[1], state, &theme);
    render_list(frame, layout[1], state, &theme, "Ledger");
}

fn render_jar_summary(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let jar = &state.jar.jar;
    let cost = if jar.cost_input().is_empty() {
        Span::styled("no target", Style::default().fg(theme.dim))
    } else {
        Span::raw(format!("£{}", jar.cost_input()))
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Saved ", Style::default().fg(theme.dim)),
            styled_amount_bold(jar.total(), theme),
            Span::styled(" of ", Style::default().fg(theme.dim)),
            cost,
        ]),
        Line::from(Span::styled(
            inline_progress_bar(jar.percentage(), 20),
            Style::default().fg(theme.accent),
        )),
    ];

    Card::new("Jar", theme).render_with(frame, area, Paragraph::new(lines));
}

fn render_balance(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    match &state.stats {
        Some(stats) => {
            let subtitle = if stats.skipped > 0 {
                format!("{} entries, {} unreadable", stats.entries, stats.skipped)
            } else {
                format!("{} entries", stats.entries)
            };
            StatCard::new("Balance", styled_amount(stats.balance(), theme), theme)
                .subtitle(subtitle)
                .render(frame, area);
        }
        None => StatCard::new(
            "Balance",
            Span::styled("Loading…", Style::default().fg(theme.dim)),
            theme,
        )
        .render(frame, area),
    }
}
