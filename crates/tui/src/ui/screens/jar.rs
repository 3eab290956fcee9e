use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::AppState,
    ui::{
        components::{
            card::Card,
            money::{jar_gauge, styled_amount_bold},
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let card = Card::new("Jar", &theme).focused(true);
    let inner = card.inner(area);
    frame.render_widget(card.block(), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Total
            Constraint::Length(1), // Cost input
            Constraint::Length(1),
            Constraint::Length(3), // Gauge
            Constraint::Length(1),
            Constraint::Min(0), // Entry counts
        ])
        .split(inner);

    let jar = &state.jar.jar;

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Total  ", Style::default().fg(theme.dim)),
            styled_amount_bold(jar.total(), &theme),
        ])),
        rows[0],
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Cost   ", Style::default().fg(theme.dim)),
            Span::raw("£"),
            Span::styled(
                jar.cost_input().to_string(),
                Style::default().add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled("▏", Style::default().fg(theme.accent)),
        ])),
        rows[1],
    );

    frame.render_widget(jar_gauge(jar.percentage(), &theme), rows[3]);

    let total = &state.jar.total;
    let mut summary = vec![Span::styled(
        format!("{} entries", state.jar.entries()),
        Style::default().fg(theme.dim),
    )];
    if total.skipped > 0 {
        summary.push(Span::styled(
            format!("  {} with unreadable amounts left out", total.skipped),
            Style::default().fg(theme.warning),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(summary)), rows[5]);
}
