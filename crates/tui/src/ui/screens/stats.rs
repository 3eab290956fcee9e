use ledger::{LedgerStats, stats::CategoryTotal};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::{
    app::AppState,
    ui::{
        components::{
            card::{Card, StatCard},
            money::{styled_amount, styled_amount_bold},
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let Some(stats) = &state.stats else {
        Card::new("Statistics", &theme).render_with(
            frame,
            area,
            Paragraph::new(Span::styled("Loading…", Style::default().fg(theme.dim))),
        );
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    render_summary(frame, layout[0], stats, &theme);
    render_categories(frame, layout[1], stats, &theme);
}

fn render_summary(frame: &mut Frame<'_>, area: Rect, stats: &LedgerStats, theme: &Theme) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

    StatCard::new("In", styled_amount(stats.credits, theme), theme).render(frame, cols[0]);
    StatCard::new("Out", styled_amount(-stats.debits, theme), theme).render(frame, cols[1]);
    StatCard::new("Balance", styled_amount(stats.balance(), theme), theme).render(frame, cols[2]);

    let mut entries = StatCard::new(
        "Entries",
        Span::styled(stats.entries.to_string(), Style::default().fg(theme.text)),
        theme,
    );
    if stats.skipped > 0 {
        entries = entries.subtitle(format!("{} unreadable", stats.skipped));
    }
    entries.render(frame, cols[3]);
}

fn render_categories(frame: &mut Frame<'_>, area: Rect, stats: &LedgerStats, theme: &Theme) {
    let card = Card::new("By Category", theme);
    let inner = card.inner(area);
    frame.render_widget(card.block(), area);

    let width = stats
        .by_category
        .iter()
        .map(|bucket| bucket.title.chars().count())
        .max()
        .unwrap_or(0);

    let items = stats
        .by_category
        .iter()
        .map(|bucket| ListItem::new(category_line(bucket, width, theme)))
        .collect::<Vec<_>>();

    frame.render_widget(List::new(items), inner);
}

fn category_line(bucket: &CategoryTotal, width: usize, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{:<width$}  ", bucket.title)),
        styled_amount_bold(bucket.total, theme),
        Span::styled(
            format!("  ({})", bucket.entries),
            Style::default().fg(theme.dim),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger::Money;

    #[test]
    fn category_rows_align_titles() {
        let bucket = CategoryTotal {
            title: "Fun".to_string(),
            total: Money::new(-2000),
            entries: 2,
        };
        let line = category_line(&bucket, 5, &Theme::default());
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, "Fun    -£20.00  (2)");
    }
}
