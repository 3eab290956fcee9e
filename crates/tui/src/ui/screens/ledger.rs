use api_types::{Amount, ledger::Transaction};
use ledger::total::signed_amount;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    app::AppState,
    ui::{
        components::{card::Card, money::styled_amount},
        theme::Theme,
    },
};

const NO_CATEGORIES: &str = "No categories";

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    render_list(frame, area, state, &theme, "Transaction List");
}

/// The transaction list card; also embedded in the home screen.
pub fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme, title: &str) {
    let card = Card::new(title, theme).focused(true);
    let inner = card.inner(area);
    frame.render_widget(card.block(), area);

    if state.ledger.items.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("No transactions. Press ", Style::default().fg(theme.dim)),
                Span::styled("a", Style::default().fg(theme.accent)),
                Span::styled(" to add one.", Style::default().fg(theme.dim)),
            ])),
            inner,
        );
        return;
    }

    let name_width = state
        .ledger
        .items
        .iter()
        .map(|tx| tx.name.chars().count())
        .max()
        .unwrap_or(0)
        .min(32);

    let items = state
        .ledger
        .items
        .iter()
        .map(|tx| ListItem::new(row_line(tx, name_width, theme)))
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    list_state.select(Some(state.ledger.selected));

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, inner, &mut list_state);
}

fn row_line(tx: &Transaction, name_width: usize, theme: &Theme) -> Line<'static> {
    let amount = match signed_amount(tx) {
        Some(amount) => styled_amount(amount, theme),
        None => Span::styled(raw_amount(tx), Style::default().fg(theme.warning)),
    };
    Line::from(vec![
        Span::raw(format!("{:<name_width$}  ", tx.name)),
        amount,
        Span::raw("  "),
        Span::styled(category_labels(tx), Style::default().fg(theme.dim)),
    ])
}

/// What the backend sent when the amount is not numeric.
fn raw_amount(tx: &Transaction) -> String {
    let sign = if tx.debit { "-" } else { "" };
    match &tx.money {
        Some(Amount::Text(text)) => format!("{sign}£{text}?"),
        Some(Amount::Number(_)) | Some(Amount::Other(_)) | None => format!("{sign}£?"),
    }
}

pub fn category_labels(tx: &Transaction) -> String {
    if !tx.categories.is_empty() {
        return tx
            .categories
            .iter()
            .map(|category| format!("#{}", category.title))
            .collect::<Vec<_>>()
            .join(" ");
    }
    let ids = tx.all_category_ids();
    if ids.is_empty() {
        return NO_CATEGORIES.to_string();
    }
    ids.iter()
        .map(|id| format!("#{id}"))
        .collect::<Vec<_>>()
        .join(" ")
}
