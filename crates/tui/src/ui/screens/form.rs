use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    app::{AppState, FormField, FormState},
    ui::{components::card::Card, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let form_state = &state.form;

    let title = if form_state.is_update() {
        "Update Transaction"
    } else {
        "Add Transaction"
    };
    let card = Card::new(title, &theme).focused(true);
    let inner = card.inner(area);
    frame.render_widget(card.block(), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Direction
            Constraint::Length(1),
            Constraint::Min(3),    // Categories
            Constraint::Length(1), // Custom toggle
            Constraint::Length(1), // New category
            Constraint::Length(1),
            Constraint::Length(1), // Message
        ])
        .split(inner);

    let form = &form_state.form;
    render_text_field(frame, rows[0], form_state, FormField::Name, "Name", &form.name, &theme);
    render_text_field(frame, rows[1], form_state, FormField::Amount, "Amount", &form.money, &theme);

    let direction = if form.debit { "Out (debit)" } else { "In (credit)" };
    let direction_style = if form.debit {
        Style::default().fg(theme.negative)
    } else {
        Style::default().fg(theme.positive)
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            field_label("Type", form_state.focus == FormField::Direction, &theme),
            Span::styled(direction, direction_style),
        ])),
        rows[2],
    );

    render_categories(frame, rows[4], form_state, &theme);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            field_label(
                "Custom",
                form_state.focus == FormField::CustomToggle,
                &theme,
            ),
            Span::raw(checkbox(form.custom_category)),
            Span::styled(" add a new category", Style::default().fg(theme.dim)),
        ])),
        rows[5],
    );

    if form.custom_category {
        render_text_field(
            frame,
            rows[6],
            form_state,
            FormField::NewCategory,
            "Category",
            &form.new_category,
            &theme,
        );
    }

    if let Some(message) = &form_state.message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.clone(),
                Style::default().fg(theme.error),
            )),
            rows[8],
        );
    }
}

fn render_categories(frame: &mut Frame<'_>, area: Rect, form_state: &FormState, theme: &Theme) {
    let focused = form_state.focus == FormField::Categories;
    let card = Card::new("Categories", theme).focused(focused);
    let inner = card.inner(area);
    frame.render_widget(card.block(), area);

    if form_state.categories.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No categories yet",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
        return;
    }

    let items = form_state
        .categories
        .iter()
        .map(|category| {
            let selected = form_state.form.is_selected(&category.id);
            ListItem::new(Line::from(vec![
                Span::raw(checkbox(selected)),
                Span::raw(format!(" {}", category.title)),
            ]))
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(form_state.category_cursor));
    }

    let list = List::new(items).highlight_style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_stateful_widget(list, inner, &mut list_state);
}

fn render_text_field(
    frame: &mut Frame<'_>,
    area: Rect,
    form_state: &FormState,
    field: FormField,
    label: &str,
    value: &str,
    theme: &Theme,
) {
    let focused = form_state.focus == field;
    let mut spans = vec![field_label(label, focused, theme), Span::raw(value.to_string())];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn field_label(label: &str, focused: bool, theme: &Theme) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim)
    };
    Span::styled(format!("{label:<10}"), style)
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}
