use ratatui::{style::Style, text::Span};

use crate::{
    app::{AppState, FormField, Screen, Section},
    ui::theme::Theme,
};

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

pub fn hint_separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.border))
}

/// Hints for whatever currently has the keyboard.
pub fn context_hints(state: &AppState) -> Vec<KeyHint> {
    if state.screen == Screen::Form {
        let toggle = match state.form.focus {
            FormField::Direction => Some(KeyHint::new("Space", "in/out")),
            FormField::Categories => Some(KeyHint::new("Space", "select")),
            FormField::CustomToggle => Some(KeyHint::new("Space", "new category")),
            _ => None,
        };
        let mut hints = vec![KeyHint::new("Tab", "next")];
        hints.extend(toggle);
        hints.push(KeyHint::new("Enter", "save"));
        hints.push(KeyHint::new("Esc", "cancel"));
        return hints;
    }

    match state.section {
        Section::Home | Section::Ledger => vec![
            KeyHint::new("↑↓", "select"),
            KeyHint::new("a", "add"),
            KeyHint::new("u", "update"),
            KeyHint::new("d", "delete"),
            KeyHint::new("r", "refresh"),
        ],
        Section::Jar => vec![
            KeyHint::new("0-9 .", "cost"),
            KeyHint::new("Backspace", "erase"),
            KeyHint::new("r", "refresh"),
        ],
        Section::Stats => vec![KeyHint::new("r", "refresh")],
    }
}
