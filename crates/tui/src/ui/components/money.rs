use ledger::Money;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::Gauge,
};

use crate::ui::theme::Theme;

/// Creates a styled span for a money amount with semantic coloring.
///
/// - Positive amounts: green
/// - Negative amounts: red (negative sign shown)
/// - Zero: neutral text color
#[must_use]
pub fn styled_amount(amount: Money, theme: &Theme) -> Span<'static> {
    Span::styled(amount.to_string(), Style::default().fg(amount_color(amount, theme)))
}

/// Bold variant for totals.
#[must_use]
pub fn styled_amount_bold(amount: Money, theme: &Theme) -> Span<'static> {
    Span::styled(
        amount.to_string(),
        Style::default()
            .fg(amount_color(amount, theme))
            .add_modifier(Modifier::BOLD),
    )
}

fn amount_color(amount: Money, theme: &Theme) -> ratatui::style::Color {
    if amount.is_negative() {
        theme.negative
    } else if amount.is_zero() {
        theme.text
    } else {
        theme.positive
    }
}

/// The jar fill gauge. `percentage` is expected within `0..=100`; anything
/// else is clamped.
#[must_use]
pub fn jar_gauge(percentage: f64, theme: &Theme) -> Gauge<'static> {
    let percent = percent_u16(percentage);
    let color = if percent >= 100 {
        theme.positive
    } else if percent >= 50 {
        theme.accent
    } else {
        theme.warning
    };

    Gauge::default()
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{percentage:.0}%"))
}

/// Text progress bar for inline use, e.g. `████░░░░░░ 40%`.
#[must_use]
pub fn inline_progress_bar(percentage: f64, width: usize) -> String {
    let percent = percent_u16(percentage);
    let filled = (usize::from(percent) * width / 100).min(width);
    format!(
        "{}{} {percent}%",
        "█".repeat(filled),
        "░".repeat(width - filled)
    )
}

fn percent_u16(percentage: f64) -> u16 {
    if percentage.is_finite() {
        percentage.clamp(0.0, 100.0).round() as u16
    } else {
        0
    }
}
