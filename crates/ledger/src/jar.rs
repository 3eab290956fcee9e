//! The jar: progress of the running total toward a user-entered target cost.
//!
//! Progress is `min(100, total / cost * 100)` for a positive cost and `0`
//! otherwise. A negative total shows an empty jar.
use crate::Money;

/// Keeps only ASCII digits and `.`, the characters a cost may contain.
///
/// ```rust
/// assert_eq!(ledger::jar::sanitize_cost("£1,200.50"), "1200.50");
/// ```
pub fn sanitize_cost(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Reads the leading decimal number of a sanitized cost.
///
/// A second `.` ends the number, so `"12.5.3"` reads as `12.5`. Returns `None`
/// when no digit appears before that point.
pub fn parse_cost(input: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (idx, ch) in input.char_indices() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = idx + ch.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    input[..end].parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Percentage of `cost` covered by `total`, always within `0..=100`.
pub fn progress_percentage(total: Money, cost: Option<f64>) -> f64 {
    let Some(cost) = cost else {
        return 0.0;
    };
    if cost.is_nan() || cost <= 0.0 {
        return 0.0;
    }
    let percentage = (total.to_major() / cost) * 100.0;
    if !percentage.is_finite() {
        tracing::warn!(total = %total, cost, "invalid jar percentage, showing 0");
        return 0.0;
    }
    percentage.clamp(0.0, 100.0)
}

/// Jar widget state: the running total and the target cost being typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Jar {
    total: Money,
    cost_input: String,
    percentage: f64,
}

impl Jar {
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn cost_input(&self) -> &str {
        &self.cost_input
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn cost(&self) -> Option<f64> {
        parse_cost(&self.cost_input)
    }

    pub fn set_total(&mut self, total: Money) {
        self.total = total;
        self.recompute();
    }

    /// Replaces the cost text, stripping anything but digits and `.`.
    pub fn set_cost_input(&mut self, input: &str) {
        self.cost_input = sanitize_cost(input);
        self.recompute();
    }

    /// Appends a typed character; disallowed characters are dropped.
    pub fn push_cost_char(&mut self, ch: char) {
        let mut next = self.cost_input.clone();
        next.push(ch);
        self.set_cost_input(&next);
    }

    pub fn pop_cost_char(&mut self) {
        let mut next = self.cost_input.clone();
        next.pop();
        self.set_cost_input(&next);
    }

    fn recompute(&mut self) {
        let cost = self.cost();
        if cost.is_none() && !self.cost_input.is_empty() {
            tracing::warn!(input = %self.cost_input, "cost is not a number, showing 0%");
        }
        self.percentage = progress_percentage(self.total, cost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cost_reads_leading_number() {
        assert_eq!(parse_cost("100"), Some(100.0));
        assert_eq!(parse_cost("12.5.3"), Some(12.5));
        assert_eq!(parse_cost("7."), Some(7.0));
        assert_eq!(parse_cost(".25"), Some(0.25));
        assert_eq!(parse_cost("."), None);
        assert_eq!(parse_cost(""), None);
    }

    #[test]
    fn percentage_is_capped_and_never_nan() {
        assert_eq!(progress_percentage(Money::new(3000), Some(100.0)), 30.0);
        assert_eq!(progress_percentage(Money::new(50_000), Some(100.0)), 100.0);
        assert_eq!(progress_percentage(Money::ZERO, Some(0.0)), 0.0);
        assert_eq!(progress_percentage(Money::ZERO, None), 0.0);
        assert_eq!(progress_percentage(Money::new(-500), Some(10.0)), 0.0);
        assert_eq!(progress_percentage(Money::new(100), Some(f64::NAN)), 0.0);
    }

    #[test]
    fn typing_sanitizes_every_keystroke() {
        let mut jar = Jar::default();
        jar.set_total(Money::new(3000));
        for ch in "1a0£0".chars() {
            jar.push_cost_char(ch);
        }
        assert_eq!(jar.cost_input(), "100");
        assert_eq!(jar.percentage(), 30.0);

        jar.pop_cost_char();
        assert_eq!(jar.cost_input(), "10");
        assert_eq!(jar.percentage(), 100.0);
    }

    #[test]
    fn total_change_recomputes_percentage() {
        let mut jar = Jar::default();
        jar.set_cost_input("200");
        assert_eq!(jar.percentage(), 0.0);
        jar.set_total(Money::new(5000));
        assert_eq!(jar.percentage(), 25.0);
    }
}
