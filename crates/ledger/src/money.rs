use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use crate::LedgerError;

/// Signed money amount represented as **integer pence**.
///
/// Totals are accumulated in pence so summing many entries never drifts the
/// way repeated floating-point addition does.
///
/// # Examples
///
/// ```rust
/// use ledger::Money;
///
/// let amount = Money::new(12_34);
/// assert_eq!(amount.pence(), 1234);
/// assert_eq!(amount.to_string(), "£12.34");
/// assert_eq!((-amount).to_string(), "-£12.34");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects >
/// 2 decimals):
///
/// ```rust
/// use ledger::Money;
///
/// assert_eq!("10".parse::<Money>().unwrap().pence(), 1000);
/// assert_eq!("10,5".parse::<Money>().unwrap().pence(), 1050);
/// assert!("12.345".parse::<Money>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer pence.
    #[must_use]
    pub const fn new(pence: i64) -> Self {
        Self(pence)
    }

    /// Returns the raw value in pence.
    #[must_use]
    pub const fn pence(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    #[must_use]
    pub const fn checked_abs(self) -> Option<Money> {
        match self.0.checked_abs() {
            Some(abs) => Some(Self(abs)),
            None => None,
        }
    }

    #[must_use]
    pub const fn saturating_sub(self, rhs: Money) -> Money {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Converts a major-unit float (as sent by the backend) to pence,
    /// rounding to the nearest penny.
    ///
    /// Returns `None` for NaN, infinities and values outside the `i64` range.
    #[must_use]
    pub fn from_major(value: f64) -> Option<Money> {
        if !value.is_finite() {
            return None;
        }
        let pence = (value * 100.0).round();
        // `i64::MAX as f64` rounds up to 2^63, which is already out of range.
        if pence >= i64::MAX as f64 || pence <= i64::MIN as f64 {
            return None;
        }
        Some(Money(pence as i64))
    }

    /// Major units (pounds) as a float, for ratios and JSON payloads.
    #[must_use]
    pub fn to_major(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Formats the amount without currency symbol, e.g. `12.30` or `-0.05`.
    ///
    /// This is the text the form pre-fills its amount field with.
    #[must_use]
    pub fn to_plain(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}£{}.{:02}", abs / 100, abs % 100)
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl FromStr for Money {
    type Err = LedgerError;

    /// Parses a decimal string into pence.
    ///
    /// Accepts `.` or `,` as decimal separator, an optional leading `+`/`-`
    /// and an optional leading `£`.
    ///
    /// Validation rules:
    /// - max 2 fractional digits (rejects `12.345`)
    /// - rejects empty/invalid strings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || LedgerError::InvalidAmount("empty amount".to_string());
        let invalid = || LedgerError::InvalidAmount(format!("\"{}\" is not a number", s.trim()));
        let overflow = || LedgerError::InvalidAmount("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.trim_start();
        let rest = rest.strip_prefix('£').unwrap_or(rest).trim();
        if rest.is_empty() {
            return Err(empty());
        }

        let rest = rest.replace(',', ".");
        let mut parts = rest.split('.');
        let pounds_str = parts.next().ok_or_else(invalid)?;
        let pence_str = parts.next();

        if parts.next().is_some() {
            return Err(invalid());
        }

        // ".5" is accepted (browsers do the same for number inputs).
        let pounds: i64 = if pounds_str.is_empty() {
            if pence_str.is_none_or(str::is_empty) {
                return Err(invalid());
            }
            0
        } else {
            if !pounds_str.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            pounds_str.parse().map_err(|_| overflow())?
        };

        let pence: i64 = match pence_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => return Err(LedgerError::InvalidAmount("too many decimals".to_string())),
                }
            }
        };

        let total = pounds
            .checked_mul(100)
            .and_then(|v| v.checked_add(pence))
            .ok_or_else(overflow)?;

        Ok(Money(if negative { -total } else { total }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_gbp() {
        assert_eq!(Money::new(0).to_string(), "£0.00");
        assert_eq!(Money::new(1).to_string(), "£0.01");
        assert_eq!(Money::new(1050).to_string(), "£10.50");
        assert_eq!(Money::new(-1050).to_string(), "-£10.50");
        assert_eq!(Money::new(-5).to_plain(), "-0.05");
    }

    #[test]
    fn parse_accepts_dot_comma_and_symbol() {
        assert_eq!("10.5".parse::<Money>().unwrap().pence(), 1050);
        assert_eq!("10,50".parse::<Money>().unwrap().pence(), 1050);
        assert_eq!("£3".parse::<Money>().unwrap().pence(), 300);
        assert_eq!("-0.01".parse::<Money>().unwrap().pence(), -1);
        assert_eq!(".5".parse::<Money>().unwrap().pence(), 50);
        assert_eq!("  2.30 ".parse::<Money>().unwrap().pence(), 230);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!("12.345".parse::<Money>().is_err());
        assert!("1.2.3".parse::<Money>().is_err());
        assert!("ten".parse::<Money>().is_err());
        assert!("1e3".parse::<Money>().is_err());
    }

    #[test]
    fn from_major_rounds_to_nearest_penny() {
        assert_eq!(Money::from_major(0.1 + 0.2), Some(Money::new(30)));
        assert_eq!(Money::from_major(19.999), Some(Money::new(2000)));
        assert_eq!(Money::from_major(f64::NAN), None);
        assert_eq!(Money::from_major(f64::INFINITY), None);
    }

    #[test]
    fn from_major_rejects_the_i64_edges() {
        let edge = i64::MAX as f64 / 100.0;
        assert_eq!(Money::from_major(edge), None);
        assert_eq!(Money::from_major(-edge), None);
        assert!(Money::from_major(9e16).is_some());
        assert!(Money::from_major(-9e16).is_some());
    }
}
