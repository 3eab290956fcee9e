//! Signed running total over a fetched ledger.
//!
//! Debits subtract, credits add. Entries whose amount is missing or not a
//! number are skipped and reported with a warning; they never poison the sum.
use api_types::{Amount, ledger::Transaction};

use crate::Money;

/// Converts a backend amount to [`Money`], if it is numeric.
///
/// Numeric strings are parsed strictly first and then as a float, so
/// `"12.345"` from a backend still counts (rounded) while `"abc"` does not.
pub fn amount_of(amount: &Amount) -> Option<Money> {
    match amount {
        Amount::Number(value) => Money::from_major(*value),
        Amount::Text(text) => text.parse::<Money>().ok().or_else(|| {
            text.trim()
                .parse::<f64>()
                .ok()
                .and_then(Money::from_major)
        }),
        Amount::Other(_) => None,
    }
}

/// The entry's amount with the debit/credit sign applied.
pub fn signed_amount(tx: &Transaction) -> Option<Money> {
    let amount = amount_of(tx.money.as_ref()?)?;
    Some(if tx.debit { -amount } else { amount })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Total {
    pub sum: Money,
    /// Entries that contributed to `sum`.
    pub counted: usize,
    /// Entries ignored because their amount did not parse.
    pub skipped: usize,
}

pub fn ledger_total(transactions: &[Transaction]) -> Total {
    let mut total = Total::default();
    for tx in transactions {
        let Some(amount) = signed_amount(tx) else {
            tracing::warn!(id = ?tx.id, money = ?tx.money, "skipping entry with non-numeric amount");
            total.skipped += 1;
            continue;
        };
        match total.sum.checked_add(amount) {
            Some(sum) => {
                total.sum = sum;
                total.counted += 1;
            }
            None => {
                tracing::warn!(id = ?tx.id, "skipping entry that would overflow the total");
                total.skipped += 1;
            }
        }
    }
    total
}
