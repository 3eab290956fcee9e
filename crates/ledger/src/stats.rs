//! Summary figures for the stats view.
use std::collections::BTreeMap;

use api_types::ledger::Transaction;

use crate::{Money, total::signed_amount};

pub const UNCATEGORIZED: &str = "No categories";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTotal {
    pub title: String,
    /// Signed sum of the entries carrying this category.
    pub total: Money,
    pub entries: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerStats {
    pub entries: usize,
    pub credits: Money,
    pub debits: Money,
    pub skipped: usize,
    /// Sorted by title. An entry with several categories counts in each.
    pub by_category: Vec<CategoryTotal>,
}

impl LedgerStats {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut stats = LedgerStats {
            entries: transactions.len(),
            ..Self::default()
        };
        let mut buckets: BTreeMap<String, (Money, usize)> = BTreeMap::new();

        for tx in transactions {
            let Some(amount) = signed_amount(tx) else {
                stats.skipped += 1;
                continue;
            };
            let mut titles: Vec<String> = tx
                .categories
                .iter()
                .map(|category| category.title.clone())
                .collect();
            if titles.is_empty() {
                titles = tx
                    .all_category_ids()
                    .iter()
                    .map(|id| format!("#{id}"))
                    .collect();
            }
            if titles.is_empty() {
                titles.push(UNCATEGORIZED.to_string());
            }
            titles.sort();
            titles.dedup();

            let Some(sums) = checked_sums(&stats, &buckets, tx.debit, amount, &titles) else {
                tracing::warn!(id = ?tx.id, "stats skip entry that would overflow a sum");
                stats.skipped += 1;
                continue;
            };
            let (credits, debits, bucket_sums) = sums;
            stats.credits = credits;
            stats.debits = debits;
            for (title, total) in titles.into_iter().zip(bucket_sums) {
                let bucket = buckets.entry(title).or_default();
                bucket.0 = total;
                bucket.1 += 1;
            }
        }

        if stats.skipped > 0 {
            tracing::warn!(skipped = stats.skipped, "stats ignore entries with unusable amounts");
        }

        stats.by_category = buckets
            .into_iter()
            .map(|(title, (total, entries))| CategoryTotal {
                title,
                total,
                entries,
            })
            .collect();
        stats
    }

    pub fn balance(&self) -> Money {
        self.credits.saturating_sub(self.debits)
    }
}

type Sums = (Money, Money, Vec<Money>);

/// Every sum `amount` would touch, or `None` if any of them overflows.
fn checked_sums(
    stats: &LedgerStats,
    buckets: &BTreeMap<String, (Money, usize)>,
    debit: bool,
    amount: Money,
    titles: &[String],
) -> Option<Sums> {
    let (credits, debits) = if debit {
        (stats.credits, stats.debits.checked_add(amount.checked_abs()?)?)
    } else {
        (stats.credits.checked_add(amount)?, stats.debits)
    };
    let bucket_sums = titles
        .iter()
        .map(|title| {
            buckets
                .get(title)
                .map_or(Money::ZERO, |bucket| bucket.0)
                .checked_add(amount)
        })
        .collect::<Option<Vec<_>>>()?;
    Some((credits, debits, bucket_sums))
}
