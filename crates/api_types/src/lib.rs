use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identifier.
///
/// Backends emit either integer or string ids; the JSON shape is kept
/// so that ids written back (path segments, `category_ids`) match what the
/// server handed out.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Int(i64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl FromStr for Id {
    type Err = Infallible;

    /// Numeric strings (e.g. a `?id=12` query value) become [`Id::Int`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(trimmed
            .parse::<i64>()
            .map(Self::Int)
            .unwrap_or_else(|_| Self::Text(trimmed.to_string())))
    }
}

/// A money amount as the backend sent it.
///
/// Amounts are usually JSON numbers but some backends serialize decimals as
/// strings. Anything else is kept as [`Amount::Other`] and treated as
/// non-numeric by the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

/// Deserializes `null` (or a missing field, with `#[serde(default)]`) as an
/// empty collection.
fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

pub mod category {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Category {
        pub id: Id,
        /// Nested category objects in the ledger list carry `name`.
        #[serde(default, alias = "name")]
        pub title: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryNew {
        pub title: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryCreated {
        pub id: Id,
    }
}

pub mod ledger {
    use super::*;
    use crate::category::Category;

    /// A ledger entry as returned by `GET /ledger` and `GET /ledger/{id}`.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Transaction {
        /// Detail responses may omit the id; list rows always carry it.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub id: Option<Id>,
        #[serde(default)]
        pub name: String,
        #[serde(default)]
        pub money: Option<Amount>,
        /// `true` for an outflow, `false` for an inflow.
        #[serde(default)]
        pub debit: bool,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub categories: Vec<Category>,
        #[serde(
            default,
            deserialize_with = "nullable_vec",
            skip_serializing_if = "Vec::is_empty"
        )]
        pub category_ids: Vec<Id>,
        /// Legacy single-category shape.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub category_id: Option<Id>,
    }

    impl Transaction {
        /// Every category id attached to this entry, whichever shape the
        /// backend used, in first-seen order and without duplicates.
        pub fn all_category_ids(&self) -> Vec<Id> {
            let mut ids: Vec<Id> = Vec::new();
            let candidates = self
                .categories
                .iter()
                .map(|category| &category.id)
                .chain(self.category_ids.iter())
                .chain(self.category_id.iter());
            for id in candidates {
                if !ids.contains(id) {
                    ids.push(id.clone());
                }
            }
            ids
        }
    }

    /// Request body for `POST /ledger` and `PUT /ledger/{id}`.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct TransactionPayload {
        pub name: String,
        /// Major units (pounds), e.g. `12.5`.
        pub money: f64,
        pub debit: bool,
        pub category_ids: Vec<Id>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionCreated {
        pub id: Id,
    }
}

#[cfg(test)]
mod tests {
    use super::{Amount, Id, ledger::Transaction};

    #[test]
    fn list_row_accepts_nested_category_names() {
        let raw = r#"{
            "id": 3,
            "name": "Coffee",
            "money": "2.50",
            "debit": true,
            "categories": [{"id": 1, "name": "Food"}]
        }"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.id, Some(Id::Int(3)));
        assert_eq!(tx.money, Some(Amount::Text("2.50".to_string())));
        assert_eq!(tx.categories[0].title, "Food");
    }

    #[test]
    fn detail_accepts_legacy_category_id_and_null_lists() {
        let raw = r#"{"name": "Rent", "money": 700, "debit": true,
                      "categories": null, "category_id": "7"}"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.id, None);
        assert!(tx.categories.is_empty());
        assert_eq!(tx.all_category_ids(), vec![Id::Text("7".to_string())]);
    }

    #[test]
    fn non_numeric_money_is_kept_not_rejected() {
        let raw = r#"{"id": 1, "name": "Odd", "money": true, "debit": false}"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert!(matches!(tx.money, Some(Amount::Other(_))));
    }

    #[test]
    fn category_ids_are_merged_without_duplicates() {
        let raw = r#"{"id": 1, "categories": [{"id": 2, "title": "A"}],
                      "category_ids": [2, 4], "category_id": 4}"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.all_category_ids(), vec![Id::Int(2), Id::Int(4)]);
    }

    #[test]
    fn query_ids_prefer_integers() {
        assert_eq!("12".parse::<Id>().unwrap(), Id::Int(12));
        assert_eq!("ab-1".parse::<Id>().unwrap(), Id::Text("ab-1".to_string()));
    }
}
