//! Errors raised by the ledger domain logic.
//!
//! Only user input is validated here; backend data that fails to parse is
//! skipped with a warning instead (see [`crate::total`]).
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Amount must not be negative")]
    NegativeAmount,
    #[error("Name is required")]
    MissingName,
    #[error("Select a category or add a new one")]
    MissingCategory,
    #[error("New category name is required")]
    MissingCustomCategory,
}
