//! Client-side domain logic for the jar tracker.
//!
//! Everything here is pure: the backend is authoritative and this crate only
//! interprets what it returns and validates what the user typed.
//!
//! - [`Money`]: amounts in integer pence.
//! - [`total`]: the signed running total (debits subtract, credits add).
//! - [`jar`]: target cost input and progress percentage.
//! - [`form`]: the create/update transaction form.
//! - [`stats`]: summary figures for the stats view.

pub use error::LedgerError;
pub use form::{FormMode, LedgerForm, ValidForm};
pub use jar::Jar;
pub use money::Money;
pub use stats::LedgerStats;
pub use total::{Total, ledger_total};

mod error;
pub mod form;
pub mod jar;
mod money;
pub mod stats;
pub mod total;
