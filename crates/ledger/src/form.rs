//! The transaction form model, shared by create and update.
//!
//! The form holds raw field text exactly as typed. Nothing is parsed until
//! [`LedgerForm::validate`], which runs before any request is sent.
use std::collections::BTreeSet;

use api_types::{
    Amount, Id,
    ledger::{Transaction, TransactionPayload},
};

use crate::{LedgerError, Money, total::amount_of};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(Id),
}

impl FormMode {
    pub fn id(&self) -> Option<&Id> {
        match self {
            Self::Create => None,
            Self::Update(id) => Some(id),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LedgerForm {
    mode: FormMode,
    pub name: String,
    pub money: String,
    /// Defaults to an outflow.
    pub debit: bool,
    selected: BTreeSet<Id>,
    /// "Add new category" toggle.
    pub custom_category: bool,
    pub new_category: String,
    /// Server amount finer than a penny, resent as-is while its text is untouched.
    kept_amount: Option<KeptAmount>,
}

#[derive(Clone, Debug, PartialEq)]
struct KeptAmount {
    text: String,
    value: f64,
}

/// The validated form fields, ready to become a payload.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidForm {
    pub name: String,
    pub money: Money,
    pub debit: bool,
    /// Title of a category to create before saving, if requested.
    pub new_category: Option<String>,
}

impl LedgerForm {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            name: String::new(),
            money: String::new(),
            debit: true,
            selected: BTreeSet::new(),
            custom_category: false,
            new_category: String::new(),
            kept_amount: None,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Copies the server state of `tx` into the fields.
    ///
    /// A non-numeric amount is copied verbatim so the user sees (and must
    /// fix) what the server holds. An amount with more than two decimals is
    /// shown unrounded and sent back unchanged unless the user edits it.
    pub fn prefill(&mut self, tx: &Transaction) {
        self.name = tx.name.clone();
        self.kept_amount = None;
        self.money = match tx.money.as_ref() {
            Some(amount) => match (amount_of(amount), exact_value(amount)) {
                (Some(money), Some(value)) if money.to_major() != value => {
                    let text = match amount {
                        Amount::Text(text) => text.trim().to_string(),
                        _ => value.to_string(),
                    };
                    self.kept_amount = Some(KeptAmount {
                        text: text.clone(),
                        value,
                    });
                    text
                }
                (Some(money), _) => money.to_plain(),
                (None, _) => match amount {
                    Amount::Text(text) => text.clone(),
                    _ => String::new(),
                },
            },
            None => String::new(),
        };
        self.debit = tx.debit;
        self.selected = tx.all_category_ids().into_iter().collect();
    }

    /// The kept server amount, if the amount field still shows it.
    fn untouched_amount(&self) -> Option<f64> {
        self.kept_amount
            .as_ref()
            .filter(|kept| kept.text == self.money)
            .map(|kept| kept.value)
    }

    pub fn is_selected(&self, id: &Id) -> bool {
        self.selected.contains(id)
    }

    pub fn selected(&self) -> impl Iterator<Item = &Id> {
        self.selected.iter()
    }

    pub fn toggle_category(&mut self, id: &Id) {
        if !self.selected.remove(id) {
            self.selected.insert(id.clone());
        }
    }

    /// Selects a freshly created category and clears the "add new" input, so
    /// a retried submit does not create it twice.
    pub fn attach_category(&mut self, id: Id) {
        self.selected.insert(id);
        self.custom_category = false;
        self.new_category.clear();
    }

    pub fn validate(&self) -> Result<ValidForm, LedgerError> {
        if self.name.trim().is_empty() {
            return Err(LedgerError::MissingName);
        }

        let money: Money = match self.untouched_amount() {
            Some(value) => Money::from_major(value)
                .ok_or_else(|| LedgerError::InvalidAmount("amount too large".to_string()))?,
            None => self.money.parse()?,
        };
        if money.is_negative() {
            return Err(LedgerError::NegativeAmount);
        }

        let new_category = if self.custom_category {
            let title = self.new_category.trim();
            if title.is_empty() {
                return Err(LedgerError::MissingCustomCategory);
            }
            Some(title.to_string())
        } else {
            None
        };

        if self.selected.is_empty() && new_category.is_none() {
            return Err(LedgerError::MissingCategory);
        }

        Ok(ValidForm {
            name: self.name.clone(),
            money,
            debit: self.debit,
            new_category,
        })
    }

    /// Builds the request body from the current fields and selection.
    pub fn payload(&self) -> Result<TransactionPayload, LedgerError> {
        let valid = self.validate()?;
        Ok(TransactionPayload {
            name: valid.name,
            money: self
                .untouched_amount()
                .unwrap_or_else(|| valid.money.to_major()),
            debit: valid.debit,
            category_ids: self.selected.iter().cloned().collect(),
        })
    }
}

/// The backend amount as a float, before rounding to pence.
fn exact_value(amount: &Amount) -> Option<f64> {
    let value = match amount {
        Amount::Number(value) => *value,
        Amount::Text(text) => text.trim().parse::<f64>().ok()?,
        Amount::Other(_) => return None,
    };
    value.is_finite().then_some(value)
}
