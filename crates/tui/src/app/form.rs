use api_types::{Id, category::Category};
use ledger::{FormMode, LedgerError, LedgerForm};
use thiserror::Error;

use crate::client::{Client, ClientError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Amount,
    Direction,
    Categories,
    CustomToggle,
    NewCategory,
}

impl FormField {
    const ORDER: [FormField; 6] = [
        FormField::Name,
        FormField::Amount,
        FormField::Direction,
        FormField::Categories,
        FormField::CustomToggle,
        FormField::NewCategory,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }
}

#[derive(Debug)]
pub struct FormState {
    pub form: LedgerForm,
    pub categories: Vec<Category>,
    pub focus: FormField,
    pub category_cursor: usize,
    /// Inline validation message.
    pub message: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(FormMode::Create)
    }
}

impl FormState {
    pub fn new(mode: FormMode) -> Self {
        Self {
            form: LedgerForm::new(mode),
            categories: Vec::new(),
            focus: FormField::Name,
            category_cursor: 0,
            message: None,
        }
    }

    pub fn is_update(&self) -> bool {
        self.form.mode().id().is_some()
    }

    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
        self.category_cursor = self
            .category_cursor
            .min(self.categories.len().saturating_sub(1));
    }

    fn focus_is_available(&self, field: FormField) -> bool {
        match field {
            FormField::Categories => !self.categories.is_empty(),
            FormField::NewCategory => self.form.custom_category,
            _ => true,
        }
    }

    fn step_focus(&mut self, forward: bool) {
        let len = FormField::ORDER.len();
        let mut idx = self.focus.position();
        for _ in 0..len {
            idx = if forward {
                (idx + 1) % len
            } else {
                (idx + len - 1) % len
            };
            let field = FormField::ORDER[idx];
            if self.focus_is_available(field) {
                self.focus = field;
                return;
            }
        }
    }

    pub fn next_field(&mut self) {
        self.step_focus(true);
    }

    pub fn prev_field(&mut self) {
        self.step_focus(false);
    }

    /// Moves within the category list, or between fields elsewhere.
    pub fn up(&mut self) {
        if self.focus == FormField::Categories && self.category_cursor > 0 {
            self.category_cursor -= 1;
        } else {
            self.prev_field();
        }
    }

    pub fn down(&mut self) {
        if self.focus == FormField::Categories && self.category_cursor + 1 < self.categories.len()
        {
            self.category_cursor += 1;
        } else {
            self.next_field();
        }
    }

    pub fn input(&mut self, ch: char) {
        match self.focus {
            FormField::Name => self.form.name.push(ch),
            FormField::Amount => self.form.money.push(ch),
            FormField::NewCategory => self.form.new_category.push(ch),
            FormField::Direction if ch == ' ' => self.form.debit = !self.form.debit,
            FormField::Categories if ch == ' ' => {
                if let Some(category) = self.categories.get(self.category_cursor) {
                    let id = category.id.clone();
                    self.form.toggle_category(&id);
                }
            }
            FormField::CustomToggle if ch == ' ' => {
                self.form.custom_category = !self.form.custom_category;
            }
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Name => {
                self.form.name.pop();
            }
            FormField::Amount => {
                self.form.money.pop();
            }
            FormField::NewCategory => {
                self.form.new_category.pop();
            }
            _ => {}
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] LedgerError),
    #[error(transparent)]
    Client(#[from] ClientError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Id),
    Updated(Id),
}

/// Saves the form: creates the requested category first, then the
/// transaction. Stops at the first failure; a category created before a
/// failed save stays selected so a retry does not create it again.
pub async fn submit(client: &Client, state: &mut FormState) -> Result<SubmitOutcome, SubmitError> {
    let valid = state.form.validate()?;

    if let Some(title) = valid.new_category {
        let created = client.category_create(&title).await?;
        tracing::info!(id = %created.id, title = %title, "category created");
        state.form.attach_category(created.id);
        match client.category_list().await {
            Ok(categories) => state.set_categories(categories),
            Err(err) => tracing::error!(error = %err, "failed to refresh categories"),
        }
    }

    let payload = state.form.payload()?;
    match state.form.mode().clone() {
        FormMode::Create => {
            let created = client.ledger_create(&payload).await?;
            Ok(SubmitOutcome::Created(created.id))
        }
        FormMode::Update(id) => {
            client.ledger_update(&id, &payload).await?;
            Ok(SubmitOutcome::Updated(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use api_types::ledger::TransactionPayload;

    use super::*;
    use crate::fake_backend;

    fn seed_payload(category_ids: Vec<Id>) -> TransactionPayload {
        TransactionPayload {
            name: "Phone".to_string(),
            money: 30.0,
            debit: true,
            category_ids,
        }
    }

    #[test]
    fn focus_skips_hidden_fields() {
        let mut state = FormState::default();
        state.next_field();
        state.next_field();
        assert_eq!(state.focus, FormField::Direction);
        state.next_field();
        assert_eq!(state.focus, FormField::CustomToggle);
        state.next_field();
        assert_eq!(state.focus, FormField::Name);

        state.form.custom_category = true;
        state.prev_field();
        assert_eq!(state.focus, FormField::NewCategory);
    }

    #[test]
    fn space_toggles_choices() {
        let mut state = FormState::default();
        state.set_categories(vec![Category {
            id: Id::Int(4),
            title: "Bills".to_string(),
        }]);
        state.focus = FormField::Direction;
        state.input(' ');
        assert!(!state.form.debit);
        state.focus = FormField::Categories;
        state.input(' ');
        assert!(state.form.is_selected(&Id::Int(4)));
        state.input('x');
        assert!(state.form.is_selected(&Id::Int(4)));
    }

    #[tokio::test]
    async fn custom_category_is_created_once_and_attached() {
        let (url, store) = fake_backend::start().await;
        let client = Client::new(&url).unwrap();

        let mut state = FormState::new(FormMode::Create);
        state.form.name = "Flights".to_string();
        state.form.money = "320".to_string();
        state.form.custom_category = true;
        state.form.new_category = "Travel".to_string();

        let outcome = submit(&client, &mut state).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Created(_)));

        let store = store.lock().unwrap();
        assert_eq!(store.categories.len(), 1);
        assert_eq!(store.categories[0].title, "Travel");
        assert_eq!(store.transactions.len(), 1);
        assert_eq!(
            store.transactions[0].payload.category_ids,
            vec![store.categories[0].id.clone()]
        );
        assert_eq!(state.categories.len(), 1);
        assert!(!state.form.custom_category);
    }

    #[tokio::test]
    async fn invalid_form_sends_nothing() {
        let (url, store) = fake_backend::start().await;
        let client = Client::new(&url).unwrap();

        let mut state = FormState::new(FormMode::Create);
        state.form.name = "Flights".to_string();
        state.form.money = "abc".to_string();
        state.form.custom_category = true;
        state.form.new_category = "Travel".to_string();

        let err = submit(&client, &mut state).await.unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(LedgerError::InvalidAmount(_))));
        let store = store.lock().unwrap();
        assert!(store.categories.is_empty());
        assert!(store.transactions.is_empty());
    }

    #[tokio::test]
    async fn unchanged_update_keeps_stored_transaction() {
        let (url, store) = fake_backend::start().await;
        let (id, before) = {
            let mut store = store.lock().unwrap();
            let bills = store.insert_category("Bills");
            let id = store.insert_transaction(seed_payload(vec![Id::Int(bills)]));
            (id, store.transactions[0].clone())
        };
        let client = Client::new(&url).unwrap();

        let mut state = FormState::new(FormMode::Update(Id::Int(id)));
        let detail = client.ledger_get(&Id::Int(id)).await.unwrap();
        state.form.prefill(&detail);
        assert_eq!(state.form.name, "Phone");
        assert_eq!(state.form.money, "30.00");
        assert!(state.form.debit);

        let outcome = submit(&client, &mut state).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Updated(Id::Int(id)));
        assert_eq!(store.lock().unwrap().transactions[0], before);
    }

    #[tokio::test]
    async fn update_of_deleted_entry_fails_without_side_effects() {
        let (url, store) = fake_backend::start().await;
        let client = Client::new(&url).unwrap();

        let mut state = FormState::new(FormMode::Update(Id::Int(41)));
        state.form.name = "Ghost".to_string();
        state.form.money = "1".to_string();
        state.form.toggle_category(&Id::Int(1));

        let err = submit(&client, &mut state).await.unwrap_err();
        assert!(matches!(err, SubmitError::Client(ClientError::NotFound)));
        assert!(store.lock().unwrap().transactions.is_empty());
    }
}
