use api_types::{Id, ledger::Transaction};

/// The ledger list view: rows in backend order and a highlighted row.
#[derive(Debug, Default)]
pub struct LedgerState {
    pub items: Vec<Transaction>,
    pub selected: usize,
}

impl LedgerState {
    /// Replaces the rows, keeping the highlight in bounds.
    pub fn set_items(&mut self, items: Vec<Transaction>) {
        self.items = items;
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.items.len() - 1);
    }

    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_id(&self) -> Option<&Id> {
        self.items.get(self.selected)?.id.as_ref()
    }
}
