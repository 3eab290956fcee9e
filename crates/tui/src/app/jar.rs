use api_types::ledger::Transaction;
use ledger::{Jar, Total, ledger_total};

/// The jar widget's own copy of the ledger and its derived figures.
#[derive(Debug, Default)]
pub struct JarState {
    transactions: Vec<Transaction>,
    pub total: Total,
    pub jar: Jar,
}

impl JarState {
    /// Stores a fresh fetch and recomputes the total and percentage.
    pub fn set_transactions(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
        self.total = ledger_total(&self.transactions);
        self.jar.set_total(self.total.sum);
    }

    pub fn entries(&self) -> usize {
        self.transactions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_types::{Amount, Id};
    use ledger::Money;

    fn entry(money: f64, debit: bool) -> Transaction {
        Transaction {
            id: Some(Id::Int(1)),
            name: String::new(),
            money: Some(Amount::Number(money)),
            debit,
            categories: Vec::new(),
            category_ids: Vec::new(),
            category_id: None,
        }
    }

    #[test]
    fn refetch_updates_percentage_for_typed_cost() {
        let mut state = JarState::default();
        state.jar.set_cost_input("100");
        state.set_transactions(vec![entry(50.0, false), entry(20.0, true)]);
        assert_eq!(state.total.sum, Money::new(3000));
        assert_eq!(state.jar.percentage(), 30.0);

        state.set_transactions(vec![entry(50.0, false)]);
        assert_eq!(state.jar.percentage(), 50.0);
        assert_eq!(state.entries(), 1);
    }
}
