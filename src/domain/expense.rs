use std::fmt;

use super::{format_amount, Amount, ExpenseDate};

/// A single recorded expense. Expenses carry no identifier; they are told
/// apart by their position in the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub date: ExpenseDate,
    /// Signed, so refunds can be recorded as negative expenses
    pub amount: Amount,
    /// Free-text label, matched exactly when filtering
    pub category: String,
    pub description: String,
}

impl Expense {
    pub fn new(
        date: ExpenseDate,
        amount: Amount,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {}, Amount: {}, Category: {}, Description: {}",
            self.date,
            format_amount(self.amount),
            self.category,
            self.description
        )
    }
}
