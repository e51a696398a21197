use std::collections::BTreeMap;

use super::{Amount, Expense, ExpenseDate};

/// The in-memory, append-only list of expenses for one session.
/// Insertion order is preserved and is the order every view reports in.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses matching every constraint of `filter`, in ledger order.
    pub fn filter(&self, filter: &ExpenseFilter) -> Vec<&Expense> {
        self.expenses.iter().filter(|e| filter.matches(e)).collect()
    }

    /// Sum of all amounts.
    pub fn total(&self) -> Amount {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Sum of amounts per category, keyed in ascending category order.
    pub fn category_totals(&self) -> BTreeMap<String, Amount> {
        let mut totals: BTreeMap<String, Amount> = BTreeMap::new();

        for expense in &self.expenses {
            *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
        }

        totals
    }
}

/// Constraints for viewing expenses. Every unset field means "no constraint";
/// set fields are combined with AND.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Inclusive lower bound
    pub start: Option<ExpenseDate>,
    /// Inclusive upper bound
    pub end: Option<ExpenseDate>,
    /// Exact, case-sensitive category match
    pub category: Option<String>,
}

impl ExpenseFilter {
    /// A filter that matches every expense.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start: ExpenseDate) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: ExpenseDate) -> Self {
        self.end = Some(end);
        self
    }

    /// An empty category leaves the filter unconstrained.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.is_empty() {
            None
        } else {
            Some(category)
        };
        self
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(start) = &self.start {
            if !start.less_or_equal(&expense.date) {
                return false;
            }
        }
        if let Some(end) = &self.end {
            if !expense.date.less_or_equal(end) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &expense.category != category {
                return false;
            }
        }
        true
    }
}
