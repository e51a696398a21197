use crate::domain::{format_amount, Amount, Ledger};

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: Amount,
    /// Sorted by category name
    pub categories: Vec<CategoryTotal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Amount,
}

impl Summary {
    /// Build the overall and per-category totals. Returns `None` for an
    /// empty ledger, which has nothing to summarize.
    pub fn from_ledger(ledger: &Ledger) -> Option<Self> {
        if ledger.is_empty() {
            return None;
        }

        let categories = ledger
            .category_totals()
            .into_iter()
            .map(|(category, total)| CategoryTotal { category, total })
            .collect();

        Some(Self {
            total: ledger.total(),
            categories,
        })
    }

    /// The report lines as printed to the user, without the leading blank line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.categories.len() + 2);
        lines.push(format!("Overall Total: {}", format_amount(self.total)));
        lines.push("Totals by Category:".to_string());
        for entry in &self.categories {
            lines.push(format!("{}: {}", entry.category, format_amount(entry.total)));
        }
        lines
    }
}
