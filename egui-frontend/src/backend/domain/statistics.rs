//! Statistics aggregation over an expense sequence (typically the filtered
//! view).

use shared::{Category, Expense};
use std::cmp::Ordering;

/// Per-category aggregate: total, count, and share of the grand total
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub total: f64,
    pub count: usize,
    /// Share of the grand total in percent; 0.0 when the grand total is 0
    pub percentage: f64,
}

/// Aggregate statistics for a sequence of expense records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseStatistics {
    pub total_amount: f64,
    pub transaction_count: usize,
    /// `None` for an empty sequence; the stats panel renders an explicit
    /// "no data" state rather than a division result
    pub average_amount: Option<f64>,
    /// One entry per category present, descending by total; ties keep the
    /// order categories were first encountered
    pub category_breakdown: Vec<CategoryBreakdown>,
}

impl ExpenseStatistics {
    /// Compute statistics over the given sequence
    pub fn compute(expenses: &[Expense]) -> Self {
        let transaction_count = expenses.len();
        let total_amount: f64 = expenses.iter().map(|e| e.amount).sum();
        let average_amount = if transaction_count == 0 {
            None
        } else {
            Some(total_amount / transaction_count as f64)
        };

        // Accumulate in first-encounter order so a stable sort on the total
        // keeps ties in scan order
        let mut category_breakdown: Vec<CategoryBreakdown> = Vec::new();
        for expense in expenses {
            match category_breakdown
                .iter_mut()
                .find(|entry| entry.category == expense.category)
            {
                Some(entry) => {
                    entry.total += expense.amount;
                    entry.count += 1;
                }
                None => category_breakdown.push(CategoryBreakdown {
                    category: expense.category.clone(),
                    total: expense.amount,
                    count: 1,
                    percentage: 0.0,
                }),
            }
        }

        category_breakdown
            .sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));

        for entry in &mut category_breakdown {
            entry.percentage = if total_amount > 0.0 {
                entry.total / total_amount * 100.0
            } else {
                // All-zero amounts: 0/0 must read as 0, never NaN
                0.0
            };
        }

        Self {
            total_amount,
            transaction_count,
            average_amount,
            category_breakdown,
        }
    }

    /// Whether there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }
}
