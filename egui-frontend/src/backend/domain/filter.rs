//! Filter evaluation over the canonical expense collection.
//!
//! The filtered view is always recomputed in full from the canonical
//! collection and the current criteria; there is no incremental maintenance.

use shared::{Expense, FilterCriteria};

/// Produce the ordered subsequence of `expenses` satisfying every active
/// criterion. Empty criteria impose no constraint, so an empty criteria set
/// returns the collection unchanged.
pub fn apply_filter(expenses: &[Expense], criteria: &FilterCriteria) -> Vec<Expense> {
    let search_lower = criteria.search_text.trim().to_lowercase();

    expenses
        .iter()
        .filter(|expense| matches_criteria(expense, criteria, &search_lower))
        .cloned()
        .collect()
}

fn matches_criteria(expense: &Expense, criteria: &FilterCriteria, search_lower: &str) -> bool {
    // Category: exact, case-sensitive match against the stored value
    if !criteria.category.is_empty() && expense.category.as_str() != criteria.category {
        return false;
    }

    // Date bounds: inclusive, lexicographic on YYYY-MM-DD strings
    if !criteria.date_from.is_empty() && expense.date.as_str() < criteria.date_from.as_str() {
        return false;
    }
    if !criteria.date_to.is_empty() && expense.date.as_str() > criteria.date_to.as_str() {
        return false;
    }

    // Search: case-insensitive substring over the description
    if !search_lower.is_empty() && !expense.description.to_lowercase().contains(search_lower) {
        return false;
    }

    true
}
