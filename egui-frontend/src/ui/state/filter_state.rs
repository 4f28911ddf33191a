//! # Filter Bar State
//!
//! Widget state for the filter bar. The bar turns its state into a
//! `FilterCriteria` on every change; the coordinator owns the criteria that
//! are actually in force.

use chrono::NaiveDate;
use shared::{Category, FilterCriteria};

use crate::ui::mappers::storage_date;

#[derive(Debug, Clone, Default)]
pub struct FilterBarState {
    pub search_text: String,
    /// `None` renders as "All Categories"
    pub category: Option<Category>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    /// Whether the structured-filter panel is expanded
    pub show_filters: bool,
}

impl FilterBarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Criteria corresponding to the current widget state
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            category: self
                .category
                .as_ref()
                .map(|c| c.as_str().to_string())
                .unwrap_or_default(),
            date_from: self.date_from.map(storage_date).unwrap_or_default(),
            date_to: self.date_to.map(storage_date).unwrap_or_default(),
            search_text: self.search_text.trim().to_string(),
        }
    }

    pub fn has_active_filters(&self) -> bool {
        !self.criteria().is_empty()
    }

    /// Badge count for the structured filters (search is shown separately)
    pub fn active_filter_count(&self) -> usize {
        self.criteria().active_count()
    }

    /// Reset every criterion; the expanded/collapsed state is kept
    pub fn clear(&mut self) {
        self.search_text.clear();
        self.category = None;
        self.date_from = None;
        self.date_to = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_reflects_widget_state() {
        let state = FilterBarState {
            search_text: "  lunch ".to_string(),
            category: Some(Category::Food),
            date_from: NaiveDate::from_ymd_opt(2024, 1, 1),
            date_to: None,
            show_filters: true,
        };

        let criteria = state.criteria();
        assert_eq!(criteria.category, "food");
        assert_eq!(criteria.date_from, "2024-01-01");
        assert_eq!(criteria.date_to, "");
        assert_eq!(criteria.search_text, "lunch");
        assert_eq!(state.active_filter_count(), 2);
    }

    #[test]
    fn test_clear_resets_criteria_but_keeps_panel_open() {
        let mut state = FilterBarState {
            search_text: "x".to_string(),
            category: Some(Category::Bills),
            date_from: NaiveDate::from_ymd_opt(2024, 1, 1),
            date_to: NaiveDate::from_ymd_opt(2024, 2, 1),
            show_filters: true,
        };

        state.clear();
        assert!(state.criteria().is_empty());
        assert!(!state.has_active_filters());
        assert!(state.show_filters);
    }
}
