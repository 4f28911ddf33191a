//! # Data Loading Module
//!
//! This module is the bridge between the UI and the embedded backend: the
//! startup load plus every mutation the presentation components can request
//! (add, edit, delete, filter changes).
//!
//! ## Data Flow:
//! 1. A component raises an action (form submit, button click, filter edit)
//! 2. The handler here asks the expense service to mutate the canonical
//!    collection (which persists the full collection unconditionally)
//! 3. The filtered view and statistics are recomputed from the result
//!
//! What happens to an active filter after a mutation is governed by
//! `TrackerConfig::filter_policy`; see `refresh_after_mutation`.

use log::{info, warn};
use shared::{FilterCriteria, FilterPolicy};

use crate::backend::domain::{filter, ExpenseStatistics};
use crate::ui::app_state::ExpenseTrackerApp;

impl ExpenseTrackerApp {
    /// Load the persisted collection and initialize the derived views.
    /// Runs once, on the first update frame.
    pub fn load_initial_data(&mut self) {
        info!("Loading persisted expense data");
        self.backend.expense_service.load();
        self.recompute_filtered_view();
        self.loading = false;
    }

    /// Append a new expense from the add form. Incomplete input is a no-op.
    pub fn submit_new_expense(&mut self) {
        let Some(request) = self.form.to_create_request(&self.backend.config) else {
            // Incomplete or malformed input never mutates anything
            return;
        };

        match self.backend.expense_service.add_expense(request) {
            Ok(_) => {
                self.form.clear();
                self.refresh_after_mutation();
            }
            Err(e) => warn!("Rejected expense submission: {}", e),
        }
    }

    /// Apply the edit modal's working copy to its target record
    pub fn submit_edited_expense(&mut self) {
        let Some(target_id) = self.edit_modal.target.as_ref().map(|e| e.id.clone()) else {
            return;
        };
        let Some(request) = self.edit_modal.form.to_update_request(&self.backend.config) else {
            return;
        };

        match self.backend.expense_service.update_expense(&target_id, request) {
            Ok(_) => {
                self.edit_modal.close();
                self.refresh_after_mutation();
            }
            Err(e) => warn!("Rejected expense edit: {}", e),
        }
    }

    /// Remove a record by id
    pub fn delete_expense(&mut self, id: &str) {
        if self.backend.expense_service.delete_expense(id) {
            self.refresh_after_mutation();
        }
    }

    /// The filter bar changed: take its criteria into force and recompute
    pub fn apply_filter_criteria(&mut self) {
        self.active_criteria = self.filter_bar.criteria();
        self.recompute_filtered_view();
    }

    /// Reset the filter bar and show the full collection again
    pub fn clear_filters(&mut self) {
        self.filter_bar.clear();
        self.active_criteria = FilterCriteria::default();
        self.recompute_filtered_view();
    }

    /// Rebuild the derived views after the canonical collection changed
    fn refresh_after_mutation(&mut self) {
        match self.backend.config.filter_policy {
            FilterPolicy::ReapplyCriteria => {
                // The user's filter survives the mutation
                self.recompute_filtered_view();
            }
            FilterPolicy::ResetView => {
                // Reference behavior: the view falls back to the full
                // collection until the filter bar fires again. The bar's
                // widgets keep their values.
                self.active_criteria = FilterCriteria::default();
                self.recompute_filtered_view();
            }
        }
    }

    fn recompute_filtered_view(&mut self) {
        self.filtered_expenses = filter::apply_filter(
            self.backend.expense_service.expenses(),
            &self.active_criteria,
        );
        self.statistics = ExpenseStatistics::compute(&self.filtered_expenses);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Backend;
    use crate::ui::state::{EditModalState, ExpenseFormState, FilterBarState};
    use shared::Category;
    use tempfile::TempDir;

    fn test_app() -> (ExpenseTrackerApp, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let backend = Backend::with_base_directory(temp_dir.path()).unwrap();
        let mut app = ExpenseTrackerApp {
            backend,
            loading: true,
            active_criteria: FilterCriteria::default(),
            filtered_expenses: Vec::new(),
            statistics: ExpenseStatistics::default(),
            form: ExpenseFormState::new(),
            filter_bar: FilterBarState::new(),
            edit_modal: EditModalState::new(),
        };
        app.load_initial_data();
        (app, temp_dir)
    }

    fn fill_form(app: &mut ExpenseTrackerApp, description: &str, category: Category) {
        app.form.amount = "12.50".to_string();
        app.form.description = description.to_string();
        app.form.category = Some(category);
        app.form.date = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    }

    #[test]
    fn test_add_expense_scenario() {
        let (mut app, _temp_dir) = test_app();
        fill_form(&mut app, "Lunch", Category::Food);

        app.submit_new_expense();

        assert_eq!(app.backend.expense_service.expenses().len(), 1);
        assert_eq!(app.filtered_expenses.len(), 1);
        assert_eq!(app.statistics.total_amount, 12.50);
        // The form resets for the next entry
        assert!(app.form.amount.is_empty());
    }

    #[test]
    fn test_incomplete_form_submission_is_silent_noop() {
        let (mut app, _temp_dir) = test_app();
        app.form.description = "Lunch".to_string();
        // Amount and category are missing

        app.submit_new_expense();

        assert!(app.backend.expense_service.expenses().is_empty());
        assert!(app.filtered_expenses.is_empty());
    }

    #[test]
    fn test_non_matching_filter_empties_view_but_not_collection() {
        let (mut app, _temp_dir) = test_app();
        fill_form(&mut app, "Lunch", Category::Food);
        app.submit_new_expense();

        app.filter_bar.category = Some(Category::Shopping);
        app.apply_filter_criteria();

        assert!(app.filtered_expenses.is_empty());
        assert_eq!(app.backend.expense_service.expenses().len(), 1);
        assert!(app.statistics.is_empty());
    }

    #[test]
    fn test_clear_filters_restores_full_view() {
        let (mut app, _temp_dir) = test_app();
        fill_form(&mut app, "Lunch", Category::Food);
        app.submit_new_expense();

        app.filter_bar.search_text = "nothing matches this".to_string();
        app.apply_filter_criteria();
        assert!(app.filtered_expenses.is_empty());

        app.clear_filters();
        assert_eq!(app.filtered_expenses.len(), 1);
        assert!(app.filter_bar.search_text.is_empty());
    }

    #[test]
    fn test_reapply_policy_keeps_filter_across_mutations() {
        let (mut app, _temp_dir) = test_app();
        assert_eq!(app.backend.config.filter_policy, FilterPolicy::ReapplyCriteria);

        fill_form(&mut app, "Lunch", Category::Food);
        app.submit_new_expense();
        app.filter_bar.category = Some(Category::Food);
        app.apply_filter_criteria();
        assert_eq!(app.filtered_expenses.len(), 1);

        // A non-matching addition stays filtered out
        fill_form(&mut app, "Bus ticket", Category::Transport);
        app.submit_new_expense();

        assert_eq!(app.backend.expense_service.expenses().len(), 2);
        assert_eq!(app.filtered_expenses.len(), 1);
        assert_eq!(app.filtered_expenses[0].description, "Lunch");
    }

    #[test]
    fn test_reset_policy_drops_filter_on_mutation() {
        let (mut app, _temp_dir) = test_app();
        app.backend.config.filter_policy = FilterPolicy::ResetView;

        fill_form(&mut app, "Lunch", Category::Food);
        app.submit_new_expense();
        app.filter_bar.category = Some(Category::Food);
        app.apply_filter_criteria();

        fill_form(&mut app, "Bus ticket", Category::Transport);
        app.submit_new_expense();

        // The view now mirrors the full collection, criteria dropped
        assert_eq!(app.filtered_expenses.len(), 2);
        assert!(app.active_criteria.is_empty());
        // The bar's widgets keep their values until the user touches them
        assert_eq!(app.filter_bar.category, Some(Category::Food));
    }

    #[test]
    fn test_edit_flow_rewrites_target_record() {
        let (mut app, _temp_dir) = test_app();
        fill_form(&mut app, "Lunch", Category::Food);
        app.submit_new_expense();

        let target = app.backend.expense_service.expenses()[0].clone();
        app.edit_modal.open(target);
        app.edit_modal.form.description = "Fancy lunch".to_string();
        app.edit_modal.form.amount = "20".to_string();

        app.submit_edited_expense();

        assert!(!app.edit_modal.is_open());
        let record = &app.backend.expense_service.expenses()[0];
        assert_eq!(record.description, "Fancy lunch");
        assert_eq!(record.amount, 20.0);
        assert_eq!(app.statistics.total_amount, 20.0);
    }

    #[test]
    fn test_delete_only_record_empties_everything() {
        let (mut app, _temp_dir) = test_app();
        fill_form(&mut app, "Lunch", Category::Food);
        app.submit_new_expense();

        let id = app.backend.expense_service.expenses()[0].id.clone();
        app.delete_expense(&id);

        assert!(app.backend.expense_service.expenses().is_empty());
        assert!(app.filtered_expenses.is_empty());
        assert!(app.statistics.is_empty());
    }
}
