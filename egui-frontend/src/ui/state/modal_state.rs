//! # Modal State
//!
//! State for the edit-expense modal: which record is being edited, the
//! working copy of its fields, and a one-frame guard so the click that
//! opened the modal is not also read as a backdrop click.

use shared::Expense;

use super::form_state::ExpenseFormState;

#[derive(Debug, Clone, Default)]
pub struct EditModalState {
    /// The record being edited; `None` while the modal is closed
    pub target: Option<Expense>,
    /// Working copy of the fields, pre-populated on open
    pub form: ExpenseFormState,
    /// Suppresses backdrop-click handling on the opening frame
    pub just_opened: bool,
}

impl EditModalState {
    pub fn new() -> Self {
        Self {
            target: None,
            form: ExpenseFormState::new(),
            just_opened: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    /// Open the modal for a record, pre-populating the working copy
    pub fn open(&mut self, expense: Expense) {
        self.form.populate_from_expense(&expense);
        self.target = Some(expense);
        self.just_opened = true;
    }

    /// Close the modal, discarding the working copy
    pub fn close(&mut self) {
        self.target = None;
        self.form.clear();
        self.just_opened = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Category;

    #[test]
    fn test_open_populates_and_close_discards() {
        let expense = Expense {
            id: "expense::1".to_string(),
            amount: 4.0,
            description: "Snack".to_string(),
            category: Category::Food,
            date: "2024-01-05".to_string(),
        };

        let mut modal = EditModalState::new();
        assert!(!modal.is_open());

        modal.open(expense.clone());
        assert!(modal.is_open());
        assert!(modal.just_opened);
        assert_eq!(modal.form.description, "Snack");
        assert_eq!(modal.target.as_ref().map(|e| e.id.as_str()), Some("expense::1"));

        modal.close();
        assert!(!modal.is_open());
        assert!(modal.form.description.is_empty());
    }
}
