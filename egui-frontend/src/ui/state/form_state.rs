//! # Expense Form State
//!
//! Transient input state for the add-expense form and the edit modal. The
//! same state shape backs both surfaces; the edit modal pre-populates it
//! from the record being edited.

use chrono::NaiveDate;
use shared::{
    validate_expense_input, Category, CreateExpenseRequest, Expense, TrackerConfig,
    UpdateExpenseRequest,
};

use crate::ui::mappers::{parse_storage_date, storage_date};

/// Raw form input for an expense record
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Amount as typed; parsed on submit
    pub amount: String,
    pub description: String,
    /// No category preselected, mirroring the "Select category" placeholder
    pub category: Option<Category>,
    pub date: NaiveDate,
}

impl ExpenseFormState {
    pub fn new() -> Self {
        Self {
            amount: String::new(),
            description: String::new(),
            category: None,
            date: chrono::Local::now().date_naive(),
        }
    }

    /// Reset the form for the next entry; the date snaps back to today
    pub fn clear(&mut self) {
        self.amount.clear();
        self.description.clear();
        self.category = None;
        self.date = chrono::Local::now().date_naive();
    }

    /// Pre-populate every field from an existing record (edit flow)
    pub fn populate_from_expense(&mut self, expense: &Expense) {
        self.amount = expense.amount.to_string();
        self.description = expense.description.clone();
        self.category = Some(expense.category.clone());
        self.date = parse_storage_date(&expense.date)
            .unwrap_or_else(|| chrono::Local::now().date_naive());
    }

    /// Stored form of the date field
    pub fn date_string(&self) -> String {
        storage_date(self.date)
    }

    /// Whether the current input would produce a valid record
    pub fn is_complete(&self, config: &TrackerConfig) -> bool {
        validate_expense_input(
            &self.amount,
            &self.description,
            self.category.as_ref(),
            &self.date_string(),
            config,
        )
        .is_valid()
    }

    /// Build a create request, or `None` when input is incomplete or
    /// malformed (the form then simply refuses to submit)
    pub fn to_create_request(&self, config: &TrackerConfig) -> Option<CreateExpenseRequest> {
        let (amount, category) = self.validated_parts(config)?;
        Some(CreateExpenseRequest {
            amount,
            description: self.description.clone(),
            category,
            date: self.date_string(),
        })
    }

    /// Build an update request under the same validation rules
    pub fn to_update_request(&self, config: &TrackerConfig) -> Option<UpdateExpenseRequest> {
        let (amount, category) = self.validated_parts(config)?;
        Some(UpdateExpenseRequest {
            amount,
            description: self.description.clone(),
            category,
            date: self.date_string(),
        })
    }

    fn validated_parts(&self, config: &TrackerConfig) -> Option<(f64, Category)> {
        let validation = validate_expense_input(
            &self.amount,
            &self.description,
            self.category.as_ref(),
            &self.date_string(),
            config,
        );
        if !validation.is_valid() {
            return None;
        }
        Some((validation.cleaned_amount?, self.category.clone()?))
    }
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_form_produces_no_request() {
        let form = ExpenseFormState::new();
        assert!(form.to_create_request(&TrackerConfig::default()).is_none());
        assert!(!form.is_complete(&TrackerConfig::default()));
    }

    #[test]
    fn test_complete_form_produces_request() {
        let mut form = ExpenseFormState::new();
        form.amount = "12.50".to_string();
        form.description = "Lunch".to_string();
        form.category = Some(Category::Food);
        form.date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let request = form.to_create_request(&TrackerConfig::default()).unwrap();
        assert_eq!(request.amount, 12.50);
        assert_eq!(request.description, "Lunch");
        assert_eq!(request.category, Category::Food);
        assert_eq!(request.date, "2024-03-01");
    }

    #[test]
    fn test_populate_from_expense_copies_every_field() {
        let expense = Expense {
            id: "expense::1".to_string(),
            amount: 7.25,
            description: "Bus ticket".to_string(),
            category: Category::Transport,
            date: "2024-02-14".to_string(),
        };

        let mut form = ExpenseFormState::new();
        form.populate_from_expense(&expense);

        assert_eq!(form.amount, "7.25");
        assert_eq!(form.description, "Bus ticket");
        assert_eq!(form.category, Some(Category::Transport));
        assert_eq!(form.date_string(), "2024-02-14");
    }

    #[test]
    fn test_clear_resets_fields() {
        let mut form = ExpenseFormState::new();
        form.amount = "3".to_string();
        form.description = "Coffee".to_string();
        form.category = Some(Category::Food);

        form.clear();
        assert!(form.amount.is_empty());
        assert!(form.description.is_empty());
        assert_eq!(form.category, None);
    }
}
