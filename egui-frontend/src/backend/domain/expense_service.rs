//! Expense service domain logic for the expense tracker.
//!
//! The service is the single writer of the canonical expense collection:
//! the UI holds read-only snapshots and requests mutations through the
//! operations here. Every successful mutation persists the full collection
//! unconditionally; there is no diffing and no debounce.

use anyhow::{anyhow, Result};
use log::{info, warn};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::backend::storage::{Connection, ExpenseStore};
use shared::{CreateExpenseRequest, Expense, UpdateExpenseRequest};

pub struct ExpenseService<C: Connection> {
    expense_repository: C::ExpenseRepository,
    /// Canonical collection, in insertion order
    expenses: Vec<Expense>,
}

impl<C: Connection> ExpenseService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let expense_repository = connection.create_expense_repository();
        Self {
            expense_repository,
            expenses: Vec::new(),
        }
    }

    /// Replace the in-memory collection with whatever the store holds.
    /// Called once at startup; a missing or unreadable store yields an
    /// empty collection.
    pub fn load(&mut self) -> &[Expense] {
        self.expenses = self.expense_repository.load();
        info!("Loaded {} expense record(s)", self.expenses.len());
        &self.expenses
    }

    /// Read-only snapshot of the canonical collection
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Append a new expense to the canonical collection
    pub fn add_expense(&mut self, request: CreateExpenseRequest) -> Result<Expense> {
        self.validate_fields(request.amount, &request.description, &request.date)?;

        let expense = Expense {
            id: self.next_expense_id()?,
            amount: request.amount,
            description: request.description,
            category: request.category,
            date: request.date,
        };

        self.expenses.push(expense.clone());
        self.persist();

        info!("Added expense {} for {:.2}", expense.id, expense.amount);
        Ok(expense)
    }

    /// Replace an existing expense by id, overwriting every field while
    /// keeping its position in the collection
    pub fn update_expense(&mut self, id: &str, request: UpdateExpenseRequest) -> Result<Expense> {
        self.validate_fields(request.amount, &request.description, &request.date)?;

        let expense = self
            .expenses
            .iter_mut()
            .find(|expense| expense.id == id)
            .ok_or_else(|| anyhow!("No expense with id {}", id))?;

        expense.amount = request.amount;
        expense.description = request.description;
        expense.category = request.category;
        expense.date = request.date;
        let updated = expense.clone();

        self.persist();

        info!("Updated expense {}", updated.id);
        Ok(updated)
    }

    /// Remove an expense by id. Returns false when no such record exists.
    pub fn delete_expense(&mut self, id: &str) -> bool {
        let Some(index) = self.expenses.iter().position(|expense| expense.id == id) else {
            warn!("Delete requested for unknown expense id {}", id);
            return false;
        };

        let removed = self.expenses.remove(index);
        self.persist();

        info!("Deleted expense {}", removed.id);
        true
    }

    /// Drop the whole collection, in memory and in the store
    pub fn clear_all(&mut self) {
        self.expenses.clear();
        self.expense_repository.clear();
        info!("Cleared all expense records");
    }

    fn persist(&self) {
        self.expense_repository.save(&self.expenses);
    }

    fn validate_fields(&self, amount: f64, description: &str, date: &str) -> Result<()> {
        if description.is_empty() || description.len() > 256 {
            return Err(anyhow!("Description must be between 1 and 256 characters"));
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(anyhow!("Amount must be a non-negative number"));
        }
        if chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            return Err(anyhow!("Date must be a calendar date in YYYY-MM-DD format"));
        }
        Ok(())
    }

    /// Generate a timestamp-derived id, nudging the timestamp forward if two
    /// records land in the same millisecond
    fn next_expense_id(&self) -> Result<String> {
        let mut millis = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64;
        loop {
            let id = Expense::generate_id(millis);
            if !self.expenses.iter().any(|expense| expense.id == id) {
                return Ok(id);
            }
            millis += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::json::JsonConnection;
    use shared::Category;
    use tempfile::TempDir;

    fn create_test_service() -> (ExpenseService<JsonConnection>, Arc<JsonConnection>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());
        let service = ExpenseService::new(connection.clone());
        (service, connection, temp_dir)
    }

    fn create_request(description: &str, amount: f64) -> CreateExpenseRequest {
        CreateExpenseRequest {
            amount,
            description: description.to_string(),
            category: Category::Food,
            date: "2024-03-01".to_string(),
        }
    }

    #[test]
    fn test_add_expense_appends_and_persists() {
        let (mut service, connection, _temp_dir) = create_test_service();
        service.load();

        let expense = service.add_expense(create_request("Lunch", 12.50)).unwrap();
        assert_eq!(service.expenses().len(), 1);
        assert_eq!(expense.amount, 12.50);
        assert!(expense.id.starts_with("expense::"));

        // A fresh service sees the persisted record
        let mut reloaded = ExpenseService::new(connection);
        reloaded.load();
        assert_eq!(reloaded.expenses(), service.expenses());
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let (mut service, _connection, _temp_dir) = create_test_service();
        service.load();

        service.add_expense(create_request("First", 1.0)).unwrap();
        service.add_expense(create_request("Second", 2.0)).unwrap();
        service.add_expense(create_request("Third", 3.0)).unwrap();

        let descriptions: Vec<&str> = service
            .expenses()
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(descriptions, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let (mut service, _connection, _temp_dir) = create_test_service();
        service.load();

        for i in 0..5 {
            service.add_expense(create_request("Entry", i as f64)).unwrap();
        }

        let mut ids: Vec<&str> = service.expenses().iter().map(|e| e.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_update_rewrites_fields_and_keeps_position() {
        let (mut service, _connection, _temp_dir) = create_test_service();
        service.load();

        service.add_expense(create_request("First", 1.0)).unwrap();
        let target = service.add_expense(create_request("Second", 2.0)).unwrap();
        service.add_expense(create_request("Third", 3.0)).unwrap();

        let updated = service
            .update_expense(
                &target.id,
                UpdateExpenseRequest {
                    amount: 20.0,
                    description: "Second, revised".to_string(),
                    category: Category::Bills,
                    date: "2024-03-02".to_string(),
                },
            )
            .unwrap();

        assert_eq!(updated.id, target.id);
        let middle = &service.expenses()[1];
        assert_eq!(middle.description, "Second, revised");
        assert_eq!(middle.amount, 20.0);
        assert_eq!(middle.category, Category::Bills);
        assert_eq!(middle.date, "2024-03-02");
    }

    #[test]
    fn test_update_unknown_id_is_an_error() {
        let (mut service, _connection, _temp_dir) = create_test_service();
        service.load();

        let result = service.update_expense(
            "expense::missing",
            UpdateExpenseRequest {
                amount: 1.0,
                description: "x".to_string(),
                category: Category::Other,
                date: "2024-01-01".to_string(),
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let (mut service, connection, _temp_dir) = create_test_service();
        service.load();

        service.add_expense(create_request("First", 1.0)).unwrap();
        let target = service.add_expense(create_request("Second", 2.0)).unwrap();

        assert!(service.delete_expense(&target.id));
        assert_eq!(service.expenses().len(), 1);
        assert_eq!(service.expenses()[0].description, "First");

        // Deleting again reports nothing removed
        assert!(!service.delete_expense(&target.id));

        let mut reloaded = ExpenseService::new(connection);
        reloaded.load();
        assert_eq!(reloaded.expenses().len(), 1);
    }

    #[test]
    fn test_delete_only_record_persists_empty_collection() {
        let (mut service, connection, _temp_dir) = create_test_service();
        service.load();

        let only = service.add_expense(create_request("Only", 5.0)).unwrap();
        assert!(service.delete_expense(&only.id));
        assert!(service.expenses().is_empty());

        let mut reloaded = ExpenseService::new(connection);
        assert!(reloaded.load().is_empty());
    }

    #[test]
    fn test_invalid_input_never_mutates() {
        let (mut service, _connection, _temp_dir) = create_test_service();
        service.load();

        assert!(service.add_expense(create_request("", 1.0)).is_err());
        assert!(service.add_expense(create_request("Lunch", -1.0)).is_err());
        assert!(service
            .add_expense(CreateExpenseRequest {
                amount: 1.0,
                description: "Lunch".to_string(),
                category: Category::Food,
                date: "not-a-date".to_string(),
            })
            .is_err());

        assert!(service.expenses().is_empty());
    }

    #[test]
    fn test_clear_all_empties_memory_and_store() {
        let (mut service, connection, _temp_dir) = create_test_service();
        service.load();
        service.add_expense(create_request("Lunch", 5.0)).unwrap();

        service.clear_all();
        assert!(service.expenses().is_empty());

        let mut reloaded = ExpenseService::new(connection);
        assert!(reloaded.load().is_empty());
    }
}
