//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably by the domain layer.

use shared::Expense;

/// Trait defining the interface for expense storage operations.
///
/// Storage failures never propagate: `save` and `clear` log and swallow any
/// error, and `load` degrades to an empty collection when the store is
/// absent or unreadable. The UI proceeds as if the data were simply not
/// there.
pub trait ExpenseStore: Send + Sync {
    /// Persist the full expense collection, replacing whatever was stored
    fn save(&self, expenses: &[Expense]);

    /// Read the persisted expense collection.
    ///
    /// Returns an empty collection when the store is absent or malformed.
    /// Individually invalid records are dropped; the rest still load.
    fn load(&self) -> Vec<Expense>;

    /// Remove the persisted expense collection entirely
    fn clear(&self);
}

/// Trait defining the interface for storage connections.
///
/// This abstracts away the specific connection type and provides a factory
/// for creating repositories, so the domain layer works with any storage
/// backend without knowing the implementation details.
pub trait Connection: Send + Sync + Clone {
    /// The type of ExpenseStore this connection creates
    type ExpenseRepository: ExpenseStore;

    /// Create a new expense repository for this connection
    fn create_expense_repository(&self) -> Self::ExpenseRepository;
}
