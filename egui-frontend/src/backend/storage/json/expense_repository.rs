//! JSON-backed expense repository.
//!
//! The entire collection lives in one document:
//!
//! ```json
//! { "expenses": [ ... ], "lastUpdated": "<RFC 3339>" }
//! ```
//!
//! `lastUpdated` is written on every save but never read back. Loading is
//! fail-open: an absent or unreadable document yields an empty collection,
//! and structurally invalid records are dropped individually instead of
//! aborting the load.

use anyhow::Result;
use log::{error, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use time::format_description::well_known::Rfc3339;

use crate::backend::storage::traits::ExpenseStore;
use shared::Expense;

use super::connection::JsonConnection;

/// Serialized form of the persisted document
#[derive(Serialize)]
struct StoredDocument<'a> {
    expenses: &'a [Expense],
    #[serde(rename = "lastUpdated")]
    last_updated: String,
}

/// Loaded form of the persisted document.
///
/// Records are held as raw JSON values so a single malformed entry cannot
/// fail the whole document; each element is decoded individually.
#[derive(Deserialize)]
struct LoadedDocument {
    expenses: Vec<serde_json::Value>,
}

/// JSON file-based expense repository
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    connection: JsonConnection,
}

impl ExpenseRepository {
    /// Create a new JSON expense repository
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn try_save(&self, expenses: &[Expense]) -> Result<()> {
        self.connection.ensure_base_directory()?;

        let document = StoredDocument {
            expenses,
            last_updated: time::OffsetDateTime::now_utc().format(&Rfc3339)?,
        };

        let file_path = self.connection.expenses_file_path();

        // Write to a temporary file, then move into place atomically
        let temp_path = file_path.with_extension("tmp");
        {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &document)?;
            writer.flush()?;
        }
        fs::rename(&temp_path, &file_path)?;

        Ok(())
    }

    fn try_load(&self) -> Result<Vec<Expense>> {
        let file_path = self.connection.expenses_file_path();
        if !file_path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&file_path)?;

        let document: LoadedDocument = match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(e) => {
                warn!("Persisted expense data is malformed, starting empty: {}", e);
                return Ok(Vec::new());
            }
        };

        let total = document.expenses.len();
        let expenses: Vec<Expense> = document
            .expenses
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<Expense>(value) {
                Ok(expense) if expense.is_structurally_valid() => Some(expense),
                Ok(expense) => {
                    warn!("Dropping structurally invalid expense record: {:?}", expense.id);
                    None
                }
                Err(e) => {
                    warn!("Dropping undecodable expense record: {}", e);
                    None
                }
            })
            .collect();

        let dropped = total - expenses.len();
        if dropped > 0 {
            warn!("Dropped {} invalid expense record(s) during load", dropped);
        }

        Ok(expenses)
    }
}

impl ExpenseStore for ExpenseRepository {
    fn save(&self, expenses: &[Expense]) {
        if let Err(e) = self.try_save(expenses) {
            error!("Failed to save expenses: {}", e);
        }
    }

    fn load(&self) -> Vec<Expense> {
        match self.try_load() {
            Ok(expenses) => expenses,
            Err(e) => {
                warn!("Failed to load expenses, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    fn clear(&self) {
        let file_path = self.connection.expenses_file_path();
        if !file_path.exists() {
            return;
        }
        if let Err(e) = fs::remove_file(&file_path) {
            error!("Failed to clear persisted expenses: {}", e);
        }
    }
}
