use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::storage::traits::Connection;

/// Name of the single persisted document inside the data directory
const EXPENSES_FILE_NAME: &str = "expenses.json";

/// JsonConnection manages the data directory and the path of the persisted
/// expense document
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new JSON connection rooted at the given base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a new JSON connection in the default data directory.
    ///
    /// Uses ~/Documents/Expense Tracker, falling back to the home directory
    /// when no documents directory is available on the platform.
    pub fn new_default() -> Result<Self> {
        let parent = dirs::document_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine a data directory"))?;

        let data_dir = parent.join("Expense Tracker");
        info!("Using data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// Path of the persisted expense document
    pub fn expenses_file_path(&self) -> PathBuf {
        self.base_directory.join(EXPENSES_FILE_NAME)
    }

    /// The base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Ensure the base directory exists (it may have been removed since the
    /// connection was created)
    pub fn ensure_base_directory(&self) -> Result<()> {
        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory)?;
        }
        Ok(())
    }
}

impl Connection for JsonConnection {
    type ExpenseRepository = super::expense_repository::ExpenseRepository;

    fn create_expense_repository(&self) -> Self::ExpenseRepository {
        super::expense_repository::ExpenseRepository::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("data");
        let connection = JsonConnection::new(&nested).unwrap();

        assert!(nested.exists());
        assert_eq!(connection.base_directory(), nested.as_path());
        assert_eq!(
            connection.expenses_file_path(),
            nested.join(EXPENSES_FILE_NAME)
        );
    }

    #[test]
    fn test_ensure_base_directory_recreates_it() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("data");
        let connection = JsonConnection::new(&base).unwrap();

        fs::remove_dir_all(&base).unwrap();
        assert!(!base.exists());

        connection.ensure_base_directory().unwrap();
        assert!(base.exists());
    }
}
