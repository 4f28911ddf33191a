//! Embedded backend: domain services plus the JSON storage layer.
//!
//! The UI talks to the `Backend` struct only; everything behind it is
//! synchronous and completes within the triggering event handler.

pub mod domain;
pub mod storage;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use domain::ExpenseService;
use shared::TrackerConfig;
use storage::JsonConnection;

pub struct Backend {
    pub expense_service: ExpenseService<JsonConnection>,
    pub config: TrackerConfig,
}

impl Backend {
    /// Create a backend rooted at the default data directory
    pub fn new() -> Result<Self> {
        let connection = Arc::new(JsonConnection::new_default()?);
        Ok(Self::with_connection(connection))
    }

    /// Create a backend rooted at an explicit directory (used by tests)
    pub fn with_base_directory<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let connection = Arc::new(JsonConnection::new(base_directory)?);
        Ok(Self::with_connection(connection))
    }

    fn with_connection(connection: Arc<JsonConnection>) -> Self {
        Self {
            expense_service: ExpenseService::new(connection),
            config: TrackerConfig::default(),
        }
    }
}
