//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the expense tracker app.
//!
//! ## State Management:
//! The `ExpenseTrackerApp` struct holds all application state in a single
//! location. The canonical expense collection lives behind the backend's
//! expense service (the single writer); everything here is either derived
//! from it (the filtered view, the statistics) or transient widget state.

use log::info;
use shared::FilterCriteria;

use crate::backend::domain::ExpenseStatistics;
use crate::backend::Backend;
use crate::ui::state::{EditModalState, ExpenseFormState, FilterBarState};

/// Main application struct for the egui expense tracker
pub struct ExpenseTrackerApp {
    pub backend: Backend,

    /// True until the persisted collection has been loaded
    pub loading: bool,

    // Derived views
    /// Criteria currently in force (not necessarily what the filter bar
    /// widgets show — see the filter policy handling)
    pub active_criteria: FilterCriteria,
    pub filtered_expenses: Vec<shared::Expense>,
    pub statistics: ExpenseStatistics,

    // Component state
    pub form: ExpenseFormState,
    pub filter_bar: FilterBarState,
    pub edit_modal: EditModalState,
}

impl ExpenseTrackerApp {
    /// Create a new ExpenseTrackerApp with default values
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("Initializing ExpenseTrackerApp");

        let backend = Backend::new()?;

        Ok(Self {
            backend,
            loading: true,
            active_criteria: FilterCriteria::default(),
            filtered_expenses: Vec::new(),
            statistics: ExpenseStatistics::default(),
            form: ExpenseFormState::new(),
            filter_bar: FilterBarState::new(),
            edit_modal: EditModalState::new(),
        })
    }
}
