//! # Modals Module
//!
//! Modal dialog components for the expense tracker app.
//!
//! ## Module Organization:
//! - `edit_expense` - Edit-expense modal (pre-populated form overlay)

pub mod edit_expense;

use eframe::egui;

use crate::ui::app_state::ExpenseTrackerApp;

impl ExpenseTrackerApp {
    /// Render any active modal
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        self.render_edit_expense_modal(ctx);
    }
}
