//! # Header Module
//!
//! The application header: title, strapline, and a record-count readout on
//! the right.

use eframe::egui;

use crate::ui::app_state::ExpenseTrackerApp;

impl ExpenseTrackerApp {
    /// Render the header
    pub fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("💰 Expense Tracker")
                    .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                    .strong(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let count = self.backend.expense_service.expenses().len();
                let readout = match count {
                    0 => "No expenses recorded".to_string(),
                    1 => "1 expense recorded".to_string(),
                    n => format!("{} expenses recorded", n),
                };
                ui.label(
                    egui::RichText::new(readout)
                        .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                        .weak(),
                );
            });
        });

        ui.label(
            egui::RichText::new("Track your daily expenses")
                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                .weak(),
        );
    }
}
