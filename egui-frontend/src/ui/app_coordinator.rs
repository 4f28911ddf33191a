//! # App Coordinator Module
//!
//! The main application update loop (the `eframe::App` implementation).
//!
//! ## Application Flow:
//! 1. Set up global styling
//! 2. Load persisted data on the first frame; until then only a loading
//!    indicator renders
//! 3. Render header, form, filter bar, list, and statistics
//! 4. Render any active modal
//!
//! The coordinator owns the wiring between component actions and the
//! mutation handlers in `data_loading`.

use eframe::egui;

use crate::ui::app_state::ExpenseTrackerApp;
use crate::ui::components::{
    render_expense_list, render_stats_panel, setup_app_style, ExpenseListAction,
};

impl eframe::App for ExpenseTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_app_style(ctx);

        // Load initial data on first run
        if self.loading {
            self.load_initial_data();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.loading {
                self.render_loading_screen(ui);
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.render_header(ui);
                    ui.separator();

                    self.render_form_section(ui);
                    ui.add_space(10.0);

                    self.render_filter_section(ui);
                    ui.add_space(10.0);

                    self.render_list_section(ui);
                    ui.add_space(10.0);

                    self.render_stats_section(ui);
                });
        });

        // Render modals
        self.render_modals(ctx);
    }
}

impl ExpenseTrackerApp {
    /// Render the loading screen
    pub fn render_loading_screen(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);
            ui.spinner();
            ui.label("Loading...");
        });
    }

    /// Render the expense list and route its row actions
    fn render_list_section(&mut self, ui: &mut egui::Ui) {
        let mut action = None;
        ui.group(|ui| {
            action = render_expense_list(
                ui,
                &self.filtered_expenses,
                self.statistics.total_amount,
                &self.backend.config,
            );
        });

        match action {
            Some(ExpenseListAction::Edit(expense)) => self.edit_modal.open(expense),
            Some(ExpenseListAction::Delete(id)) => self.delete_expense(&id),
            None => {}
        }
    }

    /// Render the statistics panel
    fn render_stats_section(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            render_stats_panel(ui, &self.statistics, &self.backend.config);
        });
    }
}
