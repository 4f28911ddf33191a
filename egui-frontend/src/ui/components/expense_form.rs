//! # Expense Form
//!
//! The add-expense form panel. Submission with incomplete or malformed
//! input is simply inert; there is no error surface here, the button just
//! stays disabled.

use eframe::egui;
use egui_extras::DatePickerButton;
use shared::Category;

use crate::ui::app_state::ExpenseTrackerApp;
use crate::ui::components::styling::colors;

impl ExpenseTrackerApp {
    /// Render the add-expense form
    pub fn render_form_section(&mut self, ui: &mut egui::Ui) {
        let mut submit_requested = false;

        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("➕ Add New Expense")
                        .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::ACCENT),
                );
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.label("Amount:");
                    ui.label(
                        egui::RichText::new(&self.backend.config.currency_symbol)
                            .color(colors::TEXT_MUTED),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.amount)
                            .hint_text("0.00")
                            .desired_width(100.0),
                    );
                });

                ui.horizontal(|ui| {
                    ui.label("Description:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.description)
                            .hint_text("What did you spend on?")
                            .desired_width(260.0),
                    );
                });

                ui.horizontal(|ui| {
                    ui.label("Category:");
                    let selected_text = self
                        .form
                        .category
                        .as_ref()
                        .map(|category| format!("{} {}", category.icon(), category.label()))
                        .unwrap_or_else(|| "Select category".to_string());

                    egui::ComboBox::from_id_source("expense_form_category")
                        .width(200.0)
                        .selected_text(selected_text)
                        .show_ui(ui, |ui| {
                            for category in &Category::ALL {
                                let label = format!("{} {}", category.icon(), category.label());
                                let is_selected = self.form.category.as_ref() == Some(category);
                                if ui.selectable_label(is_selected, label).clicked() {
                                    self.form.category = Some(category.clone());
                                }
                            }
                        });
                });

                ui.horizontal(|ui| {
                    ui.label("Date:");
                    ui.add(
                        DatePickerButton::new(&mut self.form.date).id_source("expense_form_date"),
                    );
                });

                ui.add_space(8.0);

                let can_submit = self.form.is_complete(&self.backend.config);
                let button_color = if can_submit {
                    colors::ACCENT
                } else {
                    colors::DISABLED
                };
                let submit_button = egui::Button::new(
                    egui::RichText::new("Add Expense").color(egui::Color32::WHITE),
                )
                .fill(button_color)
                .min_size(egui::vec2(140.0, 32.0));

                if ui.add(submit_button).clicked() && can_submit {
                    submit_requested = true;
                }
            });
        });

        if submit_requested {
            self.submit_new_expense();
        }
    }
}
