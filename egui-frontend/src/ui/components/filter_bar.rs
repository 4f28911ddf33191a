//! # Filter Bar
//!
//! Search box plus a collapsible panel of structured filters (category and
//! date range). Every widget change re-fires the criteria at the
//! coordinator; there is no apply button.

use eframe::egui;
use egui_extras::DatePickerButton;
use shared::Category;

use crate::ui::app_state::ExpenseTrackerApp;
use crate::ui::components::styling::colors;

impl ExpenseTrackerApp {
    /// Render the filter bar
    pub fn render_filter_section(&mut self, ui: &mut egui::Ui) {
        let mut criteria_changed = false;
        let mut clear_requested = false;

        ui.group(|ui| {
            ui.horizontal(|ui| {
                let search_response = ui.add(
                    egui::TextEdit::singleline(&mut self.filter_bar.search_text)
                        .hint_text("Search expenses...")
                        .desired_width(240.0),
                );
                if search_response.changed() {
                    criteria_changed = true;
                }

                let filter_count = self.filter_bar.active_filter_count();
                let toggle_text = if filter_count > 0 {
                    format!("🔍 Filters ({})", filter_count)
                } else {
                    "🔍 Filters".to_string()
                };
                if ui
                    .selectable_label(self.filter_bar.show_filters, toggle_text)
                    .clicked()
                {
                    self.filter_bar.show_filters = !self.filter_bar.show_filters;
                }

                if self.filter_bar.has_active_filters() && ui.button("Clear All").clicked() {
                    clear_requested = true;
                }
            });

            if self.filter_bar.show_filters {
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    ui.label("Category:");
                    let selected_text = self
                        .filter_bar
                        .category
                        .as_ref()
                        .map(|category| format!("{} {}", category.icon(), category.label()))
                        .unwrap_or_else(|| "All Categories".to_string());

                    egui::ComboBox::from_id_source("filter_bar_category")
                        .width(180.0)
                        .selected_text(selected_text)
                        .show_ui(ui, |ui| {
                            if ui
                                .selectable_label(self.filter_bar.category.is_none(), "All Categories")
                                .clicked()
                            {
                                self.filter_bar.category = None;
                                criteria_changed = true;
                            }
                            for category in &Category::ALL {
                                let label = format!("{} {}", category.icon(), category.label());
                                let is_selected =
                                    self.filter_bar.category.as_ref() == Some(category);
                                if ui.selectable_label(is_selected, label).clicked() {
                                    self.filter_bar.category = Some(category.clone());
                                    criteria_changed = true;
                                }
                            }
                        });
                });

                ui.horizontal(|ui| {
                    let mut clear_date_from = false;
                    let mut clear_date_to = false;

                    ui.label("From:");
                    match &mut self.filter_bar.date_from {
                        Some(date) => {
                            if ui
                                .add(DatePickerButton::new(date).id_source("filter_date_from"))
                                .changed()
                            {
                                criteria_changed = true;
                            }
                            if ui
                                .small_button("✖")
                                .on_hover_text("Clear the from date")
                                .clicked()
                            {
                                clear_date_from = true;
                            }
                        }
                        None => {
                            if ui.button("Any date").clicked() {
                                self.filter_bar.date_from =
                                    Some(chrono::Local::now().date_naive());
                                criteria_changed = true;
                            }
                        }
                    }

                    ui.add_space(12.0);

                    ui.label("To:");
                    match &mut self.filter_bar.date_to {
                        Some(date) => {
                            if ui
                                .add(DatePickerButton::new(date).id_source("filter_date_to"))
                                .changed()
                            {
                                criteria_changed = true;
                            }
                            if ui
                                .small_button("✖")
                                .on_hover_text("Clear the to date")
                                .clicked()
                            {
                                clear_date_to = true;
                            }
                        }
                        None => {
                            if ui.button("Any date").clicked() {
                                self.filter_bar.date_to = Some(chrono::Local::now().date_naive());
                                criteria_changed = true;
                            }
                        }
                    }

                    if clear_date_from {
                        self.filter_bar.date_from = None;
                        criteria_changed = true;
                    }
                    if clear_date_to {
                        self.filter_bar.date_to = None;
                        criteria_changed = true;
                    }
                });

                if self.filter_bar.has_active_filters() {
                    ui.label(
                        egui::RichText::new("Filters apply to the list and statistics below")
                            .small()
                            .color(colors::TEXT_MUTED),
                    );
                }
            }
        });

        if clear_requested {
            self.clear_filters();
        } else if criteria_changed {
            self.apply_filter_criteria();
        }
    }
}
