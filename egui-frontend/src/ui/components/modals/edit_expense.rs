//! # Edit Expense Modal
//!
//! Centered overlay for editing an existing expense record. The form is
//! pre-populated from the target record; Save rewrites every field, Cancel
//! (or a backdrop click) discards the working copy without mutating
//! anything.

use eframe::egui;
use egui_extras::DatePickerButton;
use shared::Category;

use crate::ui::app_state::ExpenseTrackerApp;
use crate::ui::components::styling::colors;

const MODAL_SIZE: egui::Vec2 = egui::vec2(420.0, 360.0);

impl ExpenseTrackerApp {
    /// Render the edit-expense modal when a target record is set
    pub fn render_edit_expense_modal(&mut self, ctx: &egui::Context) {
        if !self.edit_modal.is_open() {
            return;
        }

        let mut save_requested = false;
        let mut cancel_requested = false;

        egui::Area::new(egui::Id::new("edit_expense_modal_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                // Dark semi-transparent backdrop
                let screen_rect = ctx.screen_rect();
                ui.painter().rect_filled(
                    screen_rect,
                    egui::Rounding::ZERO,
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
                );

                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.centered_and_justified(|ui| {
                        egui::Frame::window(&ui.style())
                            .fill(egui::Color32::WHITE)
                            .stroke(egui::Stroke::new(2.0, colors::ACCENT))
                            .rounding(egui::Rounding::same(12.0))
                            .inner_margin(egui::Margin::same(20.0))
                            .show(ui, |ui| {
                                ui.set_min_size(MODAL_SIZE);
                                ui.set_max_size(MODAL_SIZE);

                                ui.vertical_centered(|ui| {
                                    ui.add_space(8.0);
                                    ui.label(
                                        egui::RichText::new("✏️ Edit Expense")
                                            .font(egui::FontId::new(
                                                24.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .strong()
                                            .color(colors::ACCENT),
                                    );
                                    ui.add_space(16.0);

                                    ui.horizontal(|ui| {
                                        ui.label("Amount:");
                                        ui.label(
                                            egui::RichText::new(
                                                &self.backend.config.currency_symbol,
                                            )
                                            .color(colors::TEXT_MUTED),
                                        );
                                        ui.add(
                                            egui::TextEdit::singleline(
                                                &mut self.edit_modal.form.amount,
                                            )
                                            .hint_text("0.00")
                                            .desired_width(100.0),
                                        );
                                    });

                                    ui.horizontal(|ui| {
                                        ui.label("Description:");
                                        ui.add(
                                            egui::TextEdit::singleline(
                                                &mut self.edit_modal.form.description,
                                            )
                                            .hint_text("What did you spend on?")
                                            .desired_width(240.0),
                                        );
                                    });

                                    ui.horizontal(|ui| {
                                        ui.label("Category:");
                                        let selected_text = self
                                            .edit_modal
                                            .form
                                            .category
                                            .as_ref()
                                            .map(|category| {
                                                format!("{} {}", category.icon(), category.label())
                                            })
                                            .unwrap_or_else(|| "Select category".to_string());

                                        egui::ComboBox::from_id_source("edit_expense_category")
                                            .width(200.0)
                                            .selected_text(selected_text)
                                            .show_ui(ui, |ui| {
                                                for category in &Category::ALL {
                                                    let label = format!(
                                                        "{} {}",
                                                        category.icon(),
                                                        category.label()
                                                    );
                                                    let is_selected = self
                                                        .edit_modal
                                                        .form
                                                        .category
                                                        .as_ref()
                                                        == Some(category);
                                                    if ui
                                                        .selectable_label(is_selected, label)
                                                        .clicked()
                                                    {
                                                        self.edit_modal.form.category =
                                                            Some(category.clone());
                                                    }
                                                }
                                            });
                                    });

                                    ui.horizontal(|ui| {
                                        ui.label("Date:");
                                        ui.add(
                                            DatePickerButton::new(&mut self.edit_modal.form.date)
                                                .id_source("edit_expense_date"),
                                        );
                                    });

                                    ui.add_space(20.0);

                                    ui.horizontal(|ui| {
                                        ui.add_space(40.0);

                                        let can_save = self
                                            .edit_modal
                                            .form
                                            .is_complete(&self.backend.config);
                                        let save_color = if can_save {
                                            colors::ACCENT
                                        } else {
                                            colors::DISABLED
                                        };

                                        let save_button = egui::Button::new(
                                            egui::RichText::new("Save Changes")
                                                .color(egui::Color32::WHITE),
                                        )
                                        .fill(save_color)
                                        .min_size(egui::vec2(130.0, 34.0));

                                        if ui.add(save_button).clicked() && can_save {
                                            save_requested = true;
                                        }

                                        ui.add_space(20.0);

                                        let cancel_button = egui::Button::new(
                                            egui::RichText::new("Cancel")
                                                .color(egui::Color32::WHITE),
                                        )
                                        .fill(colors::NEUTRAL)
                                        .min_size(egui::vec2(100.0, 34.0));

                                        if ui.add(cancel_button).clicked() {
                                            cancel_requested = true;
                                        }
                                    });

                                    ui.add_space(8.0);
                                });
                            });
                    });
                });

                // A click outside the modal cancels the edit. Skip the frame
                // that opened the modal so the opening click is not counted.
                if !self.edit_modal.just_opened && ui.ctx().input(|i| i.pointer.any_click()) {
                    if let Some(pointer_pos) = ui.ctx().input(|i| i.pointer.latest_pos()) {
                        let modal_rect = egui::Rect::from_center_size(
                            ui.ctx().screen_rect().center(),
                            MODAL_SIZE,
                        );
                        if !modal_rect.contains(pointer_pos) {
                            cancel_requested = true;
                        }
                    }
                }
                if self.edit_modal.just_opened {
                    self.edit_modal.just_opened = false;
                }
            });

        if save_requested {
            self.submit_edited_expense();
        } else if cancel_requested {
            self.edit_modal.close();
        }
    }
}
