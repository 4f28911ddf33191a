//! # Expense List
//!
//! Table of the filtered expense view. The component is a stateless
//! function of its inputs; row buttons report the requested action back to
//! the coordinator instead of mutating anything themselves.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::{Expense, TrackerConfig};

use crate::ui::components::styling::colors;
use crate::ui::mappers::{format_currency, format_display_date};

/// Action raised by a row of the expense list
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseListAction {
    /// Open the edit modal for this record
    Edit(Expense),
    /// Delete the record with this id
    Delete(String),
}

/// Render the expense list table. Returns the action requested by the user
/// this frame, if any.
pub fn render_expense_list(
    ui: &mut egui::Ui,
    expenses: &[Expense],
    total_amount: f64,
    config: &TrackerConfig,
) -> Option<ExpenseListAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("📋 Your Expenses")
                .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                .strong(),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("Total: {}", format_currency(total_amount, config)))
                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::AMOUNT),
            );
        });
    });

    if expenses.is_empty() {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("📝 No expenses yet").strong());
            ui.label(
                egui::RichText::new("Add your first expense above to get started!")
                    .small()
                    .color(colors::TEXT_MUTED),
            );
        });
        ui.add_space(12.0);
        return None;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(36.0)) // category icon
        .column(Column::remainder()) // description + meta
        .column(Column::exact(90.0)) // amount
        .column(Column::exact(76.0)) // actions
        .body(|mut body| {
            for expense in expenses {
                body.row(44.0, |mut row| {
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(expense.category.icon())
                                .font(egui::FontId::new(20.0, egui::FontFamily::Proportional)),
                        );
                    });

                    row.col(|ui| {
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(&expense.description).strong());
                            ui.label(
                                egui::RichText::new(format!(
                                    "{} • {}",
                                    expense.category.label(),
                                    format_display_date(&expense.date)
                                ))
                                .small()
                                .color(colors::TEXT_MUTED),
                            );
                        });
                    });

                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(format_currency(expense.amount, config))
                                .strong()
                                .color(colors::AMOUNT),
                        );
                    });

                    row.col(|ui| {
                        if ui.button("✏").on_hover_text("Edit expense").clicked() {
                            action = Some(ExpenseListAction::Edit(expense.clone()));
                        }
                        if ui
                            .button(egui::RichText::new("✖").color(colors::DANGER))
                            .on_hover_text("Delete expense")
                            .clicked()
                        {
                            action = Some(ExpenseListAction::Delete(expense.id.clone()));
                        }
                    });
                });
            }
        });

    action
}
