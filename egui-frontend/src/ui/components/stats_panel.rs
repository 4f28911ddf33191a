//! # Statistics Panel
//!
//! Overview numbers plus the per-category breakdown, rendered from a
//! precomputed `ExpenseStatistics` (always derived from the filtered view).

use eframe::egui;
use shared::TrackerConfig;

use crate::backend::domain::ExpenseStatistics;
use crate::ui::components::styling::colors;
use crate::ui::mappers::format_currency;

/// Render the statistics panel
pub fn render_stats_panel(
    ui: &mut egui::Ui,
    statistics: &ExpenseStatistics,
    config: &TrackerConfig,
) {
    ui.label(
        egui::RichText::new("📊 Statistics")
            .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
            .strong(),
    );

    if statistics.is_empty() {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("No data to show yet").color(colors::TEXT_MUTED));
        });
        ui.add_space(8.0);
        return;
    }

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        stat_block(
            ui,
            "Total Expenses",
            &format_currency(statistics.total_amount, config),
            colors::AMOUNT,
        );
        ui.add_space(24.0);
        stat_block(
            ui,
            "Total Transactions",
            &statistics.transaction_count.to_string(),
            colors::ACCENT,
        );
        ui.add_space(24.0);
        stat_block(
            ui,
            "Average Amount",
            &format_currency(statistics.average_amount.unwrap_or(0.0), config),
            colors::ACCENT,
        );
    });

    ui.add_space(12.0);
    ui.label(egui::RichText::new("By Category").strong());
    ui.add_space(4.0);

    for entry in &statistics.category_breakdown {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(entry.category.icon())
                    .font(egui::FontId::new(18.0, egui::FontFamily::Proportional)),
            );
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(entry.category.label()).strong());
                ui.label(
                    egui::RichText::new(format!(
                        "{} transaction{}",
                        entry.count,
                        if entry.count == 1 { "" } else { "s" }
                    ))
                    .small()
                    .color(colors::TEXT_MUTED),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("({:.1}%)", entry.percentage))
                        .small()
                        .color(colors::TEXT_MUTED),
                );
                ui.label(
                    egui::RichText::new(format_currency(entry.total, config))
                        .strong()
                        .color(colors::AMOUNT),
                );
            });
        });
        ui.add(
            egui::ProgressBar::new((entry.percentage / 100.0) as f32)
                .desired_height(6.0)
                .fill(colors::ACCENT),
        );
        ui.add_space(6.0);
    }
}

fn stat_block(ui: &mut egui::Ui, label: &str, value: &str, value_color: egui::Color32) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(label).small().color(colors::TEXT_MUTED));
        ui.label(
            egui::RichText::new(value)
                .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                .strong()
                .color(value_color),
        );
    });
}
