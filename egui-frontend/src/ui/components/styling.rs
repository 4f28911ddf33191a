//! # Styling Module
//!
//! Color constants and global style setup for the expense tracker app.
//! All visual styling should use these constants so the look stays
//! consistent across components.

use eframe::egui;

/// Color palette used across the app
pub mod colors {
    use eframe::egui::Color32;

    /// Primary accent used for headings, the submit button, and bars
    pub const ACCENT: Color32 = Color32::from_rgb(79, 70, 229);
    /// Amount text in the list and stats
    pub const AMOUNT: Color32 = Color32::from_rgb(22, 101, 52);
    /// Destructive actions (delete)
    pub const DANGER: Color32 = Color32::from_rgb(220, 50, 50);
    /// Secondary text (meta lines, hints, empty states)
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Disabled controls
    pub const DISABLED: Color32 = Color32::from_rgb(180, 180, 180);
    /// Neutral button fill (cancel)
    pub const NEUTRAL: Color32 = Color32::from_rgb(120, 120, 120);
}

/// Configure the global egui style for the application
pub fn setup_app_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.button_frame = true;
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);

        style.visuals.widgets.noninteractive.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(6.0);

        style
    });
}
