use eframe::egui;
use log::{error, info};

mod backend;
mod ui;

use ui::ExpenseTrackerApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Expense Tracker egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0]) // Room for form + list + stats
            .with_min_inner_size([720.0, 540.0])
            .with_title("Expense Tracker")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Expense Tracker",
        options,
        Box::new(|cc| match ExpenseTrackerApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized Expense Tracker app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
