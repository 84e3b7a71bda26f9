use eframe::egui;

mod app;
mod ui;

use app::DashboardApp;

fn main() {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Homeroom — School Administration",
        options,
        Box::new(|cc| {
            // The dashboard is designed against the light palette.
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(DashboardApp::default()))
        }),
    )
    .expect("Failed to start Homeroom");
}
