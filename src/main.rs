#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod model;
mod ui;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = config::AppSettings::load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 400.0])
            .with_title("Annual Schedule"),
        ..Default::default()
    };

    eframe::run_native(
        "Annual Schedule",
        options,
        Box::new(|cc| Ok(Box::new(app::ScheduleApp::new(cc, settings)))),
    )
}
