use showdesk_gui::ShowDeskApp;
use showdesk_gui::settings;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = settings::settings_path();
    let app_settings = settings::load_settings();
    if !path.exists() {
        // Write defaults so there is a file to edit
        if let Err(e) = settings::save_settings(&app_settings) {
            log::warn!("Failed to write default settings to {}: {}", path.display(), e);
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("showdesk")
            .with_inner_size([app_settings.window.width, app_settings.window.height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "showdesk",
        options,
        Box::new(|cc| Ok(Box::new(ShowDeskApp::new(cc, app_settings)))),
    )
}
