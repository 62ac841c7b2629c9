use crate::app::ShowDeskApp;

/// Render the passcode screen shown before the admin view.
pub fn show(ui: &mut egui::Ui, app: &mut ShowDeskApp) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 4.0);

        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(24.0))
            .show(ui, |ui| {
                ui.set_max_width(360.0);
                ui.heading("Accès Administrateur");
                ui.add_space(16.0);

                if let Some(error) = app.panel.gate.error() {
                    ui.colored_label(egui::Color32::from_rgb(220, 50, 50), error);
                    ui.add_space(8.0);
                }

                ui.label("Code d'accès");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut app.panel.gate.code)
                        .password(true)
                        .desired_width(f32::INFINITY),
                );

                // Empty input never reaches the gate
                let has_code = !app.panel.gate.code.is_empty();
                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.add_space(12.0);
                let clicked = ui
                    .add_enabled(has_code, egui::Button::new("Accéder"))
                    .clicked();

                if has_code && (enter || clicked) && app.panel.submit_code().is_err() {
                    response.request_focus();
                }
            });
    });
}
