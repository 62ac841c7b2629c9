/// Draw a small dashboard card with a caption and a large value.
pub fn show(ui: &mut egui::Ui, caption: &str, value: &str) -> egui::Response {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_min_width(140.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(caption).weak());
                ui.label(egui::RichText::new(value).heading().strong());
            });
        })
        .response
}
