use crate::state::{NoticeBoard, notice_color};

/// Render the recent notices, newest last.
pub fn show(ui: &mut egui::Ui, board: &NoticeBoard) {
    for posted in board.visible() {
        ui.horizontal(|ui| {
            let color = notice_color(posted.notice.level);
            let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
            if ui.is_rect_visible(rect) {
                ui.painter().circle_filled(rect.center(), 4.0, color);
            }
            ui.label(&posted.notice.message);
        });
    }
}
