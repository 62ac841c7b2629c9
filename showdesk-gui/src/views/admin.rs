use crate::app::ShowDeskApp;
use crate::state::RowAction;
use crate::widgets;

/// Render the administration view: counters, the add/edit form (or the add
/// button), and the programme list.
pub fn show(ui: &mut egui::Ui, app: &mut ShowDeskApp) {
    let ShowDeskApp {
        panel,
        notices,
        form_error,
        ..
    } = app;
    let Some(editor) = panel.editor_mut() else {
        return;
    };

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Administration");
        ui.add_space(12.0);

        let stats = editor.stats();
        ui.horizontal(|ui| {
            widgets::stat_card::show(ui, "Total Programmes", &stats.total.to_string());
            for (genre, count) in &stats.by_genre {
                widgets::stat_card::show(ui, genre, &count.to_string());
            }
        });
        ui.add_space(16.0);

        if editor.form_visible() {
            widgets::show_form::show(ui, editor, notices, form_error);
        } else {
            ui.vertical_centered(|ui| {
                if ui.button("Ajouter un programme").clicked() {
                    editor.open_for_create();
                    *form_error = None;
                }
            });
        }

        ui.add_space(16.0);
        ui.separator();
        ui.strong("Liste des programmes");
        ui.add_space(4.0);

        let action = widgets::show_table::show(ui, editor.shows(), editor.editing_id());
        match action {
            Some(RowAction::Edit(id)) => {
                if let Err(e) = editor.open_for_edit(&id) {
                    log::warn!("Cannot edit programme: {}", e);
                }
                *form_error = None;
            }
            Some(RowAction::Delete(id)) => {
                editor.delete(&id, notices);
            }
            None => {}
        }
    });
}
