use showdesk_core::{Field, Genre, ShowListEditor};

use crate::state::NoticeBoard;

/// Render the add/edit form for the editor's draft.
pub fn show(
    ui: &mut egui::Ui,
    editor: &mut ShowListEditor,
    notices: &mut NoticeBoard,
    form_error: &mut Option<String>,
) {
    let editing = editor.editing_id().is_some();

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.heading(if editing {
                "Modifier un programme"
            } else {
                "Ajouter un nouveau programme"
            });
            ui.add_space(8.0);

            let draft = editor.draft_mut();
            egui::Grid::new("show_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for &field in Field::all() {
                        ui.label(field.label());
                        match field {
                            Field::Genre => genre_picker(ui, &mut draft.genre),
                            Field::Description => {
                                if let Some(text) = draft.text_mut(field) {
                                    ui.add(
                                        egui::TextEdit::multiline(text)
                                            .desired_rows(3)
                                            .desired_width(360.0),
                                    );
                                }
                            }
                            _ => {
                                if let Some(text) = draft.text_mut(field) {
                                    ui.add(
                                        egui::TextEdit::singleline(text)
                                            .hint_text(hint(field))
                                            .desired_width(360.0),
                                    );
                                }
                            }
                        }
                        ui.end_row();
                    }
                });

            // Inline hint for the first field still blocking submission
            let validation = editor.draft().validate();
            if let Err(ref e) = validation {
                ui.add_space(4.0);
                ui.label(egui::RichText::new(e.to_string()).weak().italics());
            }
            if let Some(error) = form_error.as_deref() {
                ui.colored_label(egui::Color32::from_rgb(220, 50, 50), error);
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let label = if editing { "Modifier" } else { "Ajouter" };
                if ui
                    .add_enabled(validation.is_ok(), egui::Button::new(label))
                    .clicked()
                {
                    match editor.submit(notices) {
                        Ok(_) => *form_error = None,
                        Err(e) => {
                            log::warn!("Programme not saved: {}", e);
                            *form_error = Some(e.to_string());
                        }
                    }
                }
                if ui.button("Annuler").clicked() {
                    editor.cancel();
                    *form_error = None;
                }
            });
        });
}

fn genre_picker(ui: &mut egui::Ui, genre: &mut Option<Genre>) {
    let selected = genre.map_or("Sélectionner un genre", |g| g.label());
    egui::ComboBox::from_id_salt("genre_picker")
        .selected_text(selected)
        .width(360.0)
        .show_ui(ui, |ui| {
            for &g in Genre::all() {
                ui.selectable_value(genre, Some(g), g.label());
            }
        });
}

fn hint(field: Field) -> &'static str {
    match field {
        Field::DateTime => "2025-03-15T20:50",
        Field::Host => "N/A",
        Field::ImageUrl => "https://…",
        _ => "",
    }
}
