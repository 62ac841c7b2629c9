use egui_extras::{Column, TableBuilder};
use showdesk_core::{Show, ShowId, format_datetime_fr};

use crate::state::RowAction;

/// Render the programme list. Returns the row button clicked this frame.
///
/// The row open in the form is highlighted.
pub fn show(ui: &mut egui::Ui, shows: &[Show], editing: Option<&ShowId>) -> Option<RowAction> {
    if shows.is_empty() {
        ui.weak("Aucun programme.");
        return None;
    }

    let mut action = None;
    let row_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y);

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(180.0).clip(true))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto())
        .header(20.0, |mut header| {
            for title in ["Titre", "Chaîne", "Date", "Genre", "Actions"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for s in shows {
                let is_editing = editing == Some(&s.id);
                body.row(row_height, |mut row| {
                    row.set_selected(is_editing);
                    row.col(|ui| {
                        let hover = if s.has_host() {
                            format!("{}\nPrésentateur : {}", s.description, s.host)
                        } else {
                            s.description.clone()
                        };
                        ui.label(&s.title).on_hover_text(hover);
                    });
                    row.col(|ui| {
                        ui.label(&s.channel);
                    });
                    row.col(|ui| {
                        ui.label(format_datetime_fr(&s.datetime));
                    });
                    row.col(|ui| {
                        ui.label(s.genre.label());
                    });
                    row.col(|ui| {
                        if ui.small_button("Modifier").clicked() {
                            action = Some(RowAction::Edit(s.id.clone()));
                        }
                        if ui.small_button("Supprimer").clicked() {
                            action = Some(RowAction::Delete(s.id.clone()));
                        }
                    });
                });
            }
        });

    action
}
