use std::time::Instant;

use showdesk_core::{AdminPanel, ShowListEditor};

use crate::settings::AppSettings;
use crate::state::NoticeBoard;
use crate::views;
use crate::widgets;

/// Main application state.
pub struct ShowDeskApp {
    /// Access state, passcode form, and programme editor.
    pub panel: AdminPanel,

    /// Settings loaded at startup.
    pub settings: AppSettings,

    /// Notices shown in the status bar.
    pub notices: NoticeBoard,

    /// Last rejected submit, shown under the form until the next attempt.
    pub form_error: Option<String>,
}

impl ShowDeskApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        Self::with_settings(settings)
    }

    /// Build the app without a window, from settings alone.
    pub fn with_settings(settings: AppSettings) -> Self {
        let editor = if settings.general.seed_sample_shows {
            ShowListEditor::with_sample_shows().unwrap_or_else(|e| {
                log::warn!("Failed to load sample programmes: {}", e);
                ShowListEditor::default()
            })
        } else {
            ShowListEditor::default()
        };
        log::info!("Starting with {} programmes", editor.len());

        let lifetime = settings.general.notice_lifetime();
        Self {
            panel: AdminPanel::new(editor),
            settings,
            notices: NoticeBoard::new(lifetime),
            form_error: None,
        }
    }
}

impl eframe::App for ShowDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.notices.prune(now);

        // Repaint when the next notice expires
        if let Some(delay) = self.notices.next_expiry(now) {
            ctx.request_repaint_after(delay);
        }

        if !self.notices.is_empty() {
            egui::TopBottomPanel::bottom("notice_bar").show(ctx, |ui| {
                widgets::notice_bar::show(ui, &self.notices);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.panel.is_unlocked() {
                views::admin::show(ui, self);
            } else {
                views::access::show(ui, self);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdesk_core::{ADMIN_ACCESS_CODE, Genre};

    #[test]
    fn seeds_sample_programmes_by_default() {
        let app = ShowDeskApp::with_settings(AppSettings::default());
        assert_eq!(app.panel.editor().len(), 3);
        assert!(!app.panel.is_unlocked());
    }

    #[test]
    fn seeding_can_be_disabled() {
        let mut settings = AppSettings::default();
        settings.general.seed_sample_shows = false;
        let app = ShowDeskApp::with_settings(settings);
        assert!(app.panel.editor().is_empty());
    }

    #[test]
    fn oversized_notice_seconds_falls_back_to_default() {
        for seconds in [1e20, f32::INFINITY] {
            let mut settings = AppSettings::default();
            settings.general.notice_seconds = seconds;
            let app = ShowDeskApp::with_settings(settings);
            assert!(app.notices.is_empty());
        }
    }

    #[test]
    fn unlock_then_add_posts_notice() {
        let mut app = ShowDeskApp::with_settings(AppSettings::default());
        app.panel.gate.code = ADMIN_ACCESS_CODE.to_string();
        app.panel.submit_code().unwrap();

        let editor = app.panel.editor_mut().unwrap();
        editor.open_for_create();
        let draft = editor.draft_mut();
        draft.title = "Tour de France".to_string();
        draft.channel = "France 3".to_string();
        draft.datetime = "2025-07-05T13:00".to_string();
        draft.description = "Première étape".to_string();
        draft.genre = Some(Genre::Sport);
        draft.image_url = "https://example.com/tdf.jpg".to_string();
        editor.submit(&mut app.notices).unwrap();

        assert_eq!(app.panel.editor().len(), 4);
        assert_eq!(app.notices.visible().len(), 1);
        assert_eq!(
            app.notices.visible()[0].notice.message,
            "Programme ajouté avec succès !"
        );
    }
}
