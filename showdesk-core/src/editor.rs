//! Show list editor: the ordered programme list plus the add/edit form.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::draft::{DraftError, ShowDraft};
use crate::ids::{IdSource, UuidIds};
use crate::notify::{Notice, Notifier};
use crate::show::{Show, ShowId};

pub const SHOW_ADDED_MESSAGE: &str = "Programme ajouté avec succès !";
pub const SHOW_UPDATED_MESSAGE: &str = "Programme modifié avec succès !";
pub const SHOW_DELETED_MESSAGE: &str = "Programme supprimé avec succès !";

/// Candidate ids drawn for one new programme before giving up.
const MAX_ID_DRAWS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("no form is open")]
    FormClosed,

    #[error("no programme with id '{0}'")]
    ShowNotFound(ShowId),

    #[error("no unused id after {0} draws")]
    IdsExhausted(usize),

    #[error(transparent)]
    Draft(#[from] DraftError),
}

/// What the form is doing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// No form; the add button is shown.
    #[default]
    Idle,
    /// Form open for a new programme.
    Creating,
    /// Form open on an existing programme.
    Editing(ShowId),
}

/// Counts shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowStats {
    pub total: usize,
    pub by_genre: BTreeMap<&'static str, usize>,
}

pub struct ShowListEditor {
    shows: Vec<Show>,
    draft: ShowDraft,
    mode: EditorMode,
    ids: Box<dyn IdSource>,
}

impl Default for ShowListEditor {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl std::fmt::Debug for ShowListEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShowListEditor")
            .field("shows", &self.shows)
            .field("draft", &self.draft)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl ShowListEditor {
    /// Editor over `shows`, generating UUIDs for new entries.
    ///
    /// Later entries whose identifier repeats an earlier one are dropped.
    pub fn new(shows: Vec<Show>) -> Self {
        Self::with_id_source(shows, UuidIds)
    }

    pub fn with_id_source(shows: Vec<Show>, ids: impl IdSource + 'static) -> Self {
        let mut unique: Vec<Show> = Vec::with_capacity(shows.len());
        for show in shows {
            if unique.iter().any(|s| s.id == show.id) {
                log::warn!("Dropping programme with duplicate id '{}'", show.id);
                continue;
            }
            unique.push(show);
        }
        Self {
            shows: unique,
            draft: ShowDraft::default(),
            mode: EditorMode::Idle,
            ids: Box::new(ids),
        }
    }

    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    pub fn len(&self) -> usize {
        self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    pub fn get(&self, id: &ShowId) -> Option<&Show> {
        self.shows.iter().find(|s| &s.id == id)
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn form_visible(&self) -> bool {
        self.mode != EditorMode::Idle
    }

    /// Identifier of the programme being edited, if any.
    pub fn editing_id(&self) -> Option<&ShowId> {
        match &self.mode {
            EditorMode::Editing(id) => Some(id),
            _ => None,
        }
    }

    pub fn draft(&self) -> &ShowDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ShowDraft {
        &mut self.draft
    }

    pub fn stats(&self) -> ShowStats {
        let mut by_genre = BTreeMap::new();
        for show in &self.shows {
            *by_genre.entry(show.genre.label()).or_insert(0) += 1;
        }
        ShowStats {
            total: self.shows.len(),
            by_genre,
        }
    }

    /// Open an empty form for a new programme.
    pub fn open_for_create(&mut self) {
        self.mode = EditorMode::Creating;
        self.draft = ShowDraft::default();
    }

    /// Open the form prefilled with an existing programme.
    pub fn open_for_edit(&mut self, id: &ShowId) -> Result<(), EditorError> {
        let show = self
            .get(id)
            .ok_or_else(|| EditorError::ShowNotFound(id.clone()))?;
        self.draft = ShowDraft::from(show);
        self.mode = EditorMode::Editing(id.clone());
        Ok(())
    }

    /// Close the form without touching the list.
    pub fn cancel(&mut self) {
        self.reset_form();
    }

    /// Apply the draft: update the programme being edited, or append a new one.
    ///
    /// On error nothing changes and the form stays open.
    pub fn submit(&mut self, notifier: &mut dyn Notifier) -> Result<ShowId, EditorError> {
        let fields = match &self.mode {
            EditorMode::Idle => return Err(EditorError::FormClosed),
            _ => self.draft.validate()?,
        };

        let id = match &self.mode {
            EditorMode::Editing(id) => {
                let slot = self
                    .shows
                    .iter_mut()
                    .find(|s| &s.id == id)
                    .ok_or_else(|| EditorError::ShowNotFound(id.clone()))?;
                *slot = fields.into_show(id.clone());
                log::info!("Updated programme '{}' ({})", slot.title, id);
                notifier.notify(Notice::success(SHOW_UPDATED_MESSAGE));
                id.clone()
            }
            _ => {
                let id = self.fresh_id()?;
                let show = fields.into_show(id.clone());
                log::info!("Added programme '{}' ({})", show.title, id);
                self.shows.push(show);
                notifier.notify(Notice::success(SHOW_ADDED_MESSAGE));
                id
            }
        };

        self.reset_form();
        Ok(id)
    }

    /// Remove the programme with `id`. Unknown ids are ignored.
    ///
    /// Returns whether a programme was removed. Removing the programme
    /// that is open in the form also closes the form.
    pub fn delete(&mut self, id: &ShowId, notifier: &mut dyn Notifier) -> bool {
        let Some(pos) = self.shows.iter().position(|s| &s.id == id) else {
            log::debug!("Delete ignored, no programme with id '{}'", id);
            return false;
        };
        let removed = self.shows.remove(pos);
        log::info!("Deleted programme '{}' ({})", removed.title, id);
        if self.editing_id() == Some(id) {
            self.reset_form();
        }
        notifier.notify(Notice::success(SHOW_DELETED_MESSAGE));
        true
    }

    fn reset_form(&mut self) {
        self.mode = EditorMode::Idle;
        self.draft = ShowDraft::default();
    }

    fn fresh_id(&mut self) -> Result<ShowId, EditorError> {
        for _ in 0..MAX_ID_DRAWS {
            let id = self.ids.next_id();
            if !id.as_str().is_empty() && self.get(&id).is_none() {
                return Ok(id);
            }
            log::debug!("Id '{}' unusable, drawing another", id);
        }
        log::warn!("Id source gave no unused id in {} draws", MAX_ID_DRAWS);
        Err(EditorError::IdsExhausted(MAX_ID_DRAWS))
    }
}
