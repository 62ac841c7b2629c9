//! Top-level owner of all panel state.

use crate::access::{AccessError, AccessGate, AccessState};
use crate::editor::ShowListEditor;

/// Access state, passcode form, and show list editor in one owned value.
///
/// The front end holds exactly one of these and passes it down by
/// reference; the editor is only reachable mutably once unlocked.
#[derive(Debug, Default)]
pub struct AdminPanel {
    access: AccessState,
    /// Passcode form shown while locked.
    pub gate: AccessGate,
    editor: ShowListEditor,
}

impl AdminPanel {
    pub fn new(editor: ShowListEditor) -> Self {
        Self {
            access: AccessState::default(),
            gate: AccessGate::default(),
            editor,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.access.is_unlocked()
    }

    /// Submit the passcode currently typed into the gate.
    pub fn submit_code(&mut self) -> Result<(), AccessError> {
        let access = &mut self.access;
        self.gate.submit(|| access.unlock())
    }

    pub fn editor(&self) -> &ShowListEditor {
        &self.editor
    }

    /// The editor, or `None` while the panel is locked.
    pub fn editor_mut(&mut self) -> Option<&mut ShowListEditor> {
        if self.access.is_unlocked() {
            Some(&mut self.editor)
        } else {
            None
        }
    }
}
