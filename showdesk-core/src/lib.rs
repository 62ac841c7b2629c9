//! Show list model, passcode gate, and add/edit/delete state machine for the
//! showdesk admin panel.
//!
//! This crate has no UI dependencies. A front end owns one [`AdminPanel`],
//! forwards user input to it, and renders what it exposes.

pub mod access;
pub mod datetime;
pub mod draft;
pub mod editor;
pub mod genre;
pub mod ids;
pub mod notify;
pub mod panel;
pub mod seed;
pub mod show;

pub use access::{ADMIN_ACCESS_CODE, AccessError, AccessGate, AccessState};
pub use datetime::format_datetime_fr;
pub use draft::{DraftError, Field, ShowDraft};
pub use editor::{EditorError, EditorMode, ShowListEditor, ShowStats};
pub use genre::{Genre, GenreParseError};
pub use ids::{IdSource, SequenceIds, UuidIds};
pub use notify::{LogNotifier, Notice, NoticeLevel, Notifier, Silent};
pub use panel::AdminPanel;
pub use seed::{SeedError, sample_shows};
pub use show::{HOST_NOT_AVAILABLE, Show, ShowFields, ShowId};
