//! The programme record held by the editor.

use serde::{Deserialize, Serialize};

use crate::genre::Genre;

/// Host value stored when a programme has no presenter.
pub const HOST_NOT_AVAILABLE: &str = "N/A";

/// Identifier of a programme, unique within one show list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowId(String);

impl ShowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShowId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ShowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single TV programme entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: ShowId,
    pub title: String,
    pub channel: String,
    /// Local date-time as entered in the form, e.g. `2025-03-15T20:50:00`.
    pub datetime: String,
    pub description: String,
    /// Presenter name, or [`HOST_NOT_AVAILABLE`].
    pub host: String,
    pub genre: Genre,
    pub image_url: String,
}

impl Show {
    /// True when the programme has no presenter.
    pub fn has_host(&self) -> bool {
        self.host != HOST_NOT_AVAILABLE
    }
}

/// Validated field values of a draft, waiting for an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowFields {
    pub title: String,
    pub channel: String,
    pub datetime: String,
    pub description: String,
    pub host: String,
    pub genre: Genre,
    pub image_url: String,
}

impl ShowFields {
    pub fn into_show(self, id: ShowId) -> Show {
        Show {
            id,
            title: self.title,
            channel: self.channel,
            datetime: self.datetime,
            description: self.description,
            host: self.host,
            genre: self.genre,
            image_url: self.image_url,
        }
    }
}
