//! The in-progress record bound to the add/edit form.

use thiserror::Error;
use url::Url;

use crate::datetime;
use crate::genre::Genre;
use crate::show::{HOST_NOT_AVAILABLE, Show, ShowFields};

/// Form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Channel,
    DateTime,
    Description,
    Host,
    Genre,
    ImageUrl,
}

impl Field {
    /// Form label for the field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Titre",
            Self::Channel => "Chaîne",
            Self::DateTime => "Date et heure",
            Self::Description => "Description",
            Self::Host => "Présentateur",
            Self::Genre => "Genre",
            Self::ImageUrl => "URL de l'image",
        }
    }

    pub fn all() -> &'static [Field] {
        &[
            Self::Title,
            Self::Channel,
            Self::DateTime,
            Self::Description,
            Self::Host,
            Self::Genre,
            Self::ImageUrl,
        ]
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Reasons a draft cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} est obligatoire")]
    MissingField(Field),

    #[error("Date et heure invalide: '{0}'")]
    InvalidDateTime(String),

    #[error("URL de l'image invalide: '{0}'")]
    InvalidImageUrl(String),
}

/// Form contents. Every field is free text except the genre, which is
/// unset until the user picks one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowDraft {
    pub title: String,
    pub channel: String,
    pub datetime: String,
    pub description: String,
    pub host: String,
    pub genre: Option<Genre>,
    pub image_url: String,
}

impl ShowDraft {
    /// True when nothing has been typed or selected.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Mutable access to a text field. `Genre` has no text form and
    /// returns `None`.
    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Title => Some(&mut self.title),
            Field::Channel => Some(&mut self.channel),
            Field::DateTime => Some(&mut self.datetime),
            Field::Description => Some(&mut self.description),
            Field::Host => Some(&mut self.host),
            Field::ImageUrl => Some(&mut self.image_url),
            Field::Genre => None,
        }
    }

    /// Check the draft and produce trimmed field values.
    ///
    /// Fields are checked in form order and the first problem is reported.
    /// A blank host becomes [`HOST_NOT_AVAILABLE`].
    pub fn validate(&self) -> Result<ShowFields, DraftError> {
        let title = required(&self.title, Field::Title)?;
        let channel = required(&self.channel, Field::Channel)?;
        let datetime = required(&self.datetime, Field::DateTime)?;
        if datetime::parse_local(&datetime).is_none() {
            return Err(DraftError::InvalidDateTime(datetime));
        }
        let description = required(&self.description, Field::Description)?;
        let host = match self.host.trim() {
            "" => HOST_NOT_AVAILABLE.to_string(),
            host => host.to_string(),
        };
        let genre = self.genre.ok_or(DraftError::MissingField(Field::Genre))?;
        let image_url = required(&self.image_url, Field::ImageUrl)?;
        if Url::parse(&image_url).is_err() {
            return Err(DraftError::InvalidImageUrl(image_url));
        }

        Ok(ShowFields {
            title,
            channel,
            datetime,
            description,
            host,
            genre,
            image_url,
        })
    }
}

impl From<&Show> for ShowDraft {
    fn from(show: &Show) -> Self {
        Self {
            title: show.title.clone(),
            channel: show.channel.clone(),
            datetime: show.datetime.clone(),
            description: show.description.clone(),
            host: show.host.clone(),
            genre: Some(show.genre),
            image_url: show.image_url.clone(),
        }
    }
}

fn required(value: &str, field: Field) -> Result<String, DraftError> {
    match value.trim() {
        "" => Err(DraftError::MissingField(field)),
        v => Ok(v.to_string()),
    }
}
