//! Sample programmes for a freshly opened panel.

use thiserror::Error;

use crate::editor::ShowListEditor;
use crate::show::Show;

const SAMPLE_SHOWS_JSON: &str = include_str!("../data/sample_shows.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("JSON parse error in sample programmes: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON array of programmes (camelCase field names).
pub fn parse_shows(json: &str) -> Result<Vec<Show>, SeedError> {
    Ok(serde_json::from_str(json)?)
}

/// The three sample programmes bundled with the panel.
pub fn sample_shows() -> Result<Vec<Show>, SeedError> {
    parse_shows(SAMPLE_SHOWS_JSON)
}

impl ShowListEditor {
    /// Editor preloaded with [`sample_shows`].
    pub fn with_sample_shows() -> Result<Self, SeedError> {
        Ok(Self::new(sample_shows()?))
    }
}
