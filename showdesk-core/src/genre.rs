use serde::{Deserialize, Serialize};

/// Programme genres offered by the admin form.
///
/// The set is closed: the form only ever offers these six, and the
/// serialized form is the French label shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    #[serde(rename = "Divertissement")]
    Divertissement,
    #[serde(rename = "Sport")]
    Sport,
    #[serde(rename = "Talk-show")]
    TalkShow,
    #[serde(rename = "Série")]
    Serie,
    #[serde(rename = "Film")]
    Film,
    #[serde(rename = "Documentaire")]
    Documentaire,
}

/// All genres in the order the form lists them.
const ALL_GENRES: &[Genre] = &[
    Genre::Divertissement,
    Genre::Sport,
    Genre::TalkShow,
    Genre::Serie,
    Genre::Film,
    Genre::Documentaire,
];

impl Genre {
    /// Label shown in the form and the programme table.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Divertissement => "Divertissement",
            Self::Sport => "Sport",
            Self::TalkShow => "Talk-show",
            Self::Serie => "Série",
            Self::Film => "Film",
            Self::Documentaire => "Documentaire",
        }
    }

    /// All accepted spellings (case-insensitive matching).
    ///
    /// The label comes first; extra entries cover unaccented or
    /// unhyphenated input.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Divertissement => &["divertissement"],
            Self::Sport => &["sport"],
            Self::TalkShow => &["talk-show", "talk show", "talkshow"],
            Self::Serie => &["série", "serie"],
            Self::Film => &["film"],
            Self::Documentaire => &["documentaire"],
        }
    }

    /// All six genres.
    pub fn all() -> &'static [Genre] {
        ALL_GENRES
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when a string does not name a known genre.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown genre: '{0}'")]
pub struct GenreParseError(pub String);

impl std::str::FromStr for Genre {
    type Err = GenreParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_GENRES
            .iter()
            .copied()
            .find(|genre| genre.aliases().iter().any(|alias| *alias == lower))
            .ok_or_else(|| GenreParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_six_variants() {
        assert_eq!(Genre::all().len(), 6);
    }

    #[test]
    fn labels_parse_back() {
        for &genre in Genre::all() {
            let parsed: Genre = genre.label().parse().unwrap();
            assert_eq!(parsed, genre, "label did not parse back for {:?}", genre);
        }
    }

    #[test]
    fn label_is_first_alias_lowercased() {
        for &genre in Genre::all() {
            assert_eq!(genre.label().to_lowercase(), genre.aliases()[0]);
        }
    }

    #[test]
    fn loose_spellings_are_accepted() {
        let cases = [
            ("SERIE", Genre::Serie),
            ("Talk show", Genre::TalkShow),
            ("  film ", Genre::Film),
        ];
        for (input, expected) in cases {
            let parsed: Genre = input.parse().unwrap();
            assert_eq!(parsed, expected, "'{}' should parse to {:?}", input, expected);
        }
    }

    #[test]
    fn unknown_genre_is_rejected() {
        let err = "Western".parse::<Genre>().unwrap_err();
        assert_eq!(err.to_string(), "unknown genre: 'Western'");
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Genre::Serie).unwrap();
        assert_eq!(json, "\"Série\"");
        let back: Genre = serde_json::from_str("\"Talk-show\"").unwrap();
        assert_eq!(back, Genre::TalkShow);
    }
}
