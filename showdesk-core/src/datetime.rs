//! Parsing and display of the programme date-time field.
//!
//! The stored value is whatever a `datetime-local` input produces: a local
//! ISO 8601 date-time without offset, with or without seconds. Formatting
//! only affects display; the stored string is never rewritten.

use chrono::NaiveDateTime;

/// Accepted layouts for a stored date-time, tried in order.
const INPUT_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Rendered in place of a date-time that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Parse a stored local date-time.
pub fn parse_local(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Render a stored date-time the way the French locale prints it
/// (`15/03/2025 20:50:00`).
pub fn format_datetime_fr(value: &str) -> String {
    match parse_local(value) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M:%S").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_full_timestamp() {
        assert_eq!(format_datetime_fr("2025-03-15T20:50:00"), "15/03/2025 20:50:00");
    }

    #[test]
    fn formats_input_without_seconds() {
        assert_eq!(format_datetime_fr("2025-03-14T21:00"), "14/03/2025 21:00:00");
    }

    #[test]
    fn unparsable_values_render_invalid_date() {
        assert_eq!(format_datetime_fr(""), INVALID_DATE);
        assert_eq!(format_datetime_fr("demain soir"), INVALID_DATE);
        assert_eq!(format_datetime_fr("2025-13-01T10:00"), INVALID_DATE);
    }

    #[test]
    fn parse_local_ignores_surrounding_whitespace() {
        assert!(parse_local(" 2025-03-15T20:50 ").is_some());
    }
}
