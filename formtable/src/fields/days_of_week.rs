//! Days-of-week checkbox field

use super::multi_value::MultiValueCodec;
use crate::error::Result;

/// Weekday codes as stored, with their short names
const DAYS: [(&str, &str); 7] = [
    ("M", "Mon"),
    ("T", "Tue"),
    ("W", "Wed"),
    ("R", "Thu"),
    ("F", "Fri"),
    ("S", "Sat"),
    ("U", "Sun"),
];

/// A field holding a selection of weekdays, stored as `M|W|F`
#[derive(Debug, Clone, Copy, Default)]
pub struct DaysOfWeek;

impl DaysOfWeek {
    /// All `(code, short name)` pairs, Monday first
    pub fn days() -> &'static [(&'static str, &'static str)] {
        &DAYS
    }

    pub fn codes() -> impl Iterator<Item = &'static str> {
        DAYS.iter().map(|(code, _)| *code)
    }

    pub fn label(code: &str) -> Option<&'static str> {
        DAYS.iter().find(|(c, _)| *c == code).map(|(_, label)| *label)
    }

    /// Decode a stored value into selected codes
    pub fn decode(raw: &serde_json::Value) -> Result<Vec<String>> {
        MultiValueCodec::decode(raw)
    }

    pub fn encode<S: AsRef<str>>(selection: &[S]) -> String {
        MultiValueCodec::encode(selection)
    }

    /// Short names for a selection; unknown codes pass through as-is
    pub fn labels_for<S: AsRef<str>>(selection: &[S]) -> Vec<String> {
        selection
            .iter()
            .map(|code| {
                let code = code.as_ref();
                Self::label(code).unwrap_or(code).to_string()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_codes_in_week_order() {
        let codes: Vec<_> = DaysOfWeek::codes().collect();
        assert_eq!(codes, vec!["M", "T", "W", "R", "F", "S", "U"]);
    }

    #[test]
    fn test_label() {
        assert_eq!(DaysOfWeek::label("R"), Some("Thu"));
        assert_eq!(DaysOfWeek::label("U"), Some("Sun"));
        assert_eq!(DaysOfWeek::label("X"), None);
    }

    #[test]
    fn test_decode_and_label() {
        let selection = DaysOfWeek::decode(&json!("M|R|Z")).unwrap();
        assert_eq!(selection, vec!["M", "R", "Z"]);
        assert_eq!(DaysOfWeek::labels_for(&selection), vec!["Mon", "Thu", "Z"]);
    }

    #[test]
    fn test_encode() {
        assert_eq!(DaysOfWeek::encode(&["S", "U"]), "S|U");
    }

    #[test]
    fn test_decode_rejects_already_decoded() {
        assert!(DaysOfWeek::decode(&json!(["M"])).is_err());
    }
}
