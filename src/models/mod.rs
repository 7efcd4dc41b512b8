use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Check-in / check-out pair as absolute timestamps
///
/// The offset is kept as entered so the calendar day survives encoding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub from: DateTime<FixedOffset>,
    pub to: DateTime<FixedOffset>,
}

/// A validated search request, built at submit time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    pub location: String,
    pub dates: DateRange,
    pub adults: u8,
    pub children: u8,
    pub rooms: u8,
}

/// Raw form input, exactly as typed
///
/// Empty date fields fall back to "now" when the query is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchForm {
    pub location: String,
    pub from: String,
    pub to: String,
    pub adults: String,
    pub children: String,
    pub rooms: String,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            location: String::new(),
            from: String::new(),
            to: String::new(),
            adults: "1".to_string(),
            children: "0".to_string(),
            rooms: "1".to_string(),
        }
    }
}

impl SearchForm {
    pub fn new(
        location: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        adults: impl Into<String>,
        children: impl Into<String>,
        rooms: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            from: from.into(),
            to: to.into(),
            adults: adults.into(),
            children: children.into(),
            rooms: rooms.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_defaults_match_initial_occupancy() {
        let form = SearchForm::default();
        assert!(form.location.is_empty());
        assert!(form.from.is_empty() && form.to.is_empty());
        assert_eq!(form.adults, "1");
        assert_eq!(form.children, "0");
        assert_eq!(form.rooms, "1");
    }

    #[test]
    fn test_form_deserialize_fills_missing_fields() {
        let form: SearchForm = serde_json::from_str(r#"{"location":"Paris"}"#).unwrap();
        assert_eq!(form.location, "Paris");
        assert_eq!(form.adults, "1");
    }
}
