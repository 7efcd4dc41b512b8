use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Path the builder navigates to
pub const SEARCH_PATH: &str = "/search";

/// The six query parameters shared by the builder and the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Location,
    From,
    To,
    Adults,
    Children,
    Rooms,
}

impl Field {
    /// All fields in encoding order
    pub const ALL: [Field; 6] = [
        Field::Location,
        Field::From,
        Field::To,
        Field::Adults,
        Field::Children,
        Field::Rooms,
    ];

    /// Query parameter key
    pub fn key(self) -> &'static str {
        match self {
            Field::Location => "location",
            Field::From => "from",
            Field::To => "to",
            Field::Adults => "adults",
            Field::Children => "children",
            Field::Rooms => "rooms",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A validation failure tied to one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every field error found in one submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("search query rejected ({} field error(s))", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// First message reported for `field`, if any
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_are_stable() {
        let keys: Vec<_> = Field::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys, ["location", "from", "to", "adults", "children", "rooms"]);
        assert_eq!(Field::from_key("rooms"), Some(Field::Rooms));
        assert_eq!(Field::from_key("guests"), None);
    }

    #[test]
    fn test_message_for_returns_first_error() {
        let mut errors = ValidationErrors::default();
        errors.push(FieldError::new(Field::Adults, "first"));
        errors.push(FieldError::new(Field::Adults, "second"));
        assert_eq!(errors.message_for(Field::Adults), Some("first"));
        assert_eq!(errors.message_for(Field::Rooms), None);
        assert_eq!(errors.to_string(), "search query rejected (2 field error(s))");
    }
}
