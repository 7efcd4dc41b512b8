use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::form_urlencoded;

use crate::query::locale::DateStyle;
use crate::query::schema::parse_timestamp;
use crate::query::types::Field;

/// Shown in place of a date that is absent or unreadable
pub const DATE_PLACEHOLDER: &str = "N/A";

/// The six search parameters as found in the URL, not re-validated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSearch {
    pub location: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub adults: Option<String>,
    pub children: Option<String>,
    pub rooms: Option<String>,
}

impl ParsedSearch {
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Location => &self.location,
            Field::From => &self.from,
            Field::To => &self.to,
            Field::Adults => &self.adults,
            Field::Children => &self.children,
            Field::Rooms => &self.rooms,
        };
        value.as_deref()
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Location => &mut self.location,
            Field::From => &mut self.from,
            Field::To => &mut self.to,
            Field::Adults => &mut self.adults,
            Field::Children => &mut self.children,
            Field::Rooms => &mut self.rooms,
        }
    }
}

/// Read the search parameters from a query string
///
/// A leading `?` is ignored, unknown keys are skipped and the first
/// occurrence of a repeated key wins.
pub fn parse(query_str: &str) -> ParsedSearch {
    let query_str = query_str.strip_prefix('?').unwrap_or(query_str);
    let mut parsed = ParsedSearch::default();
    for (key, value) in form_urlencoded::parse(query_str.as_bytes()) {
        if let Some(field) = Field::from_key(&key) {
            let slot = parsed.slot(field);
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
    }
    parsed
}

/// Calendar day of an encoded timestamp, in the timestamp's own offset
pub fn decode_date(raw: &str) -> Option<NaiveDate> {
    parse_timestamp(raw.trim()).map(|timestamp| timestamp.date_naive())
}

/// Values as shown on the results page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDisplay {
    pub location: String,
    pub check_in: String,
    pub check_out: String,
    pub adults: String,
    pub children: String,
    pub rooms: String,
}

impl SearchDisplay {
    pub fn render(parsed: &ParsedSearch, style: DateStyle) -> Self {
        let text = |field| parsed.get(field).unwrap_or_default().to_string();
        Self {
            location: text(Field::Location),
            check_in: display_date(Field::From, parsed.get(Field::From), style),
            check_out: display_date(Field::To, parsed.get(Field::To), style),
            adults: text(Field::Adults),
            children: text(Field::Children),
            rooms: text(Field::Rooms),
        }
    }
}

fn display_date(field: Field, raw: Option<&str>, style: DateStyle) -> String {
    let Some(raw) = raw else {
        return DATE_PLACEHOLDER.to_string();
    };
    match decode_date(raw) {
        Some(date) => style.format(date),
        None => {
            warn!("Unreadable {} parameter: {:?}", field, raw);
            DATE_PLACEHOLDER.to_string()
        }
    }
}
