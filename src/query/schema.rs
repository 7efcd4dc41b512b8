//! Validation schema for search input.
//!
//! Every rule lives in [`SEARCH_SCHEMA`] so the live form and a query string
//! lifted from a bookmarked URL go through the same checks.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use crate::models::{DateRange, SearchForm, SearchQuery};
use crate::query::types::{Field, FieldError, ValidationErrors};

/// How one field is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Free text bounded by character count
    Text {
        min_chars: usize,
        max_chars: usize,
        too_short: &'static str,
        too_long: &'static str,
    },
    /// Calendar date or RFC 3339 timestamp; empty means "now"
    Timestamp { invalid: &'static str },
    /// Whole number within an inclusive bound
    Count {
        min: i64,
        max: i64,
        too_low: &'static str,
        too_high: &'static str,
        not_a_number: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub rule: FieldRule,
}

/// A field value that passed its rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checked {
    Text(String),
    Timestamp(DateTime<FixedOffset>),
    Count(u8),
}

pub const SEARCH_SCHEMA: [FieldSpec; 6] = [
    FieldSpec {
        field: Field::Location,
        rule: FieldRule::Text {
            min_chars: 2,
            max_chars: 50,
            too_short: "Must be 2 characters or more",
            too_long: "Must be 50 characters or fewer",
        },
    },
    FieldSpec {
        field: Field::From,
        rule: FieldRule::Timestamp {
            invalid: "Check-in must be a valid date",
        },
    },
    FieldSpec {
        field: Field::To,
        rule: FieldRule::Timestamp {
            invalid: "Check-out must be a valid date",
        },
    },
    FieldSpec {
        field: Field::Adults,
        rule: FieldRule::Count {
            min: 1,
            max: 12,
            too_low: "Please select at least 1 adult",
            too_high: "Max 12 adults Occupancy",
            not_a_number: "Adults must be a whole number",
        },
    },
    FieldSpec {
        field: Field::Children,
        rule: FieldRule::Count {
            min: 0,
            max: 12,
            too_low: "Children cannot be negative",
            too_high: "Max 12 children Occupancy",
            not_a_number: "Children must be a whole number",
        },
    },
    FieldSpec {
        field: Field::Rooms,
        rule: FieldRule::Count {
            min: 1,
            max: 12,
            too_low: "Please select at least 1 room",
            too_high: "Max 12 rooms",
            not_a_number: "Rooms must be a whole number",
        },
    },
];

const DATE_ORDER_MESSAGE: &str = "Check-out cannot be before check-in";
const PAST_CHECK_IN_MESSAGE: &str = "Check-in cannot be in the past";
const PAST_CHECK_OUT_MESSAGE: &str = "Check-out cannot be in the past";

impl FieldSpec {
    /// Check one raw value against this field's rule
    pub fn check(&self, raw: &str, now: DateTime<Utc>) -> Result<Checked, FieldError> {
        match self.rule {
            FieldRule::Text {
                min_chars,
                max_chars,
                too_short,
                too_long,
            } => {
                let len = raw.chars().count();
                if len < min_chars {
                    Err(FieldError::new(self.field, too_short))
                } else if len > max_chars {
                    Err(FieldError::new(self.field, too_long))
                } else {
                    Ok(Checked::Text(raw.to_string()))
                }
            }
            FieldRule::Timestamp { invalid } => {
                let raw = raw.trim();
                if raw.is_empty() {
                    return Ok(Checked::Timestamp(now.into()));
                }
                parse_timestamp(raw)
                    .map(Checked::Timestamp)
                    .ok_or_else(|| FieldError::new(self.field, invalid))
            }
            FieldRule::Count {
                min,
                max,
                too_low,
                too_high,
                not_a_number,
            } => {
                // Only canonical decimal text is accepted, so the encoded
                // value is the same text that was entered
                let negative = raw.starts_with('-');
                let digits = raw.strip_prefix('-').unwrap_or(raw);
                let canonical = !digits.is_empty()
                    && digits.bytes().all(|b| b.is_ascii_digit())
                    && (digits == "0" || !digits.starts_with('0'))
                    && !(negative && digits == "0");
                if !canonical {
                    return Err(FieldError::new(self.field, not_a_number));
                }
                let value: i64 = match raw.parse() {
                    Ok(value) => value,
                    Err(_) if negative => return Err(FieldError::new(self.field, too_low)),
                    Err(_) => return Err(FieldError::new(self.field, too_high)),
                };
                if value < min {
                    return Err(FieldError::new(self.field, too_low));
                }
                if value > max {
                    return Err(FieldError::new(self.field, too_high));
                }
                u8::try_from(value)
                    .map(Checked::Count)
                    .map_err(|_| FieldError::new(self.field, too_high))
            }
        }
    }
}

/// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` as midnight UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp);
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().into())
}

/// The search schema plus policy switches
#[derive(Debug, Clone)]
pub struct Schema {
    pub fields: &'static [FieldSpec],
    /// Reject a check-out day earlier than the check-in day
    pub enforce_date_order: bool,
    /// Reject check-in or check-out days before today (UTC)
    pub reject_past_dates: bool,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            fields: &SEARCH_SCHEMA,
            enforce_date_order: false,
            reject_past_dates: false,
        }
    }
}

impl Schema {
    pub fn with_date_order(mut self, enforce: bool) -> Self {
        self.enforce_date_order = enforce;
        self
    }

    pub fn with_past_dates_rejected(mut self, reject: bool) -> Self {
        self.reject_past_dates = reject;
        self
    }

    /// Run every rule once and collect all field errors
    pub fn validate(
        &self,
        form: &SearchForm,
        now: DateTime<Utc>,
    ) -> Result<SearchQuery, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let mut location = None;
        let mut from = None;
        let mut to = None;
        let mut adults = None;
        let mut children = None;
        let mut rooms = None;

        for spec in self.fields {
            let checked = match spec.check(raw_value(form, spec.field), now) {
                Ok(checked) => checked,
                Err(error) => {
                    errors.push(error);
                    continue;
                }
            };
            match (spec.field, checked) {
                (Field::Location, Checked::Text(text)) => location = Some(text),
                (Field::From, Checked::Timestamp(ts)) => from = Some(ts),
                (Field::To, Checked::Timestamp(ts)) => to = Some(ts),
                (Field::Adults, Checked::Count(n)) => adults = Some(n),
                (Field::Children, Checked::Count(n)) => children = Some(n),
                (Field::Rooms, Checked::Count(n)) => rooms = Some(n),
                (field, _) => {
                    errors.push(FieldError::new(field, "Unsupported rule for this field"));
                }
            }
        }

        if self.reject_past_dates {
            let today = now.date_naive();
            for (field, timestamp, message) in [
                (Field::From, from, PAST_CHECK_IN_MESSAGE),
                (Field::To, to, PAST_CHECK_OUT_MESSAGE),
            ] {
                if timestamp.is_some_and(|ts| ts.date_naive() < today) {
                    errors.push(FieldError::new(field, message));
                }
            }
        }

        if self.enforce_date_order {
            if let (Some(from), Some(to)) = (from, to) {
                if to.date_naive() < from.date_naive() {
                    errors.push(FieldError::new(Field::To, DATE_ORDER_MESSAGE));
                }
            }
        }

        match (location, from, to, adults, children, rooms) {
            (Some(location), Some(from), Some(to), Some(adults), Some(children), Some(rooms))
                if errors.is_empty() =>
            {
                Ok(SearchQuery {
                    location,
                    dates: DateRange { from, to },
                    adults,
                    children,
                    rooms,
                })
            }
            (location, from, to, adults, children, rooms) => {
                // A schema missing a field must still reject rather than build a partial query
                let present = [
                    (Field::Location, location.is_some()),
                    (Field::From, from.is_some()),
                    (Field::To, to.is_some()),
                    (Field::Adults, adults.is_some()),
                    (Field::Children, children.is_some()),
                    (Field::Rooms, rooms.is_some()),
                ];
                for (field, is_present) in present {
                    if !is_present && errors.message_for(field).is_none() {
                        errors.push(FieldError::new(field, "Required"));
                    }
                }
                Err(errors)
            }
        }
    }
}

fn raw_value(form: &SearchForm, field: Field) -> &str {
    match field {
        Field::Location => &form.location,
        Field::From => &form.from,
        Field::To => &form.to,
        Field::Adults => &form.adults,
        Field::Children => &form.children,
        Field::Rooms => &form.rooms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap()
    }

    fn form(location: &str, adults: &str, children: &str, rooms: &str) -> SearchForm {
        SearchForm::new(location, "2024-07-01", "2024-07-10", adults, children, rooms)
    }

    fn spec(field: Field) -> FieldSpec {
        *SEARCH_SCHEMA.iter().find(|s| s.field == field).unwrap()
    }

    #[test]
    fn test_location_length_bounds() {
        let location = spec(Field::Location);
        assert!(location.check("P", now()).is_err());
        assert!(location.check("Pa", now()).is_ok());
        assert!(location.check(&"x".repeat(50), now()).is_ok());
        assert!(location.check(&"x".repeat(51), now()).is_err());
    }

    #[test]
    fn test_location_counts_characters_not_bytes() {
        let location = spec(Field::Location);
        assert!(location.check("Ö", now()).is_err());
        assert!(location.check(&"ö".repeat(50), now()).is_ok());
    }

    #[test]
    fn test_count_bounds() {
        let adults = spec(Field::Adults);
        assert_eq!(
            adults.check("0", now()).unwrap_err().message,
            "Please select at least 1 adult"
        );
        assert_eq!(adults.check("1", now()), Ok(Checked::Count(1)));
        assert_eq!(adults.check("12", now()), Ok(Checked::Count(12)));
        assert_eq!(
            adults.check("13", now()).unwrap_err().message,
            "Max 12 adults Occupancy"
        );

        let children = spec(Field::Children);
        assert_eq!(children.check("0", now()), Ok(Checked::Count(0)));
        assert!(children.check("-1", now()).is_err());
        assert!(children.check("13", now()).is_err());

        let rooms = spec(Field::Rooms);
        assert!(rooms.check("0", now()).is_err());
        assert!(rooms.check("13", now()).is_err());
        assert_eq!(rooms.check("3", now()), Ok(Checked::Count(3)));
    }

    #[test]
    fn test_count_requires_canonical_text() {
        let adults = spec(Field::Adults);
        for raw in ["+2", "01", " 1", "2 ", "-0", "00", "-"] {
            assert_eq!(
                adults.check(raw, now()).unwrap_err().message,
                "Adults must be a whole number",
                "{:?} should be rejected",
                raw
            );
        }
        assert_eq!(
            spec(Field::Children).check("-1", now()).unwrap_err().message,
            "Children cannot be negative"
        );
    }

    #[test]
    fn test_count_rejects_non_numeric_text() {
        let adults = spec(Field::Adults);
        assert_eq!(
            adults.check("ab", now()).unwrap_err().message,
            "Adults must be a whole number"
        );
        assert!(adults.check("", now()).is_err());
        assert!(adults.check("2.5", now()).is_err());
    }

    #[test]
    fn test_count_overflow_is_too_high() {
        let adults = spec(Field::Adults);
        assert_eq!(
            adults.check("99999999999999999999", now()).unwrap_err().message,
            "Max 12 adults Occupancy"
        );
        assert_eq!(
            spec(Field::Children).check("-99999999999999999999", now()).unwrap_err().message,
            "Children cannot be negative"
        );
    }

    #[test]
    fn test_empty_dates_default_to_now() {
        let from = spec(Field::From);
        assert_eq!(from.check("", now()), Ok(Checked::Timestamp(now().into())));
    }

    #[test]
    fn test_parse_timestamp_accepts_dates_and_rfc3339() {
        let plain = parse_timestamp("2024-07-01").unwrap();
        assert_eq!(plain.to_rfc3339(), "2024-07-01T00:00:00+00:00");

        let offset = parse_timestamp("2024-07-01T23:30:00-05:00").unwrap();
        assert_eq!(offset.date_naive(), NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());

        assert!(parse_timestamp("07/01/2024").is_none());
        assert!(parse_timestamp("2024-02-30").is_none());
    }

    #[test]
    fn test_validate_collects_every_error() {
        let errors = Schema::default()
            .validate(&form("P", "0", "13", "x"), now())
            .unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.message_for(Field::Location).is_some());
        assert!(errors.message_for(Field::Adults).is_some());
        assert!(errors.message_for(Field::Children).is_some());
        assert!(errors.message_for(Field::Rooms).is_some());
        assert!(errors.message_for(Field::From).is_none());
    }

    #[test]
    fn test_validate_builds_query() {
        let query = Schema::default()
            .validate(&form("Paris", "2", "1", "1"), now())
            .unwrap();
        assert_eq!(query.location, "Paris");
        assert_eq!((query.adults, query.children, query.rooms), (2, 1, 1));
        assert_eq!(
            query.dates.to.date_naive(),
            NaiveDate::from_ymd_opt(2024, 7, 10).unwrap()
        );
    }

    #[test]
    fn test_date_order_only_when_enforced() {
        let reversed = SearchForm::new("Paris", "2024-07-10", "2024-07-01", "2", "0", "1");
        assert!(Schema::default().validate(&reversed, now()).is_ok());

        let errors = Schema::default()
            .with_date_order(true)
            .validate(&reversed, now())
            .unwrap_err();
        assert_eq!(
            errors.message_for(Field::To),
            Some("Check-out cannot be before check-in")
        );

        let same_day = SearchForm::new("Paris", "2024-07-10", "2024-07-10", "2", "0", "1");
        assert!(Schema::default()
            .with_date_order(true)
            .validate(&same_day, now())
            .is_ok());
    }

    #[test]
    fn test_past_dates_only_when_rejected() {
        let past = SearchForm::new("Paris", "1999-01-01", "1999-01-05", "2", "0", "1");
        assert!(Schema::default().validate(&past, now()).is_ok());

        let errors = Schema::default()
            .with_past_dates_rejected(true)
            .validate(&past, now())
            .unwrap_err();
        assert_eq!(errors.message_for(Field::From), Some("Check-in cannot be in the past"));
        assert_eq!(errors.message_for(Field::To), Some("Check-out cannot be in the past"));

        // now() is 2024-06-01; an empty date resolves to now and is still today
        let today = SearchForm::new("Paris", "2024-06-01", "", "2", "0", "1");
        assert!(Schema::default()
            .with_past_dates_rejected(true)
            .validate(&today, now())
            .is_ok());
    }
}
