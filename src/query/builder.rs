use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use tracing::{debug, info};
use url::form_urlencoded;

use crate::models::{SearchForm, SearchQuery};
use crate::navigation::{Landing, Navigator};
use crate::query::parser::parse;
use crate::query::schema::Schema;
use crate::query::types::{Field, ValidationErrors, SEARCH_PATH};

/// Encode a validated query into its canonical query string
///
/// Keys are emitted in a fixed order; values are form-urlencoded.
pub fn encode(query: &SearchQuery) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for field in Field::ALL {
        let value = match field {
            Field::Location => query.location.clone(),
            Field::From => encode_timestamp(&query.dates.from),
            Field::To => encode_timestamp(&query.dates.to),
            Field::Adults => query.adults.to_string(),
            Field::Children => query.children.to_string(),
            Field::Rooms => query.rooms.to_string(),
        };
        serializer.append_pair(field.key(), &value);
    }
    serializer.finish()
}

/// ISO 8601 with milliseconds, `Z` for UTC: `2024-07-01T00:00:00.000Z`
pub fn encode_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A validated query together with its encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: SearchQuery,
    pub encoded: String,
}

impl SearchRequest {
    /// Results URL path with the encoded query attached
    pub fn target(&self) -> String {
        format!("{}?{}", SEARCH_PATH, self.encoded)
    }
}

/// Result of a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Navigated(Landing),
    Rejected(ValidationErrors),
}

/// Form side of the search: validate, encode, navigate
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    schema: Schema,
}

impl QueryBuilder {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Validate the form and encode it
    pub fn build(
        &self,
        form: &SearchForm,
        now: DateTime<Utc>,
    ) -> Result<SearchRequest, ValidationErrors> {
        let query = self.schema.validate(form, now)?;
        let encoded = encode(&query);
        Ok(SearchRequest { query, encoded })
    }

    /// Re-validate a query string, e.g. one taken from a bookmarked URL
    pub fn validate_query_str(
        &self,
        query_str: &str,
        now: DateTime<Utc>,
    ) -> Result<SearchQuery, ValidationErrors> {
        let parsed = parse(query_str);
        let form = SearchForm {
            location: parsed.location.unwrap_or_default(),
            from: parsed.from.unwrap_or_default(),
            to: parsed.to.unwrap_or_default(),
            adults: parsed.adults.unwrap_or_default(),
            children: parsed.children.unwrap_or_default(),
            rooms: parsed.rooms.unwrap_or_default(),
        };
        self.schema.validate(&form, now)
    }

    /// Validate, encode and hand the results target to `navigator`
    ///
    /// Validation failures come back as [`Submission::Rejected`] and never
    /// reach the navigator. Only a failed navigation is an `Err`.
    pub async fn submit<N>(
        &self,
        form: &SearchForm,
        now: DateTime<Utc>,
        navigator: &N,
    ) -> Result<Submission>
    where
        N: Navigator + ?Sized,
    {
        let request = match self.build(form, now) {
            Ok(request) => request,
            Err(errors) => {
                debug!("Search rejected with {} field error(s)", errors.len());
                return Ok(Submission::Rejected(errors));
            }
        };

        let target = request.target();
        info!("Navigating to {} via {}", target, navigator.name());
        let landing = navigator
            .navigate(&target)
            .await
            .with_context(|| format!("Failed to navigate to {}", target))?;
        Ok(Submission::Navigated(landing))
    }
}
