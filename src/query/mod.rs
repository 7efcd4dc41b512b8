//! The search query contract between the form and the results page.
//!
//! The builder validates form input and encodes it into a query string; the
//! parser reads that string back for display.

pub mod builder;
pub mod locale;
pub mod parser;
pub mod schema;
pub mod types;

pub use builder::{encode, QueryBuilder, SearchRequest, Submission};
pub use locale::DateStyle;
pub use parser::{decode_date, parse, ParsedSearch, SearchDisplay, DATE_PLACEHOLDER};
pub use schema::{Schema, SEARCH_SCHEMA};
pub use types::{Field, FieldError, ValidationErrors, SEARCH_PATH};
