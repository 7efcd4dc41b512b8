pub mod config;
pub mod models;
pub mod navigation;
pub mod query;
pub mod web;

pub use config::Config;
pub use models::{DateRange, SearchForm, SearchQuery};
pub use navigation::{HttpNavigator, Navigator, RecordingNavigator};
pub use query::{QueryBuilder, SearchDisplay, Submission};
