pub mod http;
pub mod page;
pub mod recording;
pub mod traits;

pub use http::HttpNavigator;
pub use page::read_results_page;
pub use recording::RecordingNavigator;
pub use traits::{Landing, Navigator};
