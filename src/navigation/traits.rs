use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

/// Where a navigation ended up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Landing {
    /// Path and query that was requested
    pub target: String,
    /// Rendered page, for navigators that fetch one
    pub body: Option<String>,
}

/// Common trait for anything that can follow a results URL
/// This keeps encoding testable without a rendering environment
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Navigate to `target` (a path with query, e.g. `/search?location=Paris`)
    async fn navigate(&self, target: &str) -> Result<Landing>;

    /// Get the name of the navigator
    fn name(&self) -> &'static str;
}
