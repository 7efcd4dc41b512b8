use crate::navigation::traits::{Landing, Navigator};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;
use tracing::debug;

/// In-memory navigator that only remembers where it was sent
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Targets in the order they were navigated to
    pub fn visited(&self) -> Vec<String> {
        match self.visited.lock() {
            Ok(visited) => visited.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn navigate(&self, target: &str) -> Result<Landing> {
        debug!("Recording navigation to {}", target);
        let mut visited = match self.visited.lock() {
            Ok(visited) => visited,
            Err(poisoned) => poisoned.into_inner(),
        };
        visited.push(target.to_string());
        Ok(Landing {
            target: target.to_string(),
            body: None,
        })
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
