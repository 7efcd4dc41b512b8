//! Web front end: the search form and the results page.

mod handlers;
mod pages;

pub use handlers::{create_router, AppState, WebError};
pub use pages::Pages;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;

/// Bind `config.server.bind` and serve until the process is stopped.
pub async fn serve(config: &Config) -> Result<()> {
    let addr = config.server.bind_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    serve_on(listener, config).await
}

/// Serve on an already bound listener.
pub async fn serve_on(listener: TcpListener, config: &Config) -> Result<()> {
    let state = Arc::new(AppState::new(config)?);
    let app = create_router(state);

    info!(
        "Booking search listening on http://{}",
        listener.local_addr().context("Listener has no local address")?
    );
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
