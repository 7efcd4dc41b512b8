//! Web route handlers.

use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Json, Router,
};
use chrono::Utc;
use serde_json::json;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::models::SearchForm;
use crate::query::{parse, DateStyle, QueryBuilder, SearchDisplay, SEARCH_PATH};
use crate::web::pages::{Pages, CSS};

/// State shared across handlers.
pub struct AppState {
    pub builder: QueryBuilder,
    pub date_style: DateStyle,
    pub pages: Pages,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            builder: QueryBuilder::new(config.schema()),
            date_style: config.display.date_style,
            pages: Pages::new()?,
        })
    }
}

/// Unexpected failure while rendering a page.
pub struct WebError(anyhow::Error);

impl<E> From<E> for WebError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!("Request failed: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

/// Create the front end router.
///
/// Routes:
/// - GET  /          - Search form
/// - POST /          - Form submission, redirects to /search on success
/// - GET  /search    - Results page
/// - GET  /style.css - Stylesheet
/// - GET  /health    - Liveness check
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(form_handler).post(submit_handler))
        .route(SEARCH_PATH, get(results_handler))
        .route("/style.css", get(css_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn form_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, WebError> {
    let today = Utc::now().date_naive();
    let html = state.pages.form(&SearchForm::default(), None, today)?;
    Ok(Html(html))
}

async fn submit_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> Result<Response, WebError> {
    let now = Utc::now();
    match state.builder.build(&form, now) {
        Ok(request) => {
            let target = request.target();
            info!("Search for {:?} submitted", request.query.location);
            Ok(Redirect::to(&target).into_response())
        }
        Err(errors) => {
            debug!("Search form rejected: {}", errors);
            let html = state.pages.form(&form, Some(&errors), now.date_naive())?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
    }
}

async fn results_handler(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Html<String>, WebError> {
    let parsed = parse(query.as_deref().unwrap_or_default());
    let display = SearchDisplay::render(&parsed, state.date_style);
    let html = state.pages.results(&display)?;
    Ok(Html(html))
}

async fn css_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], CSS)
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
