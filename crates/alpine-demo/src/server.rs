//! HTTP routes for the demo.

use crate::config::DemoConfig;
use crate::error::{DemoError, DemoResult};
use crate::page;
use alpine_attrs::{javascript, ASSET_PATH, MIME_TYPE};
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tracing::{debug, info};

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    cache_control: Arc<str>,
}

impl AppState {
    /// Build handler state from the loaded config.
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            cache_control: config.cache_control().into(),
        }
    }
}

/// Build the demo router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route(ASSET_PATH, get(alpine_js))
        .with_state(state)
}

/// Bind the configured address and serve until the process exits.
pub async fn serve(config: DemoConfig) -> DemoResult<()> {
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| DemoError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(addr = %addr, "Alpine demo server listening");
    info!(
        path = ASSET_PATH,
        bytes = javascript().len(),
        "Serving embedded Alpine.js"
    );

    axum::serve(listener, router(AppState::new(&config)))
        .await
        .map_err(DemoError::Serve)
}

async fn index() -> Html<String> {
    debug!("GET /");
    Html(page::todo_page())
}

async fn alpine_js(State(state): State<AppState>) -> impl IntoResponse {
    debug!(path = ASSET_PATH, "GET script");
    (
        [
            (header::CONTENT_TYPE, MIME_TYPE.to_string()),
            (header::CACHE_CONTROL, state.cache_control.to_string()),
        ],
        javascript(),
    )
}
