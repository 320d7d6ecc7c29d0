//! Request routing
//!
//! | Path | Response |
//! |---|---|
//! | `/` | home listing |
//! | `/favicon.ico`, `/favicon.png` | embedded icon, or 204 |
//! | `/{country}` | comparison page, or 404 not-found page |
//!
//! Anything else (e.g. paths with more than one segment) gets the
//! not-found page for the full decoded path. Path segments are decoded
//! lossily, so invalid UTF-8 is a miss rather than a rejection.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use bytes::Bytes;
use cali_core::{Dataset, NameIndex};
use percent_encoding::percent_decode_str;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::favicon::favicon_png;
use crate::render::{render_comparison, render_home, render_not_found};
use crate::site::SiteMode;

/// Shared, read-only state for all request handlers
#[derive(Debug)]
pub struct AppState {
    dataset: Dataset,
    index: NameIndex,
    favicon: Option<Bytes>,
    smaller_host_marker: String,
}

impl AppState {
    /// Build the name index and decode static assets
    pub fn new(dataset: Dataset, smaller_host_marker: impl Into<String>) -> Self {
        let index = NameIndex::from_dataset(&dataset);
        info!(
            countries = dataset.len(),
            keys = index.len(),
            aliases = index.aliases_resolved(),
            generated = %dataset.generated(),
            "Dataset ready"
        );
        Self {
            dataset,
            index,
            favicon: favicon_png(),
            smaller_host_marker: smaller_host_marker.into(),
        }
    }

    /// The loaded dataset
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The name index over the dataset
    pub fn index(&self) -> &NameIndex {
        &self.index
    }

    fn site_mode(&self, headers: &HeaderMap) -> SiteMode {
        headers
            .get(header::HOST)
            .and_then(|host| host.to_str().ok())
            .map(|host| SiteMode::from_host(host, &self.smaller_host_marker))
            .unwrap_or_default()
    }

    fn country_page(&self, query: &str, mode: SiteMode) -> (StatusCode, Html<String>) {
        match self.index.lookup(query) {
            Some(country) => {
                debug!(query, country = %country.name, "Country matched");
                (
                    StatusCode::OK,
                    Html(render_comparison(country, self.dataset.reference(), mode)),
                )
            }
            None => {
                debug!(query, "No country matched");
                (StatusCode::NOT_FOUND, Html(render_not_found(query, mode)))
            }
        }
    }
}

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/favicon.ico", get(favicon))
        .route("/favicon.png", get(favicon))
        .route("/{country}", get(country))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Html<String> {
    Html(render_home(&state.dataset, state.site_mode(&headers)))
}

async fn favicon(State(state): State<Arc<AppState>>) -> Response {
    match &state.favicon {
        Some(icon) => (
            [
                (header::CONTENT_TYPE, "image/png"),
                (header::CACHE_CONTROL, "public, max-age=86400"),
            ],
            icon.clone(),
        )
            .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn country(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> (StatusCode, Html<String>) {
    state.country_page(&query_from_path(&uri), state.site_mode(&headers))
}

async fn fallback(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> (StatusCode, Html<String>) {
    state.country_page(&query_from_path(&uri), state.site_mode(&headers))
}

/// Percent-decoded request path without its leading `/`
fn query_from_path(uri: &Uri) -> String {
    let decoded = percent_decode_str(uri.path()).decode_utf8_lossy();
    decoded.strip_prefix('/').unwrap_or(&decoded).to_string()
}
