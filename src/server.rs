//! HTTP surface: router, handlers, and shared state.
//!
//! Each request is handled independently; the only cross-request state is
//! the immutable boot-time [`AppState`], so no locking is needed anywhere.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Uri, header};
use axum::response::Html;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::error::ServerError;
use crate::highlight::Highlighter;
use crate::markdown::MarkdownRenderer;
use crate::pages;
use crate::readme::ReadmeFetcher;
use crate::registry::PackageRegistry;
use crate::resolver::ResolvedImport;

/// Application state shared across all handlers.
///
/// Built once at startup from the site configuration and read-only for the
/// process lifetime.
pub(crate) struct AppState {
    /// Boot-time package registry.
    pub(crate) registry: PackageRegistry,
    /// Avatar image URL for the index page.
    pub(crate) avatar: String,
    /// Descriptive text for the index page.
    pub(crate) description: String,
    /// Process-wide syntax highlighter (syntax set loaded once).
    pub(crate) highlighter: Highlighter,
    /// HTTP client for README retrieval.
    pub(crate) fetcher: ReadmeFetcher,
}

/// Creates the application router.
///
/// # Arguments
///
/// * `site`: Loaded and validated site configuration
pub fn create_router(site: SiteConfig) -> Router {
    let avatar = site.avatar.clone();
    let description = site.description.clone();
    let registry = site.into_registry();

    let state = Arc::new(AppState {
        registry,
        avatar,
        description,
        highlighter: Highlighter::new(),
        fetcher: ReadmeFetcher::new(),
    });

    Router::new()
        .route("/", get(index_page))
        .route("/{pkg}", get(package_page))
        .route("/{pkg}/{*rest}", get(package_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handles `GET /` with the index listing.
async fn index_page(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Html<String> {
    let host = request_host(&headers);

    Html(
        pages::index::generate(host, &state.avatar, &state.description, &state.registry)
            .into_string(),
    )
}

/// Handles `GET /{pkg}` and `GET /{pkg}/{*rest}` with the package page.
///
/// Resolution and README retrieval run per request: the metadata tags are
/// derived from the registry, while the README fetch is best effort and
/// collapses to an empty body on failure.
async fn package_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Html<String>, ServerError> {
    let host = request_host(&headers).to_string();
    let path = uri.path().to_string();

    let resolved = ResolvedImport::resolve(&state.registry, &host, &path)?;

    let pkg = path.trim_start_matches('/').split('/').next().unwrap_or_default();
    let readme_url = state
        .registry
        .find(pkg)
        .and_then(|package| package.readme.clone());

    let readme_html = match readme_url {
        Some(url) => {
            let state = Arc::clone(&state);
            tokio::task::spawn_blocking(move || fetch_and_render(&state, &url))
                .await
                .map_err(|e| ServerError::Render(anyhow::anyhow!(e)))?
                .map_err(ServerError::Render)?
        }
        None => None,
    };

    Ok(Html(
        pages::package::generate(&resolved, readme_html.as_deref()).into_string(),
    ))
}

/// Fetches and renders a README document.
///
/// Runs on the blocking pool: the fetch is synchronous I/O and rendering a
/// large document is CPU-bound. A failed fetch yields `Ok(None)`.
fn fetch_and_render(state: &AppState, url: &str) -> Result<Option<String>, anyhow::Error> {
    let Some(content) = state.fetcher.fetch(url) else {
        return Ok(None);
    };

    let renderer = MarkdownRenderer::new(&state.highlighter);
    renderer.render(&content).map(Some)
}

/// Extracts the request hostname, without port.
fn request_host(headers: &HeaderMap) -> &str {
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(host_only)
        .unwrap_or("localhost")
}

/// Strips the port from a Host header value.
fn host_only(value: &str) -> &str {
    if let Some(bracketed) = value.strip_prefix('[') {
        bracketed.split(']').next().unwrap_or(value)
    } else {
        value.split(':').next().unwrap_or(value)
    }
}
