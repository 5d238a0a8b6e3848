//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::resolver::ResolveError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Import path resolution failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// README markdown could not be rendered.
    #[error("Render error: {0}")]
    Render(anyhow::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Resolve(ResolveError::UnknownPackage) => StatusCode::NOT_FOUND,
            Self::Render(e) => {
                error!(error = %e, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
