//! Static asset serving for the donation page.
//!
//! Resolution order for a request path: exact file (with directory index
//! resolution), then the `.html`-extension passthrough (`/about` serves
//! `about.html`), then the greeting at `/`, then the optional index-page
//! fallback for single-page deployments.

use std::path::PathBuf;

use axum::{
    body::Body,
    http::{Request, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tower::util::ServiceExt;
use tower_http::services::ServeDir;

const GREETING: &str =
    "🎵 Deepdarshan backend (PayPal + Razorpay with custom amounts) is running!";

/// Static site configuration and request resolution.
#[derive(Debug, Clone)]
pub struct StaticSite {
    dir: PathBuf,
    index_fallback: bool,
}

impl Default for StaticSite {
    fn default() -> Self {
        Self::new("public", false)
    }
}

impl StaticSite {
    pub fn new(dir: impl Into<PathBuf>, index_fallback: bool) -> Self {
        Self {
            dir: dir.into(),
            index_fallback,
        }
    }

    /// Resolves an unmatched request against the asset directory.
    pub async fn respond(&self, uri: Uri) -> Response {
        let path = uri.path();

        if let Some(found) = self.try_path(path).await {
            return found;
        }

        // HTML-extension passthrough for extensionless routes.
        if path != "/" && std::path::Path::new(path).extension().is_none() {
            let candidate = format!("{}.html", path.trim_end_matches('/'));
            if let Some(found) = self.try_path(&candidate).await {
                return found;
            }
        }

        if path == "/" {
            return (StatusCode::OK, GREETING).into_response();
        }

        if self.index_fallback {
            if let Some(found) = self.try_path("/index.html").await {
                return found;
            }
        }

        (StatusCode::NOT_FOUND, "Not Found").into_response()
    }

    /// Serves a single path from the asset directory, or `None` when it does
    /// not resolve to a file. Traversal is rejected by the file service.
    async fn try_path(&self, path: &str) -> Option<Response> {
        let request = Request::builder().uri(path).body(Body::empty()).ok()?;
        let response = ServeDir::new(&self.dir)
            .append_index_html_on_directories(true)
            .oneshot(request)
            .await
            .ok()?;
        if response.status() == StatusCode::NOT_FOUND {
            return None;
        }
        Some(response.map(Body::new))
    }
}
