//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use donation_types::OrderProcessor;

use super::handlers::{self, AppState};
use super::static_site::StaticSite;
use crate::RelayService;
use crate::openapi::ApiDoc;

/// HTTP Server for the donation relay.
pub struct HttpServer<P: OrderProcessor, G: OrderProcessor> {
    state: Arc<AppState<P, G>>,
    site: StaticSite,
}

impl<P: OrderProcessor, G: OrderProcessor> HttpServer<P, G> {
    /// Creates a new HTTP server with the given service and the default
    /// static site (the `public/` directory, no index fallback).
    pub fn new(service: RelayService<P, G>) -> Self {
        Self::with_static_site(service, StaticSite::default())
    }

    /// Creates a new HTTP server with an explicit static site setup.
    pub fn with_static_site(service: RelayService<P, G>, site: StaticSite) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            site,
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        let site = self.site.clone();

        Router::new()
            .route("/health", get(handlers::health))
            .route("/create-order", post(handlers::create_paypal_order::<P, G>))
            .route(
                "/create-paypal-order",
                post(handlers::create_paypal_order::<P, G>),
            )
            .route(
                "/create-razorpay-order",
                post(handlers::create_razorpay_order::<P, G>),
            )
            .route("/capture-order", post(handlers::capture_order::<P, G>))
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .fallback(move |uri: Uri| {
                let site = site.clone();
                async move { site.respond(uri).await }
            })
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
