//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the application layer and serves the
//! donation page's static assets.

mod handlers;
mod server;
mod static_site;

pub use server::HttpServer;
pub use static_site::StaticSite;
