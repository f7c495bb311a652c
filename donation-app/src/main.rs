//! # Donation Relay Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the processor adapters
//! - Create the relay service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use donation_gateways::{PaypalGateway, RazorpayGateway};
use donation_hex::{
    RelayOptions, RelayService,
    inbound::{HttpServer, StaticSite},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,donation_app=debug,donation_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting donation relay on port {}", config.port);

    // Build the processor adapters
    let paypal = PaypalGateway::new(config.paypal);
    let razorpay: Option<RazorpayGateway> = match config.razorpay {
        Some(cfg) => {
            tracing::info!("Razorpay initialized");
            Some(RazorpayGateway::new(cfg))
        }
        None => {
            tracing::warn!("Razorpay keys not found, skipping Razorpay setup");
            None
        }
    };

    // Create the relay service with the variant options
    let options = RelayOptions {
        require_capture_order_id: config.require_capture_order_id,
    };
    let service = RelayService::with_options(paypal, razorpay, options);

    // Create and run the HTTP server
    let site = StaticSite::new(config.static_dir, config.static_index_fallback);
    let server = HttpServer::with_static_site(service, site);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
