//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;

use donation_gateways::{PaypalConfig, RazorpayConfig};

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub paypal: PaypalConfig,
    /// Present only when both gateway keys were provided.
    pub razorpay: Option<RazorpayConfig>,
    pub static_dir: PathBuf,
    pub static_index_fallback: bool,
    pub require_capture_order_id: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let client_id = env::var("PAYPAL_CLIENT_ID")
            .map_err(|_| anyhow::anyhow!("PAYPAL_CLIENT_ID environment variable is required"))?;
        let secret = env::var("PAYPAL_SECRET")
            .map_err(|_| anyhow::anyhow!("PAYPAL_SECRET environment variable is required"))?;
        let paypal = PaypalConfig {
            client_id,
            secret,
            base_url: env::var("PAYPAL_BASE_URL")
                .unwrap_or_else(|_| PaypalConfig::LIVE_BASE_URL.to_string()),
        };

        let razorpay = match (env::var("RAZORPAY_KEY_ID"), env::var("RAZORPAY_SECRET")) {
            (Ok(key_id), Ok(key_secret)) => Some(RazorpayConfig {
                key_id,
                key_secret,
                base_url: env::var("RAZORPAY_BASE_URL")
                    .unwrap_or_else(|_| RazorpayConfig::LIVE_BASE_URL.to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            port,
            paypal,
            razorpay,
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "public".to_string())
                .into(),
            static_index_fallback: env_flag("STATIC_INDEX_FALLBACK"),
            require_capture_order_id: env_flag("CAPTURE_REQUIRE_ORDER_ID"),
        })
    }
}

fn env_flag(name: &str) -> bool {
    matches!(
        env::var(name).as_deref(),
        Ok("1") | Ok("true") | Ok("yes")
    )
}
