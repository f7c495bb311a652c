//! Domestic card/UPI gateway adapter.

use async_trait::async_trait;
use serde::Serialize;

use donation_types::{Amount, CreatedOrder, CurrencyCode, OrderId, OrderProcessor, ProcessorError};

use crate::{DONATION_DESCRIPTION, http_error};

const RECEIPT_PREFIX: &str = "deepdarshan_donation_";

/// Connection settings for the domestic gateway.
#[derive(Debug, Clone)]
pub struct RazorpayConfig {
    pub key_id: String,
    pub key_secret: String,
    pub base_url: String,
}

impl RazorpayConfig {
    pub const LIVE_BASE_URL: &'static str = "https://api.razorpay.com";

    pub fn live(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
            base_url: Self::LIVE_BASE_URL.to_string(),
        }
    }
}

/// Adapter for the domestic gateway's orders REST API.
///
/// Amounts go out in minor units (paise); each order carries a timestamped
/// receipt identifier and the fixed donation note.
#[derive(Debug, Clone)]
pub struct RazorpayGateway {
    client: reqwest::Client,
    config: RazorpayConfig,
}

#[derive(Debug, Serialize)]
struct OrderPayload<'a> {
    amount: i64,
    currency: &'a str,
    receipt: String,
    notes: OrderNotes,
}

#[derive(Debug, Serialize)]
struct OrderNotes {
    purpose: &'static str,
}

impl RazorpayGateway {
    pub fn new(config: RazorpayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn receipt() -> String {
        format!(
            "{RECEIPT_PREFIX}{}",
            chrono::Utc::now().timestamp_millis()
        )
    }
}

#[async_trait]
impl OrderProcessor for RazorpayGateway {
    fn default_currency(&self) -> CurrencyCode {
        CurrencyCode::INR
    }

    async fn create_order(
        &self,
        amount: &Amount,
        currency: CurrencyCode,
    ) -> Result<CreatedOrder, ProcessorError> {
        let payload = OrderPayload {
            amount: amount.minor_units(),
            currency: currency.code(),
            receipt: Self::receipt(),
            notes: OrderNotes {
                purpose: DONATION_DESCRIPTION,
            },
        };

        tracing::debug!(paise = payload.amount, receipt = %payload.receipt, "creating gateway order");
        let body: serde_json::Value = self
            .client
            .post(format!("{}/v1/orders", self.config.base_url))
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&payload)
            .send()
            .await
            .map_err(http_error)?
            .json()
            .await
            .map_err(http_error)?;

        match body.get("id").and_then(|v| v.as_str()).map(str::to_owned) {
            Some(id) => Ok(CreatedOrder {
                id: OrderId::new(id),
                raw: body,
            }),
            None => Err(ProcessorError::Rejected { details: body }),
        }
    }

    async fn capture_order(&self, _order_id: &str) -> Result<serde_json::Value, ProcessorError> {
        // Orders on this gateway settle through its own checkout flow; there
        // is no order-capture endpoint to relay.
        Err(ProcessorError::Unsupported("order capture"))
    }
}
