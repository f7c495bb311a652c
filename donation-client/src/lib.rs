//! # Donation Client SDK
//!
//! A typed Rust client for the donation relay API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use donation_types::{CurrencyCode, OrderCreatedResponse, OrderId};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Donation relay API client.
pub struct DonationClient {
    base_url: String,
    http: Client,
}

impl DonationClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the relay is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Creates an order on the international network; returns its identifier.
    pub async fn create_paypal_order(
        &self,
        amount: &str,
        currency: Option<CurrencyCode>,
    ) -> Result<OrderId, ClientError> {
        let body = json!({
            "amount": amount,
            "currency": currency.map(|c| c.code()),
        });
        let created: OrderCreatedResponse = self.post_json("/create-order", &body).await?;
        Ok(created.order_id)
    }

    /// Creates an order on the domestic gateway; returns the full order object.
    pub async fn create_razorpay_order(&self, amount: &str) -> Result<Value, ClientError> {
        self.post_json("/create-razorpay-order", &json!({ "amount": amount }))
            .await
    }

    /// Captures an order; returns the processor's response verbatim.
    pub async fn capture_order(&self, order_id: &str) -> Result<Value, ClientError> {
        self.post_json("/capture-order", &json!({ "orderID": order_id }))
            .await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            Ok(resp.json().await?)
        } else {
            let body: Value = resp.json().await.unwrap_or(Value::Null);
            let message = body
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown error")
                .to_string();
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = DonationClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }
}
