//! Order processor port.
//!
//! This is the primary port in the hexagonal architecture. Every payment
//! processor the relay talks to (the international network, the domestic
//! gateway) is an adapter implementing this trait, which is what lets one
//! relay service replace the per-processor route duplication upstream.

use crate::domain::{Amount, CreatedOrder, CurrencyCode};
use crate::error::ProcessorError;

/// A payment processor that owns order lifecycle and settlement.
#[async_trait::async_trait]
pub trait OrderProcessor: Send + Sync + 'static {
    /// Currency assumed when the request does not carry one.
    fn default_currency(&self) -> CurrencyCode;

    /// Opens an order for the given amount and returns its identifier
    /// together with the processor's raw response.
    async fn create_order(
        &self,
        amount: &Amount,
        currency: CurrencyCode,
    ) -> Result<CreatedOrder, ProcessorError>;

    /// Finalizes a previously created order.
    ///
    /// The returned JSON is the processor's response body verbatim, whether
    /// it reports success or failure; callers relay it without interpreting
    /// capture status.
    async fn capture_order(&self, order_id: &str) -> Result<serde_json::Value, ProcessorError>;
}
