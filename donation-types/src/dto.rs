//! Data Transfer Objects for the relay's HTTP boundary.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::OrderId;

/// Body of the create-order routes.
///
/// `amount` stays a raw JSON value here: the donation page sends it as a
/// number or a string depending on the form widget, and validation (with the
/// sanctioned client message) belongs to the service layer, not to serde.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    /// Donation amount as a number or numeric string
    #[schema(value_type = Option<Object>, example = "5.00")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<serde_json::Value>,
    /// Optional currency tag; defaults to the processor's currency
    #[schema(example = "USD")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Body of the capture route.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CaptureOrderRequest {
    /// Identifier returned by a previous create-order call
    #[serde(rename = "orderID", default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "5O190127TN364715T")]
    pub order_id: Option<String>,
}

/// Response of the international create-order routes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderCreatedResponse {
    /// Processor-assigned order identifier
    #[serde(rename = "orderID")]
    pub order_id: OrderId,
}
