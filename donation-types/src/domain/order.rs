//! Processor-side order identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Processor-assigned order identifier.
///
/// Opaque: the relay never inspects it, it only carries it from the
/// create-order response to the client and back in the capture request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Result of a successful create-order call.
///
/// Carries both the extracted identifier and the processor's raw response:
/// the international route answers `{ orderID }`, the domestic route relays
/// the full order object unmodified.
#[derive(Debug, Clone)]
pub struct CreatedOrder {
    pub id: OrderId,
    pub raw: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_is_opaque_passthrough() {
        let id = OrderId::new("5O190127TN364715T");
        assert_eq!(id.as_str(), "5O190127TN364715T");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"5O190127TN364715T\"");
    }

    #[test]
    fn test_order_id_deserializes_from_bare_string() {
        let id: OrderId = serde_json::from_str("\"order_abc\"").unwrap();
        assert_eq!(id, OrderId::new("order_abc"));
    }
}
