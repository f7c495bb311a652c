//! Donation Relay Application Service
//!
//! Validates client input, drives the processor ports, and maps processor
//! failures onto the relay's error tiers. Contains NO HTTP or transport
//! logic - pure request orchestration.

use donation_types::{
    Amount, CaptureOrderRequest, CreateOrderRequest, CurrencyCode, OrderCreatedResponse,
    OrderProcessor, ProcessorError, RelayError,
};

/// Deployment-level behavior switches, set once at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelayOptions {
    /// Reject capture requests without an order identifier instead of
    /// forwarding them and relaying the processor's complaint.
    pub require_capture_order_id: bool,
}

/// Application service for the donation relay.
///
/// Generic over the two processor ports - the international network `P`
/// (always present) and the domestic gateway `G` (present only when its
/// credentials were configured at startup, hence the `Option`).
pub struct RelayService<P: OrderProcessor, G: OrderProcessor> {
    paypal: P,
    razorpay: Option<G>,
    options: RelayOptions,
}

impl<P: OrderProcessor, G: OrderProcessor> RelayService<P, G> {
    /// Creates a relay service with default options.
    pub fn new(paypal: P, razorpay: Option<G>) -> Self {
        Self::with_options(paypal, razorpay, RelayOptions::default())
    }

    /// Creates a relay service with explicit variant options.
    pub fn with_options(paypal: P, razorpay: Option<G>, options: RelayOptions) -> Self {
        Self {
            paypal,
            razorpay,
            options,
        }
    }

    /// Opens an order on the international network.
    ///
    /// Validation happens before any outbound call; an invalid amount never
    /// reaches the processor.
    pub async fn create_paypal_order(
        &self,
        req: CreateOrderRequest,
    ) -> Result<OrderCreatedResponse, RelayError> {
        let amount = Amount::from_value(req.amount.as_ref())
            .map_err(|_| RelayError::BadRequest("Please provide a valid amount in USD.".into()))?;

        let currency = match &req.currency {
            None => self.paypal.default_currency(),
            Some(code) => code
                .parse::<CurrencyCode>()
                .map_err(|e| RelayError::BadRequest(e.to_string()))?,
        };

        match self.paypal.create_order(&amount, currency).await {
            Ok(created) => Ok(OrderCreatedResponse {
                order_id: created.id,
            }),
            Err(ProcessorError::Rejected { details }) => {
                tracing::error!(%details, "order creation rejected");
                Err(RelayError::UpstreamRejected {
                    message: "Failed to create PayPal order".into(),
                    details,
                })
            }
            Err(err) => {
                tracing::error!(error = %err, "order creation failed");
                Err(RelayError::Internal(
                    "Server error creating PayPal order".into(),
                ))
            }
        }
    }

    /// Finalizes an order on the international network.
    ///
    /// A pure proxy: the processor's capture JSON is relayed verbatim,
    /// whether it reports success or failure.
    pub async fn capture_order(
        &self,
        req: CaptureOrderRequest,
    ) -> Result<serde_json::Value, RelayError> {
        let order_id = req.order_id.unwrap_or_default();
        if self.options.require_capture_order_id && order_id.trim().is_empty() {
            return Err(RelayError::BadRequest(
                "Please provide a valid order ID.".into(),
            ));
        }

        match self.paypal.capture_order(&order_id).await {
            Ok(body) => Ok(body),
            Err(err) => {
                tracing::error!(error = %err, order_id, "order capture failed");
                Err(RelayError::Internal(
                    "Server error capturing PayPal order".into(),
                ))
            }
        }
    }

    /// Opens an order on the domestic gateway, relaying the full order
    /// object back to the caller.
    pub async fn create_razorpay_order(
        &self,
        req: CreateOrderRequest,
    ) -> Result<serde_json::Value, RelayError> {
        let Some(gateway) = &self.razorpay else {
            return Err(RelayError::Unconfigured(
                "Razorpay not configured yet. Please add keys.".into(),
            ));
        };

        let amount = Amount::from_value(req.amount.as_ref())
            .map_err(|_| RelayError::BadRequest("Please provide a valid amount in INR.".into()))?;

        match gateway.create_order(&amount, gateway.default_currency()).await {
            Ok(created) => Ok(created.raw),
            Err(ProcessorError::Rejected { details }) => {
                tracing::error!(%details, "gateway order creation rejected");
                Err(RelayError::UpstreamRejected {
                    message: "Failed to create Razorpay order".into(),
                    details,
                })
            }
            Err(err) => {
                tracing::error!(error = %err, "gateway order creation failed");
                Err(RelayError::Internal("Razorpay order creation failed".into()))
            }
        }
    }

    /// Whether the domestic gateway was configured at startup.
    pub fn razorpay_configured(&self) -> bool {
        self.razorpay.is_some()
    }

    /// Returns a reference to the international processor.
    pub fn paypal(&self) -> &P {
        &self.paypal
    }

    /// Returns the domestic gateway when configured.
    pub fn razorpay(&self) -> Option<&G> {
        self.razorpay.as_ref()
    }
}
