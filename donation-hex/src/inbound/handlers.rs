//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use donation_types::{CaptureOrderRequest, CreateOrderRequest, OrderProcessor, RelayError};

use crate::RelayService;

/// Application state shared across handlers.
pub struct AppState<P: OrderProcessor, G: OrderProcessor> {
    pub service: RelayService<P, G>,
}

/// Wrapper to implement IntoResponse for RelayError (orphan rule workaround).
pub struct ApiError(pub RelayError);

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self.0 {
            RelayError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            RelayError::Unconfigured(msg) => (StatusCode::BAD_REQUEST, msg, None),
            RelayError::UpstreamRejected { message, details } => {
                (StatusCode::BAD_REQUEST, message, Some(details))
            }
            RelayError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, None),
        };

        let mut body = serde_json::json!({ "error": message });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Create an order on the international network.
///
/// Mounted at both `/create-paypal-order` and its `/create-order` alias.
#[tracing::instrument(skip(state))]
pub async fn create_paypal_order<P: OrderProcessor, G: OrderProcessor>(
    State(state): State<Arc<AppState<P, G>>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.service.create_paypal_order(req).await?;
    Ok(Json(created))
}

/// Create an order on the domestic gateway, relaying the full order object.
#[tracing::instrument(skip(state))]
pub async fn create_razorpay_order<P: OrderProcessor, G: OrderProcessor>(
    State(state): State<Arc<AppState<P, G>>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let order = state.service.create_razorpay_order(req).await?;
    Ok(Json(order))
}

/// Capture a previously created order, relaying the processor's JSON as-is.
#[tracing::instrument(skip(state))]
pub async fn capture_order<P: OrderProcessor, G: OrderProcessor>(
    State(state): State<Arc<AppState<P, G>>>,
    Json(req): Json<CaptureOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let captured = state.service.capture_order(req).await?;
    Ok(Json(captured))
}
