//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use donation_types::domain::{CurrencyCode, OrderId};
use donation_types::dto::{CaptureOrderRequest, CreateOrderRequest, OrderCreatedResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
async fn health() {}

/// Create an order on the international network
#[utoipa::path(
    post,
    path = "/create-order",
    tag = "orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = OrderCreatedResponse),
        (status = 400, description = "Invalid amount or currency, or processor rejection (diagnostic payload under `details`)"),
        (status = 500, description = "Transport failure reaching the processor")
    )
)]
async fn create_order() {}

/// Create an order on the international network (legacy route name)
#[utoipa::path(
    post,
    path = "/create-paypal-order",
    tag = "orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = OrderCreatedResponse),
        (status = 400, description = "Invalid amount or currency, or processor rejection"),
        (status = 500, description = "Transport failure reaching the processor")
    )
)]
async fn create_paypal_order() {}

/// Create an order on the domestic gateway
#[utoipa::path(
    post,
    path = "/create-razorpay-order",
    tag = "orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "The gateway's order object, relayed unmodified"),
        (status = 400, description = "Gateway not configured, invalid amount, or gateway rejection"),
        (status = 500, description = "Transport failure reaching the gateway")
    )
)]
async fn create_razorpay_order() {}

/// Capture a previously created order
#[utoipa::path(
    post,
    path = "/capture-order",
    tag = "orders",
    request_body = CaptureOrderRequest,
    responses(
        (status = 200, description = "The processor's capture response, relayed unmodified whether it reports success or failure"),
        (status = 500, description = "Transport failure reaching the processor")
    )
)]
async fn capture_order() {}

/// OpenAPI documentation for the donation relay API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Donation Relay API",
        version = "1.0.0",
        description = "A thin relay that opens and captures payment-processor orders on behalf of a donation page, so processor credentials never reach the browser. Stateless: every request stands alone.",
        license(name = "MIT"),
    ),
    paths(
        health,
        create_order,
        create_paypal_order,
        create_razorpay_order,
        capture_order,
    ),
    components(
        schemas(
            CreateOrderRequest,
            CaptureOrderRequest,
            OrderCreatedResponse,
            CurrencyCode,
            OrderId,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "orders", description = "Order creation and capture relay"),
    )
)]
pub struct ApiDoc;
