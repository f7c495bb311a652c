//! Integration tests for the relay's HTTP surface.
//!
//! These drive the full Axum router with stub processors and verify the
//! wire-level behavior: status codes, error body shape, verbatim relaying.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use async_trait::async_trait;
use donation_hex::{RelayService, inbound::HttpServer};
use donation_types::{
    Amount, CreatedOrder, CurrencyCode, OrderId, OrderProcessor, ProcessorError,
};

/// Stub processor with canned responses.
struct StubProcessor {
    currency: CurrencyCode,
    create_result: Result<&'static str, Value>,
    capture_body: Value,
}

impl StubProcessor {
    fn ok() -> Self {
        Self {
            currency: CurrencyCode::USD,
            create_result: Ok("TEST-ORDER"),
            capture_body: json!({"id": "TEST-ORDER", "status": "COMPLETED"}),
        }
    }

    fn rejecting(details: Value) -> Self {
        Self {
            create_result: Err(details),
            ..Self::ok()
        }
    }
}

#[async_trait]
impl OrderProcessor for StubProcessor {
    fn default_currency(&self) -> CurrencyCode {
        self.currency
    }

    async fn create_order(
        &self,
        amount: &Amount,
        currency: CurrencyCode,
    ) -> Result<CreatedOrder, ProcessorError> {
        match &self.create_result {
            Ok(id) => Ok(CreatedOrder {
                id: OrderId::new(*id),
                raw: json!({
                    "id": id,
                    "status": "created",
                    "amount": amount.minor_units(),
                    "currency": currency.code(),
                }),
            }),
            Err(details) => Err(ProcessorError::Rejected {
                details: details.clone(),
            }),
        }
    }

    async fn capture_order(&self, _order_id: &str) -> Result<Value, ProcessorError> {
        Ok(self.capture_body.clone())
    }
}

fn router_with(paypal: StubProcessor, razorpay: Option<StubProcessor>) -> axum::Router {
    HttpServer::new(RelayService::new(paypal, razorpay)).router()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_order_happy_path() {
    let app = router_with(StubProcessor::ok(), None);

    let response = app
        .oneshot(post_json(
            "/create-order",
            json!({"amount": "5.00", "currency": "USD"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"orderID": "TEST-ORDER"}));
}

#[tokio::test]
async fn test_create_paypal_order_alias_behaves_identically() {
    for uri in ["/create-order", "/create-paypal-order"] {
        let app = router_with(StubProcessor::ok(), None);
        let response = app
            .oneshot(post_json(uri, json!({"amount": 5})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "route {uri}");
        assert_eq!(body_json(response).await, json!({"orderID": "TEST-ORDER"}));
    }
}

#[tokio::test]
async fn test_invalid_amounts_are_400_with_error_field() {
    for bad in [
        json!({}),
        json!({"amount": "ten"}),
        json!({"amount": 0}),
        json!({"amount": -2}),
    ] {
        let app = router_with(StubProcessor::ok(), None);
        let response = app.oneshot(post_json("/create-order", bad)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Please provide a valid amount in USD.");
    }
}

#[tokio::test]
async fn test_processor_rejection_is_400_with_details() {
    let details = json!({"name": "UNPROCESSABLE_ENTITY", "debug_id": "abc123"});
    let app = router_with(StubProcessor::rejecting(details.clone()), None);

    let response = app
        .oneshot(post_json("/create-order", json!({"amount": "5.00"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Failed to create PayPal order");
    assert_eq!(body["details"], details);
}

#[tokio::test]
async fn test_capture_relays_processor_json_exactly() {
    // Failure payloads flow through with a 200, same as success payloads.
    let capture_body = json!({
        "name": "RESOURCE_NOT_FOUND",
        "details": [{"issue": "INVALID_RESOURCE_ID"}],
    });
    let app = router_with(
        StubProcessor {
            capture_body: capture_body.clone(),
            ..StubProcessor::ok()
        },
        None,
    );

    let response = app
        .oneshot(post_json("/capture-order", json!({"orderID": "nope"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, capture_body);
}

#[tokio::test]
async fn test_razorpay_route_unconfigured_is_fixed_400() {
    let app = router_with(StubProcessor::ok(), None);

    let response = app
        .oneshot(post_json("/create-razorpay-order", json!({"amount": 100})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Razorpay not configured yet. Please add keys.");
}

#[tokio::test]
async fn test_razorpay_route_relays_full_order_object() {
    let razorpay = StubProcessor {
        currency: CurrencyCode::INR,
        ..StubProcessor::ok()
    };
    let app = router_with(StubProcessor::ok(), Some(razorpay));

    let response = app
        .oneshot(post_json("/create-razorpay-order", json!({"amount": "250"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], "TEST-ORDER");
    assert_eq!(body["amount"], 25000);
    assert_eq!(body["currency"], "INR");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = router_with(StubProcessor::ok(), None);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_root_greets_without_a_static_site() {
    let app = router_with(StubProcessor::ok(), None);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("Deepdarshan backend"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = router_with(StubProcessor::ok(), None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/definitely-not-here")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = router_with(StubProcessor::ok(), None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"]["/create-order"].is_object());
    assert!(body["paths"]["/capture-order"].is_object());
}
