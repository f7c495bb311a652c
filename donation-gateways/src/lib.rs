//! # Donation Gateways
//!
//! Outbound adapters for the payment processors the relay fronts:
//!
//! - [`PaypalGateway`] - the international payment network. Every call
//!   exchanges the client credentials for a fresh bearer token first; the
//!   token is never cached.
//! - [`RazorpayGateway`] - the domestic card/UPI gateway. Orders only; Basic
//!   auth on every request.
//!
//! Both implement the [`donation_types::OrderProcessor`] port. Requests are
//! typed serde structs; responses that must be relayed verbatim stay
//! `serde_json::Value`.

mod paypal;
mod razorpay;

pub use paypal::{PaypalConfig, PaypalGateway};
pub use razorpay::{RazorpayConfig, RazorpayGateway};

use donation_types::ProcessorError;

/// Fixed descriptive metadata attached to every order.
pub const DONATION_DESCRIPTION: &str = "Donation to Deepdarshan Sangeetha Vidhyalayam";

/// Splits reqwest failures into the processor error tiers: body-decode
/// failures are `Decode`, everything else is `Transport`.
pub(crate) fn http_error(err: reqwest::Error) -> ProcessorError {
    if err.is_decode() {
        ProcessorError::Decode(err.to_string())
    } else {
        ProcessorError::Transport(err.to_string())
    }
}
