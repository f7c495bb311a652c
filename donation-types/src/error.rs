//! Error tiers for the donation relay.

/// Domain-level errors (request validation failures).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Amount is missing")]
    MissingAmount,

    #[error("Amount is not a number")]
    AmountNotNumeric,

    #[error("Amount must be a positive, finite number")]
    AmountNotPositive,

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("Order ID is missing")]
    MissingOrderId,
}

/// Processor-level errors (outbound call failures).
///
/// Kept free of HTTP-client types so this crate stays IO-independent;
/// adapters stringify their transport errors.
#[derive(Debug, thiserror::Error)]
pub enum ProcessorError {
    /// The processor answered but the response carries no order identifier.
    /// The raw diagnostic payload is preserved for the client.
    #[error("processor rejected the request")]
    Rejected { details: serde_json::Value },

    /// Network or transport failure before a response body was read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The processor answered with something that is not JSON.
    #[error("response decode error: {0}")]
    Decode(String),

    /// The processor does not offer this operation.
    #[error("{0} is not supported by this processor")]
    Unsupported(&'static str),
}

/// Relay-level errors (for HTTP responses).
///
/// Maps onto the three-tier taxonomy: client input errors and upstream
/// diagnostics are 400s, transport and unexpected failures are 500s.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("{0}")]
    BadRequest(String),

    /// The processor reported failure; its raw payload rides along.
    #[error("{message}")]
    UpstreamRejected {
        message: String,
        details: serde_json::Value,
    },

    /// A route whose processor was not configured at startup.
    #[error("{0}")]
    Unconfigured(String),

    #[error("{0}")]
    Internal(String),
}
