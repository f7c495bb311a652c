//! # Donation Types
//!
//! Domain types and port traits for the donation payment relay.
//! This crate has ZERO external IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Amount, CurrencyCode, OrderId)
//! - `ports/` - Trait definitions that processor adapters must implement
//! - `dto/` - Data Transfer Objects for the HTTP boundary
//! - `error/` - Domain, processor and relay error tiers

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Amount, CreatedOrder, CurrencyCode, OrderId};
pub use dto::*;
pub use error::{DomainError, ProcessorError, RelayError};
pub use ports::OrderProcessor;
