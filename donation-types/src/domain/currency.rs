//! Currencies accepted by the relay.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Currencies the relay accepts from the donation page.
///
/// Each processor owns a default: the international network quotes USD,
/// the domestic gateway only deals in INR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    USD,
    INR,
}

impl CurrencyCode {
    /// Returns the ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            CurrencyCode::USD => "USD",
            CurrencyCode::INR => "INR",
        }
    }

    /// Minor units per major unit (cents, paise).
    pub fn minor_units_per_major(&self) -> i64 {
        match self {
            CurrencyCode::USD | CurrencyCode::INR => 100,
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(CurrencyCode::USD),
            "INR" => Ok(CurrencyCode::INR),
            other => Err(DomainError::UnsupportedCurrency(other.to_string())),
        }
    }
}
