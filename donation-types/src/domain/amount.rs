//! Donation amount: a positive decimal with its lexical form preserved.

use std::fmt;

use crate::error::DomainError;

/// A validated donation amount.
///
/// The HTTP boundary accepts the amount as either a JSON number or a numeric
/// string. The decimal-string processor receives whatever form the caller
/// sent, so the lexical text is kept alongside the parsed value: `"5.00"`
/// stays `"5.00"` on the wire, while the number `5` renders as `"5"`.
///
/// Minor-unit conversion rounds `value * 100` once, on the parsed value,
/// which makes it deterministic regardless of how the amount was spelled.
#[derive(Debug, Clone, PartialEq)]
pub struct Amount {
    value: f64,
    text: String,
}

impl Amount {
    /// Validates a raw request field. `None` means the field was absent.
    ///
    /// Accepted inputs are finite, strictly positive JSON numbers or strings
    /// that parse to one. Everything else is a domain error; the service
    /// layer turns these into the per-route client message.
    pub fn from_value(raw: Option<&serde_json::Value>) -> Result<Self, DomainError> {
        let raw = raw.ok_or(DomainError::MissingAmount)?;
        match raw {
            serde_json::Value::Number(n) => {
                let value = n.as_f64().ok_or(DomainError::AmountNotNumeric)?;
                Self::new(value, render_number(value))
            }
            serde_json::Value::String(s) => {
                let text = s.trim();
                let value: f64 = text.parse().map_err(|_| DomainError::AmountNotNumeric)?;
                Self::new(value, text.to_string())
            }
            _ => Err(DomainError::AmountNotNumeric),
        }
    }

    fn new(value: f64, text: String) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::AmountNotPositive);
        }
        if value <= 0.0 {
            return Err(DomainError::AmountNotPositive);
        }
        Ok(Self { value, text })
    }

    /// The decimal string forwarded to processors that take major units.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The amount in minor units (cents, paise): `round(value * 100)`.
    pub fn minor_units(&self) -> i64 {
        (self.value * 100.0).round() as i64
    }

    /// The parsed numeric value.
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Renders a JSON number for the wire: integral values without a
/// fractional part.
fn render_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
