//! Price shape returned by the hosted commerce API.
//!
//! The API formats prices server-side and returns the raw decimal amount
//! alongside several pre-formatted display strings. Display code should use
//! the formatted strings verbatim; the raw amount exists for comparisons,
//! never for recomputing totals (the API owns all arithmetic).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price as returned by the commerce API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Price {
    /// Raw decimal amount in the merchant's currency (e.g., `49.95`).
    pub raw: Decimal,
    /// Amount without symbol (e.g., `"49.95"`).
    pub formatted: String,
    /// Amount with currency symbol (e.g., `"$49.95"`).
    pub formatted_with_symbol: String,
    /// Amount with currency code (e.g., `"49.95 USD"`).
    pub formatted_with_code: String,
}

impl Price {
    /// Create a price from its raw amount and formatted strings.
    #[must_use]
    pub fn new(
        raw: Decimal,
        formatted: impl Into<String>,
        formatted_with_symbol: impl Into<String>,
        formatted_with_code: impl Into<String>,
    ) -> Self {
        Self {
            raw,
            formatted: formatted.into(),
            formatted_with_symbol: formatted_with_symbol.into(),
            formatted_with_code: formatted_with_code.into(),
        }
    }

    /// The server-formatted display string (with currency symbol).
    #[must_use]
    pub fn display(&self) -> &str {
        &self.formatted_with_symbol
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_api_shape() {
        let json = r#"{
            "raw": 49.95,
            "formatted": "49.95",
            "formatted_with_symbol": "$49.95",
            "formatted_with_code": "49.95 USD"
        }"#;

        let price: Price = serde_json::from_str(json).unwrap();
        assert_eq!(price.raw, Decimal::new(4995, 2));
        assert_eq!(price.display(), "$49.95");
        assert_eq!(price.formatted_with_code, "49.95 USD");
    }

    #[test]
    fn test_default_is_zero() {
        let price = Price::default();
        assert_eq!(price.raw, Decimal::ZERO);
        assert!(price.formatted_with_symbol.is_empty());
    }

    #[test]
    fn test_new() {
        let price = Price::new(Decimal::new(1000, 2), "10.00", "$10.00", "10.00 USD");
        assert_eq!(price.formatted, "10.00");
        assert_eq!(price.display(), "$10.00");
    }
}
