use serde::{Deserialize, Serialize};

/// Point-in-time conversion factor between two currencies.
///
/// Only valid for the instant it was fetched; nothing caches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub rate: f64,
    pub from: String,
    pub to: String,
}

impl ExchangeRate {
    /// `"1 USD = 0.9234 EUR"`
    pub fn display_line(&self) -> String {
        format!("1 {} = {:.4} {}", self.from, self.rate, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line_uses_four_decimals() {
        let rate: ExchangeRate =
            serde_json::from_str(r#"{"rate": 0.92341, "from": "USD", "to": "EUR"}"#).unwrap();
        assert_eq!(rate.display_line(), "1 USD = 0.9234 EUR");

        let whole = ExchangeRate {
            rate: 150.0,
            from: "USD".to_string(),
            to: "JPY".to_string(),
        };
        assert_eq!(whole.display_line(), "1 USD = 150.0000 JPY");
    }
}
