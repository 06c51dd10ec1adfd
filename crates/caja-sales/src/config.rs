//! # App Configuration
//!
//! Runtime configuration for the sales services.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CAJA_STORE_NAME="Electroventas Norte"                              │
//! │     CAJA_CURRENCY_SYMBOL="S/"                                          │
//! │     CAJA_FALLBACK_SELLER="Mostrador"                                   │
//! │     CAJA_LOW_STOCK_THRESHOLD=3                                         │
//! │                                                                         │
//! │  2. Default Values                                                     │
//! │     Single-store defaults matching the seeded data                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, warn};

// =============================================================================
// App Config
// =============================================================================

/// Configuration for the sales services.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Display name of the store, shown on documents and the dashboard.
    pub store_name: String,

    /// Currency symbol prefixed to formatted amounts.
    /// Default: "S/" (Peruvian sol)
    pub currency_symbol: String,

    /// Salesperson written on documents when nobody is signed in and no
    /// override was given.
    /// Default: "Sistema"
    pub fallback_seller: String,

    /// Stock level at or below which a product counts as low stock.
    /// Default: 5
    pub low_stock_threshold: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            store_name: "Electroventas del Perú".to_string(),
            currency_symbol: "S/".to_string(),
            fallback_seller: "Sistema".to_string(),
            low_stock_threshold: 5,
        }
    }
}

impl AppConfig {
    /// Creates a config from defaults plus environment overrides.
    ///
    /// ## Environment Variables
    /// - `CAJA_STORE_NAME` - store display name
    /// - `CAJA_CURRENCY_SYMBOL` - currency prefix
    /// - `CAJA_FALLBACK_SELLER` - salesperson of last resort
    /// - `CAJA_LOW_STOCK_THRESHOLD` - low-stock cutoff (u32)
    ///
    /// Empty or unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(name) = std::env::var("CAJA_STORE_NAME") {
            if name.trim().is_empty() {
                warn!("CAJA_STORE_NAME is empty, keeping default");
            } else {
                debug!(store_name = %name, "Overriding store name from environment");
                self.store_name = name;
            }
        }

        if let Ok(symbol) = std::env::var("CAJA_CURRENCY_SYMBOL") {
            if symbol.trim().is_empty() {
                warn!("CAJA_CURRENCY_SYMBOL is empty, keeping default");
            } else {
                self.currency_symbol = symbol;
            }
        }

        if let Ok(seller) = std::env::var("CAJA_FALLBACK_SELLER") {
            if seller.trim().is_empty() {
                warn!("CAJA_FALLBACK_SELLER is empty, keeping default");
            } else {
                self.fallback_seller = seller;
            }
        }

        if let Ok(threshold) = std::env::var("CAJA_LOW_STOCK_THRESHOLD") {
            match threshold.parse::<u32>() {
                Ok(value) => {
                    debug!(threshold = value, "Overriding low-stock threshold from environment");
                    self.low_stock_threshold = value;
                }
                Err(_) => warn!(
                    value = %threshold,
                    "CAJA_LOW_STOCK_THRESHOLD is not a number, keeping default"
                ),
            }
        }
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use caja_sales::AppConfig;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(2500.0), "S/ 2500.00");
    /// ```
    pub fn format_currency(&self, amount: f64) -> String {
        format!("{} {:.2}", self.currency_symbol, amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.store_name, "Electroventas del Perú");
        assert_eq!(config.currency_symbol, "S/");
        assert_eq!(config.fallback_seller, "Sistema");
        assert_eq!(config.low_stock_threshold, 5);
    }

    #[test]
    fn test_format_currency_two_decimals() {
        let config = AppConfig::default();
        assert_eq!(config.format_currency(180.0), "S/ 180.00");
        assert_eq!(config.format_currency(8450.5), "S/ 8450.50");
    }

    #[test]
    fn test_env_override_store_name() {
        std::env::set_var("CAJA_STORE_NAME", "Electroventas Norte");
        let config = AppConfig::from_env();
        assert_eq!(config.store_name, "Electroventas Norte");
        std::env::remove_var("CAJA_STORE_NAME");
    }

    #[test]
    fn test_bad_threshold_is_ignored() {
        std::env::set_var("CAJA_LOW_STOCK_THRESHOLD", "plenty");
        let config = AppConfig::from_env();
        assert_eq!(config.low_stock_threshold, 5);
        std::env::remove_var("CAJA_LOW_STOCK_THRESHOLD");
    }
}
