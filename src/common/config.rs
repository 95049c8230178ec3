//! Runtime configuration loaded from environment variables.

use std::str::FromStr;

use crate::{common::error::AppError, common::tax::TaxRate, domain::stock::StockPolicy};

/// Cart settings with defaults.
///
/// Reads from environment variables:
/// - `CART_TAX_RATE` — multiplier applied to totals (default: `1`, no tax)
/// - `CART_STOCK_POLICY` — `allow-exhaust` or `strict` (default: `allow-exhaust`)
/// - `CART_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tax_rate: TaxRate,
    pub stock_policy: StockPolicy,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unset keys fall back to
    /// defaults; set but malformed keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let tax_rate = match lookup("CART_TAX_RATE") {
            Some(raw) => TaxRate::from_str(&raw)
                .map_err(|e| AppError::Config(format!("CART_TAX_RATE={raw}: {e}")))?,
            None => defaults.tax_rate,
        };

        let stock_policy = match lookup("CART_STOCK_POLICY") {
            Some(raw) => StockPolicy::from_str(&raw)
                .map_err(|e| AppError::Config(format!("CART_STOCK_POLICY={raw}: {e}")))?,
            None => defaults.stock_policy,
        };

        Ok(Self {
            tax_rate,
            stock_policy,
            log_level: lookup("CART_LOG").unwrap_or(defaults.log_level),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tax_rate: TaxRate::none(),
            stock_policy: StockPolicy::AllowExhaust,
            log_level: "info".to_string(),
        }
    }
}
