use bigdecimal::{BigDecimal, ParseBigDecimalError};
use std::fmt;

/// Multiplier applied to `price * quantity` when totalling a cart.
///
/// `1` means no tax; `1.2` adds 20%. Negative factors are rejected at parse
/// time, so a `TaxRate` never turns a total negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxRate(BigDecimal);

impl TaxRate {
    pub fn new(factor: BigDecimal) -> Result<Self, ParseBigDecimalError> {
        if factor < BigDecimal::from(0) {
            return Err(ParseBigDecimalError::Other(format!(
                "tax factor must not be negative: {factor}"
            )));
        }
        Ok(Self(factor))
    }

    pub fn none() -> Self {
        Self(BigDecimal::from(1))
    }

    pub fn factor(&self) -> &BigDecimal {
        &self.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::none()
    }
}

impl std::str::FromStr for TaxRate {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty tax factor".into()));
        }
        Self::new(t.parse()?)
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
