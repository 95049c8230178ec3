use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::common::tax::TaxRate;

const SCALE: i64 = 10_000;

#[derive(Debug, Clone, Copy, Default)]
/// A monetary value stored in 1/10_000 of the currency unit.
///
/// Prices and totals are kept as integers so that summing line totals never
/// picks up floating-point drift. Parsing and tax arithmetic go through
/// `BigDecimal` and are rounded back to the fixed scale.
///
/// # Examples
/// ```
/// use cart_ledger::common::money::Money;
///
/// let price: Money = "999.99".parse().unwrap();
/// assert_eq!(price.as_i64(), 9_999_900);
/// assert_eq!(price.times(2).to_string_2dp(), "1999.98");
/// ```
pub struct Money(i64);

impl Money {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn to_decimal(&self) -> BigDecimal {
        BigDecimal::from(self.0) / BigDecimal::from(SCALE)
    }

    pub fn to_string_4dp(&self) -> String {
        format!("{:.4}", self.to_decimal())
    }

    pub fn to_string_2dp(&self) -> String {
        format!("{:.2}", self.to_decimal().round(2))
    }

    /// Price of `quantity` units. Saturates instead of overflowing.
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Multiplies by the tax factor, rounding to the nearest 1/10_000.
    pub fn apply_rate(self, rate: &TaxRate) -> Money {
        let scaled = (BigDecimal::from(self.0) * rate.factor()).round(0);
        match scaled.to_i64() {
            Some(value) => Money(value),
            None if scaled < BigDecimal::from(0) => Money(i64::MIN),
            None => Money(i64::MAX),
        }
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_4dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_from_str_valid() {
        assert_eq!(Money::from_str("999.99").unwrap(), Money(9_999_900));
        assert_eq!(Money::from_str("29.99").unwrap(), Money(299_900));
        assert_eq!(Money::from_str("0.0001").unwrap(), Money(1));
        assert_eq!(Money::from_str("  79.99 ").unwrap(), Money(799_900));
    }

    #[test]
    fn test_from_str_rounding() {
        assert_eq!(Money::from_str("1.99999").unwrap(), Money(20000));
        assert_eq!(Money::from_str("0.00001").unwrap(), Money(0));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("   ").is_err());
        assert!(Money::from_str("laptop").is_err());
    }

    #[test]
    fn test_formatting() {
        assert_eq!(Money(9_999_900).to_string_2dp(), "999.99");
        assert_eq!(Money(9_999_900).to_string_4dp(), "999.9900");
        assert_eq!(Money(0).to_string_2dp(), "0.00");
        assert_eq!(Money(12345).to_string(), "1.2345");
    }

    #[test]
    fn test_times() {
        assert_eq!(Money(9_999_900).times(2), Money(19_999_800));
        assert_eq!(Money(299_900).times(0), Money::zero());
        assert_eq!(Money(i64::MAX).times(2), Money(i64::MAX));
    }

    #[test]
    fn test_apply_rate() {
        let vat = TaxRate::from_str("1.2").unwrap();
        assert_eq!(Money(20_299_700).apply_rate(&vat), Money(24_359_640));
        assert_eq!(Money(20_299_700).apply_rate(&TaxRate::none()), Money(20_299_700));

        // 0.0003 * 1.25 rounds to the nearest unit
        let odd = TaxRate::from_str("1.25").unwrap();
        assert_eq!(Money(3).apply_rate(&odd), Money(4));
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money(1), Money(2), Money(3)].into_iter().sum();
        assert_eq!(total, Money(6));
        let empty: Money = std::iter::empty().sum();
        assert_eq!(empty, Money::zero());
    }

    #[test]
    fn test_ordering() {
        assert!(Money(10000) < Money(15000));
        assert!(Money(10000) >= Money(10000));
    }
}
