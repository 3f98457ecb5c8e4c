use alloy::primitives::U256;
use bigdecimal::{
    num_bigint::{BigInt, Sign},
    BigDecimal, RoundingMode,
};
use std::fmt::Display;

/// Number of decimals of both ETH and uniETH.
pub const DECIMALS: u8 = 18;

/// Digits kept after the decimal point under the default precision policy.
pub const DEFAULT_FRACTION_DIGITS: i64 = 8;

/// How many fractional digits a formatted balance keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Exact quotient of the division.
    Full,
    /// Round half-to-even to the given number of digits after the decimal point.
    Rounded(i64),
}

impl Default for Precision {
    fn default() -> Self {
        Self::Rounded(DEFAULT_FRACTION_DIGITS)
    }
}

/// Converts a raw amount in the smallest unit to its decimal value, i.e. `raw / 10^18`.
///
/// The decimal is built from the exact digits of `raw`, never through a float.
pub fn to_decimal(raw: U256, precision: Precision) -> BigDecimal {
    let digits = BigInt::from_bytes_be(Sign::Plus, &raw.to_be_bytes::<32>());
    let amount = BigDecimal::new(digits, 0);
    let unit = BigDecimal::new(1.into(), -i64::from(DECIMALS));

    let decimal = amount / unit;
    match precision {
        Precision::Full => decimal.normalized(),
        Precision::Rounded(digits) => decimal.with_scale_round(digits, RoundingMode::HalfEven),
    }
}

/// A token balance contains the raw amount, its decimal value and the token symbol.
#[derive(Debug, Clone)]
pub struct TokenBalance {
    /// Amount of tokens as bigint.
    pub amount: U256,
    /// Amount of tokens divided by `10^18`.
    pub decimal: BigDecimal,
    /// Token symbol, for display purposes.
    pub symbol: String,
}

impl TokenBalance {
    /// Create a new token balance, formatting `amount` with the given precision.
    pub fn new(amount: U256, symbol: impl Into<String>, precision: Precision) -> Self {
        Self {
            amount,
            decimal: to_decimal(amount, precision),
            symbol: symbol.into(),
        }
    }
}

impl Display for TokenBalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Balance: {} wei ({} {})",
            self.symbol,
            self.amount,
            self.decimal.to_plain_string(),
            self.symbol
        )
    }
}
