//! Money configuration types: rounding modes and currencies.

use crate::error::BillingError;
use rust_decimal::RoundingStrategy;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Rule for resolving a fractional remainder when rescaling to zero decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum RoundingMode {
    #[default]
    HalfUp,
    HalfDown,
    HalfEven,
    Up,
    Down,
    Ceiling,
    Floor,
    /// Asserts the amount is already integral.
    Unnecessary,
}

impl RoundingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundingMode::HalfUp => "HALF_UP",
            RoundingMode::HalfDown => "HALF_DOWN",
            RoundingMode::HalfEven => "HALF_EVEN",
            RoundingMode::Up => "UP",
            RoundingMode::Down => "DOWN",
            RoundingMode::Ceiling => "CEILING",
            RoundingMode::Floor => "FLOOR",
            RoundingMode::Unnecessary => "UNNECESSARY",
        }
    }

    /// Equivalent decimal strategy; `None` for [`RoundingMode::Unnecessary`].
    pub fn strategy(&self) -> Option<RoundingStrategy> {
        match self {
            RoundingMode::HalfUp => Some(RoundingStrategy::MidpointAwayFromZero),
            RoundingMode::HalfDown => Some(RoundingStrategy::MidpointTowardZero),
            RoundingMode::HalfEven => Some(RoundingStrategy::MidpointNearestEven),
            RoundingMode::Up => Some(RoundingStrategy::AwayFromZero),
            RoundingMode::Down => Some(RoundingStrategy::ToZero),
            RoundingMode::Ceiling => Some(RoundingStrategy::ToPositiveInfinity),
            RoundingMode::Floor => Some(RoundingStrategy::ToNegativeInfinity),
            RoundingMode::Unnecessary => None,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundingMode {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "HALF_UP" => Ok(RoundingMode::HalfUp),
            "HALF_DOWN" => Ok(RoundingMode::HalfDown),
            "HALF_EVEN" => Ok(RoundingMode::HalfEven),
            "UP" => Ok(RoundingMode::Up),
            "DOWN" => Ok(RoundingMode::Down),
            "CEILING" => Ok(RoundingMode::Ceiling),
            "FLOOR" => Ok(RoundingMode::Floor),
            "UNNECESSARY" => Ok(RoundingMode::Unnecessary),
            _ => Err(BillingError::InvalidRoundingMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for RoundingMode {
    type Error = BillingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// ISO-4217 alphabetic currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Currency(String);

// ISO-4217 currencies whose minor unit differs from two digits.
const ZERO_DIGIT_CURRENCIES: &[&str] = &[
    "BIF", "CLP", "DJF", "GNF", "ISK", "JPY", "KMF", "KRW", "PYG", "RWF", "UGX", "UYI", "VND",
    "VUV", "XAF", "XOF", "XPF",
];
const THREE_DIGIT_CURRENCIES: &[&str] = &["BHD", "IQD", "JOD", "KWD", "LYD", "OMR", "TND"];

impl Currency {
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Number of decimal digits in one major unit.
    pub fn minor_unit_digits(&self) -> u32 {
        let code = self.0.as_str();
        if ZERO_DIGIT_CURRENCIES.contains(&code) {
            0
        } else if THREE_DIGIT_CURRENCIES.contains(&code) {
            3
        } else {
            2
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency("TRY".to_string())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Currency {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(BillingError::InvalidCurrency(s.to_string()));
        }
        Ok(Currency(code.to_ascii_uppercase()))
    }
}

impl TryFrom<String> for Currency {
    type Error = BillingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
