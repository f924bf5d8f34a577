//! Conversion of decimal currency amounts into integer minor units.

use crate::config::BillingProperties;
use crate::error::BillingError;
use crate::models::{Currency, RoundingMode};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Rounds amounts to whole minor units under the configured policy.
#[derive(Debug, Clone)]
pub struct MoneyRounding {
    rounding: RoundingMode,
    currency: Currency,
}

impl MoneyRounding {
    pub fn new(properties: &BillingProperties) -> Self {
        Self {
            rounding: properties.rounding,
            currency: properties.currency.clone(),
        }
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Rescale `amount` to zero decimal places and convert it exactly to `i64`.
    ///
    /// Fails with `InvalidArgument` when the amount is absent and with
    /// `ArithmeticOverflow` when the rounded value leaves the `i64` range.
    pub fn round_to_minor_unit(&self, amount: Option<Decimal>) -> Result<i64, BillingError> {
        let amount = amount
            .ok_or_else(|| BillingError::InvalidArgument("Amount must not be null".to_string()))?;
        round_with(amount, self.rounding)
    }

    /// Convert a major-unit amount (e.g. `12.345` TRY) into minor units.
    pub fn to_minor_units(&self, major: Decimal) -> Result<i64, BillingError> {
        let factor = Decimal::from(10_i64.pow(self.currency.minor_unit_digits()));
        let scaled = major
            .checked_mul(factor)
            .ok_or(BillingError::ArithmeticOverflow(major))?;
        self.round_to_minor_unit(Some(scaled))
    }
}

/// Fixed half-up rounding, independent of configuration.
pub fn round_half_up(amount: Decimal) -> Result<i64, BillingError> {
    round_with(amount, RoundingMode::HalfUp)
}

/// Render a minor-unit amount in major units followed by the currency code,
/// e.g. `1250` TRY as `"12.50 TRY"`.
///
/// The output is not locale-formatted: `.` is always the decimal separator,
/// there is no digit grouping, and no currency symbol is used.
pub fn format_minor_units(amount_minor: i64, currency: &Currency) -> String {
    let major = Decimal::new(amount_minor, currency.minor_unit_digits());
    format!("{} {}", major, currency)
}

fn round_with(amount: Decimal, mode: RoundingMode) -> Result<i64, BillingError> {
    let rounded = match mode.strategy() {
        Some(strategy) => amount.round_dp_with_strategy(0, strategy),
        None if amount.fract().is_zero() => amount.trunc(),
        None => return Err(BillingError::RoundingNecessary(amount)),
    };
    rounded
        .to_i64()
        .ok_or(BillingError::ArithmeticOverflow(rounded))
}
