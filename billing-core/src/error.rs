//! Error types for billing-core.

use rust_decimal::Decimal;
use service_core::error::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BillingError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Arithmetic overflow: {0} does not fit in a 64-bit minor-unit amount")]
    ArithmeticOverflow(Decimal),

    #[error("Rounding necessary: {0} is not an integral amount")]
    RoundingNecessary(Decimal),

    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),

    #[error("Invalid rounding mode: {0}")]
    InvalidRoundingMode(String),

    #[error("Invalid subscription status: {0}")]
    InvalidStatus(String),

    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error(transparent)]
    Config(#[from] AppError),
}
