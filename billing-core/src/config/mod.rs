use crate::models::{Currency, RoundingMode};
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillingConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    #[serde(default)]
    pub billing: BillingProperties,
}

/// Money handling policy, read once at startup (`billing.*` keys).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillingProperties {
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub rounding: RoundingMode,
}

impl BillingConfig {
    /// Load from `configuration.*` in the working directory and `APP__` env vars,
    /// e.g. `APP__BILLING__ROUNDING=HALF_EVEN`.
    pub fn load() -> Result<Self, AppError> {
        core_config::load()
    }

    pub fn load_from(file: impl AsRef<Path>) -> Result<Self, AppError> {
        core_config::load_from(file)
    }
}
