//! Component wiring for process start.

use crate::config::BillingConfig;
use crate::error::BillingError;
use crate::services::{MetricsSink, MoneyRounding, PrometheusSink, SubscriptionStatusMetrics};
use std::sync::Arc;

/// Application container holding the wired billing components.
pub struct Application {
    config: BillingConfig,
    sink: Arc<PrometheusSink>,
    money_rounding: Arc<MoneyRounding>,
    status_metrics: Arc<SubscriptionStatusMetrics>,
}

impl Application {
    /// Build the components with the given configuration and a fresh registry.
    pub fn build(config: BillingConfig) -> Result<Self, BillingError> {
        Self::build_with_sink(config, Arc::new(PrometheusSink::new()))
    }

    /// Build the components around an existing sink, e.g. one whose registry
    /// is already exposed by the host process.
    pub fn build_with_sink(
        config: BillingConfig,
        sink: Arc<PrometheusSink>,
    ) -> Result<Self, BillingError> {
        let money_rounding = Arc::new(MoneyRounding::new(&config.billing));
        let status_metrics = Arc::new(SubscriptionStatusMetrics::new(
            sink.clone() as Arc<dyn MetricsSink>
        ));

        tracing::info!(
            service_name = %config.common.service_name,
            currency = %config.billing.currency,
            rounding = %config.billing.rounding,
            "Billing components ready"
        );

        Ok(Self {
            config,
            sink,
            money_rounding,
            status_metrics,
        })
    }

    /// Load configuration from file and environment, then build.
    pub fn from_env() -> Result<Self, BillingError> {
        let config = BillingConfig::load().map_err(|e| {
            tracing::error!(error = %e, "Failed to load configuration");
            e
        })?;
        Self::build(config)
    }

    pub fn config(&self) -> &BillingConfig {
        &self.config
    }

    pub fn money_rounding(&self) -> Arc<MoneyRounding> {
        self.money_rounding.clone()
    }

    pub fn status_metrics(&self) -> Arc<SubscriptionStatusMetrics> {
        self.status_metrics.clone()
    }

    pub fn metrics_sink(&self) -> Arc<PrometheusSink> {
        self.sink.clone()
    }

    /// Metrics in Prometheus text format for scraping.
    pub fn metrics_text(&self) -> Result<String, BillingError> {
        self.sink.gather_text()
    }
}
