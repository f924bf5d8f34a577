//! Metrics module for billing-core.
//! Provides the Prometheus-backed counter sink and subscription status
//! transition recording.

use crate::error::BillingError;
use crate::models::{StatusHolder, SubscriptionStatus};
use dashmap::DashMap;
use prometheus::{opts, Encoder, IntCounterVec, Registry, TextEncoder};
use std::collections::HashMap;
use std::sync::Arc;

/// Counter incremented on every subscription status change.
pub const SUBSCRIPTION_STATE_CHANGE_TOTAL: &str = "subscription_state_change_total";

/// `from` label when the subscription had no status.
pub const UNSET_LABEL: &str = "UNSET";

/// `to` label when the status is being cleared.
pub const UNKNOWN_LABEL: &str = "UNKNOWN";

/// Destination for labeled counter increments.
///
/// Errors are returned to the caller untouched; implementations must not
/// retry or swallow them.
pub trait MetricsSink: Send + Sync {
    fn increment_counter(&self, name: &str, labels: &[(&str, &str)]) -> Result<(), BillingError>;
}

/// Counter sink backed by an explicit Prometheus registry.
///
/// Counter families are created on first use, keyed by name, with the label
/// keys of that first increment.
pub struct PrometheusSink {
    registry: Registry,
    counters: DashMap<String, IntCounterVec>,
}

impl PrometheusSink {
    pub fn new() -> Self {
        Self::with_registry(Registry::new())
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry,
            counters: DashMap::new(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Current value of a counter series; zero if it was never incremented.
    ///
    /// Reads from a registry snapshot so that querying a series never
    /// creates it.
    pub fn counter_value(&self, name: &str, labels: &[(&str, &str)]) -> u64 {
        let metric_families = self.registry.gather();
        metric_families
            .iter()
            .filter(|family| family.name() == name)
            .flat_map(|family| family.get_metric())
            .find(|metric| {
                let pairs = metric.get_label();
                pairs.len() == labels.len()
                    && labels.iter().all(|(key, value)| {
                        pairs
                            .iter()
                            .any(|pair| pair.name() == *key && pair.value() == *value)
                    })
            })
            .map_or(0, |metric| metric.get_counter().value() as u64)
    }

    /// Registry contents in Prometheus text format.
    pub fn gather_text(&self) -> Result<String, BillingError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| BillingError::Metrics(prometheus::Error::Msg(e.to_string())))
    }

    fn counter_vec(&self, name: &str, label_names: &[&str]) -> Result<IntCounterVec, BillingError> {
        if let Some(counter_vec) = self.counters.get(name) {
            return Ok(counter_vec.value().clone());
        }

        let entry = self
            .counters
            .entry(name.to_string())
            .or_try_insert_with(|| -> Result<IntCounterVec, BillingError> {
                let counter_vec = IntCounterVec::new(opts!(name, help_for(name)), label_names)?;
                self.registry.register(Box::new(counter_vec.clone()))?;
                tracing::debug!(counter = %name, labels = ?label_names, "Registered counter");
                Ok(counter_vec)
            })?;
        Ok(entry.value().clone())
    }
}

impl Default for PrometheusSink {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSink for PrometheusSink {
    fn increment_counter(&self, name: &str, labels: &[(&str, &str)]) -> Result<(), BillingError> {
        let label_names: Vec<&str> = labels.iter().map(|(key, _)| *key).collect();
        let counter_vec = self.counter_vec(name, &label_names)?;
        let values: HashMap<&str, &str> = labels.iter().copied().collect();
        counter_vec.get_metric_with(&values)?.inc();
        Ok(())
    }
}

fn help_for(name: &str) -> &'static str {
    match name {
        SUBSCRIPTION_STATE_CHANGE_TOTAL => "Subscription status transitions by origin and target status",
        _ => "Billing counter",
    }
}

/// Applies subscription status changes, counting every actual transition.
#[derive(Clone)]
pub struct SubscriptionStatusMetrics {
    sink: Arc<dyn MetricsSink>,
}

impl SubscriptionStatusMetrics {
    pub fn new(sink: Arc<dyn MetricsSink>) -> Self {
        Self { sink }
    }

    /// Set `new_status` on `subscription`, emitting one
    /// `subscription_state_change_total{from,to}` increment first.
    ///
    /// Equal statuses (including both absent) return early without touching
    /// the sink or the entity. A sink failure is returned and leaves the
    /// status unchanged. The read-compare-write is not atomic across owners
    /// of the entity; callers sharing one must lock around it.
    pub fn update_status<S>(
        &self,
        subscription: &mut S,
        new_status: Option<SubscriptionStatus>,
    ) -> Result<(), BillingError>
    where
        S: StatusHolder + ?Sized,
    {
        let current = subscription.status();
        if current == new_status {
            return Ok(());
        }

        let from = current.map_or(UNSET_LABEL, |status| status.as_str());
        let to = new_status.map_or(UNKNOWN_LABEL, |status| status.as_str());
        self.sink
            .increment_counter(SUBSCRIPTION_STATE_CHANGE_TOTAL, &[("from", from), ("to", to)])?;

        tracing::debug!(from = %from, to = %to, "Subscription status changed");
        subscription.set_status(new_status);
        Ok(())
    }
}
