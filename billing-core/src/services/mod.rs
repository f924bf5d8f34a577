//! Services module for billing-core.

pub mod metrics;
pub mod money;

pub use metrics::{
    MetricsSink, PrometheusSink, SubscriptionStatusMetrics, SUBSCRIPTION_STATE_CHANGE_TOTAL,
};
pub use money::{format_minor_units, round_half_up, MoneyRounding};
