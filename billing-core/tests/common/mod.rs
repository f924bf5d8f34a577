//! Test helper module for billing-core integration tests.
//!
//! Provides a wired application over a private Prometheus registry.

#![allow(dead_code)]

use billing_core::config::{BillingConfig, BillingProperties};
use billing_core::models::{RoundingMode, Subscription, SubscriptionStatus};
use billing_core::services::SUBSCRIPTION_STATE_CHANGE_TOTAL;
use billing_core::startup::Application;
use service_core::config::Config as CoreConfig;
use uuid::Uuid;

// Test constants for subscription ownership
pub const TEST_CUSTOMER_ID: &str = "22222222-2222-2222-2222-222222222222";
pub const TEST_PLAN_ID: &str = "33333333-3333-3333-3333-333333333333";
pub const TEST_PRICE_ID: &str = "44444444-4444-4444-4444-444444444444";

/// Test application wrapper for integration tests.
pub struct TestApp {
    pub app: Application,
}

impl TestApp {
    /// Build an application with the given rounding mode and TRY currency.
    pub fn spawn(rounding: RoundingMode) -> Self {
        let config = BillingConfig {
            common: CoreConfig {
                service_name: "billing-core-test".to_string(),
                log_level: "warn".to_string(),
            },
            billing: BillingProperties {
                currency: "TRY".parse().unwrap(),
                rounding,
            },
        };

        let app = Application::build(config).expect("Failed to build test application");
        TestApp { app }
    }

    /// Current `subscription_state_change_total{from,to}` value.
    pub fn transitions(&self, from: &str, to: &str) -> u64 {
        self.app
            .metrics_sink()
            .counter_value(SUBSCRIPTION_STATE_CHANGE_TOTAL, &[("from", from), ("to", to)])
    }
}

/// Subscription owned by the test customer, with the given status.
pub fn subscription(status: Option<SubscriptionStatus>) -> Subscription {
    let mut subscription = Subscription::new(
        Uuid::parse_str(TEST_CUSTOMER_ID).unwrap(),
        Uuid::parse_str(TEST_PLAN_ID).unwrap(),
        Uuid::parse_str(TEST_PRICE_ID).unwrap(),
    );
    subscription.status = status;
    subscription
}
