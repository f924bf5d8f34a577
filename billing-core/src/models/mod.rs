//! Domain models for billing-core.

mod money;
mod subscription;

pub use money::{Currency, RoundingMode};
pub use subscription::{StatusHolder, Subscription, SubscriptionStatus};
