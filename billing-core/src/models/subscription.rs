//! Subscription model.

use crate::error::BillingError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Subscription status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    Trial,
    Active,
    PastDue,
    Canceled,
}

impl SubscriptionStatus {
    /// Stable label used for metrics and persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Trial => "TRIAL",
            SubscriptionStatus::Active => "ACTIVE",
            SubscriptionStatus::PastDue => "PAST_DUE",
            SubscriptionStatus::Canceled => "CANCELED",
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionStatus {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TRIAL" => Ok(SubscriptionStatus::Trial),
            "ACTIVE" => Ok(SubscriptionStatus::Active),
            "PAST_DUE" => Ok(SubscriptionStatus::PastDue),
            "CANCELED" => Ok(SubscriptionStatus::Canceled),
            _ => Err(BillingError::InvalidStatus(s.to_string())),
        }
    }
}

/// Read/write access to an entity's status field.
///
/// The entity store owns persistence; callers only need the accessor pair.
pub trait StatusHolder {
    fn status(&self) -> Option<SubscriptionStatus>;
    fn set_status(&mut self, status: Option<SubscriptionStatus>);
}

/// Subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub plan_id: Uuid,
    pub price_id: Uuid,
    pub status: Option<SubscriptionStatus>,
    pub start_at: DateTime<Utc>,
    pub current_period_start: Option<DateTime<Utc>>,
    pub current_period_end: Option<DateTime<Utc>>,
    pub cancel_at_period_end: bool,
    pub trial_end_at: Option<DateTime<Utc>>,
    pub external_subscription_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subscription {
    /// New subscription starting now, with no status assigned yet.
    pub fn new(customer_id: Uuid, plan_id: Uuid, price_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            customer_id,
            plan_id,
            price_id,
            status: None,
            start_at: now,
            current_period_start: None,
            current_period_end: None,
            cancel_at_period_end: false,
            trial_end_at: None,
            external_subscription_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_status(mut self, status: SubscriptionStatus) -> Self {
        self.status = Some(status);
        self
    }
}

impl StatusHolder for Subscription {
    fn status(&self) -> Option<SubscriptionStatus> {
        self.status
    }

    fn set_status(&mut self, status: Option<SubscriptionStatus>) {
        self.status = status;
    }
}
