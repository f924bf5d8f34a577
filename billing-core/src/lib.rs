//! Billing Core - Minor-unit money rounding and subscription status metrics.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod startup;
