//! service-core: Shared infrastructure for billing components.
pub mod config;
pub mod error;
pub mod observability;

pub use serde;
pub use tracing;
