//! MongoDB connector
//!
//! Connection establishment (with optional retry), configuration and
//! ping-based health checks.

mod config;
mod connector;
mod health;

pub use config::MongoConfig;
pub use connector::{
    MongoError, connect, connect_from_config, connect_from_config_with_retry, connect_with_retry,
};
pub use health::{HealthStatus, check_health, check_health_detailed};

// Re-export the driver types callers need
pub use mongodb::{Client, Collection, Database};
