pub mod config;
pub mod constants;
pub mod database;
pub mod revenue;
pub mod web;

// Re-export commonly used types
pub use config::{Config, DatabaseConfig};
pub use database::Database;
pub use revenue::{RevenueAggregator, RevenueFetcher};
pub use web::AppState;
