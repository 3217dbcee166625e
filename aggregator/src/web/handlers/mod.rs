//! HTTP request handlers for the aggregator API.
//!
//! This module is organized by domain:
//! - `common` - Shared error/response types and query structs
//! - `health` - Liveness and readiness
//! - `revenue` - Aggregation and history
//! - `systems` - System registry listing

pub mod common;
pub mod health;
pub mod revenue;
pub mod systems;

pub use health::*;
pub use revenue::*;
pub use systems::*;
