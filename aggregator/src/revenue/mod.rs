//! Revenue aggregation module
//!
//! This module polls registered systems for their revenue figures and rolls
//! them up into a single summary.
//!
//! # Flow
//!
//! ```text
//! systems table → spawn fetch per system → join_all → sum successes
//!                                                  ↓
//!                                    revenue_snapshots (one row each)
//! ```

pub mod aggregator;
pub mod fetcher;
pub mod types;

pub use aggregator::RevenueAggregator;
pub use fetcher::RevenueFetcher;
pub use types::{AggregationSummary, FetchResult, RevenueReport, RevenueTotals};
