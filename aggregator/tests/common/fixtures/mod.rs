//! This module provides reusable test utilities:
//! - Mock revenue-reporting systems
//! - In-memory test databases
//! - Common test data

// Allow unused code in test fixtures - not every test binary uses every helper
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_system;
pub mod test_data;
pub mod test_database;

// Re-export commonly used items
pub use mock_system::MockRevenueSystem;
pub use test_data::*;
pub use test_database::TestDatabase;
