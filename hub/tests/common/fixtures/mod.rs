//! Reusable test utilities:
//! - In-memory hub databases
//! - Agent and task request builders

// Not every test binary uses every helper
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod test_data;
pub mod test_database;

pub use test_data::*;
pub use test_database::TestDatabase;
