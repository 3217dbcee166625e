pub mod handlers;
pub mod server;

pub use server::{create_router, start_web_server};

use std::sync::Arc;

use crate::config::Config;
use crate::database::Database;
use crate::revenue::RevenueAggregator;

// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub database: Arc<Database>,
    pub aggregator: Arc<RevenueAggregator>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        database: Arc<Database>,
        aggregator: Arc<RevenueAggregator>,
    ) -> Self {
        Self {
            config,
            database,
            aggregator,
        }
    }
}
