pub mod config;
pub mod constants;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod services;
pub mod types;

use std::sync::Arc;

pub use config::Config;
pub use database::Database;
pub use errors::{HubError, HubResult};
pub use services::AgentService;

pub struct AppState {
    pub config: Arc<Config>,
    pub agent_service: AgentService,
}

impl AppState {
    pub fn new(config: Arc<Config>, database: Arc<Database>) -> Self {
        Self {
            config,
            agent_service: AgentService::new(database),
        }
    }
}
