//! Pool sizes, defaults and service identity for the agent hub

/// Database pool constants
pub mod database {
    pub const MIN_CONNECTIONS: u32 = 3;

    pub const MAX_CONNECTIONS: u32 = 10;
}

/// Agent and task lifecycle states written by this service
pub mod status {
    pub const AGENT_ACTIVE: &str = "active";

    pub const TASK_PENDING: &str = "pending";

    pub const REGISTERED: &str = "registered";

    pub const ASSIGNED: &str = "assigned";
}

/// Service identity reported by `/status`
pub mod service {
    pub const NAME: &str = "ai-agent-hub";

    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5000";
