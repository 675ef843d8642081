use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::SessionDirectory;

/// Application state shared by every worker.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Per-chat game sessions.
    pub sessions: Arc<SessionDirectory>,
    pub config: ServerConfig,
}

impl AppState {
    /// Build state with a fresh directory using the configured idle TTL.
    pub fn new(config: ServerConfig) -> Self {
        let sessions = Arc::new(SessionDirectory::new(config.session_idle_ttl));
        Self { sessions, config }
    }

    /// State around an existing directory, e.g. one shared with a sweeper.
    pub fn with_sessions(config: ServerConfig, sessions: Arc<SessionDirectory>) -> Self {
        Self { sessions, config }
    }

    /// Default config and an empty directory.
    pub fn for_tests() -> Self {
        Self::new(ServerConfig::default())
    }
}
