//! Application State
//!
//! Shared state accessible by all API handlers: the session store and the
//! server configuration. Wrapped in Arc for sharing across async tasks.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{Mutex, RwLock};

use crate::ticket::TicketTable;

/// Shared application state for all handlers
///
/// Each session owns an independent `TicketTable` behind its own mutex, so
/// one session's interactions serialize while sessions stay isolated from
/// each other.
pub struct AppState {
    /// Session tables, keyed by caller-chosen session id
    sessions: RwLock<HashMap<String, Arc<Mutex<TicketTable>>>>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Seed handed to the generator when a session is first accessed
    pub generator_seed: u64,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState with an empty session store
    pub fn new(config: ApiConfig, generator_seed: u64) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            config: Arc::new(config),
            generator_seed,
            start_time: Instant::now(),
        }
    }

    /// Get a session's table, creating it on first access
    ///
    /// Creation runs the synthetic generator once with the configured seed;
    /// every later call for the same id returns the same shared table.
    pub async fn session(&self, id: &str) -> Arc<Mutex<TicketTable>> {
        {
            let sessions = self.sessions.read().await;
            if let Some(table) = sessions.get(id) {
                return Arc::clone(table);
            }
        }

        let mut sessions = self.sessions.write().await;
        // Re-check under the write lock in case another request won the race
        if let Some(table) = sessions.get(id) {
            return Arc::clone(table);
        }

        tracing::info!(session_id = %id, seed = self.generator_seed, "Seeding new session table");
        let table = Arc::new(Mutex::new(TicketTable::seeded(self.generator_seed)));
        sessions.insert(id.to_string(), Arc::clone(&table));
        table
    }

    /// Number of live sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Maximum request body size in bytes
    pub max_body_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8090,
            max_body_size: 1024 * 1024, // 1MB - edit batches are small
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::{Priority, Track};

    #[tokio::test]
    async fn test_session_created_on_first_access() {
        let state = AppState::new(ApiConfig::default(), 42);
        assert_eq!(state.session_count().await, 0);

        let table = state.session("alice").await;
        assert_eq!(state.session_count().await, 1);
        assert_eq!(table.lock().await.len(), 100);
    }

    #[tokio::test]
    async fn test_same_id_shares_one_table() {
        let state = AppState::new(ApiConfig::default(), 42);
        let first = state.session("alice").await;
        first
            .lock()
            .await
            .submit("X", Priority::High, Track::Kafka)
            .unwrap();

        let again = state.session("alice").await;
        assert_eq!(again.lock().await.len(), 101);
        assert_eq!(state.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let state = AppState::new(ApiConfig::default(), 42);
        let alice = state.session("alice").await;
        alice
            .lock()
            .await
            .submit("X", Priority::High, Track::Kafka)
            .unwrap();

        let bob = state.session("bob").await;
        assert_eq!(bob.lock().await.len(), 100);
    }

    #[test]
    fn test_addr_format() {
        let config = ApiConfig::new("127.0.0.1", 9000);
        assert_eq!(config.addr(), "127.0.0.1:9000");
    }
}
