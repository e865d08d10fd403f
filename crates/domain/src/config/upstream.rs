use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Server that receives queries the echo resolver does not answer.
///
/// Without a server, unanswered queries get SERVFAIL.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Upstream address as `ip:port` (e.g. "1.1.1.1:53")
    #[serde(default)]
    pub server: Option<String>,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            server: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl UpstreamConfig {
    pub fn socket_addr(&self) -> Result<Option<SocketAddr>, ConfigError> {
        self.server
            .as_deref()
            .map(|server| {
                server.parse::<SocketAddr>().map_err(|e| {
                    ConfigError::Validation(format!("Invalid upstream server '{}': {}", server, e))
                })
            })
            .transpose()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_timeout_ms() -> u64 {
    2000
}
