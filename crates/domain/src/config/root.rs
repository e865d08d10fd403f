use serde::{Deserialize, Serialize};

use super::echo::{EchoSection, TtlValue};
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;
use crate::echo_config::EchoConfig;

const LOCAL_CONFIG_PATH: &str = "ipecho.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ipecho/config.toml";

/// Main configuration structure for IP Echo
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Echo domains, TTL and debug flag
    #[serde(default)]
    pub echo: EchoSection,

    /// Where unanswered queries go
    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ipecho.toml in current directory
    /// 3. /etc/ipecho/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        self.echo.domains.extend(overrides.domains);
        if let Some(ttl) = overrides.ttl {
            self.echo.ttl = Some(TtlValue::Text(ttl));
        }
        if overrides.debug {
            self.echo.debug = true;
        }
        if let Some(upstream) = overrides.upstream {
            self.upstream.server = Some(upstream);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        self.upstream.socket_addr()?;

        Ok(())
    }

    /// Build the validated echo suffix table. Any error here is fatal.
    pub fn echo_config(&self) -> Result<EchoConfig, ConfigError> {
        self.echo.build()
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    /// Appended to the configured echo domains
    pub domains: Vec<String>,
    pub ttl: Option<String>,
    pub debug: bool,
    pub upstream: Option<String>,
}
