use crate::directive::DirectiveError;
use crate::echo_config::EchoConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),

    #[error("Invalid echo configuration: {0}")]
    Echo(#[from] EchoConfigError),

    #[error("Invalid echo directives: {0}")]
    Directive(#[from] DirectiveError),
}
