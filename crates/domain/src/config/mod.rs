//! Configuration module for IP Echo
//!
//! - `root`: Main configuration and CLI overrides
//! - `server`: Listener port and binding
//! - `echo`: Echo domains, TTL and debug flag
//! - `upstream`: Fallthrough upstream server
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod echo;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;

pub use echo::{EchoSection, TtlValue};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
