//! IP Echo Domain Layer
pub mod config;
pub mod directive;
pub mod echo_config;
pub mod errors;
pub mod question;
pub mod record;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use directive::{DirectiveError, EchoDirectives};
pub use echo_config::{EchoConfig, EchoConfigError, DEFAULT_TTL};
pub use errors::DomainError;
pub use question::{QueryClass, Question, RecordType};
pub use record::SynthesizedRecord;
