pub mod config;
pub mod logging;

pub use config::{build_dns_handler, load_config};
pub use logging::init_logging;
