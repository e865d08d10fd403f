use ipecho_domain::Config;
use tracing::{info, Level};

pub fn init_logging(config: &Config, echo_debug: bool) {
    let mut log_level = config.logging.level.parse().unwrap_or(Level::INFO);
    if echo_debug {
        log_level = log_level.max(Level::DEBUG);
    }

    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_max_level(log_level)
        .with_ansi(true)
        .init();

    info!("Logging initialized at level: {}", log_level);
}
