use clap::Parser;
use ipecho_domain::CliOverrides;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod bootstrap;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "ipecho")]
#[command(version)]
#[command(about = "IP Echo - answers A/AAAA queries with the address embedded in the name")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Echo domain, may be repeated
    #[arg(long = "domain", value_name = "DOMAIN")]
    domains: Vec<String>,

    /// TTL of synthesized records, in seconds
    #[arg(long)]
    ttl: Option<String>,

    /// Log every echo decision
    #[arg(long)]
    debug: bool,

    /// Upstream resolver (ip:port) for queries that are not echoed
    #[arg(short = 'u', long)]
    upstream: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        log_level: cli.log_level,
        domains: cli.domains,
        ttl: cli.ttl,
        debug: cli.debug,
        upstream: cli.upstream,
    };

    let (config, echo_config) = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config, echo_config.debug());

    info!("Starting IP Echo DNS Server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        dns_port = config.server.dns_port,
        bind = %config.server.bind_address,
        "Configuration loaded"
    );

    let handler = bootstrap::build_dns_handler(&config, Arc::new(echo_config))?;

    server::start_dns_server(
        config.server.listen_address(),
        handler,
        Duration::from_secs(config.server.tcp_timeout_secs),
    )
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
