use ipecho_application::use_cases::ResolveEchoQueryUseCase;
use ipecho_domain::{CliOverrides, Config, EchoConfig};
use ipecho_infrastructure::dns::{DnsServerHandler, UdpForwarder};
use std::sync::Arc;
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<(Config, EchoConfig)> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    let echo_config = config.echo_config()?;

    Ok((config, echo_config))
}

pub fn build_dns_handler(
    config: &Config,
    echo_config: Arc<EchoConfig>,
) -> anyhow::Result<DnsServerHandler> {
    info!(
        domains = %echo_config.suffixes().join(", "),
        ttl = echo_config.ttl(),
        debug = echo_config.debug(),
        "Echo domains configured"
    );

    let use_case = Arc::new(ResolveEchoQueryUseCase::new(echo_config));
    let handler = DnsServerHandler::new(use_case);

    match config.upstream.socket_addr()? {
        Some(upstream) => {
            info!(
                upstream = %upstream,
                timeout_ms = config.upstream.timeout_ms,
                "Unanswered queries will be forwarded"
            );
            let forwarder = UdpForwarder::new(upstream, config.upstream.timeout());
            Ok(handler.with_upstream(Arc::new(forwarder)))
        }
        None => {
            info!("No upstream configured, unanswered queries get SERVFAIL");
            Ok(handler)
        }
    }
}
