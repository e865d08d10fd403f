use ipecho_domain::config::TtlValue;
use ipecho_domain::{CliOverrides, Config, ConfigError, EchoConfigError};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.dns_port, 53);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.tcp_timeout_secs, 10);
    assert!(config.echo.domains.is_empty());
    assert!(config.echo.ttl.is_none());
    assert!(!config.echo.debug);
    assert!(config.upstream.server.is_none());
    assert_eq!(config.upstream.timeout_ms, 2000);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_deserialization_with_all_sections() {
    let config = Config::from_toml(
        r#"
        [server]
        dns_port = 5353
        bind_address = "127.0.0.1"

        [echo]
        domains = ["echo.example.com", "Echo.Example.com."]
        ttl = 60
        debug = true

        [upstream]
        server = "9.9.9.9:53"
        timeout_ms = 500

        [logging]
        level = "warn"
        "#,
    )
    .unwrap();

    assert_eq!(config.server.dns_port, 5353);
    assert_eq!(config.server.listen_address(), "127.0.0.1:5353");
    assert_eq!(config.echo.ttl, Some(TtlValue::Number(60)));
    assert_eq!(config.upstream.socket_addr().unwrap(), Some("9.9.9.9:53".parse().unwrap()));
    assert_eq!(config.upstream.timeout().as_millis(), 500);
    assert_eq!(config.logging.level, "warn");
    assert!(config.validate().is_ok());

    let echo = config.echo_config().unwrap();
    assert_eq!(echo.suffixes().len(), 1);
    assert_eq!(echo.ttl(), 60);
    assert!(echo.debug());
}

#[test]
fn test_ttl_accepts_string_form() {
    let config = Config::from_toml("[echo]\ndomains = [\"example.com\"]\nttl = \"120\"\n").unwrap();
    assert_eq!(config.echo_config().unwrap().ttl(), 120);
}

#[test]
fn test_negative_ttl_is_invalid() {
    let config = Config::from_toml("[echo]\ndomains = [\"example.com\"]\nttl = -5\n").unwrap();
    assert!(matches!(
        config.echo_config(),
        Err(ConfigError::Echo(EchoConfigError::InvalidTtl(_)))
    ));
}

#[test]
fn test_missing_domains_is_fatal() {
    let config = Config::from_toml("[echo]\nttl = 60\n").unwrap();
    assert!(matches!(
        config.echo_config(),
        Err(ConfigError::Echo(EchoConfigError::NoDomainsConfigured))
    ));
}

#[test]
fn test_directive_block_merges_with_table() {
    let config = Config::from_toml(
        r#"
        [echo]
        domains = ["first.example"]
        ttl = 30
        directives = """
        domain second.example
        domain FIRST.example
        ttl 90
        debug
        """
        "#,
    )
    .unwrap();

    let echo = config.echo_config().unwrap();
    let suffixes: Vec<&str> = echo.suffixes().iter().map(|s| s.as_ref()).collect();
    assert_eq!(suffixes, vec!["first.example.", "second.example."]);
    assert_eq!(echo.ttl(), 90);
    assert!(echo.debug());
}

#[test]
fn test_bad_directive_surfaces_as_config_error() {
    let config = Config::from_toml("[echo]\ndirectives = \"domain a.example\\nbogus\"\n").unwrap();
    assert!(matches!(config.echo_config(), Err(ConfigError::Directive(_))));
}

#[test]
fn test_cli_overrides_are_applied() {
    let overrides = CliOverrides {
        dns_port: Some(1053),
        bind_address: Some("::1".to_string()),
        log_level: Some("debug".to_string()),
        domains: vec!["cli.example".to_string()],
        ttl: Some("15".to_string()),
        debug: true,
        upstream: Some("127.0.0.1:5300".to_string()),
    };

    let path = std::env::temp_dir().join(format!("ipecho-overrides-{}.toml", std::process::id()));
    std::fs::write(&path, "[echo]\ndomains = [\"file.example\"]\nttl = 60\n").unwrap();
    let config = Config::load(path.to_str(), overrides).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.server.dns_port, 1053);
    assert_eq!(config.server.listen_address(), "[::1]:1053");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.upstream.server.as_deref(), Some("127.0.0.1:5300"));

    let echo = config.echo_config().unwrap();
    let suffixes: Vec<&str> = echo.suffixes().iter().map(|s| s.as_ref()).collect();
    assert_eq!(suffixes, vec!["file.example.", "cli.example."]);
    assert_eq!(echo.ttl(), 15);
    assert!(echo.debug());
}

#[test]
fn test_load_missing_file_fails() {
    let result = Config::load(Some("/nonexistent/ipecho.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_validate_rejects_zero_port_and_bad_upstream() {
    let mut config = Config::default();
    config.server.dns_port = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

    let mut config = Config::default();
    config.upstream.server = Some("not-an-address".to_string());
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_mistyped_field_is_a_parse_error() {
    let result = Config::from_toml("[echo]\ndomains = 5\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}
