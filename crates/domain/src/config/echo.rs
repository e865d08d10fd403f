use super::errors::ConfigError;
use crate::directive::EchoDirectives;
use crate::echo_config::EchoConfig;
use serde::{Deserialize, Serialize};

/// TTL as written in the config file: `ttl = 60` or `ttl = "60"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TtlValue {
    Number(i64),
    Text(String),
}

impl TtlValue {
    pub fn as_raw(&self) -> String {
        match self {
            TtlValue::Number(n) => n.to_string(),
            TtlValue::Text(s) => s.clone(),
        }
    }
}

/// `[echo]` section of the config file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EchoSection {
    /// Echo domains, e.g. ["echo.example.com"]
    #[serde(default)]
    pub domains: Vec<String>,

    /// TTL of synthesized records; 2629800 seconds when unset
    #[serde(default)]
    pub ttl: Option<TtlValue>,

    #[serde(default)]
    pub debug: bool,

    /// Optional directive block (`domain ...`, `ttl ...`, `debug`).
    /// Its domains are appended after `domains`; its ttl and debug win.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directives: Option<String>,
}

impl EchoSection {
    /// Merges the table values with the directive block and builds the
    /// validated suffix table.
    pub fn build(&self) -> Result<EchoConfig, ConfigError> {
        let mut domains = self.domains.clone();
        let mut ttl = self.ttl.as_ref().map(TtlValue::as_raw);
        let mut debug = self.debug;

        if let Some(block) = &self.directives {
            let parsed = EchoDirectives::parse(block)?;
            domains.extend(parsed.domains);
            if parsed.ttl.is_some() {
                ttl = parsed.ttl;
            }
            debug |= parsed.debug;
        }

        Ok(EchoConfig::build(&domains, ttl.as_deref(), debug)?)
    }
}
