use crate::validators::is_valid_dns_name;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// TTL used when no `ttl` is configured (about one month).
pub const DEFAULT_TTL: u32 = 2_629_800;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EchoConfigError {
    #[error("'{0}' is not a valid domain name")]
    InvalidDomain(String),

    #[error("invalid TTL value: '{0}'")]
    InvalidTtl(String),

    #[error("there is no domain to handle")]
    NoDomainsConfigured,
}

/// Validated echo-domain suffix table.
///
/// Suffixes are lowercase, end with exactly one dot, are unique and keep the
/// order in which they were first configured. The table is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoConfig {
    suffixes: Vec<Arc<str>>,
    ttl: u32,
    debug: bool,
}

impl EchoConfig {
    /// Builds the table from raw domain strings and an optional raw TTL.
    pub fn build<I, S>(domains: I, ttl: Option<&str>, debug: bool) -> Result<Self, EchoConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut suffixes: Vec<Arc<str>> = Vec::new();
        for domain in domains {
            let suffix = normalize_domain(domain.as_ref())?;
            if !suffixes.iter().any(|s| **s == *suffix) {
                suffixes.push(suffix.into());
            }
        }

        let ttl = match ttl {
            Some(raw) => parse_ttl(raw)?,
            None => DEFAULT_TTL,
        };

        if debug {
            debug!(
                domains = suffixes.len(),
                suffixes = %suffixes.join(", "),
                ttl,
                "Echo debug mode is on"
            );
        }

        if suffixes.is_empty() {
            return Err(EchoConfigError::NoDomainsConfigured);
        }

        Ok(Self {
            suffixes,
            ttl,
            debug,
        })
    }

    pub fn suffixes(&self) -> &[Arc<str>] {
        &self.suffixes
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn debug(&self) -> bool {
        self.debug
    }
}

/// Lowercases `domain`, strips surrounding dots, validates it and appends a
/// single trailing dot.
pub fn normalize_domain(domain: &str) -> Result<String, EchoConfigError> {
    let trimmed = domain.to_lowercase();
    let trimmed = trimmed.trim_matches('.');
    if !is_valid_dns_name(trimmed) {
        return Err(EchoConfigError::InvalidDomain(trimmed.to_string()));
    }
    Ok(format!("{}.", trimmed))
}

/// Unsigned decimal, digits only: no sign, no surrounding whitespace.
pub fn parse_ttl(raw: &str) -> Result<u32, EchoConfigError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EchoConfigError::InvalidTtl(raw.to_string()));
    }
    raw.parse::<u32>()
        .map_err(|_| EchoConfigError::InvalidTtl(raw.to_string()))
}
