use ipecho_domain::{EchoConfig, QueryClass, Question, SynthesizedRecord};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Result of running the echo resolver over a batch of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EchoOutcome {
    /// At least one question produced a record. Records are in question order.
    Answered(Vec<SynthesizedRecord>),
    /// Nothing matched; the caller should hand the query to its next handler.
    NotAnswered,
}

impl EchoOutcome {
    pub fn is_answered(&self) -> bool {
        matches!(self, EchoOutcome::Answered(_))
    }

    pub fn records(&self) -> &[SynthesizedRecord] {
        match self {
            EchoOutcome::Answered(records) => records,
            EchoOutcome::NotAnswered => &[],
        }
    }
}

/// Answers A/AAAA questions whose name embeds an IP literal under one of the
/// configured echo domains.
///
/// Stateless: the suffix table is shared read-only, so one instance can serve
/// every concurrent query.
pub struct ResolveEchoQueryUseCase {
    config: Arc<EchoConfig>,
}

impl ResolveEchoQueryUseCase {
    pub fn new(config: Arc<EchoConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EchoConfig {
        &self.config
    }

    pub fn execute(&self, questions: &[Question]) -> EchoOutcome {
        let records: Vec<SynthesizedRecord> = questions
            .iter()
            .filter_map(|question| self.resolve_question(question))
            .collect();

        if records.is_empty() {
            return EchoOutcome::NotAnswered;
        }

        if self.config.debug() {
            debug!(records = records.len(), "Answering echo query");
        }
        EchoOutcome::Answered(records)
    }

    fn resolve_question(&self, question: &Question) -> Option<SynthesizedRecord> {
        if question.class != QueryClass::Internet || !question.record_type.is_address() {
            return None;
        }

        let address = self.parse_address(&question.name)?;

        if self.config.debug() {
            let family = if address.is_ipv4() { "IPv4" } else { "IPv6" };
            debug!(domain = %question.name, address = %address, family, "Parsed echo address");
        }

        Some(SynthesizedRecord::new(
            Arc::clone(&question.name),
            self.config.ttl(),
            address,
        ))
    }

    fn parse_address(&self, name: &str) -> Option<IpAddr> {
        let debug = self.config.debug();
        if debug {
            debug!(domain = %name, "Echo query");
        }

        // ASCII lowercasing keeps byte offsets aligned with `name`.
        let lowered = name.to_ascii_lowercase();
        let Some(suffix) = self
            .config
            .suffixes()
            .iter()
            .map(|suffix| &**suffix)
            .find(|suffix| lowered.ends_with(*suffix))
        else {
            if debug {
                debug!(
                    domain = %name,
                    domains = %self.config.suffixes().join(", "),
                    "Query does not end with an echo domain"
                );
            }
            return None;
        };

        let subdomain = name.get(..name.len() - suffix.len())?;
        if subdomain.is_empty() {
            if debug {
                debug!(domain = %name, "Query has no subdomain");
            }
            return None;
        }

        let subdomain = subdomain.trim_matches('.');
        if subdomain.is_empty() {
            if debug {
                debug!(domain = %name, "Parsed subdomain is empty");
            }
            return None;
        }

        if debug {
            debug!(domain = %name, subdomain, "Parsed subdomain");
        }

        match subdomain.parse::<IpAddr>() {
            Ok(IpAddr::V6(v6)) => Some(
                v6.to_ipv4_mapped()
                    .map(IpAddr::V4)
                    .unwrap_or(IpAddr::V6(v6)),
            ),
            Ok(v4) => Some(v4),
            Err(_) => {
                if debug {
                    debug!(domain = %name, subdomain, "Subdomain is not an IP literal");
                }
                None
            }
        }
    }
}
