use async_trait::async_trait;
use ipecho_domain::DomainError;

/// Next hop for queries the echo resolver declines to answer.
#[async_trait]
pub trait UpstreamForwarder: Send + Sync {
    /// Send a wire-format query and return the wire-format response unchanged.
    async fn forward(&self, query: &[u8]) -> Result<Vec<u8>, DomainError>;

    /// Human-readable upstream address, for logging
    fn upstream(&self) -> String;
}
