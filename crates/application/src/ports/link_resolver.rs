use async_trait::async_trait;
use dnslink_gatekeeper_domain::{DomainError, LinkSet};

/// Produces the DNSLink record set published for a domain.
///
/// Any `Err` is treated as an authorization failure by the caller. Timeouts are
/// the implementation's responsibility and should surface as an error.
#[async_trait]
pub trait LinkResolver: Send + Sync {
    async fn resolve(&self, domain: &str) -> Result<LinkSet, DomainError>;
}
