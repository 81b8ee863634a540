use async_trait::async_trait;

/// Second authorization stage, consulted only for domains that already passed
/// the DNSLink check.
#[async_trait]
pub trait AdditionalCheck: Send + Sync {
    async fn is_authorized(&self, domain: &str) -> bool;
}
