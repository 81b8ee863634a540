use async_trait::async_trait;
use dnslink_gatekeeper_application::ports::AdditionalCheck;

/// Default second-stage check: never rejects.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllowAll;

#[async_trait]
impl AdditionalCheck for AllowAll {
    async fn is_authorized(&self, _domain: &str) -> bool {
        true
    }
}
