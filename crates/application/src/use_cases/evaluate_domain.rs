use crate::ports::{AdditionalCheck, LinkResolver};
use dnslink_gatekeeper_domain::{decide, Decision, DenyReason};
use std::sync::Arc;
use tracing::debug;

/// Turns a requested domain into an Allow/Deny decision.
///
/// Holds no mutable state: every call resolves afresh and the result depends
/// only on the domain, the resolver response and the additional check.
pub struct EvaluateDomainUseCase {
    resolver: Arc<dyn LinkResolver>,
    additional_check: Option<Arc<dyn AdditionalCheck>>,
}

impl EvaluateDomainUseCase {
    pub fn new(resolver: Arc<dyn LinkResolver>) -> Self {
        Self {
            resolver,
            additional_check: None,
        }
    }

    pub fn with_additional_check(mut self, check: Arc<dyn AdditionalCheck>) -> Self {
        self.additional_check = Some(check);
        self
    }

    pub async fn execute(&self, domain: Option<&str>) -> Decision {
        let Some(domain) = domain.filter(|d| !d.is_empty()) else {
            return Decision::deny(DenyReason::InvalidInput);
        };

        let links = match self.resolver.resolve(domain).await {
            Ok(links) => links,
            Err(e) => {
                debug!(domain = %domain, error = %e, "DNSLink resolution failed");
                return Decision::deny_with(DenyReason::ResolutionFailed, e.to_string());
            }
        };

        debug!(
            domain = %domain,
            namespaces = links.namespace_count(),
            "DNSLink resolved"
        );

        let decision = decide(&links);

        match (&decision, &self.additional_check) {
            (Decision::Allow { .. }, Some(check)) if !check.is_authorized(domain).await => {
                Decision::deny(DenyReason::CheckRejected)
            }
            _ => decision,
        }
    }
}
