use dnslink_gatekeeper_api::AppState;
use dnslink_gatekeeper_application::ports::{AdditionalCheck, DecisionLogger, LinkResolver};
use dnslink_gatekeeper_application::use_cases::EvaluateDomainUseCase;
use dnslink_gatekeeper_domain::Config;
use dnslink_gatekeeper_infrastructure::checks::AllowAll;
use dnslink_gatekeeper_infrastructure::dns::DnsLinkResolver;
use dnslink_gatekeeper_infrastructure::logging::TracingDecisionLogger;
use std::sync::Arc;

pub struct Services {
    pub resolver: Arc<dyn LinkResolver>,
    pub additional_check: Arc<dyn AdditionalCheck>,
    pub decision_logger: Arc<dyn DecisionLogger>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let resolver = DnsLinkResolver::new(&config.resolver)?;

        Ok(Self {
            resolver: Arc::new(resolver),
            additional_check: Arc::new(AllowAll),
            decision_logger: Arc::new(TracingDecisionLogger),
        })
    }

    pub fn into_app_state(self) -> AppState {
        let evaluate_domain = EvaluateDomainUseCase::new(self.resolver)
            .with_additional_check(self.additional_check);

        AppState {
            evaluate_domain: Arc::new(evaluate_domain),
            decision_logger: self.decision_logger,
        }
    }
}
