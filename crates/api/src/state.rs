use dnslink_gatekeeper_application::ports::DecisionLogger;
use dnslink_gatekeeper_application::use_cases::EvaluateDomainUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub evaluate_domain: Arc<EvaluateDomainUseCase>,
    pub decision_logger: Arc<dyn DecisionLogger>,
}
