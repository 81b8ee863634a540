#![allow(dead_code)]

pub mod mock_ports;

pub use mock_ports::*;

use axum::Router;
use dnslink_gatekeeper_api::{create_api_routes, AppState};
use dnslink_gatekeeper_application::use_cases::EvaluateDomainUseCase;
use std::sync::Arc;

pub struct TestApp {
    pub router: Router,
    pub resolver: MockLinkResolver,
    pub logger: RecordingDecisionLogger,
}

pub fn create_test_app() -> TestApp {
    create_test_app_with(MockLinkResolver::new(), None)
}

pub fn create_test_app_with(
    resolver: MockLinkResolver,
    check: Option<MockAdditionalCheck>,
) -> TestApp {
    let logger = RecordingDecisionLogger::new();

    let mut use_case = EvaluateDomainUseCase::new(Arc::new(resolver.clone()));
    if let Some(check) = check {
        use_case = use_case.with_additional_check(Arc::new(check));
    }

    let state = AppState {
        evaluate_domain: Arc::new(use_case),
        decision_logger: Arc::new(logger.clone()),
    };

    TestApp {
        router: create_api_routes(state),
        resolver,
        logger,
    }
}

/// Router wired like the binary: `AllowAll` second stage and the tracing logger.
pub fn create_wired_app(resolver: MockLinkResolver) -> Router {
    use dnslink_gatekeeper_infrastructure::checks::AllowAll;
    use dnslink_gatekeeper_infrastructure::logging::TracingDecisionLogger;

    let use_case = EvaluateDomainUseCase::new(Arc::new(resolver))
        .with_additional_check(Arc::new(AllowAll));

    create_api_routes(AppState {
        evaluate_domain: Arc::new(use_case),
        decision_logger: Arc::new(TracingDecisionLogger),
    })
}
