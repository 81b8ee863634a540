use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use dnslink_gatekeeper_domain::{Decision, DenyReason};

use crate::{dto::CheckQuery, errors::ApiError, state::AppState};

/// `GET /check?domain=<domain>`
///
/// 200 on Allow, 403 on any denial, 400 when the domain is missing. Allow and
/// deny responses have an empty body; the deny reason only reaches the log.
pub async fn check_domain(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<StatusCode, ApiError> {
    let params = CheckQuery::from_pairs(pairs);
    let domain = params.domain.as_deref();
    let decision = state.evaluate_domain.execute(domain).await;

    state
        .decision_logger
        .log_decision(domain.unwrap_or_default(), &decision);

    match decision {
        Decision::Allow { .. } => Ok(StatusCode::OK),
        Decision::Deny {
            reason: DenyReason::InvalidInput,
            ..
        } => Err(ApiError::DomainRequired),
        Decision::Deny { .. } => Ok(StatusCode::FORBIDDEN),
    }
}
