use dnslink_gatekeeper_application::ports::DecisionLogger;
use dnslink_gatekeeper_domain::Decision;
use tracing::info;

/// `[Allow] <domain>: Found <path>` or `[Deny] <domain>: <reason>`.
pub fn format_decision(domain: &str, decision: &Decision) -> String {
    let tag = if decision.is_allowed() { "Allow" } else { "Deny" };
    format!("[{}] {}: {}", tag, domain, decision.describe())
}

/// Writes one line per decision through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDecisionLogger;

impl DecisionLogger for TracingDecisionLogger {
    fn log_decision(&self, domain: &str, decision: &Decision) {
        let line = format_decision(domain, decision);
        match decision {
            Decision::Allow { path } => {
                info!(domain = %domain, path = %path, allowed = true, "{}", line)
            }
            Decision::Deny { reason, .. } => {
                info!(domain = %domain, reason = %reason, allowed = false, "{}", line)
            }
        }
    }
}
