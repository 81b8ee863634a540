use dnslink_gatekeeper_domain::Decision;

pub trait DecisionLogger: Send + Sync {
    fn log_decision(&self, domain: &str, decision: &Decision);
}
