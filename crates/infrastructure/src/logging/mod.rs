pub mod decision_log;

pub use decision_log::{format_decision, TracingDecisionLogger};
