mod additional_check;
mod decision_logger;
mod link_resolver;

pub use additional_check::AdditionalCheck;
pub use decision_logger::DecisionLogger;
pub use link_resolver::LinkResolver;
