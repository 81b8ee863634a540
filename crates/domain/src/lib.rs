//! DNSLink Gatekeeper Domain Layer
pub mod config;
pub mod decision;
pub mod errors;
pub mod link;

pub use config::{CliOverrides, Config, ConfigError, UpstreamKind};
pub use decision::{decide, Decision, DenyReason};
pub use errors::DomainError;
pub use link::{LinkEntry, LinkSet};
