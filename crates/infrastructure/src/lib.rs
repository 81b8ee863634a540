//! DNSLink Gatekeeper Infrastructure Layer
pub mod checks;
pub mod dns;
pub mod logging;
