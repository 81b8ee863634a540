use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("No DNSLink record for {0}")]
    NoDnsLinkRecord(String),

    #[error("DNS lookup failed: {0}")]
    LookupFailed(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Resolver unavailable: {0}")]
    ResolverUnavailable(String),
}
