use async_trait::async_trait;
use dnslink_gatekeeper_application::ports::LinkResolver;
use dnslink_gatekeeper_domain::config::{ResolverConfig, UpstreamKind};
use dnslink_gatekeeper_domain::{DomainError, LinkSet};
use hickory_resolver::config::ResolverConfig as HickoryResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::rr::rdata::TXT;
use hickory_resolver::proto::rr::RData;
use hickory_resolver::{Resolver, TokioResolver};
use std::time::Duration;
use tracing::{debug, info};

use super::txt_parser::{build_link_set, dnslink_name};

/// Resolves DNSLink records by querying TXT at `_dnslink.<domain>`.
///
/// Hickory's answer cache is disabled so every call goes to the network.
pub struct DnsLinkResolver {
    resolver: TokioResolver,
    deadline: Duration,
}

impl DnsLinkResolver {
    pub fn new(config: &ResolverConfig) -> Result<Self, DomainError> {
        let mut builder = match config.upstream {
            UpstreamKind::System => TokioResolver::builder_tokio()
                .map_err(|e| DomainError::ResolverUnavailable(e.to_string()))?,
            UpstreamKind::Google => Resolver::builder_with_config(
                HickoryResolverConfig::google(),
                TokioConnectionProvider::default(),
            ),
            UpstreamKind::Cloudflare => Resolver::builder_with_config(
                HickoryResolverConfig::cloudflare(),
                TokioConnectionProvider::default(),
            ),
            UpstreamKind::Quad9 => Resolver::builder_with_config(
                HickoryResolverConfig::quad9(),
                TokioConnectionProvider::default(),
            ),
        };

        let timeout = Duration::from_secs(config.timeout_secs);
        let options = builder.options_mut();
        options.timeout = timeout;
        options.attempts = config.attempts;
        options.cache_size = 0;

        info!(
            upstream = %config.upstream,
            timeout_secs = config.timeout_secs,
            attempts = config.attempts,
            "DNSLink resolver created"
        );

        Ok(Self {
            resolver: builder.build(),
            deadline: lookup_deadline(timeout, config.attempts),
        })
    }

    fn txt_value(txt: &TXT) -> String {
        txt.txt_data()
            .iter()
            .map(|chunk| String::from_utf8_lossy(chunk))
            .collect()
    }
}

/// Overall bound for one lookup: the per-attempt timeout times the number of
/// attempts, saturating at `Duration::MAX`.
pub fn lookup_deadline(timeout: Duration, attempts: usize) -> Duration {
    u32::try_from(attempts.max(1))
        .ok()
        .and_then(|n| timeout.checked_mul(n))
        .unwrap_or(Duration::MAX)
}

#[async_trait]
impl LinkResolver for DnsLinkResolver {
    async fn resolve(&self, domain: &str) -> Result<LinkSet, DomainError> {
        let name = dnslink_name(domain);

        debug!(domain = %domain, name = %name, "Querying DNSLink TXT records");

        let lookup = tokio::time::timeout(self.deadline, self.resolver.txt_lookup(name.as_str()))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| DomainError::LookupFailed(e.to_string()))?;

        let records: Vec<(String, u32)> = lookup
            .as_lookup()
            .record_iter()
            .filter_map(|record| match record.data() {
                RData::TXT(txt) => Some((Self::txt_value(txt), record.ttl())),
                _ => None,
            })
            .collect();

        if records.is_empty() {
            return Err(DomainError::NoDnsLinkRecord(domain.to_string()));
        }

        let links = build_link_set(records);

        debug!(
            domain = %domain,
            namespaces = links.namespace_count(),
            "DNSLink TXT records parsed"
        );

        Ok(links)
    }
}
