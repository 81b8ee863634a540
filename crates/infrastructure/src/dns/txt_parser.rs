use dnslink_gatekeeper_domain::{LinkEntry, LinkSet};
use std::collections::BTreeMap;

const DNSLINK_LABEL: &str = "_dnslink";
const ENTRY_PREFIX: &str = "dnslink=";

/// Name queried for a domain's DNSLink TXT records.
pub fn dnslink_name(domain: &str) -> String {
    format!("{}.{}", DNSLINK_LABEL, domain.trim_end_matches('.'))
}

/// Splits a `dnslink=/<namespace>/<identifier>` TXT value.
///
/// Returns `None` for anything else, including an empty namespace or
/// identifier and namespaces containing whitespace.
pub fn parse_entry(value: &str) -> Option<(&str, &str)> {
    let path = value.trim().strip_prefix(ENTRY_PREFIX)?.trim();
    let (namespace, identifier) = path.strip_prefix('/')?.split_once('/')?;
    let identifier = identifier.trim();

    if namespace.is_empty()
        || identifier.is_empty()
        || namespace.chars().any(char::is_whitespace)
    {
        return None;
    }

    Some((namespace, identifier))
}

/// Groups raw TXT values (with their TTLs) into a link set.
///
/// Malformed values are skipped. Within a namespace duplicate identifiers are
/// collapsed and the remaining entries are sorted by identifier, so the result
/// does not depend on the order the DNS answer happened to arrive in.
pub fn build_link_set<I, S>(records: I) -> LinkSet
where
    I: IntoIterator<Item = (S, u32)>,
    S: AsRef<str>,
{
    let mut links: BTreeMap<String, Vec<LinkEntry>> = BTreeMap::new();

    for (value, ttl) in records {
        let Some((namespace, identifier)) = parse_entry(value.as_ref()) else {
            continue;
        };

        let entries = links.entry(namespace.to_string()).or_default();
        if entries.iter().all(|e| e.identifier.as_ref() != identifier) {
            entries.push(LinkEntry::new(identifier, ttl));
        }
    }

    for entries in links.values_mut() {
        entries.sort_by(|a, b| a.identifier.cmp(&b.identifier));
    }

    LinkSet::from(links)
}
