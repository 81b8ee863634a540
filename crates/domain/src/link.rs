use std::collections::BTreeMap;
use std::sync::Arc;

/// A single DNSLink identifier as reported by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub identifier: Arc<str>,
    pub ttl: u32,
}

impl LinkEntry {
    pub fn new(identifier: impl Into<Arc<str>>, ttl: u32) -> Self {
        Self {
            identifier: identifier.into(),
            ttl,
        }
    }
}

/// Link entries grouped by namespace.
///
/// Namespaces are kept in a `BTreeMap`, so iteration is always lexicographic
/// ascending by key. The order of entries inside a namespace is whatever the
/// resolver produced and is never changed here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSet {
    links: BTreeMap<String, Vec<LinkEntry>>,
}

impl LinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entry` to the end of `namespace`'s sequence.
    pub fn push(&mut self, namespace: impl Into<String>, entry: LinkEntry) {
        self.links.entry(namespace.into()).or_default().push(entry);
    }

    /// Builder form used by resolvers and tests. Registers the namespace even
    /// when `entries` is empty.
    pub fn with_namespace(mut self, namespace: impl Into<String>, entries: Vec<LinkEntry>) -> Self {
        self.links.entry(namespace.into()).or_default().extend(entries);
        self
    }

    pub fn entries(&self, namespace: &str) -> Option<&[LinkEntry]> {
        self.links.get(namespace).map(Vec::as_slice)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.links.keys().map(String::as_str)
    }

    pub fn namespace_count(&self) -> usize {
        self.links.len()
    }

    /// True when no namespace carries at least one entry.
    pub fn is_empty(&self) -> bool {
        self.first_link().is_none()
    }

    /// First entry of the lexicographically smallest non-empty namespace.
    pub fn first_link(&self) -> Option<(&str, &LinkEntry)> {
        self.links
            .iter()
            .find_map(|(namespace, entries)| entries.first().map(|e| (namespace.as_str(), e)))
    }
}

impl From<BTreeMap<String, Vec<LinkEntry>>> for LinkSet {
    fn from(links: BTreeMap<String, Vec<LinkEntry>>) -> Self {
        Self { links }
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<LinkEntry>)> for LinkSet {
    fn from_iter<I: IntoIterator<Item = (N, Vec<LinkEntry>)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |set, (ns, entries)| set.with_namespace(ns, entries))
    }
}
