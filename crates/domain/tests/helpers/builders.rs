#![allow(dead_code)]
use dnslink_gatekeeper_domain::{LinkEntry, LinkSet};

pub const DEFAULT_TTL: u32 = 300;

pub struct LinkSetBuilder {
    set: LinkSet,
}

impl LinkSetBuilder {
    pub fn new() -> Self {
        Self {
            set: LinkSet::new(),
        }
    }

    pub fn namespace(mut self, namespace: &str, identifiers: &[&str]) -> Self {
        let entries = identifiers
            .iter()
            .map(|id| LinkEntry::new(*id, DEFAULT_TTL))
            .collect();
        self.set = self.set.with_namespace(namespace, entries);
        self
    }

    pub fn build(self) -> LinkSet {
        self.set
    }
}

impl Default for LinkSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
