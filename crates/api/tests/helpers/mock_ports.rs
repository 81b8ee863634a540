#![allow(dead_code)]

use async_trait::async_trait;
use dnslink_gatekeeper_application::ports::{AdditionalCheck, DecisionLogger, LinkResolver};
use dnslink_gatekeeper_domain::{Decision, DomainError, LinkEntry, LinkSet};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MockLinkResolver {
    responses: Arc<RwLock<HashMap<String, Result<LinkSet, DomainError>>>>,
    calls: Arc<AtomicUsize>,
}

impl MockLinkResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_links(&self, domain: &str, links: LinkSet) {
        self.responses
            .write()
            .unwrap()
            .insert(domain.to_string(), Ok(links));
    }

    pub fn set_error(&self, domain: &str, error: DomainError) {
        self.responses
            .write()
            .unwrap()
            .insert(domain.to_string(), Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LinkResolver for MockLinkResolver {
    async fn resolve(&self, domain: &str) -> Result<LinkSet, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .read()
            .unwrap()
            .get(domain)
            .cloned()
            .unwrap_or_else(|| Err(DomainError::NoDnsLinkRecord(domain.to_string())))
    }
}

#[derive(Clone, Default)]
pub struct MockAdditionalCheck {
    rejected: Arc<RwLock<HashSet<String>>>,
    calls: Arc<AtomicUsize>,
}

impl MockAdditionalCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(&self, domain: &str) {
        self.rejected.write().unwrap().insert(domain.to_string());
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AdditionalCheck for MockAdditionalCheck {
    async fn is_authorized(&self, domain: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        !self.rejected.read().unwrap().contains(domain)
    }
}

#[derive(Clone, Default)]
pub struct RecordingDecisionLogger {
    entries: Arc<RwLock<Vec<(String, Decision)>>>,
}

impl RecordingDecisionLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(String, Decision)> {
        self.entries.read().unwrap().clone()
    }
}

impl DecisionLogger for RecordingDecisionLogger {
    fn log_decision(&self, domain: &str, decision: &Decision) {
        self.entries
            .write()
            .unwrap()
            .push((domain.to_string(), decision.clone()));
    }
}

pub fn links(namespaces: &[(&str, &[&str])]) -> LinkSet {
    namespaces
        .iter()
        .map(|(ns, ids)| {
            (
                *ns,
                ids.iter().map(|id| LinkEntry::new(*id, 300)).collect(),
            )
        })
        .collect()
}
