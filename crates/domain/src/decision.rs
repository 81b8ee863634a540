use crate::link::LinkSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenyReason {
    InvalidInput,
    ResolutionFailed,
    EmptyLinkSet,
    CheckRejected,
}

impl DenyReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DenyReason::InvalidInput => "invalid_input",
            DenyReason::ResolutionFailed => "resolution_failed",
            DenyReason::EmptyLinkSet => "empty_link_set",
            DenyReason::CheckRejected => "check_rejected",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating a domain.
///
/// `detail` on a denial is diagnostic text for the server log (for example the
/// resolver's error message). It never reaches the HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow { path: String },
    Deny {
        reason: DenyReason,
        detail: Option<String>,
    },
}

impl Decision {
    pub fn allow(namespace: &str, identifier: &str) -> Self {
        Decision::Allow {
            path: format!("/{}/{}", namespace, identifier),
        }
    }

    pub fn deny(reason: DenyReason) -> Self {
        Decision::Deny {
            reason,
            detail: None,
        }
    }

    pub fn deny_with(reason: DenyReason, detail: impl Into<String>) -> Self {
        Decision::Deny {
            reason,
            detail: Some(detail.into()),
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow { .. })
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            Decision::Allow { path } => Some(path),
            Decision::Deny { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<DenyReason> {
        match self {
            Decision::Allow { .. } => None,
            Decision::Deny { reason, .. } => Some(*reason),
        }
    }

    /// Human-readable summary used for the per-request log line.
    pub fn describe(&self) -> String {
        match self {
            Decision::Allow { path } => format!("Found {}", path),
            Decision::Deny { reason, detail } => match (reason, detail) {
                (DenyReason::InvalidInput, _) => "Domain required".to_string(),
                (DenyReason::ResolutionFailed, Some(detail)) => {
                    format!("No valid DNSLink ({})", detail)
                }
                (DenyReason::ResolutionFailed, None) => "No valid DNSLink".to_string(),
                (DenyReason::EmptyLinkSet, _) => "No valid DNSLink found in result".to_string(),
                (DenyReason::CheckRejected, _) => {
                    "Rejected by additional authorization check".to_string()
                }
            },
        }
    }
}

/// Selects the canonical link for a resolved link set.
///
/// Namespaces are scanned in ascending lexicographic order and the first one
/// with a non-empty sequence wins; within it the first entry is taken as-is.
pub fn decide(links: &LinkSet) -> Decision {
    match links.first_link() {
        Some((namespace, entry)) => Decision::allow(namespace, &entry.identifier),
        None => Decision::deny(DenyReason::EmptyLinkSet),
    }
}
