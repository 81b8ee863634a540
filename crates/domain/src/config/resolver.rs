use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MAX_TIMEOUT_SECS: u64 = 300;
pub const MAX_ATTEMPTS: usize = 10;

/// Which nameservers the DNSLink resolver talks to.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamKind {
    /// Whatever the host's resolv.conf (or platform equivalent) says.
    #[default]
    System,

    Google,

    Cloudflare,

    Quad9,
}

impl UpstreamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Google => "google",
            Self::Cloudflare => "cloudflare",
            Self::Quad9 => "quad9",
        }
    }
}

impl fmt::Display for UpstreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpstreamKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(Self::System),
            "google" => Ok(Self::Google),
            "cloudflare" => Ok(Self::Cloudflare),
            "quad9" => Ok(Self::Quad9),
            other => Err(format!(
                "unknown upstream '{}': expected system, google, cloudflare or quad9",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub upstream: UpstreamKind,

    /// Per-attempt lookup timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_attempts")]
    pub attempts: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            upstream: UpstreamKind::default(),
            timeout_secs: default_timeout_secs(),
            attempts: default_attempts(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_attempts() -> usize {
    2
}
