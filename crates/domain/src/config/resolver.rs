use serde::{Deserialize, Serialize};

/// Upstream resolution settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Recursive DNS server queried over UDP (default: "1.1.1.1:53")
    #[serde(default = "default_upstream")]
    pub upstream: String,

    /// Per-query timeout in milliseconds (default: 2000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            upstream: default_upstream(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_upstream() -> String {
    "1.1.1.1:53".to_string()
}

fn default_timeout_ms() -> u64 {
    2000
}
