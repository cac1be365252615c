//! Gateway → resolver forwarding configuration.

use serde::{Deserialize, Serialize};

/// Where the gateway forwards validated requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverClientConfig {
    /// Resolver base URL; requests go to `<base_url>/cep`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8081".to_string()
}

const fn default_connect_timeout() -> u64 {
    10
}

const fn default_timeout() -> u64 {
    30
}

impl Default for ResolverClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ResolverClientConfig {
    /// Full URL of the resolver's lookup endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/cep", self.base_url.trim_end_matches('/'))
    }
}
