use serde::{Deserialize, Serialize};

/// Trusted proxy configuration.
///
/// `trusted_proxies` is a comma-separated list of bare IPs and CIDR networks
/// consumed by `TrustedProxies::from_spec`. The default (empty string) trusts
/// nothing, so forwarding headers are never honored.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ProxyConfig {
    #[serde(default)]
    pub trusted_proxies: String,
}
