use std::net::IpAddr;

use ipnetwork::{Ipv4Network, Ipv6Network};

use crate::errors::DomainError;

/// Immutable set of networks allowed to report client addresses via the
/// forwarding header. Built once at startup, shared read-only per request.
#[derive(Debug, Clone, Default)]
pub struct TrustedProxies {
    ipv4: Vec<Ipv4Network>,
    ipv6: Vec<Ipv6Network>,
}

impl TrustedProxies {
    /// Parse a comma-separated list of bare IPs and CIDR networks.
    ///
    /// Whitespace around tokens is ignored and empty tokens are skipped, so
    /// an empty or whitespace-only spec yields an empty set (trust nothing).
    /// A bare address becomes a host-only /32 or /128 network. Any malformed
    /// token aborts construction; no partial set is ever returned.
    pub fn from_spec(spec: &str) -> Result<Self, DomainError> {
        let mut ipv4 = Vec::new();
        let mut ipv6 = Vec::new();

        for token in spec.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            if token.contains('/') {
                let network: ipnetwork::IpNetwork =
                    token.parse().map_err(|e: ipnetwork::IpNetworkError| {
                        DomainError::InvalidTrustedProxy {
                            spec: token.to_string(),
                            reason: e.to_string(),
                        }
                    })?;
                match network {
                    ipnetwork::IpNetwork::V4(net) => ipv4.push(net),
                    ipnetwork::IpNetwork::V6(net) => ipv6.push(net),
                }
            } else {
                let ip: IpAddr =
                    token
                        .parse()
                        .map_err(|e: std::net::AddrParseError| {
                            DomainError::InvalidTrustedProxy {
                                spec: token.to_string(),
                                reason: e.to_string(),
                            }
                        })?;
                match ip {
                    IpAddr::V4(v4) => ipv4.push(Ipv4Network::from(v4)),
                    IpAddr::V6(v6) => ipv6.push(Ipv6Network::from(v6)),
                }
            }
        }

        Ok(Self { ipv4, ipv6 })
    }

    /// Whether `address` falls inside any configured network.
    ///
    /// Unparseable strings are never trusted (fail closed).
    pub fn is_trusted(&self, address: &str) -> bool {
        match address.parse::<IpAddr>() {
            Ok(ip) => self.contains(ip),
            Err(_) => false,
        }
    }

    pub fn contains(&self, ip: IpAddr) -> bool {
        match ip {
            IpAddr::V4(v4) => self.ipv4.iter().any(|net| net.contains(v4)),
            IpAddr::V6(v6) => self.ipv6.iter().any(|net| net.contains(v6)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ipv4.is_empty() && self.ipv6.is_empty()
    }

    pub fn ipv4_networks(&self) -> &[Ipv4Network] {
        &self.ipv4
    }

    pub fn ipv6_networks(&self) -> &[Ipv6Network] {
        &self.ipv6
    }
}
