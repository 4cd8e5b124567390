use std::sync::Arc;

use realip_domain::{remote_addr, TrustedProxies};
use tracing::{instrument, trace};

/// Resolves the originating client address for a request.
///
/// Each call is a pure function of the connection address, the forwarding
/// header values, and the shared immutable trust set, so the service is safe
/// to use concurrently from any number of request handlers.
pub struct RemoteAddressService {
    trusted: Arc<TrustedProxies>,
}

impl RemoteAddressService {
    pub fn new(trusted: Arc<TrustedProxies>) -> Self {
        Self { trusted }
    }

    pub fn trusted_proxies(&self) -> &TrustedProxies {
        &self.trusted
    }

    /// Resolve the client address from a `host:port` connection address and
    /// the ordered `X-Forwarded-For` header values.
    ///
    /// Returns an empty string when the connection address has no port
    /// separator. Otherwise walks the flattened forwarded chain from its
    /// tail, accepting each hop only while the current candidate is itself a
    /// trusted proxy; the first untrusted candidate (or the last hop of an
    /// exhausted chain) is the answer.
    #[instrument(skip(self, forwarded_for), level = "debug")]
    pub fn resolve<'a, I>(&self, remote_addr: &str, forwarded_for: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let Some(host) = remote_addr::host_part(remote_addr) else {
            trace!("connection address has no port separator");
            return String::new();
        };

        let mut address = host.to_string();

        // Untrusted connection: the peer is the client, its header is noise.
        if !self.trusted.is_trusted(&address) {
            return address;
        }

        // Header values form one logical comma-separated chain; each trusted
        // proxy appends the peer address it observed to the end.
        let mut chain: Vec<&str> = forwarded_for
            .into_iter()
            .flat_map(|value| value.split(','))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect();

        // Walk backward while the current candidate is a trusted proxy. Each
        // popped token was appended by the proxy one hop nearer to us, so it
        // is only believable while that nearer hop is trusted.
        while self.trusted.is_trusted(&address) {
            let Some(hop) = chain.pop() else { break };
            trace!(hop, "accepting forwarded hop");
            address = hop.to_string();
        }

        address
    }
}
