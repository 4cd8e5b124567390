use crate::state::AppState;
use axum::{
    extract::{ConnectInfo, FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use tracing::warn;

/// Resolved client address, stored as a request extension by
/// [`resolve_client_ip`] and available to handlers as an extractor.
#[derive(Debug, Clone)]
pub struct ClientIp(pub String);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ClientIp>()
            .cloned()
            .ok_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Middleware resolving the originating client address for every request.
///
/// The connection peer comes from `ConnectInfo` (requires serving with
/// `into_make_service_with_connect_info::<SocketAddr>()`); the forwarded
/// chain comes from every `X-Forwarded-For` value in order. Non-UTF-8 header
/// values are skipped rather than rejected.
pub async fn resolve_client_ip(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    mut request: Request,
    next: Next,
) -> Response {
    let forwarded = request
        .headers()
        .get_all("x-forwarded-for")
        .iter()
        .filter_map(|value| value.to_str().ok());

    let resolved = state.resolver.resolve(&peer.to_string(), forwarded);

    // A socket address always carries a port, so extraction cannot fail
    // here; keep the raw peer IP as a fallback anyway.
    let client_ip = if resolved.is_empty() {
        warn!(peer = %peer, "could not extract connection address, using peer IP");
        peer.ip().to_string()
    } else {
        resolved
    };

    request.extensions_mut().insert(ClientIp(client_ip));
    next.run(request).await
}
