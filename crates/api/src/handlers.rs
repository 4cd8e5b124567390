use crate::middleware::ClientIp;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub client_ip: String,
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn whoami(ClientIp(client_ip): ClientIp) -> Json<WhoamiResponse> {
    debug!(%client_ip, "whoami");
    Json(WhoamiResponse { client_ip })
}
