use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::config::ServerConfig;
use crate::error::RpcError;
use crate::protocol::RpcResponse;

/// Handle a call to `/rpc`. The HTTP method is not checked.
///
/// Reads the whole body within the configured size and time limits, decodes
/// it as UTF-8 (lossily), evaluates it and writes the fixed-shape envelope.
pub async fn handle(
    State(config): State<Arc<ServerConfig>>,
    headers: HeaderMap,
    body: Body,
) -> Response {
    let text = match read_body(&config, &headers, body).await {
        Ok(text) => text,
        Err(err) => {
            let (status, response) = super::reject(&err);
            return json_reply(status, &response);
        }
    };

    let (status, response) = super::answer(&text);
    tracing::debug!(status = status.as_u16(), result = ?response.result, "rpc answered");
    json_reply(status, &response)
}

async fn read_body(
    config: &ServerConfig,
    headers: &HeaderMap,
    body: Body,
) -> Result<String, RpcError> {
    if let Some(declared) = declared_length(headers) {
        if declared > config.max_body_bytes as u64 {
            return Err(RpcError::PayloadTooLarge {
                declared,
                limit: config.max_body_bytes,
            });
        }
    }

    let read = axum::body::to_bytes(body, config.max_body_bytes);
    let bytes = tokio::time::timeout(config.request_timeout, read)
        .await
        .map_err(|_| RpcError::Timeout(config.request_timeout))?
        .map_err(|e| RpcError::BodyRead(e.to_string()))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn declared_length(headers: &HeaderMap) -> Option<u64> {
    headers.get(CONTENT_LENGTH)?.to_str().ok()?.trim().parse().ok()
}

fn json_reply(status: StatusCode, response: &RpcResponse) -> Response {
    (status, [(CONTENT_TYPE, "application/json")], response.to_body()).into_response()
}
