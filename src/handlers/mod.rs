pub mod health;
pub mod rpc;

use axum::http::StatusCode;

use crate::error::RpcError;
use crate::params;
use crate::protocol::RpcResponse;

/// Compute the result for one request body.
///
/// A body without an operand pair evaluates to `0`. This is the observable
/// contract, not an error.
pub fn evaluate(body: &str) -> Result<i64, RpcError> {
    match params::extract(body)? {
        Some(pair) => pair.checked_sum(),
        None => {
            tracing::debug!(body_len = body.len(), "no operand pair in body, answering 0");
            Ok(0)
        }
    }
}

/// Evaluate a body and shape the outcome into a status and response envelope.
pub fn answer(body: &str) -> (StatusCode, RpcResponse) {
    match evaluate(body) {
        Ok(sum) => (StatusCode::OK, RpcResponse::success(sum)),
        Err(err) => reject(&err),
    }
}

/// Map a request failure onto its status and JSON-RPC error envelope.
pub fn reject(err: &RpcError) -> (StatusCode, RpcResponse) {
    let status = err.status();
    tracing::warn!(status = status.as_u16(), "request rejected: {err}");
    (status, RpcResponse::error(err.into()))
}
