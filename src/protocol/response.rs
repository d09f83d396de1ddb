use serde::Serialize;

/// Protocol tag carried by every response.
pub const JSONRPC_VERSION: &str = "2.0";

/// Request identifier carried by every response. Never derived from input.
pub const RESPONSE_ID: i64 = 1;

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 response layer
// ---------------------------------------------------------------------------

/// Fixed-shape response envelope.
///
/// Field order is part of the wire contract: `jsonrpc`, then `result` or
/// `error`, then `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RpcResponse {
    pub jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: i64,
}

impl RpcResponse {
    pub fn success(result: i64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            result: Some(result),
            error: None,
            id: RESPONSE_ID,
        }
    }

    pub fn error(error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            result: None,
            error: Some(error),
            id: RESPONSE_ID,
        }
    }

    /// Serialize to the exact text written on the wire.
    pub fn to_body(&self) -> String {
        serde_json::to_string(self).expect("RpcResponse must serialize to JSON string")
    }
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcError {
    pub fn parse_error_with(detail: impl Into<String>) -> Self {
        Self { code: -32700, message: detail.into() }
    }

    pub fn invalid_request_with(detail: impl Into<String>) -> Self {
        Self { code: -32600, message: detail.into() }
    }

    pub fn invalid_params(detail: impl Into<String>) -> Self {
        Self { code: -32602, message: detail.into() }
    }

    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self { code: -32603, message: detail.into() }
    }
}
