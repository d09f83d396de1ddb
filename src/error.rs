use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;

use crate::protocol::JsonRpcError;

/// Invalid value in the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    NotPositive { key: &'static str, value: String },
}

/// Failure to bring up or keep running the HTTP listener.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("listener failed: {0}")]
    Serve(#[from] std::io::Error),
}

/// Per-request failure. Each variant maps to one HTTP status and one JSON-RPC code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RpcError {
    #[error("Operand out of range: {digits}-digit literal exceeds a 64-bit signed integer")]
    OperandOutOfRange { digits: usize },
    #[error("Sum overflows: {left} + {right}")]
    SumOverflow { left: i64, right: i64 },
    #[error("Payload too large: {declared} bytes (limit {limit})")]
    PayloadTooLarge { declared: u64, limit: usize },
    #[error("Parse error: {0}")]
    BodyRead(String),
    #[error("Request body not received within {0:?}")]
    Timeout(Duration),
}

impl RpcError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::OperandOutOfRange { .. } | Self::SumOverflow { .. } => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::BodyRead(_) => StatusCode::BAD_REQUEST,
            Self::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
        }
    }
}

impl From<&RpcError> for JsonRpcError {
    fn from(err: &RpcError) -> Self {
        let message = err.to_string();
        match err {
            RpcError::OperandOutOfRange { .. } | RpcError::SumOverflow { .. } => {
                JsonRpcError::invalid_params(message)
            }
            RpcError::PayloadTooLarge { .. } => JsonRpcError::invalid_request_with(message),
            RpcError::BodyRead(_) => JsonRpcError::parse_error_with(message),
            RpcError::Timeout(_) => JsonRpcError::internal_error(message),
        }
    }
}
