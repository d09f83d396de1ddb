use serde::Deserialize;
use serde_json::value::RawValue;

/// JSON-RPC 2.0 request envelope, reduced to the one member this service reads.
///
/// `jsonrpc`, `method` and `id` are accepted and ignored. `params` is kept as
/// raw text so operands can be checked against their literal spelling rather
/// than a lossy numeric conversion.
#[derive(Debug, Deserialize)]
pub struct SumRequest {
    #[serde(default)]
    pub params: Option<Box<RawValue>>,
}
