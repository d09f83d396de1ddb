pub mod request;
pub mod response;

pub use request::SumRequest;
pub use response::{JsonRpcError, RpcResponse, JSONRPC_VERSION, RESPONSE_ID};
