//! Addition service speaking a fixed-shape JSON-RPC 2.0 dialect over HTTP.
//!
//! Any request to `/rpc` is answered with `{"jsonrpc":"2.0","result":<sum>,"id":1}`
//! where `<sum>` adds the two integers found in the request body.
//! `GET /health` reports liveness.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod params;
pub mod protocol;
pub mod server;

pub mod schema;
