//! HTTP binding: REST views of the tool and resource tables plus the `/mcp`
//! JSON-RPC endpoint.

pub mod handlers;
