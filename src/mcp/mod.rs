//! Model Context Protocol plumbing: JSON-RPC envelopes, the request engine
//! and the stdio transport.

pub mod rpc;
pub mod server;
pub mod stdio;
