//! Tool and resource tables shared by every binding.
//!
//! The tables only translate between agent-facing JSON and the typed
//! [`crate::hinemos`] client.

pub mod resources;
pub mod summaries;
pub mod tools;
