//! Typed client for the Hinemos manager REST API.
//!
//! [`client::HinemosClient`] owns the session; [`repository::RepositoryApi`] and
//! [`monitor::MonitorApi`] build requests on top of it.

pub mod client;
pub mod error;
pub mod models;
pub mod monitor;
pub mod repository;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{ClientSettings, HinemosClient};
pub use error::HinemosError;
pub use transport::{ReqwestTransport, Transport};
