//! Wire records exchanged with the Hinemos manager REST API.

pub mod check_info;
pub mod common;
pub mod monitor;
pub mod repository;

pub use check_info::*;
pub use common::*;
pub use monitor::*;
pub use repository::*;
