#![doc = include_str!("../README.md")]
//!
//! ## Modules
//!
//! - [`client`] - Gateway HTTP client
//! - [`error`] - Error types
//! - [`paginate`] - Paginated function listing
//! - [`types`] - Wire types

pub mod client;
pub mod error;
pub mod paginate;
pub mod types;

pub use client::GatewayClient;
pub use error::{Error, Result};
pub use paginate::{FunctionIter, FunctionPages};
pub use types::{FunctionListPage, FunctionSummary, InvokeOutput};
