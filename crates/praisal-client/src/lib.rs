//! # praisal-client
//!
//! HTTP access to the Praisal performance API.
//!
//! This crate provides:
//! - [`ApiClient`], the reqwest-backed implementation of
//!   `praisal_core::TemplateGateway`
//! - [`FileTokenStore`], the persisted session token (the local-storage
//!   analog of the browser client)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod error;
pub mod session;

pub use client::ApiClient;
pub use error::{Error, Result};
pub use session::FileTokenStore;
