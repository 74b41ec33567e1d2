//! # praisal-api
//!
//! HTTP bootstrap for the Praisal performance API.
//!
//! This crate owns the cross-cutting server concerns:
//! - request-body size ceilings for JSON and URL-encoded payloads
//! - the cross-origin policy for the browser client
//! - OpenAPI document generation and the interactive docs UI
//! - binding, readiness logging, and serving
//!
//! Business logic lives in the application router handed to
//! [`Server::serve`]; this crate never sees it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod docs;
pub mod error;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use server::Server;
