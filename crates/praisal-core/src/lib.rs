//! # praisal-core
//!
//! Domain types and contracts for the Praisal performance-review system.
//!
//! This crate holds everything the client and view layers share:
//! - Template summaries and their wire representation
//! - The role model and its capability predicates
//! - Listing-response normalization
//! - The [`TemplateGateway`] seam the views talk to the REST API through
//! - The read-only [`session::TokenStore`] seam for the persisted session

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod gateway;
pub mod role;
pub mod session;
pub mod types;
pub mod wire;

pub use gateway::{GatewayError, TemplateGateway};
pub use role::Role;
pub use session::{MemoryTokenStore, TokenStore};
pub use types::{RatingScale, TemplateId, TemplateSummary, TemplateType};
pub use wire::normalize_template_listing;
