//! The REST boundary the template views talk through.
//!
//! [`TemplateGateway`] is the seam between view logic and HTTP: the views
//! depend on the trait, `praisal-client` implements it over reqwest, and
//! tests substitute in-memory fakes. Credentials are passed per call rather
//! than held by the gateway, so a single gateway serves any session.

use async_trait::async_trait;

use crate::types::{TemplateId, TemplateSummary};

/// Errors crossing the template REST boundary.
///
/// Variants mirror the failure taxonomy the views map to user-visible
/// notices: authentication, authorization, validation, everything else.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The session token is missing, expired, or rejected (HTTP 401).
    #[error("authentication failed")]
    Unauthorized,

    /// Authenticated but not allowed (HTTP 403).
    #[error("insufficient permission")]
    Forbidden,

    /// The server rejected the request as invalid (HTTP 400).
    #[error("request rejected by server")]
    BadRequest {
        /// Server-provided message, when the error body carried one.
        message: Option<String>,
    },

    /// Any other failure status.
    #[error("unexpected response status {status}")]
    Unexpected {
        /// HTTP status code.
        status: u16,
        /// Server-provided message, when present.
        message: Option<String>,
    },

    /// The request never completed (connection refused, DNS, timeout).
    #[error("transport error: {0}")]
    Transport(String),
}

impl GatewayError {
    /// The message the server attached to the failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GatewayError::BadRequest { message }
            | GatewayError::Unexpected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Async boundary to the performance-template REST API.
#[async_trait]
pub trait TemplateGateway: Send + Sync {
    /// Fetch the template listing visible to the bearer of `token`.
    ///
    /// The returned sequence is already normalized; wire-shape differences
    /// never reach callers.
    async fn list_templates(&self, token: &str)
        -> Result<Vec<TemplateSummary>, GatewayError>;

    /// Delete the template with the given identifier.
    ///
    /// Success means the resource no longer exists on the server.
    async fn delete_template(&self, token: &str, id: &TemplateId)
        -> Result<(), GatewayError>;
}
