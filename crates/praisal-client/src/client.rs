//! HTTP client for the performance REST API.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use praisal_core::wire::normalize_template_listing;
use praisal_core::{GatewayError, TemplateGateway, TemplateId, TemplateSummary};

/// Client for the performance REST API.
///
/// Holds no credentials; the bearer token is passed per call by the layer
/// that owns the session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API at `base_url`.
    ///
    /// A trailing slash on the base URL is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Error envelope the API attaches to failure responses.
///
/// Validation failures carry `message` either as a single string or as a
/// list of per-field strings.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<ErrorMessage>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    fn into_text(self) -> String {
        match self {
            ErrorMessage::One(text) => text,
            ErrorMessage::Many(lines) => lines.join("; "),
        }
    }
}

async fn server_message(response: reqwest::Response) -> Option<String> {
    let body: ErrorBody = response.json().await.ok()?;
    body.message.map(ErrorMessage::into_text)
}

async fn error_for(response: reqwest::Response) -> GatewayError {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        GatewayError::Unauthorized
    } else if status == StatusCode::FORBIDDEN {
        GatewayError::Forbidden
    } else if status == StatusCode::BAD_REQUEST {
        GatewayError::BadRequest {
            message: server_message(response).await,
        }
    } else {
        GatewayError::Unexpected {
            status: status.as_u16(),
            message: server_message(response).await,
        }
    }
}

fn transport(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

#[async_trait]
impl TemplateGateway for ApiClient {
    async fn list_templates(
        &self,
        token: &str,
    ) -> Result<Vec<TemplateSummary>, GatewayError> {
        let response = self
            .http
            .get(self.url("/performance/templates"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(error_for(response).await);
        }

        let body = response.json().await.map_err(transport)?;
        Ok(normalize_template_listing(body))
    }

    async fn delete_template(
        &self,
        token: &str,
        id: &TemplateId,
    ) -> Result<(), GatewayError> {
        let response = self
            .http
            .delete(self.url(&format!("/performance/templates/{id}")))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(error_for(response).await);
        }
        Ok(())
    }
}
