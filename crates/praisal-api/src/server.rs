//! Server assembly: middleware, documentation, bind and serve.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServerConfig;
use crate::docs;
use crate::error::{Error, Result};
use crate::routes;

/// The HTTP server process.
///
/// Owns the cross-cutting concerns (body-size ceiling, CORS policy, API
/// documentation) and serves whatever router the application supplies.
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Create a server from resolved configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// The configuration this server was built with.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Cross-origin policy: one allowed origin, credentialed requests, a
    /// fixed method and header set. Everything else is rejected before any
    /// handler runs.
    fn cors(&self) -> Result<CorsLayer> {
        let origin: HeaderValue =
            self.config
                .web_origin
                .parse()
                .map_err(|_| Error::InvalidOrigin {
                    origin: self.config.web_origin.clone(),
                })?;

        Ok(CorsLayer::new()
            .allow_origin(origin)
            .allow_credentials(true)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
    }

    /// Assemble the full router: application routes, bootstrap routes,
    /// documentation, then the global middleware.
    pub fn router(
        &self,
        app: Router,
        app_doc: Option<utoipa::openapi::OpenApi>,
    ) -> Result<Router> {
        let doc = docs::api_doc_with(app_doc);
        let swagger = SwaggerUi::new(docs::DOCS_PATH).url(docs::OPENAPI_PATH, doc);

        Ok(app
            .merge(routes::router())
            .merge(swagger)
            .layer(self.cors()?)
            .layer(DefaultBodyLimit::max(self.config.body_limit)))
    }

    /// Bind the configured port and serve until the process stops.
    pub async fn serve(
        self,
        app: Router,
        app_doc: Option<utoipa::openapi::OpenApi>,
    ) -> Result<()> {
        let router = self.router(app, app_doc)?;
        let listener = tokio::net::TcpListener::bind(self.config.bind_addr()).await?;
        tracing::info!("praisal API listening on port {}", self.config.port);
        axum::serve(listener, router).await?;
        Ok(())
    }
}
