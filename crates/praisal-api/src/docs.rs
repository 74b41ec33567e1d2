//! OpenAPI document assembly.
//!
//! The document is generated from the registered routes' annotations; the
//! application merges its own surface in through [`api_doc_with`], so one
//! document describes the whole process.

use utoipa::OpenApi;

/// Mount point of the interactive documentation UI.
pub const DOCS_PATH: &str = "/docs";

/// Path the raw OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI description of the bootstrap-owned surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Praisal API",
        description = "Performance review management API"
    ),
    paths(crate::routes::health),
    components(schemas(crate::routes::HealthResponse))
)]
pub struct ApiDoc;

/// The bootstrap document, merged with the application's document when the
/// application provides one.
pub fn api_doc_with(app_doc: Option<utoipa::openapi::OpenApi>) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if let Some(app_doc) = app_doc {
        doc.merge(app_doc);
    }
    doc
}
