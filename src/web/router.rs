//! Router configuration for the Web API.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{download_file, list_files, upload_file, AppState};
use super::middleware::create_cors_layer;

/// OpenAPI document for the file endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::files::list_files,
        super::handlers::files::upload_file,
        super::handlers::files::download_file,
    ),
    components(schemas(
        crate::media::Category,
        crate::web::dto::FileEntryResponse,
        crate::web::dto::UploadFileRequest,
        crate::web::dto::UploadFileResponse,
        crate::web::dto::FileBlobResponse,
        crate::web::dto::DownloadFileResponse,
    )),
    tags(
        (name = "files", description = "Media file listing, upload and download")
    )
)]
struct ApiDoc;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let file_routes = Router::new()
        .route("/files", get(list_files).post(upload_file))
        .route("/files/:id", get(download_file));

    Router::new()
        .nest("/api", file_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Create the Swagger UI router.
pub fn create_swagger_router() -> Router {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_health_router() {
        let _router = create_health_router();
        // Should not panic
    }

    #[test]
    fn test_openapi_document_lists_file_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/files"));
        assert!(paths.iter().any(|p| p.as_str() == "/files/{id}"));
    }
}
