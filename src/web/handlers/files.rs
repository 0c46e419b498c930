//! File handlers for the Web API.
//!
//! Business failures (unsupported type, unknown id, I/O trouble during a
//! single upload/download) are reported as values in 200-responses with the
//! fixed protocol messages; only a listing that cannot be produced at all
//! becomes an HTTP error.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::media::{
    Category, MSG_DOWNLOAD_ERROR_PREFIX, MSG_FILE_FOUND, MSG_FILE_NOT_FOUND, MSG_FILE_UPLOADED,
    MSG_UNSUPPORTED_TYPE, MSG_UPLOAD_ERROR_PREFIX,
};
use crate::web::dto::{
    ApiResponse, DownloadFileResponse, FileEntryResponse, UploadFileRequest, UploadFileResponse,
};
use crate::web::error::ApiError;
use crate::MediatecaError;

use super::AppState;

/// GET /api/files - List all stored files.
#[utoipa::path(
    get,
    path = "/files",
    tag = "files",
    responses(
        (status = 200, description = "Listing with freshly assigned ordinal ids", body = Vec<FileEntryResponse>),
        (status = 500, description = "Listing could not be produced")
    )
)]
pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<FileEntryResponse>>>, ApiError> {
    let records = state.service.list_files().map_err(|e| {
        tracing::error!("Failed to list files: {}", e);
        ApiError::internal("Failed to list files")
    })?;

    let entries = records.into_iter().map(FileEntryResponse::from).collect();
    Ok(Json(ApiResponse::new(entries)))
}

/// POST /api/files - Upload a base64-encoded file.
#[utoipa::path(
    post,
    path = "/files",
    tag = "files",
    request_body = UploadFileRequest,
    responses(
        (status = 200, description = "Upload outcome, success flag and message", body = UploadFileResponse)
    )
)]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UploadFileRequest>,
) -> Json<UploadFileResponse> {
    // An explicit category is trusted; an unknown explicit name fails the
    // same way any other upload error does.
    let category = match request.file_type.as_deref() {
        Some(s) => match s.parse::<Category>() {
            Ok(c) => Some(c),
            Err(e) => {
                return Json(UploadFileResponse {
                    success: false,
                    message: format!("{MSG_UPLOAD_ERROR_PREFIX}: {e}"),
                });
            }
        },
        None => None,
    };

    let response = match state
        .service
        .upload_file(&request.filename, &request.file_data, category)
    {
        Ok(_) => UploadFileResponse {
            success: true,
            message: MSG_FILE_UPLOADED.to_string(),
        },
        Err(MediatecaError::UnsupportedType) => {
            tracing::warn!(filename = %request.filename, "rejected unsupported file type");
            UploadFileResponse {
                success: false,
                message: MSG_UNSUPPORTED_TYPE.to_string(),
            }
        }
        Err(e) => {
            tracing::error!(filename = %request.filename, "upload failed: {}", e);
            UploadFileResponse {
                success: false,
                message: format!("{MSG_UPLOAD_ERROR_PREFIX}: {e}"),
            }
        }
    };

    Json(response)
}

/// GET /api/files/:id - Download a file by its listing id.
#[utoipa::path(
    get,
    path = "/files/{id}",
    tag = "files",
    params(
        ("id" = u64, Path, description = "Ordinal id from a current listing")
    ),
    responses(
        (status = 200, description = "Download outcome, encoded file or null with message", body = DownloadFileResponse)
    )
)]
pub async fn download_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Json<DownloadFileResponse> {
    let response = match state.service.download_file(id) {
        Ok(blob) => DownloadFileResponse {
            archivo: Some(blob.into()),
            message: MSG_FILE_FOUND.to_string(),
        },
        Err(MediatecaError::NotFound(_)) => DownloadFileResponse {
            archivo: None,
            message: MSG_FILE_NOT_FOUND.to_string(),
        },
        Err(e) => {
            tracing::error!(id, "download failed: {}", e);
            DownloadFileResponse {
                archivo: None,
                message: format!("{MSG_DOWNLOAD_ERROR_PREFIX}: {e}"),
            }
        }
    };

    Json(response)
}
