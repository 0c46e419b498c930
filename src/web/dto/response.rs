//! Response DTOs for the Web API.

use serde::{Deserialize, Serialize};

use crate::media::{Category, FileBlob, FileRecord};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Generic API response wrapper.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response data.
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// One entry of a file listing.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FileEntryResponse {
    /// Ordinal id, valid only against the listing that produced it.
    pub id: u64,
    /// Original filename.
    pub nombre: String,
    /// Media category.
    pub tipo: Category,
    /// Server-side path of the stored file.
    pub ruta: String,
}

impl From<FileRecord> for FileEntryResponse {
    fn from(record: FileRecord) -> Self {
        Self {
            id: record.id,
            nombre: record.name,
            tipo: record.category,
            ruta: record.path.to_string_lossy().into_owned(),
        }
    }
}

/// Upload outcome. Failures are reported here with `success = false`, never
/// as HTTP error statuses.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UploadFileResponse {
    /// Whether the file was stored.
    pub success: bool,
    /// Human-readable outcome message.
    pub message: String,
}

/// Encoded file payload inside a download response.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FileBlobResponse {
    /// Original filename.
    pub nombre: String,
    /// Media category.
    pub tipo: Category,
    /// Base64-encoded file content.
    pub datos: String,
}

impl From<FileBlob> for FileBlobResponse {
    fn from(blob: FileBlob) -> Self {
        Self {
            nombre: blob.name,
            tipo: blob.category,
            datos: BASE64.encode(&blob.data),
        }
    }
}

/// Download outcome. `archivo` is `null` when the id is absent or the read
/// failed; `message` carries the reason either way.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DownloadFileResponse {
    /// The encoded file, when found.
    pub archivo: Option<FileBlobResponse>,
    /// Human-readable outcome message.
    pub message: String,
}
