//! Media repository module for mediateca.
//!
//! This module provides the storage-side functionality:
//! - Extension-based classification into media categories
//! - Category-partitioned file storage under a root directory
//! - Listing, upload, and download operations

mod category;
mod service;
mod store;

pub use category::Category;
pub use service::{FileBlob, FileRecord, MediaService};
pub use store::MediaStore;

/// Message returned when an upload succeeds.
pub const MSG_FILE_UPLOADED: &str = "Archivo subido exitosamente";

/// Message returned when a download finds its file.
pub const MSG_FILE_FOUND: &str = "Archivo encontrado";

/// Message returned when the requested id is absent from the listing.
pub const MSG_FILE_NOT_FOUND: &str = "Archivo no encontrado";

/// Message returned when a filename classifies into no category.
pub const MSG_UNSUPPORTED_TYPE: &str = "Tipo de archivo no soportado";

/// Prefix for upload failures caused by I/O or payload decoding.
pub const MSG_UPLOAD_ERROR_PREFIX: &str = "Error al subir archivo";

/// Prefix for download failures caused by I/O.
pub const MSG_DOWNLOAD_ERROR_PREFIX: &str = "Error al descargar archivo";
