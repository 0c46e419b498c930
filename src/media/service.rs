//! Media service: listing, upload, and download operations.

use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use super::{Category, MediaStore};
use crate::{MediatecaError, Result};

/// A single entry of a listing.
///
/// The id is a 1-based ordinal recomputed on every listing and is only
/// meaningful against that listing; it is not a persistent identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Ordinal id within the listing that produced this record.
    pub id: u64,
    /// Original filename.
    pub name: String,
    /// Media category.
    pub category: Category,
    /// Path of the file inside the store.
    pub path: PathBuf,
}

/// File content together with its name and category, as moved over the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlob {
    /// Original filename.
    pub name: String,
    /// Media category.
    pub category: Category,
    /// Raw file content.
    pub data: Vec<u8>,
}

/// High-level media operations over a [`MediaStore`].
#[derive(Debug, Clone)]
pub struct MediaService {
    store: MediaStore,
}

impl MediaService {
    /// Create a new MediaService over the given store.
    pub fn new(store: MediaStore) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &MediaStore {
        &self.store
    }

    /// List all stored files with freshly assigned ordinal ids.
    pub fn list_files(&self) -> Result<Vec<FileRecord>> {
        self.store.list()
    }

    /// Store a base64-encoded payload under the given filename.
    ///
    /// When no explicit category is supplied the filename is classified;
    /// a filename outside the extension table fails with
    /// [`MediatecaError::UnsupportedType`] before anything is written. The
    /// payload's actual content is trusted to match the claimed type.
    /// Returns the stored path; ids belong to listings, not uploads.
    pub fn upload_file(
        &self,
        filename: &str,
        file_data: &str,
        category: Option<Category>,
    ) -> Result<PathBuf> {
        let category = match category {
            Some(c) => c,
            None => Category::from_filename(filename).ok_or(MediatecaError::UnsupportedType)?,
        };

        let content = BASE64.decode(file_data)?;
        let path = self.store.save(category, filename, &content)?;

        tracing::info!(
            name = filename,
            category = %category,
            bytes = content.len(),
            "file stored"
        );

        Ok(path)
    }

    /// Fetch a file by its ordinal id in a fresh listing.
    ///
    /// The listing is recomputed, so an id obtained from an earlier listing
    /// may resolve to a different file, or to none, if the store was mutated
    /// in between.
    pub fn download_file(&self, id: u64) -> Result<FileBlob> {
        let record = self
            .store
            .find_by_id(id)?
            .ok_or_else(|| MediatecaError::NotFound(format!("file {id}")))?;

        let data = self.store.load(&record.path)?;

        tracing::info!(id, name = %record.name, bytes = data.len(), "file read");

        Ok(FileBlob {
            name: record.name,
            category: record.category,
            data,
        })
    }
}
