//! Category-partitioned file storage.
//!
//! Files live under a root directory split into one subdirectory per
//! category, each holding raw media files by original name:
//!
//! ```text
//! {root}/
//! ├── audio/
//! │   └── song.mp3
//! ├── video/
//! │   └── clip.mp4
//! └── imagen/
//!     └── photo.png
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::service::FileRecord;
use super::Category;
use crate::{MediatecaError, Result};

/// Filesystem store for media files, partitioned by category.
#[derive(Debug, Clone)]
pub struct MediaStore {
    /// Root directory holding the category subdirectories.
    root: PathBuf,
}

impl MediaStore {
    /// Create a new MediaStore rooted at the given path.
    ///
    /// The root and all category subdirectories are created eagerly if
    /// absent.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        for category in Category::ALL {
            fs::create_dir_all(root.join(category.as_str()))?;
        }
        Ok(Self { root })
    }

    /// Get the root path of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the directory holding a category's files.
    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.as_str())
    }

    /// Save content under `{root}/{category}/{filename}`.
    ///
    /// A same-named file in that category is silently overwritten. The write
    /// is not atomic.
    pub fn save(&self, category: Category, filename: &str, content: &[u8]) -> Result<PathBuf> {
        let path = self.category_dir(category).join(filename);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Load the content of a stored file.
    pub fn load(&self, path: &Path) -> Result<Vec<u8>> {
        match fs::read(path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(MediatecaError::NotFound(
                format!("file {}", path.display()),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Enumerate all stored files as listing records.
    ///
    /// Categories are walked in the fixed `Category::ALL` order and each
    /// record is assigned a 1-based ordinal id over the concatenated
    /// enumeration. Ids are recomputed on every call: they are only stable
    /// within a single listing, and any mutation of the store may reassign
    /// them on the next call. Within a category the order follows `read_dir`
    /// enumeration order, which is platform-dependent.
    pub fn list(&self) -> Result<Vec<FileRecord>> {
        let mut records = Vec::new();
        for category in Category::ALL {
            for entry in fs::read_dir(self.category_dir(category))? {
                let entry = entry?;
                records.push(FileRecord {
                    id: records.len() as u64 + 1,
                    name: entry.file_name().to_string_lossy().into_owned(),
                    category,
                    path: entry.path(),
                });
            }
        }
        Ok(records)
    }

    /// Find a record by its ordinal id in a fresh listing.
    pub fn find_by_id(&self, id: u64) -> Result<Option<FileRecord>> {
        Ok(self.list()?.into_iter().find(|r| r.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_store() -> (TempDir, MediaStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = MediaStore::new(temp_dir.path().join("multimedia")).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_new_creates_category_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("multimedia");
        assert!(!root.exists());

        let store = MediaStore::new(&root).unwrap();

        assert_eq!(store.root(), root);
        for category in Category::ALL {
            let dir = root.join(category.as_str());
            assert!(dir.is_dir(), "missing {}", dir.display());
        }
    }

    #[test]
    fn test_new_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("multimedia");
        MediaStore::new(&root).unwrap();
        // Existing directories are fine
        MediaStore::new(&root).unwrap();
    }

    #[test]
    fn test_save_and_load() {
        let (_temp_dir, store) = setup_store();
        let content = b"ID3\x03fake mp3 bytes";

        let path = store.save(Category::Audio, "song.mp3", content).unwrap();

        assert_eq!(path, store.category_dir(Category::Audio).join("song.mp3"));
        assert_eq!(store.load(&path).unwrap(), content);
    }

    #[test]
    fn test_save_overwrites_silently() {
        let (_temp_dir, store) = setup_store();

        store.save(Category::Audio, "song.mp3", b"first").unwrap();
        let path = store.save(Category::Audio, "song.mp3", b"second").unwrap();

        assert_eq!(store.load(&path).unwrap(), b"second");
        // Still exactly one file in the category
        let records = store.list().unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_load_not_found() {
        let (_temp_dir, store) = setup_store();

        let missing = store.category_dir(Category::Video).join("gone.mp4");
        let result = store.load(&missing);

        assert!(matches!(result, Err(MediatecaError::NotFound(_))));
    }

    #[test]
    fn test_list_empty_store() {
        let (_temp_dir, store) = setup_store();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_assigns_sequential_ids_in_category_order() {
        let (_temp_dir, store) = setup_store();

        store.save(Category::Video, "clip.mp4", b"v").unwrap();
        store.save(Category::Imagen, "photo.png", b"i").unwrap();
        store.save(Category::Audio, "song.mp3", b"a").unwrap();

        let records = store.list().unwrap();
        assert_eq!(records.len(), 3);

        // Ids are 1-based and sequential over the concatenated enumeration
        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        // Category order is fixed: audio, then video, then imagen
        assert_eq!(records[0].category, Category::Audio);
        assert_eq!(records[1].category, Category::Video);
        assert_eq!(records[2].category, Category::Imagen);
        assert_eq!(records[0].name, "song.mp3");
    }

    #[test]
    fn test_list_ids_shift_when_earlier_category_grows() {
        let (_temp_dir, store) = setup_store();

        store.save(Category::Video, "clip.mp4", b"v").unwrap();
        let first = store.list().unwrap();
        assert_eq!(first[0].id, 1);

        // An upload into an earlier-enumerated category reassigns the id
        store.save(Category::Audio, "song.mp3", b"a").unwrap();
        let second = store.list().unwrap();
        let clip = second.iter().find(|r| r.name == "clip.mp4").unwrap();
        assert_eq!(clip.id, 2);
    }

    #[test]
    fn test_find_by_id() {
        let (_temp_dir, store) = setup_store();

        store.save(Category::Audio, "song.mp3", b"a").unwrap();

        let found = store.find_by_id(1).unwrap();
        assert_eq!(found.unwrap().name, "song.mp3");

        assert!(store.find_by_id(9999).unwrap().is_none());
        assert!(store.find_by_id(0).unwrap().is_none());
    }

    #[test]
    fn test_record_path_points_into_category_dir() {
        let (_temp_dir, store) = setup_store();

        store.save(Category::Imagen, "photo.png", b"i").unwrap();

        let records = store.list().unwrap();
        assert_eq!(
            records[0].path,
            store.category_dir(Category::Imagen).join("photo.png")
        );
    }
}
