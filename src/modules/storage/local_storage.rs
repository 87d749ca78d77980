//! Local filesystem storage for report photos
//!
//! Photos are written flat into one upload directory under a random name and
//! served back by the HTTP layer from `UPLOADS_URL_PATH`.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::shared::constants::{ALLOWED_IMAGE_EXTENSIONS, UPLOADS_URL_PATH};

/// Disk-backed store for uploaded report images
#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    root: PathBuf,
    public_base_url: String,
}

impl LocalImageStorage {
    /// Create the storage rooted at `root`, creating the directory if needed
    pub async fn new(root: impl Into<PathBuf>, public_base_url: &str) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;

        info!("Image storage ready at {}", root.display());

        Ok(Self {
            root,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lowercased extension of `filename` if it is an accepted image type
    pub fn allowed_extension(filename: &str) -> Option<String> {
        let (_, ext) = filename.rsplit_once('.')?;
        let ext = ext.to_ascii_lowercase();
        ALLOWED_IMAGE_EXTENSIONS
            .contains(&ext.as_str())
            .then_some(ext)
    }

    pub fn validate_extension(filename: &str) -> bool {
        Self::allowed_extension(filename).is_some()
    }

    /// Write an image under a fresh random name and return that name
    pub async fn store(&self, data: &[u8], original_filename: &str) -> Result<String> {
        let ext = Self::allowed_extension(original_filename).ok_or_else(|| {
            AppError::Validation("Invalid file type. Only JPG and PNG allowed".to_string())
        })?;

        let filename = format!("{}.{}", Uuid::new_v4().simple(), ext);
        fs::write(self.root.join(&filename), data).await?;

        info!("Image saved: {} ({} bytes)", filename, data.len());
        Ok(filename)
    }

    /// Remove a stored image; failures are logged and swallowed
    pub async fn delete(&self, filename: &str) {
        // Stored names never contain separators; refuse anything else
        if filename.is_empty() || filename.contains(['/', '\\']) || filename.contains("..") {
            warn!("Refusing to delete suspicious image name: {:?}", filename);
            return;
        }

        match fs::remove_file(self.root.join(filename)).await {
            Ok(()) => info!("Deleted image: {}", filename),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Image already absent: {}", filename)
            }
            Err(e) => warn!("Could not delete image {}: {}", filename, e),
        }
    }

    /// Absolute URL the stored image is served from
    pub fn public_url(&self, filename: &str) -> String {
        format!("{}{}/{}", self.public_base_url, UPLOADS_URL_PATH, filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_extension_accepts_images() {
        assert!(LocalImageStorage::validate_extension("photo.png"));
        assert!(LocalImageStorage::validate_extension("photo.jpg"));
        assert!(LocalImageStorage::validate_extension("photo.JPEG"));
        assert!(LocalImageStorage::validate_extension("my.holiday.Jpg"));
    }

    #[test]
    fn test_validate_extension_rejects_others() {
        assert!(!LocalImageStorage::validate_extension("photo.gif"));
        assert!(!LocalImageStorage::validate_extension("png"));
        assert!(!LocalImageStorage::validate_extension("photo."));
        assert!(!LocalImageStorage::validate_extension("photo.png.exe"));
        assert!(!LocalImageStorage::validate_extension(""));
    }

    #[tokio::test]
    async fn test_store_writes_random_name_with_lowercase_extension() {
        let dir = tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path(), "http://localhost:5000")
            .await
            .unwrap();

        let first = storage.store(b"abc", "Pothole.PNG").await.unwrap();
        let second = storage.store(b"abc", "Pothole.PNG").await.unwrap();

        assert_ne!(first, second);
        let (stem, ext) = first.split_once('.').unwrap();
        assert_eq!(ext, "png");
        assert_eq!(stem.len(), 32);
        assert!(stem.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(std::fs::read(dir.path().join(&first)).unwrap(), b"abc");
    }

    #[tokio::test]
    async fn test_store_rejects_disallowed_extension() {
        let dir = tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path(), "http://localhost:5000")
            .await
            .unwrap();

        let err = storage.store(b"abc", "notes.txt").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_store_into_missing_root_is_storage_error() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("uploads");
        let storage = LocalImageStorage::new(&root, "http://localhost:5000")
            .await
            .unwrap();
        std::fs::remove_dir(&root).unwrap();

        let err = storage.store(b"abc", "a.png").await.unwrap_err();

        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(
            err.status_code(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_delete_is_best_effort() {
        let dir = tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path(), "http://localhost:5000")
            .await
            .unwrap();

        let name = storage.store(b"abc", "a.jpg").await.unwrap();
        storage.delete(&name).await;
        assert!(!dir.path().join(&name).exists());

        // Second delete and traversal attempts are silent no-ops
        storage.delete(&name).await;
        storage.delete("../outside.png").await;
    }

    #[tokio::test]
    async fn test_new_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("static").join("uploads");
        let storage = LocalImageStorage::new(&nested, "http://localhost:5000")
            .await
            .unwrap();

        assert!(nested.is_dir());
        assert_eq!(storage.root(), nested.as_path());
    }

    #[tokio::test]
    async fn test_public_url() {
        let dir = tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path(), "https://reports.example.org/")
            .await
            .unwrap();

        assert_eq!(
            storage.public_url("abc.png"),
            "https://reports.example.org/static/uploads/abc.png"
        );
    }
}
