use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::info;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Longest extension carried over from a client-supplied filename.
const MAX_EXTENSION_LEN: usize = 10;

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Persist `bytes` uploaded under form `field` and return the path the
    /// owning record should store.
    async fn save(&self, field: &str, original_name: Option<&str>, bytes: &[u8]) -> Result<String, ServiceError>;
}

/// Writes attachments into one flat directory, served read-only under `/uploads`.
///
/// Anyone who knows a returned path can fetch the file; there is no access control.
#[derive(Clone, Debug)]
pub struct LocalFileStore {
    dir: PathBuf,
}

impl LocalFileStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Random name keeping a sanitised copy of the original extension.
    pub fn file_name_for(original_name: Option<&str>) -> String {
        let id = Uuid::new_v4().simple().to_string();
        let ext = original_name
            .and_then(|n| Path::new(n).extension())
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty() && e.len() <= MAX_EXTENSION_LEN && e.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|e| e.to_ascii_lowercase());
        match ext {
            Some(ext) => format!("{id}.{ext}"),
            None => id,
        }
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn save(&self, field: &str, original_name: Option<&str>, bytes: &[u8]) -> Result<String, ServiceError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ServiceError::Storage(format!("cannot create {}: {e}", self.dir.display())))?;
        let name = Self::file_name_for(original_name);
        let full = self.dir.join(&name);
        fs::write(&full, bytes)
            .await
            .map_err(|e| ServiceError::Storage(format!("cannot write {}: {e}", full.display())))?;
        let stored = format!("{}/{}", self.dir.to_string_lossy().trim_end_matches('/'), name);
        info!(event = "attachment_stored", field, path = %stored, size = bytes.len(), "stored upload");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_keep_safe_extension_only() {
        let n = LocalFileStore::file_name_for(Some("passport scan.JPG"));
        assert!(n.ends_with(".jpg"));
        assert_eq!(n.len(), 32 + 4);

        let bare = LocalFileStore::file_name_for(Some("README"));
        assert_eq!(bare.len(), 32);

        let hostile = LocalFileStore::file_name_for(Some("x.ph p"));
        assert!(!hostile.contains('.'));

        assert_eq!(LocalFileStore::file_name_for(None).len(), 32);
    }

    #[test]
    fn names_do_not_collide() {
        let a = LocalFileStore::file_name_for(Some("a.png"));
        let b = LocalFileStore::file_name_for(Some("a.png"));
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn save_writes_file_at_returned_path() -> anyhow::Result<()> {
        let tmp = tempfile::tempdir()?;
        let store = LocalFileStore::new(tmp.path().join("uploads"));
        let path = store.save("photo", Some("me.png"), b"\x89PNG").await?;
        assert!(path.ends_with(".png"));
        assert_eq!(tokio::fs::read(&path).await?, b"\x89PNG");
        Ok(())
    }
}
