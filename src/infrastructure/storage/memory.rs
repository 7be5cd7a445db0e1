use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::errors::{MediaError, MediaResult};
use crate::domain::ports::file_storage::FileStorage;

/// Ephemeral in-memory storage backend.
///
/// Directory semantics are prefix-based: a directory "exists" while at least
/// one file lives under it, and deleting a directory removes every file under
/// its prefix (the `recursive` flag is moot, since empty directories cannot
/// exist).
#[derive(Debug, Default)]
pub struct MemoryFileStorage {
    files: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryFileStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn normalize(path: &str) -> &str {
        path.trim_matches('/')
    }
}

#[async_trait]
impl FileStorage for MemoryFileStorage {
    async fn exists(&self, path: &str) -> MediaResult<bool> {
        let path = Self::normalize(path);
        let files = self.files.read().await;
        if files.contains_key(path) {
            return Ok(true);
        }
        let prefix = format!("{}/", path);
        Ok(files.keys().any(|key| key.starts_with(&prefix)))
    }

    async fn save(&self, path: &str, content: &[u8]) -> MediaResult<()> {
        let path = Self::normalize(path);
        self.files
            .write()
            .await
            .insert(path.to_string(), content.to_vec());
        Ok(())
    }

    async fn read(&self, path: &str) -> MediaResult<Vec<u8>> {
        let path = Self::normalize(path);
        self.files
            .read()
            .await
            .get(path)
            .cloned()
            .ok_or_else(|| MediaError::NotFound(format!("File: {}", path)))
    }

    async fn delete_file(&self, path: &str) -> MediaResult<()> {
        let path = Self::normalize(path);
        self.files.write().await.remove(path);
        Ok(())
    }

    async fn delete_directory(&self, path: &str, _recursive: bool) -> MediaResult<()> {
        let prefix = format!("{}/", Self::normalize(path));
        self.files
            .write()
            .await
            .retain(|key, _| !key.starts_with(&prefix));
        Ok(())
    }

    async fn copy_file(&self, source: &str, dest: &str) -> MediaResult<()> {
        let source = Self::normalize(source);
        let dest = Self::normalize(dest);
        let mut files = self.files.write().await;
        let content = files
            .get(source)
            .cloned()
            .ok_or_else(|| MediaError::NotFound(format!("File: {}", source)))?;
        files.insert(dest.to_string(), content);
        Ok(())
    }

    async fn list_directories(&self, path: &str) -> MediaResult<Vec<String>> {
        let path = Self::normalize(path);
        let prefix = if path.is_empty() {
            String::new()
        } else {
            format!("{}/", path)
        };

        let files = self.files.read().await;
        let mut directories: Vec<String> = files
            .keys()
            .filter_map(|key| key.strip_prefix(&prefix))
            .filter_map(|rest| {
                rest.find('/')
                    .map(|idx| rest[..idx].to_string())
            })
            .collect();
        directories.sort();
        directories.dedup();
        Ok(directories)
    }
}
