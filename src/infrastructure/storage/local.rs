use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::domain::errors::{MediaError, MediaResult};
use crate::domain::ports::file_storage::FileStorage;

/// Storage backend rooted at a local directory.
///
/// Logical paths are forward-slash relative; they are resolved against the
/// base directory and may not be absolute or contain `..` segments.
#[derive(Clone, Debug)]
pub struct LocalFileStorage {
    base_path: PathBuf,
}

impl LocalFileStorage {
    /// Create a new storage rooted at `base_path`, creating the directory if
    /// it does not exist.
    pub fn new(base_path: impl Into<PathBuf>) -> MediaResult<Self> {
        let base_path = base_path.into();
        std::fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a logical path against the base directory, rejecting anything
    /// that could escape it.
    fn resolve(&self, path: &str) -> MediaResult<PathBuf> {
        if Path::new(path).is_absolute() || path.starts_with('/') {
            return Err(MediaError::InvalidArgument(format!(
                "Path must be relative: '{}'",
                path
            )));
        }

        let mut resolved = self.base_path.clone();
        for segment in path.split('/') {
            match segment {
                "" | "." => continue,
                ".." => {
                    return Err(MediaError::InvalidArgument(format!(
                        "Path must not contain '..' segments: '{}'",
                        path
                    )))
                }
                segment if segment.contains('\\') => {
                    return Err(MediaError::InvalidArgument(format!(
                        "Path must use forward slashes: '{}'",
                        path
                    )))
                }
                segment => resolved.push(segment),
            }
        }
        Ok(resolved)
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn exists(&self, path: &str) -> MediaResult<bool> {
        let resolved = self.resolve(path)?;
        Ok(fs::try_exists(&resolved).await?)
    }

    async fn save(&self, path: &str, content: &[u8]) -> MediaResult<()> {
        let resolved = self.resolve(path)?;
        if let Some(parent) = resolved.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&resolved, content).await?;
        Ok(())
    }

    async fn read(&self, path: &str) -> MediaResult<Vec<u8>> {
        let resolved = self.resolve(path)?;
        match fs::read(&resolved).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(MediaError::NotFound(format!("File: {}", path)))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_file(&self, path: &str) -> MediaResult<()> {
        let resolved = self.resolve(path)?;
        match fs::remove_file(&resolved).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_directory(&self, path: &str, recursive: bool) -> MediaResult<()> {
        let resolved = self.resolve(path)?;
        let result = if recursive {
            fs::remove_dir_all(&resolved).await
        } else {
            fs::remove_dir(&resolved).await
        };
        match result {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn copy_file(&self, source: &str, dest: &str) -> MediaResult<()> {
        let resolved_source = self.resolve(source)?;
        let resolved_dest = self.resolve(dest)?;
        if let Some(parent) = resolved_dest.parent() {
            fs::create_dir_all(parent).await?;
        }
        match fs::copy(&resolved_source, &resolved_dest).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(MediaError::NotFound(format!("File: {}", source)))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list_directories(&self, path: &str) -> MediaResult<Vec<String>> {
        let resolved = self.resolve(path)?;
        let mut entries = match fs::read_dir(&resolved).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut directories = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                directories.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(directories)
    }
}
