use crate::domain::errors::MediaResult;
use async_trait::async_trait;

/// Abstract file-storage capability consumed by the media file manager.
///
/// Implementations are addressed by backend-root-relative paths using forward
/// slashes. The backend owns per-path atomicity; this subsystem imposes no
/// cross-call locks on top of it.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Check whether a file (or directory) exists at the given path.
    async fn exists(&self, path: &str) -> MediaResult<bool>;

    /// Write content to the given path, overwriting any existing file.
    /// Parent directories are created as needed.
    async fn save(&self, path: &str, content: &[u8]) -> MediaResult<()>;

    /// Read the content of a file.
    async fn read(&self, path: &str) -> MediaResult<Vec<u8>>;

    /// Delete a file. Deleting a missing file is a no-op.
    async fn delete_file(&self, path: &str) -> MediaResult<()>;

    /// Delete a directory. Deleting a missing directory is a no-op.
    async fn delete_directory(&self, path: &str, recursive: bool) -> MediaResult<()>;

    /// Copy a file at the backend level.
    async fn copy_file(&self, source: &str, dest: &str) -> MediaResult<()>;

    /// List the names of the directories directly under the given path.
    /// A missing path yields an empty listing.
    async fn list_directories(&self, path: &str) -> MediaResult<Vec<String>>;
}
