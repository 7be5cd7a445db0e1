use crate::domain::errors::MediaResult;
use crate::domain::ports::file_storage::FileStorage;
use async_trait::async_trait;
use uuid::Uuid;

/// Pluggable policy that computes storage paths for media files.
///
/// Selected once at configuration time and shared read-only by all callers.
#[async_trait]
pub trait MediaPathScheme: Send + Sync {
    /// Compute the backend-relative path for a media file owned by the
    /// (`cuid`, `puid`) pair.
    ///
    /// `previous` is an optional prior path for the same property; the legacy
    /// scheme uses it to keep edited files in their existing folder. Async
    /// because the legacy scheme probes the backend to allocate a folder.
    ///
    /// Fails with an invalid-argument error when `cuid` or `puid` is nil.
    async fn file_path(
        &self,
        storage: &dyn FileStorage,
        cuid: Uuid,
        puid: Uuid,
        filename: &str,
        previous: Option<&str>,
    ) -> MediaResult<String>;

    /// The directory to remove after deleting the file at `file_path`, if any.
    ///
    /// Callers must use exactly the directory returned here rather than infer
    /// one: legacy folders are not necessarily exclusively owned.
    fn delete_directory(&self, file_path: &str) -> Option<String>;
}
