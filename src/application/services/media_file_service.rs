use std::collections::HashSet;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use uuid::Uuid;

use crate::domain::entities::owner::{MediaOwner, PropertyType};
use crate::domain::errors::{MediaError, MediaResult};
use crate::domain::ports::file_storage::FileStorage;
use crate::domain::ports::path_scheme::MediaPathScheme;
use crate::shared::utils::filename::safe_file_name;

/// Upper bound on simultaneously in-flight file operations during bulk
/// deletion, to avoid overwhelming the backend on large batches.
pub const DEFAULT_BULK_DELETE_CONCURRENCY: usize = 20;

/// Media file manager.
///
/// Orchestrates the filename sanitizer, the active path scheme and the
/// storage backend. Carries no per-request mutable state, so a single
/// instance is safely callable from any number of concurrent callers.
#[derive(Clone)]
pub struct MediaFileService {
    storage: Arc<dyn FileStorage>,
    path_scheme: Arc<dyn MediaPathScheme>,
    bulk_delete_concurrency: usize,
}

impl MediaFileService {
    /// Create a new media file service over the given backend and scheme.
    pub fn new(storage: Arc<dyn FileStorage>, path_scheme: Arc<dyn MediaPathScheme>) -> Self {
        Self {
            storage,
            path_scheme,
            bulk_delete_concurrency: DEFAULT_BULK_DELETE_CONCURRENCY,
        }
    }

    /// Override the bulk-delete concurrency bound.
    pub fn with_bulk_delete_concurrency(mut self, concurrency: usize) -> Self {
        self.bulk_delete_concurrency = concurrency.max(1);
        self
    }

    /// Raw access to the underlying storage backend, for collaborators that
    /// need direct file access (e.g. serving downloads). Not re-validated.
    pub fn storage(&self) -> &Arc<dyn FileStorage> {
        &self.storage
    }

    /// Compute the backend-relative path of a media file.
    ///
    /// The filename is stripped of directory components and sanitized before
    /// the active path scheme computes the path. With the legacy scheme and
    /// no `previous` path, this allocates a new folder each time it is
    /// invoked.
    pub async fn media_path(
        &self,
        filename: &str,
        cuid: Uuid,
        puid: Uuid,
        previous: Option<&str>,
    ) -> MediaResult<String> {
        let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
        if base.trim().is_empty() {
            return Err(MediaError::InvalidArgument(
                "Filename must not be blank".to_string(),
            ));
        }

        let safe = safe_file_name(base);
        self.path_scheme
            .file_path(self.storage.as_ref(), cuid, puid, &safe, previous)
            .await
    }

    /// Store a media file associated to a property of a content item.
    ///
    /// When `old_path` is supplied the previous file is deleted before the
    /// new path is computed, and the old path is passed to the scheme as a
    /// reuse hint so the legacy scheme keeps using the same folder. The write
    /// overwrites anything already at the computed path.
    ///
    /// Not transactional across the delete/write boundary: if the write
    /// fails, the old content is already gone and callers must recreate it
    /// from their source of truth.
    pub async fn store_file(
        &self,
        owner: &dyn MediaOwner,
        property_type: &dyn PropertyType,
        filename: &str,
        content: &[u8],
        old_path: Option<&str>,
    ) -> MediaResult<String> {
        if filename.trim().is_empty() {
            return Err(MediaError::InvalidArgument(
                "Filename must not be blank".to_string(),
            ));
        }

        // Clear the old file, if any.
        if let Some(old) = old_path.filter(|p| !p.trim().is_empty()) {
            self.storage.delete_file(old).await?;
        }

        let path = self
            .media_path(filename, owner.key(), property_type.key(), old_path)
            .await?;
        self.storage.save(&path, content).await?;
        Ok(path)
    }

    /// Copy a media file as a new media file owned by another property.
    ///
    /// Returns `Ok(None)` when the source does not exist: the most common
    /// cause is a stale reference to an already-deleted file, which is a
    /// benign no-op from the caller's perspective.
    pub async fn copy_file(
        &self,
        owner: &dyn MediaOwner,
        property_type: &dyn PropertyType,
        source_path: &str,
    ) -> MediaResult<Option<String>> {
        if source_path.trim().is_empty() {
            return Err(MediaError::InvalidArgument(
                "Source path must not be blank".to_string(),
            ));
        }

        if !self.storage.exists(source_path).await? {
            return Ok(None);
        }

        // A genuinely new association: no previous-path reuse.
        let filename = source_path.rsplit('/').next().unwrap_or(source_path);
        let path = self
            .media_path(filename, owner.key(), property_type.key(), None)
            .await?;
        self.storage.copy_file(source_path, &path).await?;
        Ok(Some(path))
    }

    /// Bulk-delete a batch of media files, used when content is permanently
    /// purged.
    ///
    /// The batch is deduplicated and processed with bounded concurrency. A
    /// failure on one file is logged and does not abort the rest of the
    /// batch; this operation never fails from the caller's point of view.
    /// There is no ordering guarantee across distinct paths.
    pub async fn delete_media_files(&self, files: Vec<String>) {
        let unique: HashSet<String> = files.into_iter().collect();

        stream::iter(unique)
            .for_each_concurrent(self.bulk_delete_concurrency, |file| async move {
                if let Err(e) = self.delete_media_file(&file).await {
                    tracing::error!("Failed to delete media file '{}': {}", file, e);
                }
            })
            .await;
    }

    async fn delete_media_file(&self, file: &str) -> MediaResult<()> {
        if file.trim().is_empty() {
            return Ok(());
        }

        // Already gone is not an error.
        if !self.storage.exists(file).await? {
            return Ok(());
        }

        self.storage.delete_file(file).await?;

        if let Some(directory) = self.path_scheme.delete_directory(file) {
            if !directory.trim().is_empty() {
                self.storage.delete_directory(&directory, true).await?;
            }
        }

        Ok(())
    }
}
