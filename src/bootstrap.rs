use std::sync::Arc;

use crate::application::services::MediaFileService;
use crate::config::{Config, PathSchemeKind};
use crate::domain::errors::MediaResult;
use crate::domain::ports::path_scheme::MediaPathScheme;
use crate::domain::services::{LegacyNumberedPathScheme, UniquePathScheme};
use crate::infrastructure::storage::LocalFileStorage;

/// Wire a [`MediaFileService`] over local storage from configuration.
///
/// Hosts that use a non-local backend construct the service directly with
/// their own [`FileStorage`](crate::domain::ports::FileStorage)
/// implementation.
pub fn build_media_file_service(config: &Config) -> MediaResult<MediaFileService> {
    let storage = Arc::new(LocalFileStorage::new(config.storage_root.clone())?);
    tracing::info!("Media storage root: {}", config.storage_root.display());

    let path_scheme: Arc<dyn MediaPathScheme> = match config.path_scheme {
        PathSchemeKind::Unique => Arc::new(UniquePathScheme::new()),
        PathSchemeKind::Legacy => Arc::new(LegacyNumberedPathScheme::new()),
    };
    tracing::info!("Media path scheme: {:?}", config.path_scheme);

    Ok(MediaFileService::new(storage, path_scheme)
        .with_bulk_delete_concurrency(config.bulk_delete_concurrency))
}
