use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::{MediaError, MediaResult};
use crate::domain::ports::file_storage::FileStorage;
use crate::domain::ports::path_scheme::MediaPathScheme;

/// Folder numbers allocated by fresh installations start here; older
/// installations may already hold lower numbers.
const FIRST_FOLDER_NUMBER: u32 = 1000;

/// Legacy sequential path scheme, kept loadable for systems upgraded from
/// years of accumulated numbered media folders.
///
/// Files live in monotonically numbered directories independent of their
/// owner: `{number}/{filename}`. When a previous path is supplied its folder
/// is reused, keeping edited files colocated with the property's existing
/// folder; otherwise the backend root is listed and the next unused number is
/// claimed.
///
/// Two concurrent allocations can race to the same number; that is an
/// accepted limitation of this scheme. New deployments should use
/// [`UniquePathScheme`](crate::domain::services::unique_path_scheme::UniquePathScheme).
#[derive(Debug, Default, Clone)]
pub struct LegacyNumberedPathScheme;

impl LegacyNumberedPathScheme {
    pub fn new() -> Self {
        Self
    }

    /// Derive the next unused folder number by probing the backend.
    ///
    /// Stateless across process restarts: the counter is whatever the listing
    /// says, never stored.
    async fn next_folder_number(&self, storage: &dyn FileStorage) -> MediaResult<u32> {
        let dirs = storage.list_directories("").await?;
        let highest = dirs.iter().filter_map(|d| d.parse::<u32>().ok()).max();
        Ok(highest.map_or(FIRST_FOLDER_NUMBER, |n| (n + 1).max(FIRST_FOLDER_NUMBER)))
    }

    fn reusable_folder(previous: &str) -> Option<&str> {
        previous
            .split('/')
            .next()
            .filter(|segment| !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit()))
    }
}

#[async_trait]
impl MediaPathScheme for LegacyNumberedPathScheme {
    async fn file_path(
        &self,
        storage: &dyn FileStorage,
        cuid: Uuid,
        puid: Uuid,
        filename: &str,
        previous: Option<&str>,
    ) -> MediaResult<String> {
        if cuid.is_nil() {
            return Err(MediaError::InvalidArgument(
                "Content identifier must not be nil".to_string(),
            ));
        }
        if puid.is_nil() {
            return Err(MediaError::InvalidArgument(
                "Property type identifier must not be nil".to_string(),
            ));
        }

        if let Some(previous) = previous.filter(|p| !p.trim().is_empty()) {
            if let Some(folder) = Self::reusable_folder(previous) {
                return Ok(format!("{}/{}", folder, filename));
            }
        }

        let number = self.next_folder_number(storage).await?;
        Ok(format!("{}/{}", number, filename))
    }

    fn delete_directory(&self, file_path: &str) -> Option<String> {
        // Exactly the folder this scheme put the file in. Historical folders
        // are not necessarily exclusively owned, so callers must not infer a
        // directory on their own.
        file_path
            .rfind('/')
            .map(|idx| file_path[..idx].to_string())
            .filter(|dir| !dir.is_empty())
    }
}
