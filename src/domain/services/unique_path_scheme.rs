use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::{MediaError, MediaResult};
use crate::domain::ports::file_storage::FileStorage;
use crate::domain::ports::path_scheme::MediaPathScheme;

/// Identifier-based path scheme.
///
/// The owning content and property-type UUIDs are combined byte-wise and
/// hex-encoded; the path nests two directory levels keyed by parts of the
/// encoding:
///
/// ```text
/// {hex[0..2]}/{hex[2..10]}/{filename}
/// ```
///
/// Repeated calls with the same inputs yield the same path, so a re-upload
/// overwrites in place. The innermost directory is exclusively owned by the
/// (content, property) pair and safe to remove recursively when the file is
/// deleted. No backend access is needed to compute a path, which keeps
/// allocation cheap under concurrent writers.
#[derive(Debug, Default, Clone)]
pub struct UniquePathScheme;

impl UniquePathScheme {
    pub fn new() -> Self {
        Self
    }

    fn combine(cuid: Uuid, puid: Uuid) -> String {
        let a = cuid.as_bytes();
        let b = puid.as_bytes();
        let mut combined = [0u8; 16];
        for (i, slot) in combined.iter_mut().enumerate() {
            *slot = a[i] ^ b[i];
        }
        hex::encode(combined)
    }
}

#[async_trait]
impl MediaPathScheme for UniquePathScheme {
    async fn file_path(
        &self,
        _storage: &dyn FileStorage,
        cuid: Uuid,
        puid: Uuid,
        filename: &str,
        _previous: Option<&str>,
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

        let combined = Self::combine(cuid, puid);
        Ok(format!(
            "{}/{}/{}",
            &combined[..2],
            &combined[2..10],
            filename
        ))
    }

    fn delete_directory(&self, file_path: &str) -> Option<String> {
        file_path
            .rfind('/')
            .map(|idx| file_path[..idx].to_string())
            .filter(|dir| !dir.is_empty())
    }
}
