use std::collections::HashSet;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mediastore::{
    FileStorage, LegacyNumberedPathScheme, MediaFileService, MediaResult, MemoryFileStorage,
    UniquePathScheme,
};

/// Service over the given backend with the identifier-based scheme.
pub fn unique_service(storage: Arc<dyn FileStorage>) -> MediaFileService {
    MediaFileService::new(storage, Arc::new(UniquePathScheme::new()))
}

/// Service over the given backend with the legacy numbered scheme.
pub fn legacy_service(storage: Arc<dyn FileStorage>) -> MediaFileService {
    MediaFileService::new(storage, Arc::new(LegacyNumberedPathScheme::new()))
}

/// In-memory backend whose `delete_file` fails for configured paths, to
/// exercise per-item error containment in bulk deletion.
pub struct FailingDeleteStorage {
    inner: MemoryFileStorage,
    fail_paths: HashSet<String>,
}

impl FailingDeleteStorage {
    pub fn new(fail_paths: &[&str]) -> Self {
        Self {
            inner: MemoryFileStorage::new(),
            fail_paths: fail_paths.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[async_trait]
impl FileStorage for FailingDeleteStorage {
    async fn exists(&self, path: &str) -> MediaResult<bool> {
        self.inner.exists(path).await
    }

    async fn save(&self, path: &str, content: &[u8]) -> MediaResult<()> {
        self.inner.save(path, content).await
    }

    async fn read(&self, path: &str) -> MediaResult<Vec<u8>> {
        self.inner.read(path).await
    }

    async fn delete_file(&self, path: &str) -> MediaResult<()> {
        if self.fail_paths.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "file is locked").into());
        }
        self.inner.delete_file(path).await
    }

    async fn delete_directory(&self, path: &str, recursive: bool) -> MediaResult<()> {
        self.inner.delete_directory(path, recursive).await
    }

    async fn copy_file(&self, source: &str, dest: &str) -> MediaResult<()> {
        self.inner.copy_file(source, dest).await
    }

    async fn list_directories(&self, path: &str) -> MediaResult<Vec<String>> {
        self.inner.list_directories(path).await
    }
}

/// Backend wrapper that records how many delete operations run at once.
pub struct ConcurrencyProbeStorage {
    inner: MemoryFileStorage,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ConcurrencyProbeStorage {
    pub fn new() -> Self {
        Self {
            inner: MemoryFileStorage::new(),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FileStorage for ConcurrencyProbeStorage {
    async fn exists(&self, path: &str) -> MediaResult<bool> {
        self.inner.exists(path).await
    }

    async fn save(&self, path: &str, content: &[u8]) -> MediaResult<()> {
        self.inner.save(path, content).await
    }

    async fn read(&self, path: &str) -> MediaResult<Vec<u8>> {
        self.inner.read(path).await
    }

    async fn delete_file(&self, path: &str) -> MediaResult<()> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        // Hold the slot long enough for siblings to pile up.
        tokio::time::sleep(Duration::from_millis(5)).await;
        let result = self.inner.delete_file(path).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    async fn delete_directory(&self, path: &str, recursive: bool) -> MediaResult<()> {
        self.inner.delete_directory(path, recursive).await
    }

    async fn copy_file(&self, source: &str, dest: &str) -> MediaResult<()> {
        self.inner.copy_file(source, dest).await
    }

    async fn list_directories(&self, path: &str) -> MediaResult<Vec<String>> {
        self.inner.list_directories(path).await
    }
}
