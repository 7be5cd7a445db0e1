pub mod media_file_service;

pub use media_file_service::{MediaFileService, DEFAULT_BULK_DELETE_CONCURRENCY};
