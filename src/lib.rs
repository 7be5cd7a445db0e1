//! Media file storage subsystem.
//!
//! Maps logical media assets (files uploaded against a content item's
//! property) onto physical storage paths and performs store/copy/bulk-delete
//! operations against an abstract storage backend. Two path-naming policies
//! are supported: the identifier-based [`UniquePathScheme`] (default) and the
//! [`LegacyNumberedPathScheme`] for systems upgraded from historical data.
//!
//! Persistence of which path belongs to which property is the caller's
//! responsibility; this crate only translates identifiers into paths and
//! drives the backend.

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::services::{MediaFileService, DEFAULT_BULK_DELETE_CONCURRENCY};
pub use config::{Config, ConfigError, PathSchemeKind};
pub use domain::entities::owner::{MediaOwner, PropertyType};
pub use domain::errors::{MediaError, MediaResult};
pub use domain::ports::{FileStorage, MediaPathScheme};
pub use domain::services::{LegacyNumberedPathScheme, UniquePathScheme};
pub use infrastructure::storage::{LocalFileStorage, MemoryFileStorage};
pub use shared::utils::safe_file_name;
