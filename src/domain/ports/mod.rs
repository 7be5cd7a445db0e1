pub mod file_storage;
pub mod path_scheme;

pub use file_storage::FileStorage;
pub use path_scheme::MediaPathScheme;
