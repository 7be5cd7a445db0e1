pub mod legacy_path_scheme;
pub mod unique_path_scheme;

pub use legacy_path_scheme::LegacyNumberedPathScheme;
pub use unique_path_scheme::UniquePathScheme;
