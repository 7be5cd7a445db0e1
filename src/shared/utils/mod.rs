pub mod filename;

pub use filename::safe_file_name;
