//! Platform-specific utilities.

pub mod paths;

pub use paths::{data_dir, default_data_file};
