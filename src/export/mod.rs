//! Export of the canonical collection for external consumers.

pub mod csv;

pub use csv::{export_csv, export_filename};
