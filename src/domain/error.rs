//! Error types for the bientrack core.
//!
//! This module defines the centralized error type [`BientrackError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for bientrack operations.
///
/// This enum consolidates all error conditions that can occur in the core,
/// from form-boundary validation to storage failures. Validation errors are
/// raised before a record ever reaches the entity store; `NotFound` is an
/// expected outcome of update/delete with a stale id, not a fault.
///
/// # Examples
///
/// ```
/// use bientrack::domain::BientrackError;
///
/// fn validate_surface(surface: f64) -> Result<(), BientrackError> {
///     if surface <= 0.0 {
///         return Err(BientrackError::Validation("surface must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_surface(0.0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum BientrackError {
    /// A required field is missing or malformed at create/update time.
    ///
    /// Surfaced at the form boundary; the entity store never sees a record
    /// that failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Update or delete referenced an id that is not in the collection.
    ///
    /// Returned as an explicit result value. Deleting an already-deleted
    /// record is harmless and reported as "nothing removed" instead.
    #[error("No listing with id {0}")]
    NotFound(i64),

    /// A mode value outside `{achat, location}` was supplied.
    ///
    /// Fatal to the call that produced it; the transition is rejected and
    /// persisted state is left untouched.
    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    /// Storage read or write failed.
    ///
    /// Covers JSON (de)serialization problems and quota-style failures. The
    /// in-memory collection remains the source of truth until a later save
    /// succeeds.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when the TOML configuration file cannot be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for bientrack operations.
///
/// This is a type alias for `std::result::Result<T, BientrackError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, BientrackError>;
