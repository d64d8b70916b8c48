//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait that abstracts over the
//! persistence gateway. The trait mirrors the persisted key layout: one
//! listing collection per mode, the active-mode selector, and the theme
//! preference owned by the out-of-scope theming collaborator.
//!
//! # Design Philosophy
//!
//! The trait is minimal and shaped by the actual use cases, not a generic
//! ORM. Reads distinguish "key never written" (`None`) from "empty
//! collection" so the entity store can decide when to seed first-run data.

use crate::domain::error::Result;
use crate::domain::{Bien, Mode, ThemePref};

/// Abstraction over the persistence gateway.
///
/// All operations are synchronous; the store is local and treated as
/// instantaneous. A failed save leaves the in-memory state as the source of
/// truth — there is no automatic retry.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): single JSON file with
///   atomic writes (default).
pub trait Storage {
    /// Reads the listing collection persisted for `mode`.
    ///
    /// Returns `Ok(None)` when the mode's key has never been written, which
    /// is distinct from an empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn load_biens(&self, mode: Mode) -> Result<Option<Vec<Bien>>>;

    /// Persists the listing collection for `mode`, replacing the previous
    /// value of that key.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; the caller's in-memory collection
    /// is unaffected.
    fn save_biens(&mut self, mode: Mode, biens: &[Bien]) -> Result<()>;

    /// Reads the persisted active-mode selector, if any.
    fn load_mode(&self) -> Option<Mode>;

    /// Persists the active-mode selector.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save_mode(&mut self, mode: Mode) -> Result<()>;

    /// Reads the persisted theme preference, if any.
    fn load_theme(&self) -> Option<ThemePref>;

    /// Persists the theme preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save_theme(&mut self, theme: ThemePref) -> Result<()>;
}
