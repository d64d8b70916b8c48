//! Bientrack: property-listing tracker core for a single-user dashboard.
//!
//! Bientrack is the data and pipeline layer of a real-estate tracking
//! dashboard ("biens" = property listings). It provides:
//! - A mode-aware entity store (purchase vs. rental, each with its own
//!   collection and workflow vocabulary)
//! - A pure projection/filter/sort pipeline feeding deterministic rows to
//!   any rendering target
//! - JSON file persistence with atomic writes and first-run seeding
//! - CSV export of the full canonical collection
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Rendering collaborator (out of scope)              │  ← rows, charts
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← single writer
//! │  - Entity store (canonical collection)              │
//! │  - Projection → Filter → Sort pipeline              │
//! │  - Mode switch controller                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Domain Layer  │   │ Storage Layer │   │ Export/Stats  │
//! │ (domain/)     │   │ (storage/)    │   │ (export/,     │
//! │ - Bien model  │   │ - JSON I/O    │   │  stats)       │
//! │ - Modes/états │   │ - Seed data   │   │ - CSV blob    │
//! │ - Errors      │   │ - Backend API │   │ - Summaries   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Entity store, filter/sort pipeline and the [`app::App`] controller
//! - [`domain`]: Core domain types (`Bien`, modes, errors)
//! - [`storage`]: Persistence gateway trait, JSON backend, seed data
//! - [`export`]: CSV serialization
//! - [`stats`]: Pure summary functions for stat cards and charts
//! - [`infrastructure`]: Data-file location
//! - [`observability`]: Tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use bientrack::app::{App, FilterCriteria, SortColumn};
//! use bientrack::storage::JsonStorage;
//! use bientrack::Config;
//!
//! let dir = tempfile::tempdir()?;
//! let storage = JsonStorage::new(dir.path().join("biens.json"))?;
//! let mut app = App::open(storage, &Config::default())?;
//!
//! // First run of purchase mode is seeded with sample listings.
//! assert_eq!(app.biens().len(), 8);
//!
//! app.set_criteria(FilterCriteria {
//!     prix_max: Some(150_000.0),
//!     ..FilterCriteria::default()
//! });
//! app.click_column(SortColumn::Prix);
//! let rows = app.visible();
//! assert!(rows.len() < app.biens().len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Concurrency model
//!
//! Single-threaded and event-driven: every operation is a synchronous call
//! that runs to completion, the entity store is the only shared mutable
//! resource, and renders are pure reads over the current snapshot. There is
//! nothing to lock and nothing to cancel.

pub mod app;
pub mod domain;
pub mod export;
pub mod infrastructure;
pub mod observability;
pub mod stats;
pub mod storage;

pub use app::{App, BienStore, FilterCriteria, SortColumn, SortState};
pub use domain::{Bien, BienDraft, BientrackError, ChargesMode, Dpe, Mode, Result, ThemePref};
pub use storage::{JsonStorage, Storage};

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration.
///
/// Loadable from a TOML file; every field has a default so a missing or
/// partial file works. The persisted active-mode selector takes precedence
/// over `mode`, which only applies on a fresh data file.
///
/// # File format
///
/// ```toml
/// data_file = "/home/user/.local/share/bientrack/biens.json"
/// mode = "location"
/// charges_mode = "annuelles"
/// log_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the JSON data file. Defaults to the XDG data location.
    pub data_file: Option<PathBuf>,

    /// Startup mode when no mode selector was ever persisted.
    pub mode: Mode,

    /// Initial charge display mode.
    pub charges_mode: ChargesMode,

    /// Tracing directive for [`observability::init_tracing`].
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            mode: Mode::Achat,
            charges_mode: ChargesMode::Mensuelles,
            log_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BientrackError::Config`] when the file cannot be read or
    /// parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            BientrackError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        toml::from_str(&contents)
            .map_err(|e| BientrackError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Returns the configured data file, or the XDG default.
    #[must_use]
    pub fn resolved_data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(infrastructure::default_data_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_starts_in_purchase_mode() {
        let config = Config::default();
        assert_eq!(config.mode, Mode::Achat);
        assert_eq!(config.charges_mode, ChargesMode::Mensuelles);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn config_loads_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bientrack.toml");
        std::fs::write(
            &path,
            "mode = \"location\"\ncharges_mode = \"annuelles\"\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.mode, Mode::Location);
        assert_eq!(config.charges_mode, ChargesMode::Annuelles);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bientrack.toml");
        std::fs::write(&path, "mode = \"location\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.mode, Mode::Location);
        assert_eq!(config.charges_mode, ChargesMode::Mensuelles);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bientrack.toml");
        std::fs::write(&path, "mode = \"vente\"\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, BientrackError::Config(_)));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = Config::from_file("/nonexistent/bientrack.toml").unwrap_err();
        assert!(matches!(err, BientrackError::Config(_)));
    }

    #[test]
    fn resolved_data_file_prefers_explicit_path() {
        let config = Config {
            data_file: Some(PathBuf::from("/tmp/custom.json")),
            ..Config::default()
        };
        assert_eq!(config.resolved_data_file(), PathBuf::from("/tmp/custom.json"));
    }
}
