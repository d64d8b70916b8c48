//! JSON file-based storage backend.
//!
//! This module provides the default persistence gateway: a single
//! human-readable JSON document holding the four persisted keys (purchase
//! listings, rental listings, active mode, theme). It uses atomic file writes
//! (write-to-temp + rename) to prevent corruption on crashes.
//!
//! The historical key names of the browser-storage era are preserved
//! (`appartements_achat`, `appartements_location`, `currentMode`, `theme`) so
//! exported data migrates without translation.

use crate::domain::error::{BientrackError, Result};
use crate::domain::{Bien, Mode, ThemePref};
use crate::storage::backend::Storage;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk. Each field corresponds
/// to one key of the persisted layout; `None` means the key was never
/// written, which the entity store uses to trigger first-run seeding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    #[serde(default = "default_version")]
    version: u32,

    /// Purchase-mode listings, `None` until first persisted.
    #[serde(rename = "appartements_achat", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    achat: Option<Vec<Bien>>,

    /// Rental-mode listings, `None` until first persisted.
    #[serde(rename = "appartements_location", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    location: Option<Vec<Bien>>,

    /// Active-mode selector.
    #[serde(rename = "currentMode", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    current_mode: Option<Mode>,

    /// Theme preference, owned by the theming collaborator.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    theme: Option<ThemePref>,
}

fn default_version() -> u32 {
    1
}

/// JSON file storage backend.
///
/// The whole dataset is kept in memory and persisted on every modification;
/// a dirty flag skips redundant writes and a `Drop` impl flushes anything
/// left unsaved.
#[derive(Debug)]
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: StorageData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonStorage {
    /// Creates or opens a JSON storage backend.
    ///
    /// If the file exists, loads existing data. Otherwise starts from an
    /// empty container. Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bientrack::storage::JsonStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("/tmp/biens.json"))?;
    /// # Ok::<(), bientrack::domain::BientrackError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty storage");
            StorageData {
                version: 1,
                ..StorageData::default()
            }
        };

        tracing::debug!(
            achat_count = data.achat.as_ref().map_or(0, Vec::len),
            location_count = data.location.as_ref().map_or(0, Vec::len),
            "storage initialized"
        );

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Loads storage data from a JSON file.
    fn load_from_file(path: &PathBuf) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| BientrackError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(version = data.version, "loaded storage data");
        Ok(data)
    }

    /// Saves storage data to disk using atomic write.
    ///
    /// Writes to a temporary file first, then renames it to the target path,
    /// so the file is never left in a corrupt state even if the process
    /// crashes mid-write.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write or the rename
    /// fails. The in-memory data stays dirty so a later save retries.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "saving storage data");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| BientrackError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!("storage saved successfully");
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn load_biens(&self, mode: Mode) -> Result<Option<Vec<Bien>>> {
        let _span = tracing::debug_span!("json_load_biens", mode = %mode).entered();

        let biens = match mode {
            Mode::Achat => self.data.achat.clone(),
            Mode::Location => self.data.location.clone(),
        };

        tracing::debug!(
            found = biens.is_some(),
            count = biens.as_ref().map_or(0, Vec::len),
            "listings loaded"
        );
        Ok(biens)
    }

    fn save_biens(&mut self, mode: Mode, biens: &[Bien]) -> Result<()> {
        let _span =
            tracing::debug_span!("json_save_biens", mode = %mode, count = biens.len()).entered();

        let slot = match mode {
            Mode::Achat => &mut self.data.achat,
            Mode::Location => &mut self.data.location,
        };
        *slot = Some(biens.to_vec());

        self.dirty = true;
        self.save_to_file()
    }

    fn load_mode(&self) -> Option<Mode> {
        self.data.current_mode
    }

    fn save_mode(&mut self, mode: Mode) -> Result<()> {
        let _span = tracing::debug_span!("json_save_mode", mode = %mode).entered();

        self.data.current_mode = Some(mode);
        self.dirty = true;
        self.save_to_file()
    }

    fn load_theme(&self) -> Option<ThemePref> {
        self.data.theme
    }

    fn save_theme(&mut self, theme: ThemePref) -> Result<()> {
        self.data.theme = Some(theme);
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonStorage {
    /// Ensures data is saved on drop, even if a save was skipped earlier.
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}
