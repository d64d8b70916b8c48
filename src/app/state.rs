//! Application state container and mode switch controller.
//!
//! [`App`] owns the entity store, the ephemeral filter/sort state and the
//! charge display mode, and drives the pipeline the rendering collaborator
//! consumes: canonical collection → projection → filter → sort. It is the
//! single writer — every handler runs to completion on the caller's thread
//! before the next one starts, so no locking discipline is needed.
//!
//! Mutations persist through the gateway immediately after they are applied,
//! mirroring the submit handlers of the dashboard; a failed save propagates
//! and the in-memory state stays the source of truth until a retry succeeds.

use crate::domain::error::Result;
use crate::domain::{Bien, BienDraft, ChargesMode, Mode, ThemePref};
use crate::storage::Storage;
use crate::Config;

use super::filter::{apply_filters, FilterCriteria};
use super::sort::{apply_sort, SortColumn, SortState};

/// Central application state: entity store plus ephemeral view state.
///
/// Generic over the persistence gateway so tests can run against a
/// throwaway file-backed store.
pub struct App<S: Storage> {
    storage: S,
    store: super::store::BienStore,
    charges_mode: ChargesMode,
    criteria: FilterCriteria,
    sort: SortState,
}

impl<S: Storage> App<S> {
    /// Opens the application over a gateway.
    ///
    /// The active mode is the persisted selector when present, the
    /// configured startup mode otherwise. Loading applies the first-run
    /// failover rules (purchase seed, empty rental collection).
    ///
    /// # Errors
    ///
    /// Returns an error if the initial load (or the first-run seed persist)
    /// fails.
    pub fn open(mut storage: S, config: &Config) -> Result<Self> {
        let mode = storage.load_mode().unwrap_or(config.mode);
        tracing::debug!(mode = %mode, "opening application");

        let store = super::store::BienStore::load(&mut storage, mode)?;
        Ok(Self {
            storage,
            store,
            charges_mode: config.charges_mode,
            criteria: FilterCriteria::default(),
            sort: SortState::default(),
        })
    }

    /// Returns the active mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.store.mode()
    }

    /// Returns the canonical collection in insertion order.
    #[must_use]
    pub fn biens(&self) -> &[Bien] {
        self.store.list()
    }

    /// Returns the listing with the given id, if present.
    #[must_use]
    pub fn bien(&self, id: i64) -> Option<&Bien> {
        self.store.get(id)
    }

    /// Returns the charge display mode.
    #[must_use]
    pub fn charges_mode(&self) -> ChargesMode {
        self.charges_mode
    }

    /// Toggles the charge display mode.
    ///
    /// Pure view state: stored charge fields are untouched and the next
    /// projection picks up the other unit.
    pub fn set_charges_mode(&mut self, charges_mode: ChargesMode) {
        self.charges_mode = charges_mode;
    }

    /// Returns the current filter criteria.
    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replaces the filter criteria.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Resets all filters to admit-all.
    pub fn clear_filters(&mut self) {
        self.criteria.clear();
    }

    /// Returns the sort state.
    #[must_use]
    pub fn sort(&self) -> SortState {
        self.sort
    }

    /// Advances the sort cycle for a click on a column header.
    pub fn click_column(&mut self, column: SortColumn) {
        self.sort.click(column);
    }

    /// Computes the rows to render: filtered, then sorted.
    ///
    /// A pure read over the current snapshot; calling it never mutates state,
    /// so renders cannot re-enter the store.
    #[must_use]
    pub fn visible(&self) -> Vec<Bien> {
        let filtered = apply_filters(self.store.list(), &self.criteria, self.mode());
        apply_sort(&filtered, self.sort, self.mode(), self.charges_mode)
    }

    /// Validates and creates a listing, then persists the collection.
    ///
    /// # Errors
    ///
    /// Validation errors leave the collection untouched; a failed save leaves
    /// the new listing in memory as the source of truth.
    pub fn create_bien(&mut self, draft: BienDraft) -> Result<Bien> {
        let bien = self.store.create(draft, self.charges_mode)?.clone();
        self.save()?;
        Ok(bien)
    }

    /// Validates and replaces the listing with the given id, then persists.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Validation` for a bad draft; see
    /// [`create_bien`](Self::create_bien) for save-failure semantics.
    pub fn update_bien(&mut self, id: i64, draft: BienDraft) -> Result<Bien> {
        let bien = self.store.update(id, draft, self.charges_mode)?.clone();
        self.save()?;
        Ok(bien)
    }

    /// Deletes the listing with the given id; persists only when something
    /// was actually removed. Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Only save failures; deleting a missing id is a harmless no-op.
    pub fn delete_bien(&mut self, id: i64) -> Result<bool> {
        let removed = self.store.delete(id);
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    /// Switches the operating mode.
    ///
    /// No-op when `new_mode` equals the active mode. Otherwise: persists the
    /// outgoing collection, loads the incoming one (with failover and état
    /// re-defaulting), clears filter criteria and sort state — the
    /// vocabularies differ, so prior selections are meaningless — and
    /// persists the active-mode selector.
    ///
    /// # Errors
    ///
    /// A failed outgoing save aborts the switch; the current mode and
    /// collection are left intact.
    pub fn switch_mode(&mut self, new_mode: Mode) -> Result<()> {
        if new_mode == self.mode() {
            tracing::debug!(mode = %new_mode, "mode unchanged, nothing to do");
            return Ok(());
        }
        let _span = tracing::debug_span!("switch_mode", from = %self.mode(), to = %new_mode)
            .entered();

        self.storage.save_biens(self.mode(), self.store.list())?;

        self.store = super::store::BienStore::load(&mut self.storage, new_mode)?;
        self.criteria.clear();
        self.sort.reset();

        self.storage.save_mode(new_mode)?;
        tracing::info!(mode = %new_mode, count = self.store.list().len(), "mode switched");
        Ok(())
    }

    /// Persists the canonical collection for the active mode.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures; no automatic retry.
    pub fn save(&mut self) -> Result<()> {
        self.storage.save_biens(self.mode(), self.store.list())
    }

    /// Serializes the full unfiltered canonical collection to CSV.
    ///
    /// Export deliberately ignores the active filters and sort.
    #[must_use]
    pub fn export_csv(&self) -> String {
        crate::export::csv::export_csv(self.store.list(), self.mode())
    }

    /// Returns the persisted theme preference, if any.
    #[must_use]
    pub fn theme(&self) -> Option<ThemePref> {
        self.storage.load_theme()
    }

    /// Persists the theme preference for the theming collaborator.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub fn set_theme(&mut self, theme: ThemePref) -> Result<()> {
        self.storage.save_theme(theme)
    }
}
