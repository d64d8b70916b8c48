//! Entity store: exclusive owner of the active mode's canonical collection.
//!
//! All mutation goes through explicit calls on [`BienStore`]; every other
//! component receives read-only views or copies. Persistence is the caller's
//! decision — the store grows, replaces and shrinks its collection without
//! touching the gateway, except for the one-time first-run seeding in
//! [`BienStore::load`].

use crate::domain::error::{BientrackError, Result};
use crate::domain::{Bien, BienDraft, ChargesMode, Mode};
use crate::storage::{achat_seed, Storage};

/// Owner of the canonical listing collection for one mode.
///
/// Canonical order is insertion order; no implicit sorting happens here.
#[derive(Debug, Clone)]
pub struct BienStore {
    mode: Mode,
    biens: Vec<Bien>,
}

impl BienStore {
    /// Loads the collection for `mode` through the persistence gateway.
    ///
    /// Failover when the mode's key was never written: purchase mode gets the
    /// fixed seed dataset, persisted immediately so subsequent loads are
    /// idempotent; rental mode gets an empty collection. Loaded records are
    /// normalized on entry (legacy charge repair, état vocabulary
    /// defaulting).
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway read fails, or if persisting the seed
    /// dataset fails on first run.
    pub fn load(storage: &mut dyn Storage, mode: Mode) -> Result<Self> {
        let _span = tracing::debug_span!("store_load", mode = %mode).entered();

        let mut biens = match storage.load_biens(mode)? {
            Some(biens) => biens,
            None => match mode {
                Mode::Achat => {
                    tracing::info!("no purchase data found, seeding sample listings");
                    let seed = achat_seed();
                    storage.save_biens(mode, &seed)?;
                    seed
                }
                Mode::Location => Vec::new(),
            },
        };

        for bien in &mut biens {
            bien.normalize(mode);
        }

        tracing::debug!(count = biens.len(), "collection loaded");
        Ok(Self { mode, biens })
    }

    /// Creates an empty store for `mode` without touching the gateway.
    ///
    /// Used by tests and by callers that manage persistence themselves.
    #[must_use]
    pub fn empty(mode: Mode) -> Self {
        Self {
            mode,
            biens: Vec::new(),
        }
    }

    /// Returns the owning mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the canonical collection in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Bien] {
        &self.biens
    }

    /// Returns the listing with the given id, if present.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Bien> {
        self.biens.iter().find(|b| b.id == id)
    }

    /// Validates a draft and appends the new listing to the collection.
    ///
    /// Assigns a fresh time-based id, clamped above the current maximum so
    /// ids stay unique even for creations within the same millisecond. Ids
    /// are never reused. The caller decides when to persist.
    ///
    /// # Errors
    ///
    /// Returns [`BientrackError::Validation`] when the draft is invalid.
    pub fn create(&mut self, draft: BienDraft, charges_mode: ChargesMode) -> Result<&Bien> {
        let _span = tracing::debug_span!("store_create", mode = %self.mode).entered();

        let id = self.next_id();
        let bien = draft.into_bien(id, self.mode, charges_mode)?;

        tracing::debug!(bien_id = id, quartier = %bien.quartier, "listing created");
        self.biens.push(bien);
        let index = self.biens.len() - 1;
        Ok(&self.biens[index])
    }

    /// Replaces the full record matching `id` with a validated draft.
    ///
    /// Whole-record resubmission: any field absent from the draft is lost.
    /// The id is kept; the record's position in the canonical order does not
    /// change.
    ///
    /// # Errors
    ///
    /// Returns [`BientrackError::NotFound`] for an unknown id (the record is
    /// not created) or [`BientrackError::Validation`] for an invalid draft.
    pub fn update(&mut self, id: i64, draft: BienDraft, charges_mode: ChargesMode) -> Result<&Bien> {
        let _span = tracing::debug_span!("store_update", bien_id = id).entered();

        let index = self
            .biens
            .iter()
            .position(|b| b.id == id)
            .ok_or(BientrackError::NotFound(id))?;

        let bien = draft.into_bien(id, self.mode, charges_mode)?;
        self.biens[index] = bien;

        tracing::debug!("listing replaced");
        Ok(&self.biens[index])
    }

    /// Removes the record with the given id.
    ///
    /// Idempotent: returns whether anything was removed; a missing id is a
    /// harmless no-op, not an error.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.biens.len();
        self.biens.retain(|b| b.id != id);
        let removed = self.biens.len() != before;

        tracing::debug!(bien_id = id, removed, "delete requested");
        removed
    }

    /// Next unique id: current time in milliseconds, bumped above the
    /// collection's maximum if the clock has not advanced past it.
    fn next_id(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let max = self.biens.iter().map(|b| b.id).max().unwrap_or(0);
        now.max(max + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Dpe;
    use crate::storage::JsonStorage;

    fn draft(quartier: &str, prix: f64) -> BienDraft {
        BienDraft {
            quartier: quartier.to_string(),
            type_bien: "T2".to_string(),
            montant: prix,
            surface: 40.0,
            pieces: 2,
            dpe: Dpe::D,
            etat: "À voir".to_string(),
            charges: 100.0,
            ..BienDraft::default()
        }
    }

    fn achat_store() -> BienStore {
        BienStore::empty(Mode::Achat)
    }

    #[test]
    fn first_achat_load_seeds_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path().join("biens.json")).unwrap();

        let store = BienStore::load(&mut storage, Mode::Achat).unwrap();
        assert_eq!(store.list().len(), 8);

        // The seed was persisted, so a second load is idempotent even after
        // the in-memory collection would have diverged.
        let persisted = storage.load_biens(Mode::Achat).unwrap().unwrap();
        assert_eq!(persisted.len(), 8);
    }

    #[test]
    fn first_location_load_is_empty_and_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path().join("biens.json")).unwrap();

        let store = BienStore::load(&mut storage, Mode::Location).unwrap();
        assert!(store.list().is_empty());
        assert!(storage.load_biens(Mode::Location).unwrap().is_none());
    }

    #[test]
    fn load_normalizes_legacy_charges() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path().join("biens.json")).unwrap();

        // Seed rows in the original dataset carry only monthly charges.
        let store = BienStore::load(&mut storage, Mode::Achat).unwrap();
        for bien in store.list() {
            assert_eq!(bien.charges_annuelles, bien.charges * 12.0);
        }
    }

    #[test]
    fn create_appends_in_insertion_order() {
        let mut store = achat_store();
        store.create(draft("Comédie", 100_000.0), ChargesMode::Mensuelles).unwrap();
        store.create(draft("Antigone", 200_000.0), ChargesMode::Mensuelles).unwrap();

        let quartiers: Vec<&str> = store.list().iter().map(|b| b.quartier.as_str()).collect();
        assert_eq!(quartiers, vec!["Comédie", "Antigone"]);
    }

    #[test]
    fn created_ids_are_unique_and_increasing() {
        let mut store = achat_store();
        let a = store.create(draft("A", 1.0), ChargesMode::Mensuelles).unwrap().id;
        let b = store.create(draft("B", 1.0), ChargesMode::Mensuelles).unwrap().id;
        let c = store.create(draft("C", 1.0), ChargesMode::Mensuelles).unwrap().id;
        assert!(a < b && b < c);
    }

    #[test]
    fn invalid_draft_never_reaches_the_collection() {
        let mut store = achat_store();
        let mut bad = draft("", 1.0);
        bad.quartier = String::new();
        assert!(store.create(bad, ChargesMode::Mensuelles).is_err());
        assert!(store.list().is_empty());
    }

    #[test]
    fn update_replaces_record_in_place() {
        let mut store = achat_store();
        let id = store.create(draft("Comédie", 100_000.0), ChargesMode::Mensuelles).unwrap().id;
        store.create(draft("Antigone", 200_000.0), ChargesMode::Mensuelles).unwrap();

        let mut edited = draft("Comédie", 110_000.0);
        edited.notes = "prix négocié".to_string();
        let updated = store.update(id, edited, ChargesMode::Mensuelles).unwrap();
        assert_eq!(updated.montant(Mode::Achat), 110_000.0);
        assert_eq!(updated.notes, "prix négocié");

        // Position in canonical order is unchanged.
        assert_eq!(store.list()[0].id, id);
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn update_unknown_id_is_not_found_and_does_not_create() {
        let mut store = achat_store();
        let err = store
            .update(42, draft("Comédie", 1.0), ChargesMode::Mensuelles)
            .unwrap_err();
        assert!(matches!(err, BientrackError::NotFound(42)));
        assert!(store.list().is_empty());
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = achat_store();
        let id = store.create(draft("Comédie", 1.0), ChargesMode::Mensuelles).unwrap().id;

        assert!(store.delete(id));
        assert!(!store.delete(id));
        assert!(store.list().is_empty());

        // Unknown ids are a no-op on any collection.
        assert!(!store.delete(9999));
    }

    #[test]
    fn get_finds_by_id() {
        let mut store = achat_store();
        let id = store.create(draft("Comédie", 1.0), ChargesMode::Mensuelles).unwrap().id;
        assert!(store.get(id).is_some());
        assert!(store.get(id + 1).is_none());
    }
}
