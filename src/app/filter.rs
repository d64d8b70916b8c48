//! Filter engine: multi-predicate selection over the canonical collection.
//!
//! Criteria are ephemeral UI state — they are never persisted and are cleared
//! on mode switch. All active predicates are ANDed; the two multi-select sets
//! (DPE letters, état values) use OR within the set. Evaluation
//! short-circuits on the first failing predicate, which affects effort only,
//! never the result.

use std::collections::HashSet;

use crate::domain::{Bien, Dpe, Mode};

/// Filter criteria for the listing table.
///
/// Every field at its default admits all listings, so `FilterCriteria::default()`
/// is the "no filter" state and clearing filters is equivalent to filtering
/// with a default value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Inclusive lower bound on the mode-projected price/rent. `None` = 0.
    pub prix_min: Option<f64>,
    /// Inclusive upper bound on the mode-projected price/rent. `None` = +∞.
    pub prix_max: Option<f64>,
    /// Inclusive lower bound on the raw surface. `None` = 0.
    pub surface_min: Option<f64>,
    /// Inclusive upper bound on the raw surface. `None` = +∞.
    pub surface_max: Option<f64>,
    /// Exact room count; `None` admits all.
    pub pieces: Option<u32>,
    /// Exact quartier match; `None` admits all.
    pub quartier: Option<String>,
    /// Selected DPE letters; empty set admits all, otherwise membership.
    pub dpe: HashSet<Dpe>,
    /// Selected état values; empty set admits all, otherwise membership.
    pub etats: HashSet<String>,
}

impl FilterCriteria {
    /// Returns whether every predicate is at its admit-all default.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Resets all predicates to admit-all.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Evaluates the conjunction of active predicates against one listing.
    fn matches(&self, bien: &Bien, mode: Mode) -> bool {
        let prix = bien.montant(mode);
        if prix < self.prix_min.unwrap_or(0.0) || prix > self.prix_max.unwrap_or(f64::INFINITY) {
            return false;
        }
        if bien.surface < self.surface_min.unwrap_or(0.0)
            || bien.surface > self.surface_max.unwrap_or(f64::INFINITY)
        {
            return false;
        }
        if let Some(pieces) = self.pieces {
            if bien.pieces != pieces {
                return false;
            }
        }
        if let Some(quartier) = &self.quartier {
            if bien.quartier != *quartier {
                return false;
            }
        }
        if !self.dpe.is_empty() && !self.dpe.contains(&bien.dpe) {
            return false;
        }
        if !self.etats.is_empty() && !self.etats.contains(&bien.etat) {
            return false;
        }
        true
    }
}

/// Applies the criteria to a listing sequence, producing the filtered subset.
///
/// Preserves the input order; does not mutate the input.
#[must_use]
pub fn apply_filters(biens: &[Bien], criteria: &FilterCriteria, mode: Mode) -> Vec<Bien> {
    let filtered: Vec<Bien> = biens
        .iter()
        .filter(|b| criteria.matches(b, mode))
        .cloned()
        .collect();

    tracing::debug!(
        total = biens.len(),
        kept = filtered.len(),
        "filters applied"
    );
    filtered
}
