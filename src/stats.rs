//! Summary statistics over the canonical collection.
//!
//! Pure functions of `(collection, mode)` feeding the stat cards, the two
//! charts and the quartier filter dropdown. Nothing here caches or mutates;
//! every call recomputes from the snapshot it is given, so any rendering
//! target can consume the output.

use std::collections::BTreeMap;

use crate::domain::{Bien, Dpe, Mode};

/// Per-état breakdown of the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSummary {
    /// Total number of listings.
    pub total: usize,
    /// Count per état, in the mode's vocabulary order. Zero counts are kept
    /// so stat cards stay in place.
    pub par_etat: Vec<(&'static str, usize)>,
}

/// Computes the per-état summary for the active mode.
#[must_use]
pub fn summarize(biens: &[Bien], mode: Mode) -> StatsSummary {
    let par_etat = mode
        .etats()
        .iter()
        .map(|etat| (*etat, biens.iter().filter(|b| b.etat == *etat).count()))
        .collect();

    StatsSummary {
        total: biens.len(),
        par_etat,
    }
}

/// Counts listings per quartier, sorted by quartier name.
///
/// Feeds the bar chart.
#[must_use]
pub fn count_by_quartier(biens: &[Bien]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for bien in biens {
        *counts.entry(bien.quartier.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(q, n)| (q.to_string(), n))
        .collect()
}

/// Counts listings per DPE letter, A through G.
///
/// Every letter is present even at zero so the pie chart keeps its full
/// color scale.
#[must_use]
pub fn count_by_dpe(biens: &[Bien]) -> Vec<(Dpe, usize)> {
    Dpe::ALL
        .iter()
        .map(|dpe| (*dpe, biens.iter().filter(|b| b.dpe == *dpe).count()))
        .collect()
}

/// Returns the sorted, deduplicated quartier names in the collection.
///
/// Feeds the quartier filter dropdown.
#[must_use]
pub fn quartiers(biens: &[Bien]) -> Vec<String> {
    let mut names: Vec<String> = biens.iter().map(|b| b.quartier.clone()).collect();
    names.sort();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BienDraft, ChargesMode};

    fn achat_bien(id: i64, quartier: &str, dpe: Dpe, etat: &str) -> Bien {
        BienDraft {
            quartier: quartier.to_string(),
            type_bien: "T2".to_string(),
            montant: 100_000.0,
            surface: 40.0,
            dpe,
            etat: etat.to_string(),
            ..BienDraft::default()
        }
        .into_bien(id, Mode::Achat, ChargesMode::Mensuelles)
        .unwrap()
    }

    fn sample() -> Vec<Bien> {
        vec![
            achat_bien(1, "Comédie", Dpe::D, "À voir"),
            achat_bien(2, "Antigone", Dpe::C, "Vu"),
            achat_bien(3, "Comédie", Dpe::D, "Vu"),
        ]
    }

    #[test]
    fn summary_follows_vocabulary_order() {
        let summary = summarize(&sample(), Mode::Achat);
        assert_eq!(summary.total, 3);
        assert_eq!(
            summary.par_etat,
            vec![("À voir", 1), ("Vu", 2), ("Retenu", 0), ("Refusé", 0)]
        );
    }

    #[test]
    fn quartier_counts_are_sorted() {
        assert_eq!(
            count_by_quartier(&sample()),
            vec![("Antigone".to_string(), 1), ("Comédie".to_string(), 2)]
        );
    }

    #[test]
    fn dpe_counts_keep_all_letters() {
        let counts = count_by_dpe(&sample());
        assert_eq!(counts.len(), 7);
        assert_eq!(counts[2], (Dpe::C, 1));
        assert_eq!(counts[3], (Dpe::D, 2));
        assert_eq!(counts[6], (Dpe::G, 0));
    }

    #[test]
    fn quartier_list_is_unique_and_sorted() {
        assert_eq!(quartiers(&sample()), vec!["Antigone", "Comédie"]);
        assert!(quartiers(&[]).is_empty());
    }
}
