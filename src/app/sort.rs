//! Sort engine: column sort with a three-state click cycle.
//!
//! Sorting is non-mutating — [`apply_sort`] returns a new ordering and the
//! canonical collection keeps its insertion order. The header click cycle is
//! a small state machine:
//!
//! ```text
//! Unsorted --click(c)--> Asc(c) --click(c)--> Desc(c) --click(c)--> Unsorted
//!      Asc(c)/Desc(c) --click(c2 ≠ c)--> Asc(c2)
//! ```
//!
//! Sort keys are recomputed from the projection on every call (price per m²
//! is never cached), so the ordering always reflects the active mode and
//! charge display mode.

use std::cmp::Ordering;

use crate::domain::{Bien, ChargesMode, Mode};

use super::projection::project;

/// Sortable columns of the listing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    /// Mode-projected price/rent.
    Prix,
    /// Raw surface.
    Surface,
    /// Price per m², recomputed from the projection.
    PrixM2,
    /// Charges under the current charge display mode.
    Charges,
    /// Quartier, case-insensitive.
    Quartier,
    /// Property type, case-insensitive.
    TypeBien,
    /// DPE letter; A < B < ... < G.
    Dpe,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort state machine: at most one active column plus direction, or none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortState {
    /// No active sort; the insertion order shows through.
    #[default]
    Unsorted,
    /// Active sort on one column.
    Sorted {
        column: SortColumn,
        direction: SortDirection,
    },
}

impl SortState {
    /// Advances the state machine for a click on a column header.
    ///
    /// Same column: ascending → descending → unsorted. Different column:
    /// jumps straight to ascending on the new column.
    pub fn click(&mut self, column: SortColumn) {
        *self = match *self {
            Self::Sorted {
                column: current,
                direction,
            } if current == column => match direction {
                SortDirection::Asc => Self::Sorted {
                    column,
                    direction: SortDirection::Desc,
                },
                SortDirection::Desc => Self::Unsorted,
            },
            _ => Self::Sorted {
                column,
                direction: SortDirection::Asc,
            },
        };
    }

    /// Clears the sort back to the unsorted state.
    pub fn reset(&mut self) {
        *self = Self::Unsorted;
    }
}

/// Comparison key extracted from a listing for one column.
enum SortKey {
    Num(f64),
    Text(String),
}

fn sort_key(bien: &Bien, column: SortColumn, mode: Mode, charges_mode: ChargesMode) -> SortKey {
    match column {
        SortColumn::Prix => SortKey::Num(bien.montant(mode)),
        SortColumn::Surface => SortKey::Num(bien.surface),
        SortColumn::PrixM2 => {
            #[allow(clippy::cast_precision_loss)]
            let ppm2 = project(bien, mode, charges_mode).price_per_sqm as f64;
            SortKey::Num(ppm2)
        }
        SortColumn::Charges => SortKey::Num(bien.charges_for(charges_mode)),
        SortColumn::Quartier => SortKey::Text(bien.quartier.to_lowercase()),
        SortColumn::TypeBien => SortKey::Text(bien.type_bien.to_lowercase()),
        SortColumn::Dpe => SortKey::Text(bien.dpe.letter().to_string()),
    }
}

fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (SortKey::Num(a), SortKey::Num(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
        // Key kinds are uniform per column; mixed comparison cannot happen.
        _ => Ordering::Equal,
    }
}

/// Returns a new ordering of `biens` according to the sort state.
///
/// `Unsorted` returns the input order unchanged. The underlying sort is
/// stable, so listings with equal keys keep their relative order and
/// re-sorting an already sorted sequence is a no-op.
#[must_use]
pub fn apply_sort(
    biens: &[Bien],
    state: SortState,
    mode: Mode,
    charges_mode: ChargesMode,
) -> Vec<Bien> {
    let mut sorted = biens.to_vec();
    let SortState::Sorted { column, direction } = state else {
        return sorted;
    };

    sorted.sort_by(|a, b| {
        let ord = compare_keys(
            &sort_key(a, column, mode, charges_mode),
            &sort_key(b, column, mode, charges_mode),
        );
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BienDraft, Dpe};

    fn achat_bien(id: i64, quartier: &str, prix: f64, surface: f64, dpe: Dpe, charges: f64) -> Bien {
        BienDraft {
            quartier: quartier.to_string(),
            type_bien: "T2".to_string(),
            montant: prix,
            surface,
            pieces: 2,
            dpe,
            etat: "À voir".to_string(),
            charges,
            ..BienDraft::default()
        }
        .into_bien(id, Mode::Achat, ChargesMode::Mensuelles)
        .unwrap()
    }

    fn sample() -> Vec<Bien> {
        vec![
            achat_bien(1, "centre-ville", 125_000.0, 45.0, Dpe::D, 100.0),
            achat_bien(2, "Antigone", 185_000.0, 65.0, Dpe::C, 120.0),
        ]
    }

    fn ids(biens: &[Bien]) -> Vec<i64> {
        biens.iter().map(|b| b.id).collect()
    }

    #[test]
    fn price_ascending_and_descending() {
        let biens = sample();
        let asc = apply_sort(
            &biens,
            SortState::Sorted {
                column: SortColumn::Prix,
                direction: SortDirection::Asc,
            },
            Mode::Achat,
            ChargesMode::Mensuelles,
        );
        assert_eq!(ids(&asc), vec![1, 2]);

        let desc = apply_sort(
            &biens,
            SortState::Sorted {
                column: SortColumn::Prix,
                direction: SortDirection::Desc,
            },
            Mode::Achat,
            ChargesMode::Mensuelles,
        );
        assert_eq!(ids(&desc), vec![2, 1]);
    }

    #[test]
    fn unsorted_preserves_insertion_order() {
        let biens = vec![
            achat_bien(3, "Comédie", 90_000.0, 30.0, Dpe::E, 50.0),
            achat_bien(1, "Ecusson", 80_000.0, 28.0, Dpe::F, 40.0),
        ];
        let out = apply_sort(&biens, SortState::Unsorted, Mode::Achat, ChargesMode::Mensuelles);
        assert_eq!(ids(&out), vec![3, 1]);
    }

    #[test]
    fn string_columns_compare_case_insensitively() {
        let biens = sample();
        let asc = apply_sort(
            &biens,
            SortState::Sorted {
                column: SortColumn::Quartier,
                direction: SortDirection::Asc,
            },
            Mode::Achat,
            ChargesMode::Mensuelles,
        );
        // "Antigone" < "centre-ville" once lowercased.
        assert_eq!(ids(&asc), vec![2, 1]);
    }

    #[test]
    fn dpe_sorts_a_to_g() {
        let biens = vec![
            achat_bien(1, "A", 1.0, 10.0, Dpe::F, 0.0),
            achat_bien(2, "B", 1.0, 10.0, Dpe::B, 0.0),
            achat_bien(3, "C", 1.0, 10.0, Dpe::D, 0.0),
        ];
        let asc = apply_sort(
            &biens,
            SortState::Sorted {
                column: SortColumn::Dpe,
                direction: SortDirection::Asc,
            },
            Mode::Achat,
            ChargesMode::Mensuelles,
        );
        assert_eq!(ids(&asc), vec![2, 3, 1]);
    }

    #[test]
    fn price_per_sqm_is_recomputed() {
        // id 1: 125000/45 ≈ 2778, id 2: 185000/65 ≈ 2846
        let biens = sample();
        let desc = apply_sort(
            &biens,
            SortState::Sorted {
                column: SortColumn::PrixM2,
                direction: SortDirection::Desc,
            },
            Mode::Achat,
            ChargesMode::Mensuelles,
        );
        assert_eq!(ids(&desc), vec![2, 1]);
    }

    #[test]
    fn charges_follow_display_mode() {
        let mut biens = sample();
        // Make monthly and annual orders disagree: id 1 cheaper monthly but
        // manually bump its annual field (legacy-style divergence).
        biens[0].charges_annuelles = 10_000.0;
        let by_month = apply_sort(
            &biens,
            SortState::Sorted {
                column: SortColumn::Charges,
                direction: SortDirection::Asc,
            },
            Mode::Achat,
            ChargesMode::Mensuelles,
        );
        assert_eq!(ids(&by_month), vec![1, 2]);

        let by_year = apply_sort(
            &biens,
            SortState::Sorted {
                column: SortColumn::Charges,
                direction: SortDirection::Asc,
            },
            Mode::Achat,
            ChargesMode::Annuelles,
        );
        assert_eq!(ids(&by_year), vec![2, 1]);
    }

    #[test]
    fn repeated_sort_is_stable() {
        let biens = vec![
            achat_bien(1, "A", 100.0, 10.0, Dpe::C, 0.0),
            achat_bien(2, "B", 100.0, 20.0, Dpe::C, 0.0),
            achat_bien(3, "C", 100.0, 30.0, Dpe::C, 0.0),
        ];
        let state = SortState::Sorted {
            column: SortColumn::Prix,
            direction: SortDirection::Asc,
        };
        let once = apply_sort(&biens, state, Mode::Achat, ChargesMode::Mensuelles);
        let twice = apply_sort(&once, state, Mode::Achat, ChargesMode::Mensuelles);
        assert_eq!(ids(&once), vec![1, 2, 3]);
        assert_eq!(once, twice);
    }

    #[test]
    fn click_cycle_returns_to_unsorted() {
        let mut state = SortState::default();
        state.click(SortColumn::Prix);
        assert_eq!(
            state,
            SortState::Sorted {
                column: SortColumn::Prix,
                direction: SortDirection::Asc
            }
        );
        state.click(SortColumn::Prix);
        assert_eq!(
            state,
            SortState::Sorted {
                column: SortColumn::Prix,
                direction: SortDirection::Desc
            }
        );
        state.click(SortColumn::Prix);
        assert_eq!(state, SortState::Unsorted);
    }

    #[test]
    fn clicking_another_column_jumps_to_ascending() {
        let mut state = SortState::default();
        state.click(SortColumn::Prix);
        state.click(SortColumn::Surface);
        assert_eq!(
            state,
            SortState::Sorted {
                column: SortColumn::Surface,
                direction: SortDirection::Asc
            }
        );

        state.click(SortColumn::Surface); // Desc
        state.click(SortColumn::Quartier);
        assert_eq!(
            state,
            SortState::Sorted {
                column: SortColumn::Quartier,
                direction: SortDirection::Asc
            }
        );
    }
}
