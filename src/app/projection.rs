//! Mode projection: derived per-listing view values.
//!
//! [`project`] is a pure function from `(listing, mode, charge display mode)`
//! to the values a row renderer or sort-key extraction needs. It is called
//! fresh for every render and every comparison, so toggling the mode or the
//! charge display never requires rewriting stored data.

use crate::domain::{Bien, ChargesMode, Mode};

/// Derived, mode-dependent view of a listing.
///
/// Holds only computed values and labels; the source [`Bien`] is never
/// mutated by projection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedView {
    /// Purchase price or monthly rent, depending on the mode.
    pub display_price: f64,

    /// Price per square meter, rounded half away from zero.
    ///
    /// Surface is guaranteed positive by form-boundary validation, so the
    /// division is always defined.
    pub price_per_sqm: i64,

    /// Monthly or annual charges, depending on the charge display mode.
    pub display_charges: f64,

    /// Label of the main monetary column (`"Prix"` or `"Loyer"`).
    pub price_label: &'static str,

    /// Label of the charges column (`"Charges/mois"` or `"Charges/an"`).
    pub charges_label: &'static str,
}

/// Projects a listing into its mode-dependent view values.
///
/// # Examples
///
/// ```
/// use bientrack::app::projection::project;
/// use bientrack::domain::{BienDraft, ChargesMode, Dpe, Mode};
///
/// let bien = BienDraft {
///     quartier: "Centre-ville".to_string(),
///     type_bien: "T2".to_string(),
///     montant: 125_000.0,
///     surface: 45.0,
///     dpe: Dpe::D,
///     etat: "À voir".to_string(),
///     ..BienDraft::default()
/// }
/// .into_bien(1, Mode::Achat, ChargesMode::Mensuelles)
/// .unwrap();
///
/// let view = project(&bien, Mode::Achat, ChargesMode::Mensuelles);
/// assert_eq!(view.display_price, 125_000.0);
/// assert_eq!(view.price_per_sqm, 2778);
/// assert_eq!(view.price_label, "Prix");
/// ```
#[must_use]
pub fn project(bien: &Bien, mode: Mode, charges_mode: ChargesMode) -> ProjectedView {
    let display_price = bien.montant(mode);

    #[allow(clippy::cast_possible_truncation)]
    let price_per_sqm = (display_price / bien.surface).round() as i64;

    ProjectedView {
        display_price,
        price_per_sqm,
        display_charges: bien.charges_for(charges_mode),
        price_label: mode.price_label(),
        charges_label: charges_mode.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BienDraft, Dpe};

    fn location_bien(loyer: f64, surface: f64) -> Bien {
        BienDraft {
            quartier: "Les Arceaux".to_string(),
            type_bien: "T3".to_string(),
            montant: loyer,
            surface,
            pieces: 3,
            dpe: Dpe::C,
            etat: "Nouveau".to_string(),
            charges: 90.0,
            ..BienDraft::default()
        }
        .into_bien(1, Mode::Location, ChargesMode::Mensuelles)
        .unwrap()
    }

    #[test]
    fn rental_mode_projects_loyer() {
        let bien = location_bien(900.0, 45.0);
        let view = project(&bien, Mode::Location, ChargesMode::Mensuelles);
        assert_eq!(view.display_price, 900.0);
        assert_eq!(view.price_per_sqm, 20);
        assert_eq!(view.price_label, "Loyer");
    }

    #[test]
    fn price_per_sqm_rounds_half_away_from_zero() {
        // 850 / 34 = 25.0; 851 / 34 ≈ 25.03 → 25; 867 / 34 = 25.5 → 26
        let view = project(&location_bien(867.0, 34.0), Mode::Location, ChargesMode::Mensuelles);
        assert_eq!(view.price_per_sqm, 26);
        let view = project(&location_bien(851.0, 34.0), Mode::Location, ChargesMode::Mensuelles);
        assert_eq!(view.price_per_sqm, 25);
    }

    #[test]
    fn charge_display_mode_switches_field() {
        let bien = location_bien(900.0, 45.0);
        let monthly = project(&bien, Mode::Location, ChargesMode::Mensuelles);
        assert_eq!(monthly.display_charges, 90.0);
        assert_eq!(monthly.charges_label, "Charges/mois");

        let annual = project(&bien, Mode::Location, ChargesMode::Annuelles);
        assert_eq!(annual.display_charges, 1080.0);
        assert_eq!(annual.charges_label, "Charges/an");
    }

    #[test]
    fn projection_does_not_mutate_the_listing() {
        let bien = location_bien(900.0, 45.0);
        let before = bien.clone();
        let _ = project(&bien, Mode::Achat, ChargesMode::Annuelles);
        let _ = project(&bien, Mode::Location, ChargesMode::Mensuelles);
        assert_eq!(bien, before);
    }

    #[test]
    fn cross_mode_projection_falls_back_to_zero() {
        let bien = location_bien(900.0, 45.0);
        let view = project(&bien, Mode::Achat, ChargesMode::Mensuelles);
        assert_eq!(view.display_price, 0.0);
        assert_eq!(view.price_label, "Prix");
    }
}
