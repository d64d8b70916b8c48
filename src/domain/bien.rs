//! Listing ("bien") domain model and form-boundary draft type.
//!
//! This module defines the central [`Bien`] record, its mode-dependent
//! [`Pricing`] payload, and [`BienDraft`], the unvalidated form submission
//! that is checked and derived into a record at the boundary.
//!
//! # Persisted layout
//!
//! Serde renames keep the historical storage field names (`datePublication`,
//! `depotGarantie`, `meublé`, `type`, ...) so collections persisted by earlier
//! versions of the dashboard load unchanged. The pricing payload is flattened
//! and untagged: purchase records carry a flat `prix` field, rental records a
//! flat `loyer` (plus furnished flag and deposit).
//!
//! # Charge consistency
//!
//! Every listing stores both monthly (`charges`) and annual
//! (`charges_annuelles`) service charges. Whichever the user edits is the
//! source of truth and the other is derived at write time (×12 / ÷12), so
//! `charges_annuelles == charges * 12` holds after any write. Legacy records
//! missing one side are repaired on read by [`Bien::normalize`].

use serde::{Deserialize, Serialize};

use super::error::{BientrackError, Result};
use super::mode::{ChargesMode, Dpe, Mode};

/// Mode-specific monetary payload of a listing.
///
/// Tagged variant instead of optional-field probing: a purchase listing can
/// only carry a price, a rental listing can only carry rent, furnished flag
/// and deposit, and every consumer handles both shapes exhaustively.
///
/// Serialized untagged so the on-disk shape stays flat (`prix` or `loyer` at
/// the record top level). Deserialization tries the rental shape first since
/// it is the more specific one (`loyer` is required).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pricing {
    /// Rental payload.
    Location {
        /// Monthly rent in euros.
        loyer: f64,
        /// Furnished flag.
        #[serde(rename = "meublé", default)]
        meuble: bool,
        /// Deposit in euros. Defaults to twice the rent when left blank on
        /// submit.
        #[serde(rename = "depotGarantie", default)]
        depot_garantie: f64,
    },
    /// Purchase payload.
    Achat {
        /// Purchase price in euros.
        prix: f64,
    },
}

impl Pricing {
    /// Returns the main monetary amount (price or rent).
    #[must_use]
    pub fn montant(&self) -> f64 {
        match self {
            Self::Location { loyer, .. } => *loyer,
            Self::Achat { prix } => *prix,
        }
    }
}

/// One real-estate property record.
///
/// The id is assigned at creation time and immutable afterwards; all other
/// fields are replaced wholesale on edit (whole-record resubmission model).
/// Free-form fields are stored as plain strings, empty meaning unset, which
/// matches the persisted layout of the original dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bien {
    /// Unique, immutable, time-based identifier. Never reused.
    pub id: i64,

    /// Neighborhood/district grouping field. Required.
    pub quartier: String,

    /// Property type (T2, Studio, Duplex, ...). Required.
    #[serde(rename = "type")]
    pub type_bien: String,

    /// Living surface in m². Always positive; enforced at the form boundary.
    pub surface: f64,

    /// Room count.
    #[serde(default)]
    pub pieces: u32,

    /// Energy-performance rating.
    pub dpe: Dpe,

    /// Workflow status. Always a member of the owning mode's vocabulary.
    #[serde(default)]
    pub etat: String,

    /// Heating type, free-form.
    #[serde(default)]
    pub chauffage: String,

    /// Monthly service charges in euros.
    #[serde(default)]
    pub charges: f64,

    /// Annual service charges in euros. Kept equal to `charges * 12`.
    #[serde(default)]
    pub charges_annuelles: f64,

    #[serde(default)]
    pub parking: bool,
    #[serde(default)]
    pub cave: bool,
    #[serde(default)]
    pub terrasse: bool,
    #[serde(default)]
    pub clim: bool,
    #[serde(default)]
    pub ascenseur: bool,
    #[serde(default)]
    pub balcon: bool,

    #[serde(rename = "datePublication", default)]
    pub date_publication: String,
    #[serde(rename = "dateContact", default)]
    pub date_contact: String,
    #[serde(rename = "dateVisite", default)]
    pub date_visite: String,

    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub tel: String,
    #[serde(rename = "siteWeb", default)]
    pub site_web: String,
    #[serde(default)]
    pub adresse: String,
    #[serde(default)]
    pub notes: String,

    /// Mode-specific monetary payload, flattened into the record.
    #[serde(flatten)]
    pub pricing: Pricing,
}

impl Bien {
    /// Returns the mode-projected main amount: `prix` in purchase mode,
    /// `loyer` in rental mode, `0` when the payload does not match the mode
    /// (legacy cross-mode data).
    #[must_use]
    pub fn montant(&self, mode: Mode) -> f64 {
        match (mode, &self.pricing) {
            (Mode::Achat, Pricing::Achat { prix }) => *prix,
            (Mode::Location, Pricing::Location { loyer, .. }) => *loyer,
            _ => 0.0,
        }
    }

    /// Returns the charge value under the given display mode.
    ///
    /// Falls back to `charges * 12` when the annual field is missing on a
    /// legacy record that has not been normalized yet.
    #[must_use]
    pub fn charges_for(&self, charges_mode: ChargesMode) -> f64 {
        match charges_mode {
            ChargesMode::Mensuelles => self.charges,
            ChargesMode::Annuelles => {
                if self.charges_annuelles == 0.0 {
                    self.charges * 12.0
                } else {
                    self.charges_annuelles
                }
            }
        }
    }

    /// Writes a charge value, treating it as source of truth under the given
    /// display mode and deriving the other field.
    pub fn set_charges(&mut self, value: f64, charges_mode: ChargesMode) {
        match charges_mode {
            ChargesMode::Mensuelles => {
                self.charges = value;
                self.charges_annuelles = value * 12.0;
            }
            ChargesMode::Annuelles => {
                self.charges_annuelles = value;
                self.charges = value / 12.0;
            }
        }
    }

    /// Repairs legacy data on read.
    ///
    /// Fills in whichever charge field is missing using the ×12 rule and
    /// resets an état outside the owning mode's vocabulary to that mode's
    /// first value.
    pub fn normalize(&mut self, mode: Mode) {
        if self.charges_annuelles == 0.0 && self.charges != 0.0 {
            self.charges_annuelles = self.charges * 12.0;
        } else if self.charges == 0.0 && self.charges_annuelles != 0.0 {
            self.charges = self.charges_annuelles / 12.0;
        }

        if !mode.is_valid_etat(&self.etat) {
            tracing::debug!(
                bien_id = self.id,
                etat = %self.etat,
                mode = %mode,
                "resetting out-of-vocabulary etat"
            );
            self.etat = mode.default_etat().to_string();
        }
    }
}

/// Unvalidated form submission for creating or editing a listing.
///
/// `montant` is the value of the main monetary input, interpreted as `prix`
/// or `loyer` depending on the active mode; `charges` is interpreted in the
/// active charge display unit. [`BienDraft::into_bien`] validates the draft
/// and applies all mode-specific derivation.
#[derive(Debug, Clone, Default)]
pub struct BienDraft {
    pub quartier: String,
    pub type_bien: String,
    /// Price (purchase mode) or monthly rent (rental mode), in euros.
    pub montant: f64,
    pub surface: f64,
    pub pieces: u32,
    /// Furnished flag; only meaningful in rental mode.
    pub meuble: bool,
    /// Deposit; blank or non-positive defaults to `2 × loyer` on submit.
    pub depot_garantie: Option<f64>,
    pub dpe: Dpe,
    pub etat: String,
    pub chauffage: String,
    /// Charge input in the active display unit (monthly or annual).
    pub charges: f64,
    pub parking: bool,
    pub cave: bool,
    pub terrasse: bool,
    pub clim: bool,
    pub ascenseur: bool,
    pub balcon: bool,
    pub date_publication: String,
    pub date_contact: String,
    pub date_visite: String,
    pub contact: String,
    pub tel: String,
    pub site_web: String,
    pub adresse: String,
    pub notes: String,
}

impl BienDraft {
    /// Validates the draft and builds a full record with the given id.
    ///
    /// Applies the mode-specific derivation rules:
    /// - the monetary input becomes `prix` or `loyer` depending on `mode`;
    /// - in rental mode a blank or non-positive deposit defaults to twice the
    ///   rent (recomputed on every submit, creates and edits alike);
    /// - the charge input is stored in both units via the ×12 / ÷12 rule.
    ///
    /// # Errors
    ///
    /// Returns [`BientrackError::Validation`] when a required field is empty,
    /// a numeric field is non-finite or out of range, or the état does not
    /// belong to the mode's vocabulary.
    pub fn into_bien(self, id: i64, mode: Mode, charges_mode: ChargesMode) -> Result<Bien> {
        if self.quartier.trim().is_empty() {
            return Err(BientrackError::Validation("quartier is required".to_string()));
        }
        if self.type_bien.trim().is_empty() {
            return Err(BientrackError::Validation("type is required".to_string()));
        }
        if !self.surface.is_finite() || self.surface <= 0.0 {
            return Err(BientrackError::Validation(
                "surface must be a positive number".to_string(),
            ));
        }
        if !self.montant.is_finite() || self.montant < 0.0 {
            return Err(BientrackError::Validation(format!(
                "{} must be a non-negative number",
                mode.price_label().to_lowercase()
            )));
        }
        if !self.charges.is_finite() || self.charges < 0.0 {
            return Err(BientrackError::Validation(
                "charges must be a non-negative number".to_string(),
            ));
        }
        if !mode.is_valid_etat(&self.etat) {
            return Err(BientrackError::Validation(format!(
                "etat '{}' is not valid in {} mode",
                self.etat, mode
            )));
        }

        let pricing = match mode {
            Mode::Achat => Pricing::Achat { prix: self.montant },
            Mode::Location => Pricing::Location {
                loyer: self.montant,
                meuble: self.meuble,
                depot_garantie: self
                    .depot_garantie
                    .filter(|d| d.is_finite() && *d > 0.0)
                    .unwrap_or(self.montant * 2.0),
            },
        };

        let mut bien = Bien {
            id,
            quartier: self.quartier,
            type_bien: self.type_bien,
            surface: self.surface,
            pieces: self.pieces,
            dpe: self.dpe,
            etat: self.etat,
            chauffage: self.chauffage,
            charges: 0.0,
            charges_annuelles: 0.0,
            parking: self.parking,
            cave: self.cave,
            terrasse: self.terrasse,
            clim: self.clim,
            ascenseur: self.ascenseur,
            balcon: self.balcon,
            date_publication: self.date_publication,
            date_contact: self.date_contact,
            date_visite: self.date_visite,
            contact: self.contact,
            tel: self.tel,
            site_web: self.site_web,
            adresse: self.adresse,
            notes: self.notes,
            pricing,
        };
        bien.set_charges(self.charges, charges_mode);

        Ok(bien)
    }
}
