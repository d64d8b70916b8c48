//! Operating mode, charge display mode and closed vocabularies.
//!
//! This module defines the small state enums that drive field semantics across
//! the application: [`Mode`] (purchase vs. rental, each with its own état
//! vocabulary and persisted collection), [`ChargesMode`] (monthly vs. annual
//! charge display), [`Dpe`] (energy rating A..G) and [`ThemePref`].
//!
//! # Mode-dependent semantics
//!
//! The active mode decides which monetary field a listing carries (`prix` vs.
//! `loyer`), which état vocabulary is valid, and which labels the rendering
//! collaborator shows. Switching modes swaps the whole collection; the two
//! collections never bleed into each other.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::BientrackError;

/// États available in purchase mode, in vocabulary order.
///
/// The first entry is the defaulting target for out-of-vocabulary états.
pub const ACHAT_ETATS: [&str; 4] = ["À voir", "Vu", "Retenu", "Refusé"];

/// États available in rental mode, in vocabulary order.
pub const LOCATION_ETATS: [&str; 6] = [
    "Nouveau",
    "Contacté",
    "En attente de rappel",
    "Rendez-vous visite",
    "Il faut appeler",
    "Refusé",
];

/// Process-wide operating mode.
///
/// Exactly one mode is active at a time. Each mode owns its own listing
/// collection, its own persisted storage key and its own état vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Purchase mode: listings carry a `prix` (purchase price).
    Achat,
    /// Rental mode: listings carry a `loyer` (monthly rent), a furnished
    /// flag and a deposit.
    Location,
}

impl Mode {
    /// Returns the closed état vocabulary for this mode, in display order.
    #[must_use]
    pub fn etats(self) -> &'static [&'static str] {
        match self {
            Self::Achat => &ACHAT_ETATS,
            Self::Location => &LOCATION_ETATS,
        }
    }

    /// Returns the defaulting target for états outside this mode's vocabulary.
    ///
    /// On mode entry, any listing whose état does not belong to the incoming
    /// vocabulary is reset to this value.
    #[must_use]
    pub fn default_etat(self) -> &'static str {
        self.etats()[0]
    }

    /// Returns whether `etat` belongs to this mode's vocabulary.
    #[must_use]
    pub fn is_valid_etat(self, etat: &str) -> bool {
        self.etats().contains(&etat)
    }

    /// Returns the label of the main monetary column for this mode.
    #[must_use]
    pub fn price_label(self) -> &'static str {
        match self {
            Self::Achat => "Prix",
            Self::Location => "Loyer",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Achat => write!(f, "achat"),
            Self::Location => write!(f, "location"),
        }
    }
}

impl FromStr for Mode {
    type Err = BientrackError;

    /// Parses a mode value, rejecting anything outside `{achat, location}`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "achat" => Ok(Self::Achat),
            "location" => Ok(Self::Location),
            other => Err(BientrackError::InvalidMode(other.to_string())),
        }
    }
}

/// Display mode for service charges.
///
/// Ephemeral UI state: it changes which of the two stored charge fields is
/// projected, never the stored fields themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargesMode {
    /// Show and edit monthly charges (`charges`).
    Mensuelles,
    /// Show and edit annual charges (`charges_annuelles`).
    Annuelles,
}

impl ChargesMode {
    /// Returns the column label for the charges column under this display mode.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Mensuelles => "Charges/mois",
            Self::Annuelles => "Charges/an",
        }
    }
}

/// Energy-performance rating, letter grade A (best) to G (worst).
///
/// Derived `Ord` follows declaration order, so `A < B < ... < G` holds and the
/// sort engine can compare ratings directly.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Dpe {
    #[default]
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Dpe {
    /// All ratings in grade order, A first.
    pub const ALL: [Self; 7] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
    ];

    /// Returns the letter for this rating.
    #[must_use]
    pub fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
        }
    }

    /// Returns the chart color for this rating (green through dark red).
    ///
    /// Consumed by the out-of-scope chart renderer.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::A => "#22c55e",
            Self::B => "#84cc16",
            Self::C => "#eab308",
            Self::D => "#f97316",
            Self::E => "#ef4444",
            Self::F => "#dc2626",
            Self::G => "#991b1b",
        }
    }
}

impl fmt::Display for Dpe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// UI theme preference, persisted for the out-of-scope theming collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePref {
    Light,
    Dark,
}

/// Returns the compact display label for an état value.
///
/// A few rental états are too long for stat cards and filter checkboxes; the
/// UI shows a shortened form. Unknown états are returned unchanged.
#[must_use]
pub fn etat_short_label(etat: &str) -> &str {
    match etat {
        "En attente de rappel" => "En attente",
        "Rendez-vous visite" => "Visite",
        "Il faut appeler" => "À appeler",
        other => other,
    }
}
