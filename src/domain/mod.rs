//! Core domain types: the listing record, operating modes and errors.
//!
//! This layer has no dependency on storage or application state; everything
//! here is plain data plus the invariants that travel with it (charge
//! consistency, état vocabularies, validation at the draft boundary).

pub mod bien;
pub mod error;
pub mod mode;

pub use bien::{Bien, BienDraft, Pricing};
pub use error::{BientrackError, Result};
pub use mode::{etat_short_label, ChargesMode, Dpe, Mode, ThemePref, ACHAT_ETATS, LOCATION_ETATS};
