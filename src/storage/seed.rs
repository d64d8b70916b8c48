//! First-run seed dataset for purchase mode.
//!
//! When no purchase-mode collection has ever been persisted, the entity store
//! falls back to this fixed dataset and immediately persists it, so the seed
//! is applied exactly once. Rental mode starts empty instead.

use crate::domain::{Bien, Dpe, Pricing};

struct SeedRow {
    id: i64,
    quartier: &'static str,
    type_bien: &'static str,
    prix: f64,
    surface: f64,
    pieces: u32,
    dpe: Dpe,
    chauffage: &'static str,
    charges: f64,
    equipements: [bool; 6],
    etat: &'static str,
    date_publication: &'static str,
    contact: &'static str,
    tel: &'static str,
}

impl SeedRow {
    fn into_bien(self) -> Bien {
        let [parking, cave, terrasse, clim, ascenseur, balcon] = self.equipements;
        Bien {
            id: self.id,
            quartier: self.quartier.to_string(),
            type_bien: self.type_bien.to_string(),
            surface: self.surface,
            pieces: self.pieces,
            dpe: self.dpe,
            etat: self.etat.to_string(),
            chauffage: self.chauffage.to_string(),
            charges: self.charges,
            charges_annuelles: self.charges * 12.0,
            parking,
            cave,
            terrasse,
            clim,
            ascenseur,
            balcon,
            date_publication: self.date_publication.to_string(),
            date_contact: String::new(),
            date_visite: String::new(),
            contact: self.contact.to_string(),
            tel: self.tel.to_string(),
            site_web: String::new(),
            adresse: String::new(),
            notes: String::new(),
            pricing: Pricing::Achat { prix: self.prix },
        }
    }
}

/// Returns the purchase-mode seed listings.
///
/// Eight sample records spanning the état vocabulary, a range of surfaces and
/// DPE ratings, so the first-run dashboard has something to filter and sort.
#[must_use]
pub fn achat_seed() -> Vec<Bien> {
    let rows = [
        SeedRow {
            id: 1,
            quartier: "Centre-ville",
            type_bien: "T2",
            prix: 125_000.0,
            surface: 45.0,
            pieces: 2,
            dpe: Dpe::D,
            chauffage: "Électrique",
            charges: 1200.0,
            equipements: [true, true, false, false, true, false],
            etat: "À voir",
            date_publication: "2024-01-15",
            contact: "Agence Immo Sud",
            tel: "04 67 00 00 00",
        },
        SeedRow {
            id: 2,
            quartier: "Antigone",
            type_bien: "T3",
            prix: 185_000.0,
            surface: 65.0,
            pieces: 3,
            dpe: Dpe::C,
            chauffage: "Gaz",
            charges: 1500.0,
            equipements: [false, true, true, false, true, false],
            etat: "Vu",
            date_publication: "2024-01-10",
            contact: "Propriétaire",
            tel: "06 12 34 56 78",
        },
        SeedRow {
            id: 3,
            quartier: "Comédie",
            type_bien: "T2",
            prix: 165_000.0,
            surface: 50.0,
            pieces: 2,
            dpe: Dpe::E,
            chauffage: "Électrique",
            charges: 900.0,
            equipements: [false, false, false, false, false, true],
            etat: "Retenu",
            date_publication: "2024-01-12",
            contact: "Agence Centre",
            tel: "04 67 11 11 11",
        },
        SeedRow {
            id: 4,
            quartier: "Ecusson",
            type_bien: "Studio",
            prix: 95_000.0,
            surface: 25.0,
            pieces: 1,
            dpe: Dpe::F,
            chauffage: "Électrique",
            charges: 600.0,
            equipements: [false, false, false, false, false, false],
            etat: "Refusé",
            date_publication: "2024-01-08",
            contact: "Agence Vieux",
            tel: "04 67 22 22 22",
        },
        SeedRow {
            id: 5,
            quartier: "Port Marianne",
            type_bien: "T4",
            prix: 245_000.0,
            surface: 85.0,
            pieces: 4,
            dpe: Dpe::B,
            chauffage: "Pompe à chaleur",
            charges: 1800.0,
            equipements: [true, true, true, true, true, false],
            etat: "À voir",
            date_publication: "2024-01-18",
            contact: "Promoteur Neuf",
            tel: "04 67 33 33 33",
        },
        SeedRow {
            id: 6,
            quartier: "Coursan",
            type_bien: "Duplex",
            prix: 195_000.0,
            surface: 75.0,
            pieces: 4,
            dpe: Dpe::C,
            chauffage: "Bois",
            charges: 800.0,
            equipements: [true, true, false, false, false, false],
            etat: "Vu",
            date_publication: "2024-01-14",
            contact: "Propriétaire",
            tel: "06 98 76 54 32",
        },
        SeedRow {
            id: 7,
            quartier: "Beaux-Arts",
            type_bien: "T3",
            prix: 210_000.0,
            surface: 60.0,
            pieces: 3,
            dpe: Dpe::D,
            chauffage: "Gaz",
            charges: 1400.0,
            equipements: [false, true, false, false, true, true],
            etat: "Retenu",
            date_publication: "2024-01-16",
            contact: "Agence Artistes",
            tel: "04 67 44 44 44",
        },
        SeedRow {
            id: 8,
            quartier: "Polygone",
            type_bien: "T2",
            prix: 140_000.0,
            surface: 48.0,
            pieces: 2,
            dpe: Dpe::E,
            chauffage: "Électrique",
            charges: 1100.0,
            equipements: [false, false, false, false, true, false],
            etat: "Refusé",
            date_publication: "2024-01-11",
            contact: "Agence Commerciale",
            tel: "04 67 55 55 55",
        },
    ];

    rows.into_iter().map(SeedRow::into_bien).collect()
}
