//! CSV serialization of the canonical collection.
//!
//! Produces the text blob the download collaborator hands to the user:
//! semicolon-delimited, every cell quoted, UTF-8 with a BOM so spreadsheet
//! software detects the encoding, and a header row whose columns adapt to
//! the active mode (`Loyer` vs `Prix`, `Dépôt de garantie` only in rental
//! mode).
//!
//! Export always serializes the full unfiltered collection in canonical
//! order; the filter and sort engines have no influence here.

use chrono::NaiveDate;

use crate::domain::{Bien, Mode, Pricing};

/// Byte-order mark prefixed to the blob for encoding detection.
const BOM: char = '\u{feff}';

/// Serializes listings to the semicolon-delimited CSV blob.
///
/// One row per listing in the given order. Zero-valued monetary cells are
/// rendered empty, matching a blank form field rather than a literal `0`.
#[must_use]
pub fn export_csv(biens: &[Bien], mode: Mode) -> String {
    let is_location = mode == Mode::Location;

    let mut headers: Vec<&str> = vec![
        "Quartier",
        "Type",
        if is_location { "Loyer" } else { "Prix" },
        "Surface",
        "Meublé",
        "Nb Pièces",
        "DPE",
        "Chauffage",
        "Charges mensuelles",
        "Charges annuelles",
    ];
    if is_location {
        headers.push("Dépôt de garantie");
    }
    headers.extend([
        "Parking",
        "Cave",
        "Terrasse",
        "Clim",
        "Ascenseur",
        "Balcon",
        "État",
        "Date Publication",
        "Date Contact",
        "Date Visite",
        "Contact",
        "Téléphone",
        "Adresse",
        "Site Web",
        "Notes",
    ]);

    let mut out = String::new();
    out.push(BOM);
    out.push_str(&headers.join(";"));

    for bien in biens {
        out.push('\n');
        out.push_str(&row(bien, is_location).join(";"));
    }
    out
}

/// Returns the date-stamped default filename, e.g. `appartements_2024-01-18.csv`.
#[must_use]
pub fn export_filename(date: NaiveDate) -> String {
    format!("appartements_{}.csv", date.format("%Y-%m-%d"))
}

fn row(bien: &Bien, is_location: bool) -> Vec<String> {
    let (meuble, depot) = match bien.pricing {
        Pricing::Location {
            meuble,
            depot_garantie,
            ..
        } => (meuble, depot_garantie),
        Pricing::Achat { .. } => (false, 0.0),
    };

    let annuelles = if bien.charges_annuelles != 0.0 {
        bien.charges_annuelles
    } else {
        bien.charges * 12.0
    };

    let mut cells = vec![
        cell(&bien.quartier),
        cell(&bien.type_bien),
        cell(&money(bien.pricing.montant())),
        cell(&num(bien.surface)),
        oui_non(meuble),
        cell(&bien.pieces.to_string()),
        cell(bien.dpe.letter()),
        cell(&bien.chauffage),
        cell(&money(bien.charges)),
        cell(&money(annuelles)),
    ];
    if is_location {
        cells.push(cell(&money(depot)));
    }
    cells.extend([
        oui_non(bien.parking),
        oui_non(bien.cave),
        oui_non(bien.terrasse),
        oui_non(bien.clim),
        oui_non(bien.ascenseur),
        oui_non(bien.balcon),
        cell(&bien.etat),
        cell(&bien.date_publication),
        cell(&bien.date_contact),
        cell(&bien.date_visite),
        cell(&bien.contact),
        cell(&bien.tel),
        cell(&bien.adresse),
        cell(&bien.site_web),
        cell(&bien.notes),
    ]);
    cells
}

/// Quotes a cell, doubling any embedded quote.
fn cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn oui_non(flag: bool) -> String {
    cell(if flag { "Oui" } else { "Non" })
}

/// Formats a number without a trailing `.0` for whole values.
fn num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let whole = value as i64;
        whole.to_string()
    } else {
        format!("{value}")
    }
}

/// Monetary cell: blank for zero, plain number otherwise.
fn money(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        num(value)
    }
}
