//! # Substance Catalog Module
//!
//! ## Aim
//! Static table of every substance that can be poured into the flask together with the
//! properties the lab needs: display color, category, density, reactivity score and pH.
//!
//! ## Main Data Structures and Logic
//! - `Tag`: finite set of category tags. The category label of a substance (for example
//!   "asam kuat", strong acid) is decomposed into tags so that the reaction rules test
//!   set membership instead of substrings.
//! - `Substance`: immutable catalog record, identity is the name
//! - `CATALOG`: the table itself, grouped by category like a lab shelf
//! - `find_substance()`: name lookup failing with `CatalogError::UnknownSubstance`
//!
//! ## Usage
//! ```rust
//! use ChemFlask::Substances::catalog::{find_substance, Tag};
//! let hcl = find_substance("Asam Klorida (HCl)").unwrap();
//! assert!(hcl.has_tag(Tag::Acid));
//! assert_eq!(hcl.reactivity, 8);
//! ```

use crate::Substances::color::Rgb;
use crate::Substances::molmass::{FormulaError, calculate_molar_mass};
use prettytable::{Table, row};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Unknown substance: '{0}'")]
    UnknownSubstance(String),
}

/// category tags; a substance carries one or more of them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tag {
    Metal,
    Alkali,
    AlkalineEarth,
    Transition,
    Gas,
    Acid,
    Base,
    Strong,
    Weak,
    Salt,
    Solvent,
    Indicator,
    Carbohydrate,
    Organic,
    Alcohol,
    NonMetal,
    Metalloid,
    Halogen,
}

impl Tag {
    pub const ALL: [Tag; 18] = [
        Tag::Metal,
        Tag::Alkali,
        Tag::AlkalineEarth,
        Tag::Transition,
        Tag::Gas,
        Tag::Acid,
        Tag::Base,
        Tag::Strong,
        Tag::Weak,
        Tag::Salt,
        Tag::Solvent,
        Tag::Indicator,
        Tag::Carbohydrate,
        Tag::Organic,
        Tag::Alcohol,
        Tag::NonMetal,
        Tag::Metalloid,
        Tag::Halogen,
    ];

    /// inverse of `as_str`, case-insensitive
    pub fn from_label(label: &str) -> Option<Tag> {
        let label = label.trim().to_lowercase();
        Self::ALL.into_iter().find(|tag| tag.as_str() == label)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Metal => "metal",
            Tag::Alkali => "alkali",
            Tag::AlkalineEarth => "alkaline earth",
            Tag::Transition => "transition",
            Tag::Gas => "gas",
            Tag::Acid => "acid",
            Tag::Base => "base",
            Tag::Strong => "strong",
            Tag::Weak => "weak",
            Tag::Salt => "salt",
            Tag::Solvent => "solvent",
            Tag::Indicator => "indicator",
            Tag::Carbohydrate => "carbohydrate",
            Tag::Organic => "organic",
            Tag::Alcohol => "alcohol",
            Tag::NonMetal => "non-metal",
            Tag::Metalloid => "metalloid",
            Tag::Halogen => "halogen",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// immutable catalog record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Substance {
    pub name: &'static str,
    pub color: Rgb,
    /// label as it appears on the shelf, e.g. "logam transisi"
    pub category: &'static str,
    pub tags: &'static [Tag],
    /// g/cm³
    pub density: f64,
    /// 0..=9
    pub reactivity: u8,
    pub ph: Option<f64>,
    /// plain ASCII formula used for the molar mass
    pub formula: Option<&'static str>,
}

impl Substance {
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
    /// molar mass in g/mol, None for records without a formula
    pub fn molar_mass(&self) -> Option<Result<f64, FormulaError>> {
        self.formula
            .map(|formula| calculate_molar_mass(formula).map(|(mass, _)| mass))
    }
    pub fn tags_string(&self) -> String {
        self.tags
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[allow(clippy::too_many_arguments)]
const fn substance(
    name: &'static str,
    color: u32,
    category: &'static str,
    tags: &'static [Tag],
    density: f64,
    reactivity: u8,
    ph: Option<f64>,
    formula: Option<&'static str>,
) -> Substance {
    Substance {
        name,
        color: Rgb::from_u32(color),
        category,
        tags,
        density,
        reactivity,
        ph,
        formula,
    }
}

use Tag::*;

const ALKALI_METAL: &[Tag] = &[Metal, Alkali];
const ALKALINE_EARTH_METAL: &[Tag] = &[Metal, AlkalineEarth];
const TRANSITION_METAL: &[Tag] = &[Metal, Transition];
const STRONG_ACID: &[Tag] = &[Acid, Strong];
const WEAK_ACID: &[Tag] = &[Acid, Weak];
const STRONG_BASE: &[Tag] = &[Base, Strong];
const WEAK_BASE: &[Tag] = &[Base, Weak];
// "non-logam" reads as a metal label to the rule table ("logam" is part of it)
const NON_METAL: &[Tag] = &[NonMetal, Metal];

pub static CATALOG: &[Substance] = &[
    // metals
    substance("Natrium (Na)", 0xD9D9D9, "logam alkali", ALKALI_METAL, 0.97, 9, None, Some("Na")),
    substance("Kalium (K)", 0x8F8FFF, "logam alkali", ALKALI_METAL, 0.86, 9, None, Some("K")),
    substance("Kalsium (Ca)", 0xFFD700, "logam alkali tanah", ALKALINE_EARTH_METAL, 1.54, 7, None, Some("Ca")),
    substance("Magnesium (Mg)", 0xFFA500, "logam alkali tanah", ALKALINE_EARTH_METAL, 1.74, 6, None, Some("Mg")),
    substance("Aluminium (Al)", 0xBFBFBF, "logam", &[Metal], 2.70, 5, None, Some("Al")),
    substance("Besi (Fe)", 0xB5651D, "logam transisi", TRANSITION_METAL, 7.87, 6, None, Some("Fe")),
    substance("Tembaga (Cu)", 0xD2691E, "logam transisi", TRANSITION_METAL, 8.96, 4, None, Some("Cu")),
    substance("Perak (Ag)", 0xC0C0C0, "logam transisi", TRANSITION_METAL, 10.49, 3, None, Some("Ag")),
    substance("Emas (Au)", 0xFFD700, "logam transisi", TRANSITION_METAL, 19.32, 1, None, Some("Au")),
    // gases
    substance("Hidrogen (H₂)", 0xF0F8FF, "gas", &[Gas], 0.000089, 7, None, Some("H2")),
    substance("Oksigen (O₂)", 0xADD8E6, "gas", &[Gas], 0.00143, 6, None, Some("O2")),
    substance("Nitrogen (N₂)", 0x87CEEB, "gas", &[Gas], 0.00125, 3, None, Some("N2")),
    substance("Klorin (Cl₂)", 0x90EE90, "gas", &[Gas], 0.00321, 8, None, Some("Cl2")),
    substance("Fluorin (F₂)", 0x98FB98, "gas", &[Gas], 0.00170, 9, None, Some("F2")),
    // acids
    substance("Asam Klorida (HCl)", 0xFFFFFF, "asam kuat", STRONG_ACID, 1.18, 8, Some(0.0), Some("HCl")),
    substance("Asam Sulfat (H₂SO₄)", 0xF5F5F5, "asam kuat", STRONG_ACID, 1.84, 9, Some(0.0), Some("H2SO4")),
    substance("Asam Nitrat (HNO₃)", 0xFFFFF0, "asam kuat", STRONG_ACID, 1.51, 8, Some(1.0), Some("HNO3")),
    substance("Asam Asetat (CH₃COOH)", 0xF5F5DC, "asam lemah", WEAK_ACID, 1.05, 5, Some(3.0), Some("CH3COOH")),
    // bases
    substance("Natrium Hidroksida (NaOH)", 0xFFFFFF, "basa kuat", STRONG_BASE, 2.13, 7, Some(14.0), Some("NaOH")),
    substance("Kalium Hidroksida (KOH)", 0xFFFFFF, "basa kuat", STRONG_BASE, 2.04, 7, Some(14.0), Some("KOH")),
    substance("Kalsium Hidroksida (Ca(OH)₂)", 0xFFFFFF, "basa kuat", STRONG_BASE, 2.21, 6, Some(12.0), Some("Ca(OH)2")),
    substance("Amonia (NH₃)", 0xF0F8FF, "basa lemah", WEAK_BASE, 0.73, 5, Some(11.0), Some("NH3")),
    // salts
    substance("Natrium Klorida (NaCl)", 0xFFFFFF, "garam", &[Salt], 2.16, 1, None, Some("NaCl")),
    substance("Kalium Nitrat (KNO₃)", 0xFFFFFF, "garam", &[Salt], 2.11, 2, None, Some("KNO3")),
    substance("Tembaga Sulfat (CuSO₄)", 0x00B4D8, "garam", &[Salt], 3.60, 4, None, Some("CuSO4")),
    substance("Besi Sulfat (FeSO₄)", 0x76D7EA, "garam", &[Salt], 3.65, 5, None, Some("FeSO4")),
    // solvents
    substance("Air (H₂O)", 0xADD8E6, "pelarut", &[Solvent], 1.00, 0, Some(7.0), Some("H2O")),
    substance("Etanol (C₂H₅OH)", 0xF0FFF0, "pelarut", &[Solvent], 0.79, 2, None, Some("C2H5OH")),
    substance("Aseton (C₃H₆O)", 0xFFF0F5, "pelarut", &[Solvent], 0.79, 3, None, Some("C3H6O")),
    // indicators
    substance("Fenolftalein", 0xFFFFFF, "indikator", &[Indicator], 1.28, 1, None, Some("C20H14O4")),
    substance("Metil Merah", 0xFF0000, "indikator", &[Indicator], 1.20, 1, None, Some("C15H15N3O2")),
    substance("Bromotimol Biru", 0x0000FF, "indikator", &[Indicator], 1.25, 1, None, Some("C27H28Br2O5S")),
    // organic compounds
    substance("Glukosa (C₆H₁₂O₆)", 0xFFFFFF, "karbohidrat", &[Carbohydrate], 1.54, 3, None, Some("C6H12O6")),
    substance("Sukrosa (C₁₂H₂₂O₁₁)", 0xFFFFFF, "karbohidrat", &[Carbohydrate], 1.59, 2, None, Some("C12H22O11")),
    substance("Asam Sitrat (C₆H₈O₇)", 0xFFFFFF, "asam organik", &[Acid, Organic], 1.67, 4, None, Some("C6H8O7")),
    substance("Etilen Glikol (C₂H₆O₂)", 0xF0F8FF, "alkohol", &[Alcohol], 1.11, 3, None, Some("C2H6O2")),
    // other elements
    substance("Karbon (C)", 0x000000, "non-logam", NON_METAL, 2.26, 4, None, Some("C")),
    substance("Silikon (Si)", 0xC0C0C0, "metalloid", &[Metalloid], 2.33, 3, None, Some("Si")),
    substance("Fosfor (P)", 0xFFA500, "non-logam", NON_METAL, 1.82, 7, None, Some("P")),
    substance("Belerang (S)", 0xFFFF00, "non-logam", NON_METAL, 2.07, 5, None, Some("S")),
    substance("Iodin (I₂)", 0x9400D3, "halogen", &[Halogen], 4.93, 6, None, Some("I2")),
    substance("Merkuri (Hg)", 0xE0E0E0, "logam", &[Metal], 13.53, 3, None, Some("Hg")),
    substance("Timbal (Pb)", 0xA9A9A9, "logam", &[Metal], 11.34, 2, None, Some("Pb")),
    substance("Seng (Zn)", 0x7FFFD4, "logam", &[Metal], 7.14, 6, None, Some("Zn")),
    substance("Nikel (Ni)", 0x50C878, "logam", &[Metal], 8.91, 5, None, Some("Ni")),
    substance("Kromium (Cr)", 0xC0C0C0, "logam", &[Metal], 7.19, 4, None, Some("Cr")),
];

/// exact name lookup
pub fn find_substance(name: &str) -> Result<&'static Substance, CatalogError> {
    CATALOG
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| CatalogError::UnknownSubstance(name.to_string()))
}

/// all substances carrying the tag, in catalog order
pub fn substances_with_tag(tag: Tag) -> Vec<&'static Substance> {
    CATALOG.iter().filter(|s| s.has_tag(tag)).collect()
}

/// Resolves user input to a catalog entry: a 1-based index into the catalog,
/// an exact name, or a case-insensitive unique prefix of a name.
pub fn resolve_substance(input: &str) -> Result<&'static Substance, CatalogError> {
    let input = input.trim();
    if let Ok(index) = input.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| CATALOG.get(i))
            .ok_or_else(|| CatalogError::UnknownSubstance(input.to_string()));
    }
    if let Ok(found) = find_substance(input) {
        return Ok(found);
    }
    let lower = input.to_lowercase();
    let candidates: Vec<&'static Substance> = CATALOG
        .iter()
        .filter(|s| !lower.is_empty() && s.name.to_lowercase().starts_with(&lower))
        .collect();
    match candidates.as_slice() {
        [single] => Ok(*single),
        _ => Err(CatalogError::UnknownSubstance(input.to_string())),
    }
}

/// table of the whole shelf
pub fn catalog_table() -> Table {
    let mut table = Table::new();
    table.add_row(row![
        "#", "Substance", "Category", "Tags", "Color", "Density, g/cm³", "Reactivity", "pH", "M, g/mol"
    ]);
    for (i, s) in CATALOG.iter().enumerate() {
        let ph = s.ph.map(|p| format!("{}", p)).unwrap_or_else(|| "-".to_string());
        let molar_mass = match s.molar_mass() {
            Some(Ok(m)) => format!("{:.2}", m),
            _ => "-".to_string(),
        };
        table.add_row(row![
            i + 1,
            s.name,
            s.category,
            s.tags_string(),
            s.color.to_hex(),
            s.density,
            s.reactivity,
            ph,
            molar_mass
        ]);
    }
    table
}

pub fn print_catalog() {
    catalog_table().printstd();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = CATALOG.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), CATALOG.len());
        assert_eq!(CATALOG.len(), 46);
    }

    #[test]
    fn test_reactivity_in_range_and_tags_present() {
        for s in CATALOG {
            assert!(s.reactivity <= 9, "{}", s.name);
            assert!(!s.tags.is_empty(), "{}", s.name);
            assert!(s.density > 0.0, "{}", s.name);
        }
    }

    #[test]
    fn test_find_substance() {
        let fe = find_substance("Besi (Fe)").unwrap();
        assert_eq!(fe.reactivity, 6);
        assert_eq!(fe.color, Rgb::from_hex("#B5651D").unwrap());
        assert!(fe.has_tag(Tag::Metal));
        assert!(fe.has_tag(Tag::Transition));
        assert_eq!(
            find_substance("Unobtainium"),
            Err(CatalogError::UnknownSubstance("Unobtainium".to_string()))
        );
    }

    #[test]
    fn test_non_metals_match_the_metal_rules() {
        let non_metals = substances_with_tag(Tag::NonMetal);
        assert_eq!(non_metals.len(), 3);
        for s in non_metals {
            assert_eq!(s.category, "non-logam");
            assert!(s.has_tag(Tag::Metal), "{}", s.name);
        }
        assert!(!find_substance("Silikon (Si)").unwrap().has_tag(Tag::Metal));
        assert_eq!(substances_with_tag(Tag::Indicator).len(), 3);
    }

    #[test]
    fn test_citric_acid_is_an_acid() {
        let citric = find_substance("Asam Sitrat (C₆H₈O₇)").unwrap();
        assert!(citric.has_tag(Tag::Acid));
        assert!(citric.has_tag(Tag::Organic));
    }

    #[test]
    fn test_resolve_substance() {
        assert_eq!(resolve_substance("1").unwrap().name, "Natrium (Na)");
        assert_eq!(resolve_substance("46").unwrap().name, "Kromium (Cr)");
        assert!(resolve_substance("0").is_err());
        assert!(resolve_substance("47").is_err());
        assert_eq!(resolve_substance("besi (").unwrap().name, "Besi (Fe)");
        assert_eq!(resolve_substance("Fenol").unwrap().name, "Fenolftalein");
        // ambiguous prefix
        assert!(resolve_substance("Asam").is_err());
        assert!(resolve_substance("").is_err());
    }

    #[test]
    fn test_every_formula_has_a_molar_mass() {
        for s in CATALOG {
            let mass = s.molar_mass().unwrap().unwrap();
            assert!(mass > 0.0, "{}", s.name);
        }
    }

    #[test]
    fn test_tag_labels() {
        for tag in Tag::ALL {
            assert_eq!(Tag::from_label(tag.as_str()), Some(tag));
        }
        assert_eq!(Tag::from_label(" Alkaline Earth "), Some(Tag::AlkalineEarth));
        assert_eq!(Tag::from_label("noble gas"), None);
        assert!(!substances_with_tag(Tag::Halogen).is_empty());
    }

    #[test]
    fn test_catalog_table_has_a_row_per_substance() {
        let table = catalog_table();
        assert_eq!(table.len(), CATALOG.len() + 1);
    }
}
