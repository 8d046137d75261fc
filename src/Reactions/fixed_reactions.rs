//! # Known Reactions Module
//!
//! ## Aim
//! Small reference book of well-known reactions between substances of the lab shelf. Each
//! record carries the balanced equation, whether heat is released or absorbed, hazards and
//! the protective equipment to wear.
//!
//! ## Main Data Structures and Logic
//! - `ReactionRecord`: one pre-authored reaction
//! - `REACTION_RECORDS`: the table
//! - `lookup()`: exact unordered-pair match, `lookup(a, b) == lookup(b, a)`
//!
//! ## Usage
//! ```rust
//! use ChemFlask::Reactions::fixed_reactions::{lookup, EnergySign};
//! let record = lookup("Tembaga Sulfat (CuSO₄)", "Besi (Fe)").unwrap();
//! assert_eq!(record.energy, EnergySign::Exothermic);
//! assert!(lookup("Emas (Au)", "Air (H₂O)").is_none());
//! ```

use prettytable::{Table, row};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnergySign {
    Exothermic,
    Endothermic,
}

impl fmt::Display for EnergySign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnergySign::Exothermic => write!(f, "exothermic (releases heat)"),
            EnergySign::Endothermic => write!(f, "endothermic (absorbs heat)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Hazard {
    Corrosive,
    Flammable,
    Explosive,
    Toxic,
    Oxidizer,
    Irritant,
    HotSurface,
}

impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Hazard::Corrosive => "corrosive",
            Hazard::Flammable => "flammable",
            Hazard::Explosive => "explosive",
            Hazard::Toxic => "toxic",
            Hazard::Oxidizer => "oxidizer",
            Hazard::Irritant => "irritant",
            Hazard::HotSurface => "hot surface",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Protection {
    Goggles,
    Gloves,
    LabCoat,
    FumeHood,
    FaceShield,
    HeatResistantGloves,
}

impl fmt::Display for Protection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Protection::Goggles => "safety goggles",
            Protection::Gloves => "gloves",
            Protection::LabCoat => "lab coat",
            Protection::FumeHood => "fume hood",
            Protection::FaceShield => "face shield",
            Protection::HeatResistantGloves => "heat-resistant gloves",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReactionRecord {
    pub reagents: (&'static str, &'static str),
    pub equation: &'static str,
    pub energy: EnergySign,
    pub hazards: &'static [Hazard],
    pub protection: &'static [Protection],
    pub description: &'static str,
}

impl ReactionRecord {
    /// true for both orders of the reagents
    pub fn involves_pair(&self, a: &str, b: &str) -> bool {
        let (x, y) = self.reagents;
        (x == a && y == b) || (x == b && y == a)
    }

    pub fn involves(&self, name: &str) -> bool {
        self.reagents.0 == name || self.reagents.1 == name
    }

    fn join<T: fmt::Display>(items: &[T]) -> String {
        items
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn hazards_string(&self) -> String {
        Self::join(self.hazards)
    }

    pub fn protection_string(&self) -> String {
        Self::join(self.protection)
    }

    pub fn pretty_print(&self) {
        let mut table = Table::new();
        table.add_row(row!["Reagents", format!("{} + {}", self.reagents.0, self.reagents.1)]);
        table.add_row(row!["Equation", self.equation]);
        table.add_row(row!["Energy", self.energy]);
        table.add_row(row!["Hazards", self.hazards_string()]);
        table.add_row(row!["Protection", self.protection_string()]);
        table.add_row(row!["Description", self.description]);
        table.printstd();
    }
}

use Hazard::*;
use Protection::*;

pub static REACTION_RECORDS: &[ReactionRecord] = &[
    ReactionRecord {
        reagents: ("Besi (Fe)", "Tembaga Sulfat (CuSO₄)"),
        equation: "Fe + CuSO₄ → FeSO₄ + Cu",
        energy: EnergySign::Exothermic,
        hazards: &[Irritant],
        protection: &[Goggles, Gloves],
        description: "Single displacement: iron is more active than copper, the blue solution turns pale green and red copper coats the iron.",
    },
    ReactionRecord {
        reagents: ("Asam Klorida (HCl)", "Natrium Hidroksida (NaOH)"),
        equation: "HCl + NaOH → NaCl + H₂O",
        energy: EnergySign::Exothermic,
        hazards: &[Corrosive],
        protection: &[Goggles, Gloves, LabCoat],
        description: "Strong acid neutralized by a strong base, the solution warms up.",
    },
    ReactionRecord {
        reagents: ("Asam Sulfat (H₂SO₄)", "Natrium Hidroksida (NaOH)"),
        equation: "H₂SO₄ + 2NaOH → Na₂SO₄ + 2H₂O",
        energy: EnergySign::Exothermic,
        hazards: &[Corrosive, HotSurface],
        protection: &[Goggles, Gloves, LabCoat, FaceShield],
        description: "Neutralization of a diprotic acid; concentrated acid releases a lot of heat.",
    },
    ReactionRecord {
        reagents: ("Seng (Zn)", "Asam Klorida (HCl)"),
        equation: "Zn + 2HCl → ZnCl₂ + H₂↑",
        energy: EnergySign::Exothermic,
        hazards: &[Corrosive, Flammable],
        protection: &[Goggles, Gloves, FumeHood],
        description: "Zinc dissolves with vigorous bubbling of hydrogen gas.",
    },
    ReactionRecord {
        reagents: ("Magnesium (Mg)", "Asam Klorida (HCl)"),
        equation: "Mg + 2HCl → MgCl₂ + H₂↑",
        energy: EnergySign::Exothermic,
        hazards: &[Corrosive, Flammable],
        protection: &[Goggles, Gloves, FumeHood],
        description: "Magnesium ribbon fizzes quickly and disappears, hydrogen is released.",
    },
    ReactionRecord {
        reagents: ("Natrium (Na)", "Air (H₂O)"),
        equation: "2Na + 2H₂O → 2NaOH + H₂↑",
        energy: EnergySign::Exothermic,
        hazards: &[Flammable, Explosive, Corrosive],
        protection: &[Goggles, FaceShield, Gloves, LabCoat],
        description: "Sodium melts into a ball skating on the water; the hydrogen may ignite.",
    },
    ReactionRecord {
        reagents: ("Kalium (K)", "Air (H₂O)"),
        equation: "2K + 2H₂O → 2KOH + H₂↑",
        energy: EnergySign::Exothermic,
        hazards: &[Flammable, Explosive, Corrosive],
        protection: &[Goggles, FaceShield, Gloves, LabCoat],
        description: "More violent than sodium, the hydrogen ignites with a lilac flame.",
    },
    ReactionRecord {
        reagents: ("Magnesium (Mg)", "Oksigen (O₂)"),
        equation: "2Mg + O₂ → 2MgO",
        energy: EnergySign::Exothermic,
        hazards: &[Flammable, HotSurface],
        protection: &[Goggles, HeatResistantGloves],
        description: "Burning magnesium gives a blinding white flame and white MgO powder.",
    },
    ReactionRecord {
        reagents: ("Hidrogen (H₂)", "Oksigen (O₂)"),
        equation: "2H₂ + O₂ → 2H₂O",
        energy: EnergySign::Exothermic,
        hazards: &[Explosive, Flammable],
        protection: &[Goggles, FaceShield],
        description: "Oxyhydrogen mixture explodes on ignition forming water.",
    },
    ReactionRecord {
        reagents: ("Besi (Fe)", "Belerang (S)"),
        equation: "Fe + S → FeS",
        energy: EnergySign::Exothermic,
        hazards: &[HotSurface, Toxic],
        protection: &[Goggles, HeatResistantGloves, FumeHood],
        description: "Heated mixture glows by itself once started, black iron sulfide forms.",
    },
    ReactionRecord {
        reagents: ("Asam Asetat (CH₃COOH)", "Amonia (NH₃)"),
        equation: "CH₃COOH + NH₃ → CH₃COONH₄",
        energy: EnergySign::Exothermic,
        hazards: &[Irritant],
        protection: &[Goggles, Gloves, FumeHood],
        description: "Weak acid and weak base give ammonium acetate.",
    },
    ReactionRecord {
        reagents: ("Kalium Nitrat (KNO₃)", "Air (H₂O)"),
        equation: "KNO₃(s) → K⁺(aq) + NO₃⁻(aq)",
        energy: EnergySign::Endothermic,
        hazards: &[Oxidizer],
        protection: &[Goggles, Gloves],
        description: "Dissolving potassium nitrate absorbs heat, the flask feels cold.",
    },
    ReactionRecord {
        reagents: ("Klorin (Cl₂)", "Natrium (Na)"),
        equation: "2Na + Cl₂ → 2NaCl",
        energy: EnergySign::Exothermic,
        hazards: &[Toxic, Oxidizer, HotSurface],
        protection: &[Goggles, FaceShield, FumeHood],
        description: "Sodium burns in chlorine with a yellow flame producing table salt.",
    },
];

/// Exact unordered-pair lookup. Never matches partially.
pub fn lookup(a: &str, b: &str) -> Option<&'static ReactionRecord> {
    REACTION_RECORDS.iter().find(|r| r.involves_pair(a, b))
}

pub fn records() -> &'static [ReactionRecord] {
    REACTION_RECORDS
}

/// names that have a record together with `name`
pub fn partners_of(name: &str) -> Vec<&'static str> {
    REACTION_RECORDS
        .iter()
        .filter(|r| r.involves(name))
        .map(|r| {
            if r.reagents.0 == name {
                r.reagents.1
            } else {
                r.reagents.0
            }
        })
        .collect()
}

pub fn records_table() -> Table {
    let mut table = Table::new();
    table.add_row(row!["#", "Reagents", "Equation", "Energy", "Hazards"]);
    for (i, r) in REACTION_RECORDS.iter().enumerate() {
        table.add_row(row![
            i + 1,
            format!("{} + {}", r.reagents.0, r.reagents.1),
            r.equation,
            r.energy,
            r.hazards_string()
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Substances::catalog::find_substance;

    #[test]
    fn test_displacement_record() {
        let record = lookup("Tembaga Sulfat (CuSO₄)", "Besi (Fe)").unwrap();
        assert_eq!(record.equation, "Fe + CuSO₄ → FeSO₄ + Cu");
        assert_eq!(record.energy, EnergySign::Exothermic);
    }

    #[test]
    fn test_lookup_is_symmetric() {
        for r in records() {
            let (a, b) = r.reagents;
            assert_eq!(lookup(a, b), lookup(b, a));
            assert_eq!(lookup(a, b), Some(r));
        }
        assert_eq!(
            lookup("Emas (Au)", "Air (H₂O)"),
            lookup("Air (H₂O)", "Emas (Au)")
        );
    }

    #[test]
    fn test_no_partial_matches() {
        assert!(lookup("Besi", "Tembaga Sulfat").is_none());
        assert!(lookup("Besi (Fe)", "Besi (Fe)").is_none());
        assert!(lookup("Besi (Fe)", "").is_none());
    }

    #[test]
    fn test_reagents_are_on_the_shelf() {
        for r in records() {
            assert!(find_substance(r.reagents.0).is_ok(), "{}", r.reagents.0);
            assert!(find_substance(r.reagents.1).is_ok(), "{}", r.reagents.1);
            assert!(!r.hazards.is_empty());
            assert!(!r.protection.is_empty());
        }
    }

    #[test]
    fn test_pairs_are_unique() {
        for (i, r) in records().iter().enumerate() {
            for other in &records()[i + 1..] {
                assert!(!other.involves_pair(r.reagents.0, r.reagents.1));
            }
        }
    }

    #[test]
    fn test_partners_of() {
        let partners = partners_of("Air (H₂O)");
        assert!(partners.contains(&"Natrium (Na)"));
        assert!(partners.contains(&"Kalium (K)"));
        assert!(partners.contains(&"Kalium Nitrat (KNO₃)"));
        assert!(partners_of("Emas (Au)").is_empty());
    }

    #[test]
    fn test_endothermic_record() {
        let record = lookup("Air (H₂O)", "Kalium Nitrat (KNO₃)").unwrap();
        assert_eq!(record.energy, EnergySign::Endothermic);
        assert_eq!(record.hazards_string(), "oxidizer");
    }
}
