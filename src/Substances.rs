/// Static catalog of substances available on the lab shelf: colors, category tags, density,
/// reactivity and pH of every substance.
///
///  # Examples
/// ```
/// use ChemFlask::Substances::catalog::{find_substance, substances_with_tag, Tag};
/// let iron = find_substance("Besi (Fe)").unwrap();
/// assert!(iron.has_tag(Tag::Metal));
/// let acids = substances_with_tag(Tag::Acid);
/// assert!(acids.iter().any(|s| s.name == "Asam Klorida (HCl)"));
/// ```
pub mod catalog;
/// RGB colors and volume-weighted color mixing of the flask content
pub mod color;
/// Module to calculate the atomic composition and molar mass of a chemical formula
///
///  # Examples
/// ```
/// use ChemFlask::Substances::molmass::{calculate_molar_mass, parse_formula};
/// let (molar_mass, element_composition) = calculate_molar_mass("C6H12O6").unwrap();
/// println!("Element counts: {:?}", element_composition);
/// println!("Molar mass: {:?} g/mol", molar_mass);
/// let atomic_composition = parse_formula("Ca(OH)₂").unwrap();
/// assert_eq!(atomic_composition.get("H"), Some(&2));
/// ```
pub mod molmass;
