/// Module to calculate the atomic composition and molar mass of a chemical formula
///
/// Formulas may contain nested brackets, e.g. "Ca(OH)2", and Unicode subscript digits
/// as printed on the lab labels, e.g. "H₂SO₄".
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FormulaError {
    #[error("Empty formula")]
    Empty,
    #[error("Unknown element '{0}'")]
    UnknownElement(String),
    #[error("Unexpected character in formula '{0}'")]
    InvalidCharacter(String),
    #[error("Unbalanced brackets in formula '{0}'")]
    UnbalancedBrackets(String),
    #[error("Atom count too large in formula '{0}'")]
    CountOverflow(String),
}

// Define a struct to hold element data
pub struct Element {
    name: &'static str,
    atomic_mass: f64,
}

const fn element(name: &'static str, atomic_mass: f64) -> Element {
    Element { name, atomic_mass }
}

// elements met on the lab shelf
const ELEMENTS: &[Element] = &[
    element("H", 1.008),
    element("C", 12.011),
    element("N", 14.007),
    element("O", 15.999),
    element("F", 18.998),
    element("Na", 22.99),
    element("Mg", 24.305),
    element("Al", 26.98),
    element("Si", 28.085),
    element("P", 30.974),
    element("S", 32.065),
    element("Cl", 35.45),
    element("K", 39.098),
    element("Ca", 40.078),
    element("Cr", 51.996),
    element("Mn", 54.938),
    element("Fe", 55.845),
    element("Co", 58.933),
    element("Ni", 58.693),
    element("Cu", 63.546),
    element("Zn", 65.38),
    element("Br", 79.904),
    element("Ag", 107.868),
    element("Sn", 118.71),
    element("I", 126.904),
    element("Ba", 137.327),
    element("Au", 196.967),
    element("Hg", 200.59),
    element("Pb", 207.2),
];

pub fn atomic_mass(symbol: &str) -> Option<f64> {
    ELEMENTS
        .iter()
        .find(|e| e.name == symbol)
        .map(|e| e.atomic_mass)
}

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Z][a-z]?|\d+|[()]").unwrap())
}

/// "H₂SO₄" -> "H2SO4"
pub fn normalize_subscripts(formula: &str) -> String {
    formula
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '₀'..='₉' => char::from_u32(c as u32 - '₀' as u32 + '0' as u32).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// adds `factor` times the counts of a closed group to the enclosing level
fn add_counts(
    target: &mut HashMap<String, usize>,
    source: HashMap<String, usize>,
    factor: usize,
) -> Option<()> {
    for (element, count) in source {
        let slot = target.entry(element).or_insert(0);
        *slot = slot.checked_add(count.checked_mul(factor)?)?;
    }
    Some(())
}

/// Parses a chemical formula and returns a HashMap of elements and their counts
pub fn parse_formula(formula: &str) -> Result<HashMap<String, usize>, FormulaError> {
    let formula = normalize_subscripts(formula);
    if formula.is_empty() {
        return Err(FormulaError::Empty);
    }
    let tokens: Vec<&str> = token_regex()
        .find_iter(&formula)
        .map(|m| m.as_str())
        .collect();
    // every character must belong to some token
    if tokens.iter().map(|t| t.len()).sum::<usize>() != formula.len() {
        return Err(FormulaError::InvalidCharacter(formula));
    }
    // one map per open bracket level
    let mut stack: Vec<HashMap<String, usize>> = vec![HashMap::new()];
    let mut iter = tokens.into_iter().peekable();
    while let Some(token) = iter.next() {
        let multiplier = match iter.peek() {
            Some(next) if next.chars().all(|c| c.is_ascii_digit()) => {
                let n: usize = next
                    .parse()
                    .map_err(|_| FormulaError::CountOverflow(formula.clone()))?;
                iter.next();
                Some(n)
            }
            _ => None,
        };
        match token {
            "(" => {
                if multiplier.is_some() {
                    return Err(FormulaError::InvalidCharacter(formula.clone()));
                }
                stack.push(HashMap::new());
            }
            ")" => {
                if stack.len() < 2 {
                    return Err(FormulaError::UnbalancedBrackets(formula.clone()));
                }
                let group = stack.pop().unwrap_or_default();
                if let Some(outer) = stack.last_mut() {
                    add_counts(outer, group, multiplier.unwrap_or(1))
                        .ok_or_else(|| FormulaError::CountOverflow(formula.clone()))?;
                }
            }
            t if t.chars().all(|c| c.is_ascii_digit()) => {
                // a number with nothing to multiply, e.g. "2H2O"
                return Err(FormulaError::InvalidCharacter(formula.clone()));
            }
            symbol => {
                if atomic_mass(symbol).is_none() {
                    return Err(FormulaError::UnknownElement(symbol.to_string()));
                }
                if let Some(current) = stack.last_mut() {
                    let slot = current.entry(symbol.to_string()).or_insert(0);
                    *slot = slot
                        .checked_add(multiplier.unwrap_or(1))
                        .ok_or_else(|| FormulaError::CountOverflow(formula.clone()))?;
                }
            }
        }
    }
    if stack.len() != 1 {
        return Err(FormulaError::UnbalancedBrackets(formula));
    }
    Ok(stack.pop().unwrap_or_default())
}

// Function to calculate the molar mass of a substance given its chemical formula
pub fn calculate_molar_mass(
    formula: &str,
) -> Result<(f64, HashMap<String, usize>), FormulaError> {
    let counts = parse_formula(formula)?;
    let mut molar_mass = 0.0;
    for (element, count) in counts.iter() {
        let mass =
            atomic_mass(element).ok_or_else(|| FormulaError::UnknownElement(element.clone()))?;
        molar_mass += mass * *count as f64;
    }
    Ok((molar_mass, counts))
}

pub fn calculate_molar_mass_of_vector_of_subs(
    vec_of_formulae: &[&str],
) -> Result<Vec<f64>, FormulaError> {
    vec_of_formulae
        .iter()
        .map(|formula| calculate_molar_mass(formula).map(|(mass, _)| mass))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_formula() {
        let counts = parse_formula("H2SO4").unwrap();
        assert_eq!(counts.get("H"), Some(&2));
        assert_eq!(counts.get("S"), Some(&1));
        assert_eq!(counts.get("O"), Some(&4));

        let counts = parse_formula("CH3COOH").unwrap();
        assert_eq!(counts.get("C"), Some(&2));
        assert_eq!(counts.get("H"), Some(&4));
        assert_eq!(counts.get("O"), Some(&2));
    }

    #[test]
    fn test_brackets() {
        let counts = parse_formula("Ca(OH)2").unwrap();
        assert_eq!(counts.get("Ca"), Some(&1));
        assert_eq!(counts.get("O"), Some(&2));
        assert_eq!(counts.get("H"), Some(&2));

        let counts = parse_formula("Fe2(SO4)3").unwrap();
        assert_eq!(counts.get("Fe"), Some(&2));
        assert_eq!(counts.get("S"), Some(&3));
        assert_eq!(counts.get("O"), Some(&12));

        let counts = parse_formula("K4(Fe(CN)6)").unwrap();
        assert_eq!(counts.get("K"), Some(&4));
        assert_eq!(counts.get("C"), Some(&6));
        assert_eq!(counts.get("N"), Some(&6));
    }

    #[test]
    fn test_unicode_subscripts() {
        assert_eq!(normalize_subscripts("C₁₂H₂₂O₁₁"), "C12H22O11");
        assert_eq!(parse_formula("H₂SO₄").unwrap(), parse_formula("H2SO4").unwrap());
    }

    #[test]
    fn test_calculate_molar_mass() {
        let (m, _) = calculate_molar_mass("HCl").unwrap();
        assert_relative_eq!(m, 36.458, epsilon = 1e-3);
        let (m, _) = calculate_molar_mass("H2SO4").unwrap();
        assert_relative_eq!(m, 98.077, epsilon = 1e-3);
        let (m, _) = calculate_molar_mass("Ca(OH)2").unwrap();
        assert_relative_eq!(m, 74.092, epsilon = 1e-3);
    }

    #[test]
    fn test_calculate_molar_mass_of_vector_of_substances() {
        let masses = calculate_molar_mass_of_vector_of_subs(&["H2O", "NaCl"]).unwrap();
        assert_relative_eq!(masses[0], 18.015, epsilon = 1e-3);
        assert_relative_eq!(masses[1], 58.44, epsilon = 1e-3);
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_formula(""), Err(FormulaError::Empty));
        assert_eq!(
            parse_formula("Xx2"),
            Err(FormulaError::UnknownElement("Xx".to_string()))
        );
        assert!(matches!(
            parse_formula("Ca(OH2"),
            Err(FormulaError::UnbalancedBrackets(_))
        ));
        assert!(matches!(
            parse_formula("CaOH)2"),
            Err(FormulaError::UnbalancedBrackets(_))
        ));
        assert!(matches!(
            parse_formula("H2O+"),
            Err(FormulaError::InvalidCharacter(_))
        ));
    }

    #[test]
    fn test_huge_counts_are_rejected() {
        assert!(matches!(
            calculate_molar_mass("(H99999999999)99999999999"),
            Err(FormulaError::CountOverflow(_))
        ));
        assert!(matches!(
            parse_formula("H99999999999999999999999"),
            Err(FormulaError::CountOverflow(_))
        ));
        let repeated = format!("H{}H{}", usize::MAX, 1);
        assert!(matches!(
            parse_formula(&repeated),
            Err(FormulaError::CountOverflow(_))
        ));
        // large but representable
        let counts = parse_formula("(H1000)1000").unwrap();
        assert_eq!(counts.get("H"), Some(&1_000_000));
    }
}
